//! User-facing output for the bundler binaries.
//!
//! Confirmation lines go to stdout, usage to stderr. Diagnostic detail
//! belongs in `log`, not here.

use std::io::{self, Write};

/// Prints the lines the bundler binaries show to the user.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputManager;

impl OutputManager {
    /// Print a success line
    pub fn success(&self, message: &str) -> io::Result<()> {
        writeln!(io::stdout().lock(), "{message}")
    }

    /// Print an indented detail line
    pub fn indent(&self, message: &str) -> io::Result<()> {
        writeln!(io::stdout().lock(), "  {message}")
    }

    /// Print usage documentation to stderr
    pub fn usage(&self, text: &str) -> io::Result<()> {
        writeln!(io::stderr().lock(), "{text}")
    }
}

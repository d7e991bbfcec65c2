//! Top-level error types for the bundler binaries.
//!
//! Each failure class maps to a distinct variant so callers (and tests) can
//! tell a usage mistake from a missing input or a launch failure.

use thiserror::Error;

/// Result type alias for bundler operations
pub type Result<T> = std::result::Result<T, BundlerError>;

/// Main error type for all bundler operations
#[derive(Error, Debug)]
pub enum BundlerError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// Bundler errors
    #[error("Bundler error: {0}")]
    Bundler(#[from] crate::bundler::Error),

    /// Launcher errors, shown as-is so the missing-binary hint reads cleanly
    #[error(transparent)]
    Launcher(#[from] crate::launcher::LauncherError),

    /// Errors with attached context (e.g. failing to write the summary)
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Wrong number of positional arguments
    #[error("Usage error: {reason}")]
    Usage {
        /// Reason for the error
        reason: String,
    },
}

impl BundlerError {
    /// Process exit code for this error.
    ///
    /// Launcher errors carry their own code (130 for an interrupted wait);
    /// every other failure exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Launcher(e) => e.exit_code(),
            _ => 1,
        }
    }

    /// Check if this error came from invoking the tool incorrectly
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::Cli(CliError::Usage { .. }))
    }

    /// Check if an operator interrupt ended the launched child
    pub fn is_interrupted(&self) -> bool {
        matches!(
            self,
            Self::Launcher(crate::launcher::LauncherError::Interrupted)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::launcher::LauncherError;
    use anyhow::Context;
    use std::path::PathBuf;

    #[test]
    fn launcher_errors_keep_their_exit_codes() {
        let interrupted = BundlerError::from(LauncherError::Interrupted);
        assert!(interrupted.is_interrupted());
        assert_eq!(interrupted.exit_code(), 130);

        let missing = BundlerError::from(LauncherError::Resolution {
            path: PathBuf::from("/opt/pgplan/bin/pgplan"),
        });
        assert!(!missing.is_interrupted());
        assert_eq!(missing.exit_code(), 1);
        assert!(missing.to_string().starts_with("pgplan binary not found at /opt/pgplan/bin/pgplan."));
    }

    #[test]
    fn context_chain_is_displayed() {
        let io: std::io::Result<()> = Err(std::io::Error::other("broken pipe"));
        let err = BundlerError::from(io.context("writing build summary").unwrap_err());
        assert_eq!(err.to_string(), "writing build summary: broken pipe");
        assert_eq!(err.exit_code(), 1);
        assert!(!err.is_usage());
    }

    #[test]
    fn usage_is_detected() {
        let err = BundlerError::from(CliError::Usage {
            reason: "missing argument".into(),
        });
        assert!(err.is_usage());
        assert_eq!(err.exit_code(), 1);
    }
}

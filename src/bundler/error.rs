//! Error types for bundling operations.
//!
//! Provides the [`Error`] enum plus two extension traits used throughout the
//! platform modules:
//! - [`ErrorExt::fs_context`] attaches an operation and path to IO failures
//! - [`Context`] converts `Option`/`Result` values into [`Error::GenericError`]

use std::{fmt::Display, path::PathBuf};

/// Result type alias for bundler operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while building distribution artifacts
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required input file could not be read
    #[error("missing {input} at {}: {source}", path.display())]
    MissingInput {
        /// Human-readable name of the input ("binary", "readme", ...)
        input: &'static str,
        /// Path that was attempted
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Filesystem operation failed
    #[error("{context} {}: {error}", path.display())]
    Fs {
        /// What was being done
        context: &'static str,
        /// Path involved
        path: PathBuf,
        /// Underlying IO error
        #[source]
        error: std::io::Error,
    },

    /// Settings failed validation
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// An archive member does not match its RECORD line
    #[error("RECORD mismatch for {path}: {reason}")]
    RecordMismatch {
        /// Member path inside the archive
        path: String,
        /// What differed
        reason: String,
    },

    /// IO errors without extra context
    #[error("{0}")]
    IoError(#[from] std::io::Error),

    /// Zip archive errors
    #[error("zip error: {0}")]
    ZipError(#[from] zip::result::ZipError),

    /// JSON errors
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Catch-all error with a message
    #[error("{0}")]
    GenericError(String),
}

/// Attach filesystem context to IO results.
pub trait ErrorExt<T> {
    /// Wrap the error as [`Error::Fs`] with the given operation and path.
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context,
            path: path.into(),
            error,
        })
    }
}

/// Convert `Option` and foreign `Result` values into bundler errors.
pub trait Context<T> {
    /// Replace the failure with a [`Error::GenericError`] carrying `context`.
    fn context<C: Display>(self, context: C) -> Result<T>;
}

impl<T> Context<T> for Option<T> {
    fn context<C: Display>(self, context: C) -> Result<T> {
        self.ok_or_else(|| Error::GenericError(context.to_string()))
    }
}

impl<T, E: Display> Context<T> for std::result::Result<T, E> {
    fn context<C: Display>(self, context: C) -> Result<T> {
        self.map_err(|e| Error::GenericError(format!("{context}: {e}")))
    }
}

/// Return early with a [`Error::GenericError`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::bundler::Error::GenericError(format!($msg)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::bundler::Error::GenericError(format!($fmt, $($arg)*)))
    };
}

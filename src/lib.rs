//! Distribution bundler for the pgplan CLI
//!
//! This library packages a prebuilt, platform-specific `pgplan` executable into:
//! - pip wheels (`.whl`) with a verifiable `RECORD` manifest
//! - per-platform npm package manifests
//!
//! It also contains the native launcher that locates and re-executes the
//! embedded binary after installation.

pub mod bundler;
pub mod cli;
pub mod error;
pub mod launcher;

// Re-export commonly used types
pub use error::{BundlerError, CliError, Result};

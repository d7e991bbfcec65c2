//! Distribution bundling for prebuilt pgplan binaries.
//!
//! # Overview
//!
//! The bundler:
//! 1. Reads configuration from [`Settings`]
//! 2. Delegates to platform-specific modules ([`PackageType`])
//! 3. Calculates checksums and sizes of what was produced
//! 4. Returns [`BundledArtifact`] results
//!
//! # Example
//!
//! ```no_run
//! use pgplan_bundler::bundler::{Bundler, PackageType, SettingsBuilder};
//!
//! # async fn example() -> pgplan_bundler::bundler::Result<()> {
//! let settings = SettingsBuilder::new()
//!     .version("0.1.0")
//!     .binary_path("dist/pgplan-darwin-arm64")
//!     .platform_tag("macosx_11_0_arm64")
//!     .build()?;
//!
//! let bundler = Bundler::new(settings);
//! for artifact in bundler.bundle_types(&[PackageType::Wheel]).await? {
//!     println!("Created: {} ({} bytes)", artifact.package_type, artifact.size);
//!     println!("SHA256: {}", artifact.checksum);
//! }
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod error;
pub mod platform;
pub mod settings;
pub mod utils;

use std::path::PathBuf;

pub use builder::{Bundler, calculate_sha256, record_digest};
pub use error::{Error, Result};
pub use platform::PackageType;
pub use settings::{PackageSettings, PlatformTag, Settings, SettingsBuilder};

/// One finished distribution artifact.
#[derive(Debug, Clone)]
pub struct BundledArtifact {
    /// Which bundler produced it
    pub package_type: PackageType,
    /// Files written by the bundler
    pub paths: Vec<PathBuf>,
    /// Combined size of `paths` in bytes
    pub size: u64,
    /// Hex SHA-256 of the first path
    pub checksum: String,
}

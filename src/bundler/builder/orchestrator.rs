//! Main bundler orchestration and coordination.
//!
//! This module provides the [`Bundler`] orchestrator that delegates to the
//! platform modules and collects [`BundledArtifact`] results.

use crate::{
    bail,
    bundler::{BundledArtifact, PackageType, Result, Settings, error::ErrorExt},
};

use super::checksum::calculate_sha256;

/// Main bundler orchestrator.
///
/// # Examples
///
/// ```no_run
/// use pgplan_bundler::bundler::{Bundler, Settings, PackageType};
///
/// # async fn example(settings: Settings) -> pgplan_bundler::bundler::Result<()> {
/// let bundler = Bundler::new(settings);
///
/// // Bundle a wheel
/// let artifacts = bundler.bundle().await?;
///
/// // Or bundle specific types
/// let artifacts = bundler.bundle_types(&[PackageType::Wheel]).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Bundler {
    settings: Settings,
}

impl Bundler {
    /// Creates a new bundler with the given settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Builds the wheel.
    pub async fn bundle(&self) -> Result<Vec<BundledArtifact>> {
        self.bundle_types(&[PackageType::Wheel]).await
    }

    /// Executes bundling operations for specific package types.
    ///
    /// Types are created in the order provided. Each result carries the
    /// combined size of the produced files and the SHA-256 of the first one.
    pub async fn bundle_types(&self, types: &[PackageType]) -> Result<Vec<BundledArtifact>> {
        let mut artifacts = Vec::new();

        for package_type in types {
            let paths = match package_type {
                PackageType::Wheel => {
                    crate::bundler::platform::wheel::bundle_project(&self.settings).await?
                }
            };

            // Calculate artifact metadata
            let mut size = 0u64;
            for p in &paths {
                let metadata = tokio::fs::metadata(p)
                    .await
                    .fs_context("reading artifact metadata", p)?;
                size += metadata.len();
            }

            let checksum = if let Some(first_path) = paths.first() {
                calculate_sha256(first_path).await?
            } else {
                bail!(
                    "Platform bundler for {:?} returned no paths - this indicates a bundler bug",
                    package_type
                );
            };

            log::debug!("{package_type} artifact sha256: {checksum}");

            artifacts.push(BundledArtifact {
                package_type: *package_type,
                paths,
                size,
                checksum,
            });
        }

        Ok(artifacts)
    }
}

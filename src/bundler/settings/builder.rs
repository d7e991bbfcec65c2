//! Builder for constructing Settings.

use super::{PackageSettings, PlatformTag, Settings};
use crate::bundler::{Error, Result, error::Context};
use std::path::{Path, PathBuf};

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUT_DIRECTORY: &str = "dist";

/// Launcher module shipped in this repository, embedded as `pgplan/__init__.py`.
const LAUNCHER_SOURCE: &str = "pip/pgplan/__init__.py";

/// User-facing readme published as the wheel's long description.
const README: &str = "pip/README.md";

/// Builder for constructing [`Settings`].
///
/// Provides a fluent API for building bundler settings with validation.
///
/// # Examples
///
/// ```no_run
/// use pgplan_bundler::bundler::{SettingsBuilder, PackageSettings};
///
/// # fn example() -> pgplan_bundler::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .version("0.1.0")
///     .binary_path("dist/pgplan-linux-amd64")
///     .platform_tag("manylinux_2_17_x86_64")
///     .project_out_directory("target/wheels")
///     .package_settings(PackageSettings {
///         summary: "Custom summary".into(),
///         ..Default::default()
///     })
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct SettingsBuilder {
    package_settings: Option<PackageSettings>,
    version: Option<String>,
    binary_path: Option<PathBuf>,
    platform_tag: Option<String>,
    project_out_directory: Option<PathBuf>,
    launcher_source: Option<PathBuf>,
    readme: Option<PathBuf>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets package metadata.
    ///
    /// Default: [`PackageSettings::default()`]
    pub fn package_settings(mut self, settings: PackageSettings) -> Self {
        self.package_settings = Some(settings);
        self
    }

    /// Sets the release version, overriding any version in the package settings.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Sets the prebuilt binary to embed.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn binary_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.binary_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the wheel platform tag.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn platform_tag(mut self, tag: impl Into<String>) -> Self {
        self.platform_tag = Some(tag.into());
        self
    }

    /// Sets the output directory.
    ///
    /// Default: `dist`
    pub fn project_out_directory<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.project_out_directory = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the launcher module path.
    ///
    /// Default: `pip/pgplan/__init__.py` in this repository
    pub fn launcher_source<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.launcher_source = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the readme path.
    ///
    /// Default: `pip/README.md` in this repository
    pub fn readme<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.readme = Some(path.as_ref().to_path_buf());
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if `binary_path` or `platform_tag` is missing, or if
    /// the version or platform tag is empty.
    pub fn build(self) -> Result<Settings> {
        let mut package = self.package_settings.unwrap_or_default();
        if let Some(version) = self.version {
            package.version = version;
        }
        if package.version.trim().is_empty() {
            return Err(Error::InvalidSettings("version cannot be empty".into()));
        }
        if package.name.trim().is_empty() {
            return Err(Error::InvalidSettings("package name cannot be empty".into()));
        }

        let platform_tag = PlatformTag::new(
            self.platform_tag
                .context("platform_tag is required")?,
        )?;

        let repo_root = Path::new(env!("CARGO_MANIFEST_DIR"));

        Ok(Settings::new(
            package,
            self.binary_path.context("binary_path is required")?,
            platform_tag,
            self.project_out_directory
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIRECTORY)),
            self.launcher_source
                .unwrap_or_else(|| repo_root.join(LAUNCHER_SOURCE)),
            self.readme.unwrap_or_else(|| repo_root.join(README)),
        ))
    }
}

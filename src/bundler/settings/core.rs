//! Core Settings struct and implementations.

use super::{PackageSettings, PlatformTag};
use std::path::{Path, PathBuf};

/// Main settings for bundler operations.
///
/// Central configuration for the bundler, constructed via [`SettingsBuilder`].
/// Contains package metadata, the inputs to read and the target platform.
///
/// # Examples
///
/// ```no_run
/// use pgplan_bundler::bundler::SettingsBuilder;
///
/// # fn example() -> pgplan_bundler::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .version("0.1.0")
///     .binary_path("dist/pgplan-windows-amd64.exe")
///     .platform_tag("win_amd64")
///     .build()?;
/// assert_eq!(settings.wheel_file_name(), "pgplan-0.1.0-py3-none-win_amd64.whl");
/// # Ok(())
/// # }
/// ```
///
/// [`SettingsBuilder`]: super::SettingsBuilder
#[derive(Clone, Debug)]
pub struct Settings {
    /// Package metadata.
    package: PackageSettings,

    /// Prebuilt binary to embed.
    binary_path: PathBuf,

    /// Target platform.
    platform_tag: PlatformTag,

    /// Output directory for bundles.
    project_out_directory: PathBuf,

    /// Launcher module copied verbatim into the wheel.
    launcher_source: PathBuf,

    /// Readme used as the long description.
    readme: PathBuf,
}

impl Settings {
    /// Returns the product name.
    pub fn product_name(&self) -> &str {
        &self.package.name
    }

    /// Returns the version string.
    pub fn version_string(&self) -> &str {
        &self.package.version
    }

    /// Returns the package metadata.
    pub fn package(&self) -> &PackageSettings {
        &self.package
    }

    /// Returns the path of the prebuilt binary.
    pub fn binary_path(&self) -> &Path {
        &self.binary_path
    }

    /// Returns the target platform tag.
    pub fn platform_tag(&self) -> &PlatformTag {
        &self.platform_tag
    }

    /// Returns the directory bundles are written to.
    pub fn project_out_directory(&self) -> &Path {
        &self.project_out_directory
    }

    /// Returns the launcher module path.
    pub fn launcher_source(&self) -> &Path {
        &self.launcher_source
    }

    /// Returns the readme path.
    pub fn readme(&self) -> &Path {
        &self.readme
    }

    /// Wheel compatibility tag: `py3-none-{platform}`.
    ///
    /// The binary does not link against Python, so any Python 3 with no ABI
    /// requirement can install it.
    pub fn compatibility_tag(&self) -> String {
        format!("py3-none-{}", self.platform_tag)
    }

    /// Output wheel file name: `{name}-{version}-{compatibility tag}.whl`.
    pub fn wheel_file_name(&self) -> String {
        format!(
            "{}-{}-{}.whl",
            self.product_name(),
            self.version_string(),
            self.compatibility_tag()
        )
    }

    /// Name of the `.dist-info` directory inside the wheel.
    pub fn dist_info_dir(&self) -> String {
        format!("{}-{}.dist-info", self.product_name(), self.version_string())
    }

    /// Creates a new Settings instance (used by SettingsBuilder).
    pub(super) fn new(
        package: PackageSettings,
        binary_path: PathBuf,
        platform_tag: PlatformTag,
        project_out_directory: PathBuf,
        launcher_source: PathBuf,
        readme: PathBuf,
    ) -> Self {
        Self {
            package,
            binary_path,
            platform_tag,
            project_out_directory,
            launcher_source,
            readme,
        }
    }
}

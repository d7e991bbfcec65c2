//! Command line interface for the pgplan bundler binaries.
//!
//! `pgplan_bundler_wheel` and `pgplan_bundler_npm` share this module: parse
//! positionals, build settings, run the bundler, and report what was
//! written.

mod args;
mod output;

pub use args::{Args, NPM_USAGE, NpmArgs, WHEEL_USAGE};
pub use output::OutputManager;

use anyhow::Context;
use std::ffi::OsString;

use crate::bundler::{Bundler, PackageSettings, SettingsBuilder, platform::npm};
use crate::error::Result;

/// Wheel builder entry point
pub async fn run() -> Result<i32> {
    run_from(std::env::args_os()).await
}

/// Wheel builder over explicit arguments (program name first)
pub async fn run_from<I, T>(args: I) -> Result<i32>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = Args::try_parse_args(args)?;
    let output = OutputManager::default();

    let settings = SettingsBuilder::new()
        .version(&args.release_version)
        .binary_path(&args.binary_path)
        .platform_tag(&args.platform_tag)
        .build()?;

    log::info!(
        "Packaging {} for {}",
        settings.binary_path().display(),
        settings.platform_tag()
    );

    let artifacts = Bundler::new(settings).bundle().await?;
    for artifact in &artifacts {
        for path in &artifact.paths {
            output
                .success(&format!("Built: {} ({} bytes)", path.display(), artifact.size))
                .context("writing build summary")?;
        }
        output
            .indent(&format!("sha256: {}", artifact.checksum))
            .context("writing build summary")?;
    }

    Ok(0)
}

/// npm manifest generator entry point
pub async fn run_npm() -> Result<i32> {
    run_npm_from(std::env::args_os()).await
}

/// npm manifest generator over explicit arguments (program name first)
pub async fn run_npm_from<I, T>(args: I) -> Result<i32>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = NpmArgs::try_parse_args(args)?;
    let output = OutputManager::default();

    let package = PackageSettings {
        version: args.release_version.clone(),
        ..PackageSettings::default()
    };

    let written = npm::generate_manifests(&package, &args.npm_dir).await?;
    for path in &written {
        output
            .success(&format!("Wrote: {}", path.display()))
            .context("writing npm summary")?;
    }
    output
        .success(&format!(
            "Updated npm packages to version {}",
            args.release_version
        ))
        .context("writing npm summary")?;

    Ok(0)
}

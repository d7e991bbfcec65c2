//! Command line argument parsing for the bundler binaries.
//!
//! Both binaries take positional arguments only. Any parse failure,
//! including an explicit `--help`, is reported as a usage error so the
//! caller prints [`WHEEL_USAGE`] or [`NPM_USAGE`] and exits 1.
//!
//! The wheel builder's positionals accept leading hyphens, so only the
//! argument count decides between a build and a usage error.

use clap::Parser;
use std::{ffi::OsString, path::PathBuf};

use crate::error::CliError;

/// Usage documentation for `pgplan_bundler_wheel`.
pub const WHEEL_USAGE: &str = "\
Build a platform-specific pip wheel containing a prebuilt pgplan binary.

Usage:
  pgplan_bundler_wheel <version> <binary_path> <platform_tag>

Example:
  pgplan_bundler_wheel 0.1.0 dist/pgplan-darwin-arm64 macosx_11_0_arm64

Writes dist/pgplan-<version>-py3-none-<platform_tag>.whl relative to the
current directory. Platform tags starting with `win` store the binary as
pgplan/bin/pgplan.exe; every other tag stores pgplan/bin/pgplan with mode 0755.";

/// Usage documentation for `pgplan_bundler_npm`.
pub const NPM_USAGE: &str = "\
Generate per-platform npm package manifests and bump the root npm package.

Usage:
  pgplan_bundler_npm <version> [--npm-dir <dir>]

Writes <npm-dir>/pgplan-<platform>/package.json for every supported
platform and sets the version of <npm-dir>/pgplan/package.json and its
optional dependencies. <npm-dir> defaults to ./npm.";

/// Arguments of `pgplan_bundler_wheel`
#[derive(Parser, Debug)]
#[command(
    name = "pgplan_bundler_wheel",
    about = "Package a prebuilt pgplan binary into a pip wheel",
    disable_help_flag = true
)]
pub struct Args {
    /// Package version written into the wheel name and metadata
    #[arg(value_name = "VERSION", allow_hyphen_values = true)]
    pub release_version: String,

    /// Path to the prebuilt pgplan executable
    #[arg(value_name = "BINARY_PATH", allow_hyphen_values = true)]
    pub binary_path: PathBuf,

    /// Wheel platform tag, e.g. manylinux_2_17_x86_64 or win_amd64
    #[arg(value_name = "PLATFORM_TAG", allow_hyphen_values = true)]
    pub platform_tag: String,
}

impl Args {
    /// Parse arguments, mapping every clap failure to [`CliError::Usage`].
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = Self::try_parse_from(args).map_err(|e| CliError::Usage {
            reason: e.kind().to_string(),
        })?;
        args.validate()?;
        Ok(args)
    }

    /// Reject blank positionals, which clap accepts.
    pub fn validate(&self) -> Result<(), CliError> {
        if self.release_version.trim().is_empty() {
            return Err(CliError::Usage {
                reason: "version cannot be empty".to_string(),
            });
        }
        if self.binary_path.as_os_str().is_empty() {
            return Err(CliError::Usage {
                reason: "binary_path cannot be empty".to_string(),
            });
        }
        if self.platform_tag.trim().is_empty() {
            return Err(CliError::Usage {
                reason: "platform_tag cannot be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Arguments of `pgplan_bundler_npm`
#[derive(Parser, Debug)]
#[command(
    name = "pgplan_bundler_npm",
    about = "Generate npm package manifests for pgplan",
    disable_help_flag = true
)]
pub struct NpmArgs {
    /// Version to publish
    #[arg(value_name = "VERSION")]
    pub release_version: String,

    /// Directory holding the npm packages
    #[arg(long, value_name = "DIR", default_value = "npm")]
    pub npm_dir: PathBuf,
}

impl NpmArgs {
    /// Parse arguments, mapping every clap failure to [`CliError::Usage`].
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args = Self::try_parse_from(args).map_err(|e| CliError::Usage {
            reason: e.kind().to_string(),
        })?;
        if args.release_version.trim().is_empty() {
            return Err(CliError::Usage {
                reason: "version cannot be empty".to_string(),
            });
        }
        Ok(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_positionals_parse() {
        let args =
            Args::try_parse_args(["pgplan_bundler_wheel", "0.1.0", "bin/pgplan", "win_amd64"])
                .unwrap();
        assert_eq!(args.release_version, "0.1.0");
        assert_eq!(args.binary_path, PathBuf::from("bin/pgplan"));
        assert_eq!(args.platform_tag, "win_amd64");
    }

    #[test]
    fn hyphenated_values_are_positionals() {
        let args = Args::try_parse_args(["pgplan_bundler_wheel", "0.1.0", "-bin", "win_amd64"])
            .unwrap();
        assert_eq!(args.binary_path, PathBuf::from("-bin"));

        let args =
            Args::try_parse_args(["pgplan_bundler_wheel", "-1", "--bin", "-tag"]).unwrap();
        assert_eq!(args.release_version, "-1");
        assert_eq!(args.binary_path, PathBuf::from("--bin"));
        assert_eq!(args.platform_tag, "-tag");
    }

    #[test]
    fn wrong_arity_is_usage() {
        for argv in [
            vec!["pgplan_bundler_wheel"],
            vec!["pgplan_bundler_wheel", "0.1.0", "bin/pgplan"],
            vec!["pgplan_bundler_wheel", "0.1.0", "bin/pgplan", "any", "extra"],
            vec!["pgplan_bundler_wheel", "--help"],
            vec!["pgplan_bundler_wheel", "0.1.0", "-bin"],
            vec!["pgplan_bundler_wheel", "0.1.0", "-bin", "win_amd64", "-x"],
        ] {
            assert!(
                matches!(Args::try_parse_args(argv.clone()), Err(CliError::Usage { .. })),
                "{argv:?} should be a usage error"
            );
        }
    }

    #[test]
    fn blank_tag_is_usage() {
        assert!(matches!(
            Args::try_parse_args(["pgplan_bundler_wheel", "0.1.0", "bin/pgplan", " "]),
            Err(CliError::Usage { .. })
        ));
    }

    #[test]
    fn npm_dir_defaults() {
        let args = NpmArgs::try_parse_args(["pgplan_bundler_npm", "1.2.3"]).unwrap();
        assert_eq!(args.npm_dir, PathBuf::from("npm"));
        assert!(NpmArgs::try_parse_args(["pgplan_bundler_npm"]).is_err());
    }
}

//! npm platform package manifests.
//!
//! pgplan is also published to npm as a root package with one optional
//! dependency per platform; npm installs only the dependency whose `os`/`cpu`
//! match the host. This module writes the per-platform `package.json` files
//! and bumps the root package to the release version. The binaries
//! themselves are copied into those directories by the release pipeline.

use crate::bundler::{
    PackageSettings,
    error::{Context, Error, Result},
    utils::fs,
};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// One published platform package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NpmPlatform {
    /// Platform suffix (`linux-x64`), also the package name under the scope.
    pub name: &'static str,
    /// npm `os` value.
    pub os: &'static str,
    /// npm `cpu` value.
    pub cpu: &'static str,
    /// Whether the binary carries `.exe`.
    pub windows: bool,
}

/// Platforms with a published binary.
pub const PLATFORMS: &[NpmPlatform] = &[
    NpmPlatform { name: "linux-x64", os: "linux", cpu: "x64", windows: false },
    NpmPlatform { name: "linux-arm64", os: "linux", cpu: "arm64", windows: false },
    NpmPlatform { name: "darwin-x64", os: "darwin", cpu: "x64", windows: false },
    NpmPlatform { name: "darwin-arm64", os: "darwin", cpu: "arm64", windows: false },
    NpmPlatform { name: "win32-x64", os: "win32", cpu: "x64", windows: true },
];

impl NpmPlatform {
    /// Directory under `npm/` holding this package.
    pub fn dir_name(&self, product: &str) -> String {
        format!("{product}-{}", self.name)
    }

    /// Binary file name shipped in the package.
    pub fn binary_name(&self, product: &str) -> String {
        if self.windows {
            format!("{product}.exe")
        } else {
            product.to_string()
        }
    }
}

#[derive(Debug, Serialize)]
struct Repository {
    #[serde(rename = "type")]
    kind: &'static str,
    url: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PlatformManifest {
    name: String,
    version: String,
    description: String,
    repository: Repository,
    author: String,
    license: String,
    prefer_unplugged: bool,
    os: Vec<&'static str>,
    cpu: Vec<&'static str>,
    files: Vec<String>,
}

fn platform_manifest(package: &PackageSettings, platform: &NpmPlatform) -> PlatformManifest {
    let repo = package.homepage().unwrap_or_default();
    PlatformManifest {
        name: format!("@{}/{}", package.name, platform.name),
        version: package.version.clone(),
        description: format!("{} binary for {}", package.name, platform.name),
        repository: Repository {
            kind: "git",
            url: format!("git+{repo}.git"),
        },
        author: package.author.clone(),
        license: package.license.clone(),
        prefer_unplugged: true,
        os: vec![platform.os],
        cpu: vec![platform.cpu],
        files: vec![platform.binary_name(&package.name)],
    }
}

/// Serializes like `JSON.stringify(value, null, 2)` plus a trailing newline.
fn to_json<T: Serialize>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}

/// Writes every platform `package.json` and bumps the root package.
///
/// The root manifest at `npm/<name>/package.json` must already exist; its
/// `version` and every `optionalDependencies` value are set to
/// `package.version`, other keys keep their order.
///
/// # Returns
///
/// Paths written, platform manifests first and the root manifest last.
pub async fn generate_manifests(package: &PackageSettings, npm_dir: &Path) -> Result<Vec<PathBuf>> {
    if package.version.trim().is_empty() {
        return Err(Error::InvalidSettings("version cannot be empty".into()));
    }

    let mut written = Vec::with_capacity(PLATFORMS.len() + 1);

    for platform in PLATFORMS {
        let path = npm_dir
            .join(platform.dir_name(&package.name))
            .join("package.json");
        fs::write_file(&path, to_json(&platform_manifest(package, platform))?).await?;
        log::info!("Generated {}", path.display());
        written.push(path);
    }

    let root_path = npm_dir.join(&package.name).join("package.json");
    let root = fs::read_text_input("root npm manifest", &root_path).await?;
    let bumped = bump_root_manifest(&root, &package.version)?;
    fs::write_file(&root_path, bumped).await?;
    log::info!("Updated {} to {}", root_path.display(), package.version);
    written.push(root_path);

    Ok(written)
}

/// Sets `version` and every optional dependency version in a root manifest.
pub fn bump_root_manifest(manifest: &str, version: &str) -> Result<String> {
    let mut root: serde_json::Value = serde_json::from_str(manifest)?;
    let object = root
        .as_object_mut()
        .context("root package.json is not a JSON object")?;

    object.insert("version".into(), version.into());

    let deps = object
        .get_mut("optionalDependencies")
        .and_then(serde_json::Value::as_object_mut)
        .context("root package.json has no optionalDependencies object")?;
    for value in deps.values_mut() {
        *value = version.into();
    }

    to_json(&root)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package(version: &str) -> PackageSettings {
        PackageSettings {
            version: version.into(),
            ..Default::default()
        }
    }

    #[test]
    fn platform_manifest_shape() {
        let json = to_json(&platform_manifest(&package("1.2.3"), &PLATFORMS[4])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["name"], "@pgplan/win32-x64");
        assert_eq!(value["version"], "1.2.3");
        assert_eq!(value["preferUnplugged"], true);
        assert_eq!(value["files"][0], "pgplan.exe");
        assert_eq!(
            value["repository"]["url"],
            "git+https://github.com/JacobArthurs/pgplan.git"
        );
        assert!(json.starts_with("{\n  \"name\""));
        assert!(json.ends_with("}\n"));
    }

    #[test]
    fn bump_preserves_key_order() {
        let root = r#"{"name":"pgplan","version":"0.0.1","bin":{"pgplan":"bin/pgplan.js"},"optionalDependencies":{"@pgplan/linux-x64":"0.0.1","@pgplan/win32-x64":"0.0.1"}}"#;
        let bumped = bump_root_manifest(root, "0.2.0").unwrap();

        let keys: Vec<_> = bumped
            .lines()
            .filter(|l| l.starts_with("  \""))
            .map(|l| l.trim().split('"').nth(1).unwrap().to_string())
            .collect();
        assert_eq!(keys, ["name", "version", "bin", "optionalDependencies"]);

        let value: serde_json::Value = serde_json::from_str(&bumped).unwrap();
        assert_eq!(value["version"], "0.2.0");
        assert_eq!(value["optionalDependencies"]["@pgplan/win32-x64"], "0.2.0");
    }

    #[test]
    fn bump_requires_optional_dependencies() {
        assert!(bump_root_manifest(r#"{"version":"1"}"#, "2").is_err());
        assert!(bump_root_manifest("[]", "2").is_err());
    }
}

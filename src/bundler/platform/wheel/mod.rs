//! pip wheel bundler.
//!
//! Builds `{name}-{version}-py3-none-{platform}.whl` by hand: a zip archive
//! holding the launcher module, the prebuilt binary and the `.dist-info`
//! metadata, closed by a `RECORD` manifest of every member's digest and size.
//!
//! # Archive layout
//!
//! | Member | Content |
//! |---|---|
//! | `pgplan/__init__.py` | launcher module, verbatim |
//! | `pgplan/bin/pgplan[.exe]` | prebuilt binary (`0o755` unless Windows) |
//! | `pgplan-{version}.dist-info/METADATA` | package metadata + readme |
//! | `pgplan-{version}.dist-info/WHEEL` | wheel format metadata |
//! | `pgplan-{version}.dist-info/entry_points.txt` | console script |
//! | `pgplan-{version}.dist-info/RECORD` | manifest, written last |
//!
//! # Module Organization
//!
//! - `archive` - zip writing with optional Unix modes
//! - `record` - `RECORD` accumulation, parsing and verification
//! - `metadata` - `METADATA`, `WHEEL` and `entry_points.txt` rendering

pub mod archive;
pub mod metadata;
pub mod record;

pub use archive::{ArchiveEntry, ArchiveWriter};
pub use record::{Record, RecordEntry};

use crate::bundler::{
    error::{Error, ErrorExt, Result},
    settings::Settings,
    utils::fs,
};
use std::{
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Bundle project as a wheel.
///
/// # Process
///
/// 1. Read the binary, launcher module and readme
/// 2. Create the output directory
/// 3. Render the `.dist-info` blocks
/// 4. Write every entry, recording its digest and size
/// 5. Append `RECORD`
///
/// An existing wheel with the same name is overwritten. If writing fails
/// partway the file left behind is incomplete and must be discarded.
///
/// # Returns
///
/// Vector containing the path to the generated `.whl` file.
pub async fn bundle_project(settings: &Settings) -> Result<Vec<PathBuf>> {
    log::info!(
        "Building wheel for {} {} ({})",
        settings.product_name(),
        settings.version_string(),
        settings.platform_tag()
    );

    let binary = fs::read_input("binary", settings.binary_path()).await?;
    let launcher = fs::read_input("launcher source", settings.launcher_source()).await?;
    let readme = fs::read_text_input("readme", settings.readme()).await?;

    let output_dir = settings.project_out_directory();
    fs::create_dir_all(output_dir).await?;
    let wheel_path = output_dir.join(settings.wheel_file_name());

    let entries = wheel_entries(settings, launcher, binary, &readme);
    let record_path = format!("{}/RECORD", settings.dist_info_dir());

    let records = {
        let wheel_path = wheel_path.clone();
        tokio::task::spawn_blocking(move || write_wheel(&wheel_path, &entries, record_path))
            .await
            .map_err(|e| Error::GenericError(format!("Wheel writer task panicked: {e}")))??
    };

    log::debug!("RECORD lists {} entries", records.len());
    log::info!("✓ Created wheel: {}", wheel_path.display());

    Ok(vec![wheel_path])
}

/// Assembles the non-manifest entries in archive order.
pub fn wheel_entries(
    settings: &Settings,
    launcher: Vec<u8>,
    binary: Vec<u8>,
    readme: &str,
) -> Vec<ArchiveEntry> {
    let package = settings.package();
    let name = settings.product_name();
    let tag = settings.platform_tag();
    let dist_info = settings.dist_info_dir();

    vec![
        ArchiveEntry::new(format!("{name}/__init__.py"), launcher),
        ArchiveEntry::new(
            format!("{name}/bin/{}", tag.binary_file_name(name)),
            binary,
        )
        .with_permissions(tag.binary_mode()),
        ArchiveEntry::new(
            format!("{dist_info}/METADATA"),
            metadata::metadata(package, readme),
        ),
        ArchiveEntry::new(
            format!("{dist_info}/WHEEL"),
            metadata::wheel(&settings.compatibility_tag()),
        ),
        ArchiveEntry::new(
            format!("{dist_info}/entry_points.txt"),
            metadata::entry_points(package),
        ),
    ]
}

/// Writes `entries` followed by the `RECORD` manifest to `path`.
///
/// Returns the manifest's records, self-record included.
pub fn write_wheel(
    path: &Path,
    entries: &[ArchiveEntry],
    record_path: String,
) -> Result<Vec<RecordEntry>> {
    let file = std::fs::File::create(path).fs_context("creating wheel", path)?;
    let mut writer = ArchiveWriter::new(BufWriter::new(file));
    let mut record = Record::new();

    for entry in entries {
        writer.add_entry(entry)?;
        record.push(entry);
    }

    let (manifest, records) = record.finish(record_path);
    writer.add_entry(&manifest)?;
    writer
        .finish()?
        .flush()
        .fs_context("flushing wheel", path)?;

    Ok(records)
}

/// Verifies a wheel on disk against its `RECORD`.
///
/// See [`record::verify_archive`].
pub async fn verify_wheel(path: &Path) -> Result<Vec<RecordEntry>> {
    let path = path.to_path_buf();
    tokio::task::spawn_blocking(move || {
        let file = std::fs::File::open(&path).fs_context("opening wheel", &path)?;
        record::verify_archive(std::io::BufReader::new(file))
    })
    .await
    .map_err(|e| Error::GenericError(format!("Wheel verification task panicked: {e}")))?
}

//! File system utilities for bundling.
//!
//! Input reads map IO failures to [`Error::MissingInput`] so a missing binary
//! or readme is reported by name; other helpers attach path context.

use crate::bundler::error::{Error, ErrorExt, Result};
use std::path::Path;
use tokio::fs;

/// Reads a required input file.
///
/// `input` names the file in the error ("binary", "readme", ...).
pub async fn read_input(input: &'static str, path: &Path) -> Result<Vec<u8>> {
    fs::read(path).await.map_err(|source| Error::MissingInput {
        input,
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a required UTF-8 input file.
pub async fn read_text_input(input: &'static str, path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .await
        .map_err(|source| Error::MissingInput {
            input,
            path: path.to_path_buf(),
            source,
        })
}

/// Creates all of the directories of the specified path.
///
/// Succeeds if the directory already exists.
pub async fn create_dir_all(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .await
        .fs_context("creating directory", path)
}

/// Writes `contents` to `path`, creating parent directories as needed.
pub async fn write_file(path: &Path, contents: impl AsRef<[u8]>) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .fs_context("creating directory", parent)?;
    }
    fs::write(path, contents)
        .await
        .fs_context("writing file", path)
}

//! Zip container writing for wheels.
//!
//! [`ArchiveWriter`] knows nothing about `RECORD` or metadata; it only
//! stores [`ArchiveEntry`] values, deflate-compressed, with an optional Unix
//! mode in the entry's external attributes.

use crate::bundler::Result;
use std::io::{Seek, Write};
use zip::{CompressionMethod, ZipWriter, write::SimpleFileOptions};

/// One member of the output archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Forward-slash separated path inside the archive.
    pub path: String,
    /// Member content.
    pub content: Vec<u8>,
    /// Unix mode bits; `None` leaves the zip writer's default.
    pub permissions: Option<u32>,
}

impl ArchiveEntry {
    /// Creates an entry with no explicit permissions.
    pub fn new(path: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            permissions: None,
        }
    }

    /// Sets the Unix mode to record for this entry.
    pub fn with_permissions(mut self, mode: Option<u32>) -> Self {
        self.permissions = mode;
        self
    }

    /// Content length in bytes.
    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }
}

/// Sequential zip writer.
pub struct ArchiveWriter<W: Write + Seek> {
    zip: ZipWriter<W>,
}

impl<W: Write + Seek> ArchiveWriter<W> {
    /// Starts an empty archive on `inner`.
    pub fn new(inner: W) -> Self {
        Self {
            zip: ZipWriter::new(inner),
        }
    }

    /// Appends one entry.
    pub fn add_entry(&mut self, entry: &ArchiveEntry) -> Result<()> {
        let mut options =
            SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        if let Some(mode) = entry.permissions {
            options = options.unix_permissions(mode);
        }

        self.zip.start_file(entry.path.as_str(), options)?;
        self.zip.write_all(&entry.content)?;

        log::debug!(
            "Added {} ({} bytes, mode {:?})",
            entry.path,
            entry.content.len(),
            entry.permissions.map(|m| format!("{m:o}"))
        );
        Ok(())
    }

    /// Writes the central directory and returns the underlying writer.
    pub fn finish(self) -> Result<W> {
        Ok(self.zip.finish()?)
    }
}

impl<W: Write + Seek> std::fmt::Debug for ArchiveWriter<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArchiveWriter").finish_non_exhaustive()
    }
}

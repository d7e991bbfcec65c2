//! The wheel `RECORD` manifest.
//!
//! `RECORD` lists every member of the wheel as `path,digest,size`. The
//! manifest lists itself last with empty digest and size, since it cannot
//! contain its own hash.

use super::archive::ArchiveEntry;
use crate::bundler::{Error, Result, builder::checksum::record_digest};
use std::collections::HashSet;
use std::fmt;
use std::io::{Read, Seek};

/// One line of `RECORD`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordEntry {
    /// Member path inside the archive.
    pub path: String,
    /// `sha256=...` digest; `None` for the manifest's own line.
    pub digest: Option<String>,
    /// Size in bytes; present exactly when `digest` is.
    pub size: Option<u64>,
}

impl RecordEntry {
    /// Record for an archive entry, hashing its content.
    pub fn for_entry(entry: &ArchiveEntry) -> Self {
        Self {
            path: entry.path.clone(),
            digest: Some(record_digest(&entry.content)),
            size: Some(entry.size()),
        }
    }

    /// Record with no digest or size (the manifest's self-record).
    pub fn unhashed(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            digest: None,
            size: None,
        }
    }

    /// Parses one `path,digest,size` line.
    ///
    /// Splits from the right so a path containing commas still parses.
    pub fn parse_line(line: &str) -> Result<Self> {
        let mut fields = line.rsplitn(3, ',');
        let (Some(size), Some(digest), Some(path)) = (fields.next(), fields.next(), fields.next())
        else {
            return Err(Error::GenericError(format!("malformed RECORD line: {line:?}")));
        };

        let entry = match (digest.is_empty(), size.is_empty()) {
            (true, true) => Self::unhashed(path),
            (false, false) => Self {
                path: path.to_string(),
                digest: Some(digest.to_string()),
                size: Some(size.parse().map_err(|_| {
                    Error::GenericError(format!("invalid size in RECORD line: {line:?}"))
                })?),
            },
            _ => {
                return Err(Error::GenericError(format!(
                    "digest and size must both be set or both empty: {line:?}"
                )));
            }
        };
        Ok(entry)
    }
}

impl fmt::Display for RecordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.digest, self.size) {
            (Some(digest), Some(size)) => write!(f, "{},{digest},{size}", self.path),
            _ => write!(f, "{},,", self.path),
        }
    }
}

/// Accumulates records in the order entries are written.
#[derive(Debug, Default)]
pub struct Record {
    entries: Vec<RecordEntry>,
}

impl Record {
    /// Creates an empty manifest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an entry that was written to the archive.
    pub fn push(&mut self, entry: &ArchiveEntry) {
        self.entries.push(RecordEntry::for_entry(entry));
    }

    /// Appends the self-record at `record_path` and renders the manifest.
    ///
    /// Returns the archive entry holding the manifest together with the full
    /// record list (entry count + 1).
    pub fn finish(mut self, record_path: impl Into<String>) -> (ArchiveEntry, Vec<RecordEntry>) {
        let record_path = record_path.into();
        self.entries.push(RecordEntry::unhashed(record_path.clone()));
        let content = render(&self.entries);
        (ArchiveEntry::new(record_path, content), self.entries)
    }
}

/// Renders records one per line with a trailing newline.
pub fn render(entries: &[RecordEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&entry.to_string());
        out.push('\n');
    }
    out
}

/// Parses a rendered `RECORD`, ignoring blank lines.
pub fn parse(content: &str) -> Result<Vec<RecordEntry>> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(RecordEntry::parse_line)
        .collect()
}

/// Checks every member of a wheel against its `RECORD`.
///
/// Fails if the archive has no `RECORD`, if a recorded member is missing or
/// differs in digest or size, if a member is not recorded, or if the
/// manifest's self-record carries a digest.
pub fn verify_archive<R: Read + Seek>(reader: R) -> Result<Vec<RecordEntry>> {
    let mut archive = zip::ZipArchive::new(reader)?;

    let record_path = archive
        .file_names()
        .find(|name| name.ends_with(".dist-info/RECORD"))
        .map(str::to_string)
        .ok_or_else(|| Error::GenericError("archive has no .dist-info/RECORD".into()))?;

    let mut content = String::new();
    archive.by_name(&record_path)?.read_to_string(&mut content)?;
    let entries = parse(&content)?;

    let mut seen = HashSet::new();
    for entry in &entries {
        if !seen.insert(entry.path.as_str()) {
            return Err(mismatch(&entry.path, "listed more than once"));
        }

        if entry.path == record_path {
            if entry.digest.is_some() {
                return Err(mismatch(&entry.path, "RECORD must not hash itself"));
            }
            continue;
        }

        let (Some(digest), Some(size)) = (&entry.digest, entry.size) else {
            return Err(mismatch(&entry.path, "missing digest"));
        };

        let mut data = Vec::new();
        match archive.by_name(&entry.path) {
            Ok(mut file) => {
                file.read_to_end(&mut data)?;
            }
            Err(zip::result::ZipError::FileNotFound) => {
                return Err(mismatch(&entry.path, "not present in archive"));
            }
            Err(e) => return Err(e.into()),
        }

        if data.len() as u64 != size {
            return Err(mismatch(
                &entry.path,
                &format!("size {} != recorded {size}", data.len()),
            ));
        }
        let actual = record_digest(&data);
        if &actual != digest {
            return Err(mismatch(
                &entry.path,
                &format!("digest {actual} != recorded {digest}"),
            ));
        }
    }

    for name in archive.file_names() {
        if !name.ends_with('/') && !seen.contains(name) {
            return Err(mismatch(name, "not listed in RECORD"));
        }
    }

    Ok(entries)
}

fn mismatch(path: &str, reason: &str) -> Error {
    Error::RecordMismatch {
        path: path.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finish_appends_self_record() {
        let mut record = Record::new();
        record.push(&ArchiveEntry::new("pkg/__init__.py", "print()\n"));
        record.push(&ArchiveEntry::new("pkg/bin/tool", vec![7u8; 10]));

        let (manifest, entries) = record.finish("pkg-1.0.dist-info/RECORD");
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[2], RecordEntry::unhashed("pkg-1.0.dist-info/RECORD"));
        assert_eq!(manifest.path, "pkg-1.0.dist-info/RECORD");

        let text = String::from_utf8(manifest.content).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("pkg/__init__.py,sha256="));
        assert!(lines[1].ends_with(",10"));
        assert_eq!(lines[2], "pkg-1.0.dist-info/RECORD,,");
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn parse_inverts_render() {
        let entries = vec![
            RecordEntry::for_entry(&ArchiveEntry::new("a,b.txt", "x")),
            RecordEntry::unhashed("x.dist-info/RECORD"),
        ];
        assert_eq!(parse(&render(&entries)).unwrap(), entries);
    }

    #[test]
    fn parse_rejects_half_empty_lines() {
        assert!(RecordEntry::parse_line("a,sha256=abc,").is_err());
        assert!(RecordEntry::parse_line("a,,12").is_err());
        assert!(RecordEntry::parse_line("a,sha256=abc,twelve").is_err());
        assert!(RecordEntry::parse_line("no-commas").is_err());
    }
}

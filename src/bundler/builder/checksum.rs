//! Artifact and record checksum calculation.
//!
//! Two encodings of SHA-256 are used:
//! - [`record_digest`] produces the `sha256=<urlsafe base64>` form stored in a
//!   wheel's `RECORD` manifest
//! - [`calculate_sha256`] produces the hex digest reported for finished
//!   artifacts

use crate::{bail, bundler::Result, bundler::error::ErrorExt};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use sha2::{Digest, Sha256};
use tokio::io::AsyncReadExt;

/// Algorithm prefix of every `RECORD` digest.
pub const RECORD_DIGEST_PREFIX: &str = "sha256=";

/// Computes the `RECORD` digest of a payload.
///
/// SHA-256 over `data`, encoded with the URL-safe base64 alphabet with the
/// trailing `=` padding stripped, prefixed with `sha256=`. Pip recomputes
/// this value after extraction to verify each installed file.
///
/// # Examples
///
/// ```
/// use pgplan_bundler::bundler::record_digest;
///
/// assert_eq!(
///     record_digest(b""),
///     "sha256=47DEQpj8HBSa-_TImW-5JCeuQeRkm5NMpJWZG3hSuFU"
/// );
/// ```
pub fn record_digest(data: &[u8]) -> String {
    let hash = Sha256::digest(data);
    format!("{RECORD_DIGEST_PREFIX}{}", URL_SAFE_NO_PAD.encode(hash))
}

/// Calculates the hex SHA-256 checksum of a file.
///
/// Reads in 8KB chunks so multi-megabyte wheels are never held in memory twice.
///
/// # Returns
///
/// * `Ok(String)` - Hex-encoded SHA-256 hash (64 characters)
/// * `Err` - If the path cannot be read or is not a regular file
pub async fn calculate_sha256(path: &std::path::Path) -> Result<String> {
    let metadata = tokio::fs::metadata(path)
        .await
        .fs_context("reading metadata for hashing", path)?;

    if !metadata.is_file() {
        bail!("Path is not a file: {}", path.display());
    }

    let mut file = tokio::fs::File::open(path)
        .await
        .fs_context("opening file for hashing", path)?;
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; 8192];

    loop {
        let n = file
            .read(&mut buffer)
            .await
            .fs_context("reading file for hash calculation", path)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

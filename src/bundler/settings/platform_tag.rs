//! Wheel platform tags.

use std::fmt;

/// Unix mode given to the embedded binary on non-Windows targets
/// (`rwxr-xr-x`).
pub const EXECUTABLE_MODE: u32 = 0o755;

/// A wheel platform tag such as `manylinux_2_17_x86_64`, `macosx_11_0_arm64`
/// or `win_amd64`.
///
/// The tag is passed through verbatim into the wheel filename and the
/// `WHEEL` block; the only interpretation applied is whether it names a
/// Windows target.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlatformTag(String);

impl PlatformTag {
    /// Create a platform tag, rejecting empty strings.
    pub fn new(tag: impl Into<String>) -> crate::bundler::Result<Self> {
        let tag = tag.into();
        if tag.trim().is_empty() {
            return Err(crate::bundler::Error::InvalidSettings(
                "platform tag cannot be empty".into(),
            ));
        }
        Ok(Self(tag))
    }

    /// Whether the tag names a Windows target (`win32`, `win_amd64`, `win_arm64`).
    pub fn is_windows(&self) -> bool {
        self.0.starts_with("win")
    }

    /// File name of the embedded binary for this target.
    ///
    /// Appends `.exe` on Windows.
    pub fn binary_file_name(&self, stem: &str) -> String {
        if self.is_windows() {
            format!("{stem}.exe")
        } else {
            stem.to_string()
        }
    }

    /// Unix mode to record for the embedded binary.
    ///
    /// `None` on Windows, which has no Unix permission semantics.
    pub fn binary_mode(&self) -> Option<u32> {
        if self.is_windows() {
            None
        } else {
            Some(EXECUTABLE_MODE)
        }
    }
}

impl fmt::Display for PlatformTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_tags_get_exe_and_no_mode() {
        for tag in ["win_amd64", "win32", "win_arm64"] {
            let tag = PlatformTag::new(tag).unwrap();
            assert!(tag.is_windows());
            assert_eq!(tag.binary_file_name("pgplan"), "pgplan.exe");
            assert_eq!(tag.binary_mode(), None);
        }
    }

    #[test]
    fn unix_tags_are_executable() {
        for tag in [
            "manylinux_2_17_x86_64.manylinux2014_x86_64",
            "macosx_11_0_arm64",
            "musllinux_1_2_aarch64",
        ] {
            let tag = PlatformTag::new(tag).unwrap();
            assert!(!tag.is_windows());
            assert_eq!(tag.binary_file_name("pgplan"), "pgplan");
            assert_eq!(tag.binary_mode(), Some(0o755));
        }
    }

    #[test]
    fn empty_tag_rejected() {
        assert!(PlatformTag::new("").is_err());
        assert!(PlatformTag::new("  ").is_err());
    }
}

//! Platform-specific bundlers.
//!
//! - [`wheel`] - pip wheels embedding the prebuilt binary
//! - [`npm`] - per-platform npm package manifests

pub mod npm;
pub mod wheel;

use std::fmt;

/// Package formats the [`Bundler`](crate::bundler::Bundler) can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageType {
    /// Python wheel (`.whl`) installable with pip
    Wheel,
}

impl PackageType {
    /// Short lowercase name.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Wheel => "wheel",
        }
    }
}

impl fmt::Display for PackageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

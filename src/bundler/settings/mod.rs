//! Configuration structures for bundling operations.
//!
//! Everything the bundlers need (package metadata, input paths, target
//! platform) is carried in an explicit [`Settings`] value built through
//! [`SettingsBuilder`], so no bundler reads global state.

mod builder;
mod core;
mod package;
mod platform_tag;

// Re-export all public types
pub use builder::SettingsBuilder;
pub use self::core::Settings;
pub use package::PackageSettings;
pub use platform_tag::PlatformTag;

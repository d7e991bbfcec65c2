//! Text blocks stored under `.dist-info/`.

use crate::bundler::PackageSettings;
use std::fmt::Write;

/// Core metadata version written to `METADATA`.
pub const METADATA_VERSION: &str = "2.1";

/// Wheel format version written to `WHEEL`.
pub const WHEEL_VERSION: &str = "1.0";

/// `Generator:` value written to `WHEEL`.
pub const GENERATOR: &str = "pgplan-build";

/// Renders the `METADATA` block.
///
/// Headers come from `package`; the readme follows a blank line as the
/// markdown long description, unmodified.
pub fn metadata(package: &PackageSettings, readme: &str) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "Metadata-Version: {METADATA_VERSION}");
    let _ = writeln!(out, "Name: {}", package.name);
    let _ = writeln!(out, "Version: {}", package.version);
    let _ = writeln!(out, "Summary: {}", package.summary);
    let _ = writeln!(out, "Author: {}", package.author);
    let _ = writeln!(out, "License: {}", package.license);
    if !package.keywords.is_empty() {
        let _ = writeln!(out, "Keywords: {}", package.keywords.join(","));
    }
    for classifier in &package.classifiers {
        let _ = writeln!(out, "Classifier: {classifier}");
    }
    let _ = writeln!(out, "Requires-Python: {}", package.requires_python);
    for (label, url) in &package.project_urls {
        let _ = writeln!(out, "Project-URL: {label}, {url}");
    }
    out.push_str("Description-Content-Type: text/markdown\n\n");
    out.push_str(readme);
    out.push('\n');
    out
}

/// Renders the `WHEEL` block.
///
/// `Root-Is-Purelib: false` because the wheel carries a native binary.
pub fn wheel(compatibility_tag: &str) -> String {
    format!(
        "Wheel-Version: {WHEEL_VERSION}\n\
         Generator: {GENERATOR}\n\
         Root-Is-Purelib: false\n\
         Tag: {compatibility_tag}\n"
    )
}

/// Renders `entry_points.txt`, mapping the console script to the
/// launcher's `main`.
pub fn entry_points(package: &PackageSettings) -> String {
    format!(
        "[console_scripts]\n{} = {}:main\n",
        package.console_script, package.name
    )
}

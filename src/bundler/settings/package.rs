//! Package metadata and configuration.

/// Package metadata rendered into the wheel's `METADATA` block.
///
/// [`Default`] yields the published pgplan metadata; only `version` is left
/// empty because it is supplied per release.
///
/// # Examples
///
/// ```no_run
/// use pgplan_bundler::bundler::PackageSettings;
///
/// let settings = PackageSettings {
///     version: "0.1.0".into(),
///     ..Default::default()
/// };
/// assert_eq!(settings.name, "pgplan");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSettings {
    /// Distribution name, also the import package and dist-info prefix.
    pub name: String,

    /// Version string. Not validated against PEP 440; pip will reject
    /// illegal versions at install time.
    pub version: String,

    /// One-line summary.
    pub summary: String,

    /// Author name.
    pub author: String,

    /// License identifier.
    pub license: String,

    /// Search keywords, rendered comma-joined.
    pub keywords: Vec<String>,

    /// Trove classifiers, one `Classifier:` line each.
    pub classifiers: Vec<String>,

    /// Minimum supported Python version specifier.
    pub requires_python: String,

    /// `(label, url)` pairs rendered as `Project-URL:` lines.
    pub project_urls: Vec<(String, String)>,

    /// Console script name registered in `entry_points.txt`.
    pub console_script: String,
}

impl PackageSettings {
    /// `Homepage` project URL, also the npm repository URL.
    pub fn homepage(&self) -> Option<&str> {
        self.project_urls
            .iter()
            .find(|(label, _)| label == "Homepage")
            .map(|(_, url)| url.as_str())
    }
}

impl Default for PackageSettings {
    fn default() -> Self {
        let repo = "https://github.com/JacobArthurs/pgplan";
        Self {
            name: "pgplan".into(),
            version: String::new(),
            summary: "Compare and analyze PostgreSQL EXPLAIN plans from the CLI".into(),
            author: "Jacob Arthurs".into(),
            license: "MIT".into(),
            keywords: ["postgresql", "query-plan", "explain", "database", "optimization"]
                .map(String::from)
                .to_vec(),
            classifiers: [
                "Development Status :: 3 - Alpha",
                "Environment :: Console",
                "Intended Audience :: Developers",
                "License :: OSI Approved :: MIT License",
                "Programming Language :: Other",
                "Topic :: Database",
            ]
            .map(String::from)
            .to_vec(),
            requires_python: ">=3.8".into(),
            project_urls: vec![
                ("Homepage".into(), repo.into()),
                ("Repository".into(), repo.into()),
                ("Issues".into(), format!("{repo}/issues")),
            ],
            console_script: "pgplan".into(),
        }
    }
}

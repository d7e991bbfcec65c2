//! End-to-end wheel builds read back with `zip::ZipArchive`.

use pgplan_bundler::bundler::{
    Bundler, Error, SettingsBuilder, calculate_sha256,
    platform::wheel::{self, ArchiveEntry, record},
    record_digest,
};
use std::{
    io::{Cursor, Read, Write},
    path::{Path, PathBuf},
};
use tempfile::TempDir;
use zip::ZipArchive;

const BINARY: &[u8] = b"0123456789";

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("pgplan-bin"), BINARY).unwrap();
        std::fs::write(dir.path().join("launcher.py"), "def main():\n    pass\n").unwrap();
        std::fs::write(dir.path().join("README.md"), "# pgplan\n\nQuery plans.").unwrap();
        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn builder(&self, tag: &str) -> SettingsBuilder {
        SettingsBuilder::new()
            .version("0.1.0")
            .binary_path(self.path("pgplan-bin"))
            .platform_tag(tag)
            .project_out_directory(self.path("dist"))
            .launcher_source(self.path("launcher.py"))
            .readme(self.path("README.md"))
    }

    async fn build(&self, tag: &str) -> PathBuf {
        let artifacts = Bundler::new(self.builder(tag).build().unwrap())
            .bundle()
            .await
            .unwrap();
        assert_eq!(artifacts.len(), 1);
        artifacts[0].paths[0].clone()
    }
}

fn open(path: &Path) -> ZipArchive<Cursor<Vec<u8>>> {
    ZipArchive::new(Cursor::new(std::fs::read(path).unwrap())).unwrap()
}

fn read_member(archive: &mut ZipArchive<Cursor<Vec<u8>>>, name: &str) -> Vec<u8> {
    let mut data = Vec::new();
    archive.by_name(name).unwrap().read_to_end(&mut data).unwrap();
    data
}

#[tokio::test]
async fn macos_wheel_layout() {
    let fixture = Fixture::new();
    let path = fixture.build("macosx_11_0_arm64").await;

    assert_eq!(
        path,
        fixture.path("dist/pgplan-0.1.0-py3-none-macosx_11_0_arm64.whl")
    );

    let mut archive = open(&path);
    let names: Vec<String> = (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect();
    assert_eq!(
        names,
        [
            "pgplan/__init__.py",
            "pgplan/bin/pgplan",
            "pgplan-0.1.0.dist-info/METADATA",
            "pgplan-0.1.0.dist-info/WHEEL",
            "pgplan-0.1.0.dist-info/entry_points.txt",
            "pgplan-0.1.0.dist-info/RECORD",
        ]
    );

    let binary = archive.by_name("pgplan/bin/pgplan").unwrap();
    assert_eq!(binary.size(), 10);
    assert_eq!(binary.unix_mode().map(|m| m & 0o777), Some(0o755));
    drop(binary);

    assert_eq!(
        read_member(&mut archive, "pgplan/__init__.py"),
        b"def main():\n    pass\n"
    );

    let wheel_meta = String::from_utf8(read_member(&mut archive, "pgplan-0.1.0.dist-info/WHEEL")).unwrap();
    assert!(wheel_meta.contains("Tag: py3-none-macosx_11_0_arm64\n"));
    assert!(wheel_meta.contains("Root-Is-Purelib: false\n"));

    let metadata =
        String::from_utf8(read_member(&mut archive, "pgplan-0.1.0.dist-info/METADATA")).unwrap();
    assert!(metadata.starts_with("Metadata-Version: 2.1\nName: pgplan\nVersion: 0.1.0\n"));
    assert!(metadata.ends_with("\n\n# pgplan\n\nQuery plans.\n"));
}

#[tokio::test]
async fn windows_binary_has_exe_and_no_exec_bits() {
    let fixture = Fixture::new();
    let path = fixture.build("win_amd64").await;

    let mut archive = open(&path);
    assert!(archive.by_name("pgplan/bin/pgplan").is_err());
    let binary = archive.by_name("pgplan/bin/pgplan.exe").unwrap();
    assert_eq!(binary.size(), BINARY.len() as u64);
    assert!(binary.unix_mode().is_none_or(|mode| mode & 0o111 == 0));
}

#[tokio::test]
async fn linux_binary_is_executable() {
    let fixture = Fixture::new();
    let path = fixture.build("manylinux_2_17_x86_64").await;

    let mut archive = open(&path);
    let binary = archive.by_name("pgplan/bin/pgplan").unwrap();
    assert_eq!(binary.unix_mode().map(|m| m & 0o777), Some(0o755));
}

#[tokio::test]
async fn record_matches_every_member() {
    let fixture = Fixture::new();
    let path = fixture.build("manylinux_2_17_aarch64").await;

    let mut archive = open(&path);
    let record_text =
        String::from_utf8(read_member(&mut archive, "pgplan-0.1.0.dist-info/RECORD")).unwrap();
    assert!(record_text.ends_with("pgplan-0.1.0.dist-info/RECORD,,\n"));

    let entries = record::parse(&record_text).unwrap();
    assert_eq!(entries.len(), archive.len());

    for entry in &entries[..entries.len() - 1] {
        let data = read_member(&mut archive, &entry.path);
        assert_eq!(entry.size, Some(data.len() as u64), "{}", entry.path);
        assert_eq!(entry.digest.as_deref(), Some(record_digest(&data).as_str()));
    }

    let verified = wheel::verify_wheel(&path).await.unwrap();
    assert_eq!(verified, entries);
}

#[tokio::test]
async fn artifact_reports_size_and_checksum() {
    let fixture = Fixture::new();
    let settings = fixture.builder("macosx_10_12_x86_64").build().unwrap();
    let artifacts = Bundler::new(settings).bundle().await.unwrap();

    let artifact = &artifacts[0];
    let on_disk = std::fs::metadata(&artifact.paths[0]).unwrap().len();
    assert_eq!(artifact.size, on_disk);
    assert_eq!(
        artifact.checksum,
        calculate_sha256(&artifact.paths[0]).await.unwrap()
    );
    assert_eq!(artifact.checksum.len(), 64);
}

#[tokio::test]
async fn rebuilding_overwrites_existing_wheel() {
    let fixture = Fixture::new();
    let first = fixture.build("win_amd64").await;

    std::fs::write(fixture.path("pgplan-bin"), b"MZ-longer-binary").unwrap();
    let second = fixture.build("win_amd64").await;
    assert_eq!(first, second);

    let mut archive = open(&second);
    assert_eq!(
        read_member(&mut archive, "pgplan/bin/pgplan.exe"),
        b"MZ-longer-binary"
    );
    wheel::verify_wheel(&second).await.unwrap();
}

#[tokio::test]
async fn missing_binary_is_missing_input() {
    let fixture = Fixture::new();
    let settings = fixture
        .builder("win_amd64")
        .binary_path(fixture.path("does-not-exist"))
        .build()
        .unwrap();

    let err = Bundler::new(settings).bundle().await.unwrap_err();
    match err {
        Error::MissingInput { input, path, .. } => {
            assert_eq!(input, "binary");
            assert_eq!(path, fixture.path("does-not-exist"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!fixture.path("dist/pgplan-0.1.0-py3-none-win_amd64.whl").exists());
}

#[tokio::test]
async fn missing_readme_is_missing_input() {
    let fixture = Fixture::new();
    let settings = fixture
        .builder("win_amd64")
        .readme(fixture.path("NOPE.md"))
        .build()
        .unwrap();

    assert!(matches!(
        Bundler::new(settings).bundle().await,
        Err(Error::MissingInput { input: "readme", .. })
    ));
}

#[tokio::test]
async fn tampered_wheel_fails_verification() {
    let fixture = Fixture::new();
    let settings = fixture.builder("manylinux_2_17_x86_64").build().unwrap();
    let mut entries = wheel::wheel_entries(
        &settings,
        b"def main():\n    pass\n".to_vec(),
        BINARY.to_vec(),
        "readme",
    );
    let record_path = format!("{}/RECORD", settings.dist_info_dir());

    // Record the honest entries, then swap the binary's content.
    let mut manifest = record::Record::new();
    for entry in &entries {
        manifest.push(entry);
    }
    let (record_entry, _) = manifest.finish(record_path);
    entries[1] = ArchiveEntry::new("pgplan/bin/pgplan", b"9876543210".to_vec());
    entries.push(record_entry);

    let mut writer = wheel::ArchiveWriter::new(Cursor::new(Vec::new()));
    for entry in &entries {
        writer.add_entry(entry).unwrap();
    }
    let bytes = writer.finish().unwrap().into_inner();

    let tampered = fixture.path("tampered.whl");
    std::fs::File::create(&tampered)
        .unwrap()
        .write_all(&bytes)
        .unwrap();

    match wheel::verify_wheel(&tampered).await {
        Err(Error::RecordMismatch { path, .. }) => assert_eq!(path, "pgplan/bin/pgplan"),
        other => panic!("expected RecordMismatch, got {other:?}"),
    }
}

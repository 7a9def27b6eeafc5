//! Packaging artifact tests
//!
//! The repository's own descriptor and desktop entry must pass the checks,
//! and the checker's exit code must reflect invalid artifacts.

use crate::common::{appmeta, stdout_of};
use appmeta::packaging::{check_packaging, validate_desktop_entry, validate_nfpm};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn repo_root() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn test_shipped_nfpm_descriptor_is_valid() {
    let text = fs::read_to_string(repo_root().join("packaging/nfpm.yaml"))
        .expect("packaging/nfpm.yaml not found");
    validate_nfpm(&text).unwrap();
}

#[test]
fn test_shipped_desktop_entry_is_valid() {
    let text = fs::read_to_string(repo_root().join("packaging/appmeta.desktop"))
        .expect("packaging/appmeta.desktop not found");
    validate_desktop_entry(&text).unwrap();
}

#[test]
fn test_repository_report_is_ok() {
    let report = check_packaging(repo_root()).unwrap();
    assert!(report.is_ok(), "{:?}", report);
    assert_eq!(report.checked_count(), 2);
}

#[test]
fn test_check_packaging_command_on_repository() {
    let home = TempDir::new().unwrap();
    let output = appmeta(home.path())
        .arg("check-packaging")
        .arg("--root")
        .arg(repo_root())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output).contains("appmeta.desktop"));
}

#[test]
fn test_check_packaging_command_fails_on_invalid_entry() {
    let home = TempDir::new().unwrap();
    let root = TempDir::new().unwrap();
    fs::create_dir_all(root.path().join("packaging")).unwrap();
    fs::write(
        root.path().join("packaging/broken.desktop"),
        "[Desktop Entry]\nName=Broken\n",
    )
    .unwrap();

    let output = appmeta(home.path())
        .arg("check-packaging")
        .arg("--root")
        .arg(root.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Exec=, Type=Application"), "got: {}", stdout);
}

#[test]
fn test_check_packaging_command_skips_absent_artifacts() {
    let home = TempDir::new().unwrap();
    let root = TempDir::new().unwrap();

    let output = appmeta(home.path())
        .arg("check-packaging")
        .arg("--root")
        .arg(root.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout_of(&output)
            .lines()
            .filter(|l| l.starts_with("skipped"))
            .count(),
        2
    );
}

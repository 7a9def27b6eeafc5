//! CLI argument parsing tests
//!
//! The entry point must print a program identifier, accept --help and
//! --version, and exit 0 on success.

use crate::common::{appmeta, stderr_of, stdout_of};
use tempfile::TempDir;

#[test]
fn test_no_arguments_prints_identifier() {
    let home = TempDir::new().unwrap();
    let output = appmeta(home.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout_of(&output).trim(),
        format!("appmeta {}", env!("CARGO_PKG_VERSION"))
    );
}

#[test]
fn test_help_exits_zero() {
    let home = TempDir::new().unwrap();
    let output = appmeta(home.path()).arg("--help").output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("appmeta"), "got: {}", stdout);
    assert!(stdout.contains("Usage"), "got: {}", stdout);
}

#[test]
fn test_version_exits_zero() {
    let home = TempDir::new().unwrap();
    let output = appmeta(home.path()).arg("--version").output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = stdout_of(&output);
    assert!(stdout.starts_with("appmeta "), "got: {}", stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")), "got: {}", stdout);
}

#[test]
fn test_short_version_is_single_line() {
    let home = TempDir::new().unwrap();
    let output = appmeta(home.path()).arg("-V").output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout_of(&output).trim(),
        format!("appmeta {}", env!("CARGO_PKG_VERSION"))
    );
}

#[test]
fn test_subcommand_help_exits_zero() {
    let home = TempDir::new().unwrap();
    let output = appmeta(home.path())
        .args(["run-task", "--help"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output).contains("--program"));
}

#[test]
fn test_unknown_argument_exits_two() {
    let home = TempDir::new().unwrap();
    let output = appmeta(home.path()).arg("--frobnicate").output().unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("--frobnicate"));
}

//! Metadata resolution through the binary

use crate::common::{appmeta, stderr_of, stdout_of};
use tempfile::TempDir;

#[test]
fn test_title_defaults() {
    let home = TempDir::new().unwrap();
    let output = appmeta(home.path()).arg("title").output().unwrap();

    assert!(output.status.success());
    assert_eq!(stdout_of(&output).trim(), "Myapp vdev build 0 (unknown)");
}

#[test]
fn test_title_from_environment() {
    let home = TempDir::new().unwrap();
    let output = appmeta(home.path())
        .arg("title")
        .env("APP_VERSION", "v1.2.3")
        .env("BUILD_NUMBER", "42")
        .env("COMMIT_SHA", "abc1234def5678")
        .env("REPO_NAME", "my-cool-app")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output).trim(),
        "My Cool App v1.2.3 build 42 (abc1234)"
    );
}

#[test]
fn test_show_json() {
    let home = TempDir::new().unwrap();
    let output = appmeta(home.path())
        .args(["show", "--format", "json"])
        .env("APP_VERSION", "2.0.0")
        .env("COMMIT_SHA", "ab")
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(value["version"], "2.0.0");
    assert_eq!(value["buildNumber"], "0");
    assert_eq!(value["commitSha"], "ab");
    assert_eq!(value["repoSlug"], "MyApp");
    assert_eq!(value["displayName"], "Myapp");
}

#[test]
fn test_show_text_passes_empty_values_through() {
    let home = TempDir::new().unwrap();
    let output = appmeta(home.path())
        .arg("show")
        .env("BUILD_NUMBER", "")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    let line = stdout
        .lines()
        .find(|l| l.starts_with("Build number:"))
        .expect("build number line");
    assert_eq!(line.trim_end(), "Build number:");
}

#[test]
fn test_run_task_missing_program_fails() {
    let home = TempDir::new().unwrap();
    let output = appmeta(home.path())
        .args(["run-task", "--program", "appmeta-no-such-program-xyz"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("failed to start"));
}

#[cfg(unix)]
#[test]
fn test_run_task_prints_command_output() {
    let home = TempDir::new().unwrap();
    let output = appmeta(home.path())
        .args(["run-task", "--program", "echo", "--", "Python", "3.12.1"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "Python 3.12.1\n");
}

//! Configuration file handling through the binary

use crate::common::{appmeta, stderr_of, stdout_of};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_explicit_config_supplies_metadata() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("custom.toml");
    fs::write(
        &config,
        "[metadata]\nAPP_VERSION = \"v1.4.0\"\nBUILD_NUMBER = 118\nREPO_NAME = \"research-desktop-demo\"\n",
    )
    .unwrap();

    let output = appmeta(home.path())
        .arg("--config-file")
        .arg(&config)
        .arg("title")
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    assert_eq!(
        stdout_of(&output).trim(),
        "Research Desktop Demo v1.4.0 build 118 (unknown)"
    );
}

#[test]
fn test_environment_overrides_config() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("custom.toml");
    fs::write(&config, "[metadata]\nAPP_VERSION = \"v1.4.0\"\n").unwrap();

    let output = appmeta(home.path())
        .arg("--config-file")
        .arg(&config)
        .arg("title")
        .env("APP_VERSION", "v9.9.9")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(stdout_of(&output).trim(), "Myapp v9.9.9 build 0 (unknown)");
}

#[test]
fn test_missing_explicit_config_fails() {
    let home = TempDir::new().unwrap();
    let output = appmeta(home.path())
        .args(["--config-file", "does-not-exist.toml", "title"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("does not exist"));
    assert!(stdout_of(&output).is_empty());
}

#[test]
fn test_invalid_config_value_fails() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("bad.toml");
    fs::write(&config, "color = \"sometimes\"\n").unwrap();

    let output = appmeta(home.path())
        .arg("--config-file")
        .arg(&config)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("'color'"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_default_config_location_is_used() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join("Appmeta");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("appmeta.toml"), "[metadata]\nBUILD_NUMBER = \"77\"\n").unwrap();

    let output = appmeta(home.path()).arg("title").output().unwrap();

    assert!(output.status.success());
    assert_eq!(stdout_of(&output).trim(), "Myapp vdev build 77 (unknown)");
}

#[test]
fn test_log_file_receives_records() {
    let home = TempDir::new().unwrap();
    let log_file = home.path().join("appmeta.log");

    let output = appmeta(home.path())
        .args(["--log-level", "info", "--log-file"])
        .arg(&log_file)
        .arg("title")
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", stderr_of(&output));
    // Records go to the file, stdout carries only the command output
    assert_eq!(stdout_of(&output).lines().count(), 1);

    let written = if log_file.exists() {
        log_file.clone()
    } else {
        // tolerate a discriminated name such as appmeta_<suffix>.log
        fs::read_dir(home.path())
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .find(|p| {
                p.extension().is_some_and(|e| e == "log")
                    && p.file_name()
                        .and_then(|n| n.to_str())
                        .is_some_and(|n| n.starts_with("appmeta"))
            })
            .expect("no log file written")
    };
    let contents = fs::read_to_string(&written).unwrap();
    let starting = format!("INF appmeta {} starting", env!("CARGO_PKG_VERSION"));
    assert!(contents.contains(&starting), "log file: {}", contents);
}

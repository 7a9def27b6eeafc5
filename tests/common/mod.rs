//! Common test utilities for running the appmeta binary

use std::path::Path;
use std::process::{Command, Output};

pub const METADATA_KEYS: [&str; 4] = ["APP_VERSION", "BUILD_NUMBER", "COMMIT_SHA", "REPO_NAME"];

/// `appmeta` with metadata variables cleared and the config directory
/// redirected to `config_home`, so host settings never leak into a test
pub fn appmeta(config_home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_appmeta"));
    for key in METADATA_KEYS {
        cmd.env_remove(key);
    }
    cmd.env("XDG_CONFIG_HOME", config_home)
        .env("HOME", config_home)
        .arg("--no-color");
    cmd
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

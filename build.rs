use chrono::Utc;
use std::env;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

// Cargo only reruns this script when a watched path changes, so the
// generated constants are always rewritten on a run.
fn main() -> Result<(), Box<dyn Error>> {
    let out_dir = PathBuf::from(env::var_os("OUT_DIR").ok_or("OUT_DIR is not set")?);
    let manifest_dir = PathBuf::from(env::var_os("CARGO_MANIFEST_DIR").ok_or("CARGO_MANIFEST_DIR is not set")?);

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=Cargo.toml");
    for watched in git_watch_paths(&manifest_dir) {
        println!("cargo:rerun-if-changed={}", watched.display());
    }

    let build_time = Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
    let git_hash = short_git_hash().unwrap_or_else(|| "unknown".to_string());

    fs::write(
        out_dir.join("version.rs"),
        format!("pub const BUILD_TIME: &str = \"{build_time}\";\npub const GIT_HASH: &str = \"{git_hash}\";\n"),
    )?;

    Ok(())
}

fn short_git_hash() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8(output.stdout).ok()?.trim().to_string();
    (!hash.is_empty()).then_some(hash)
}

/// `.git/HEAD` moves on checkout; the ref it names moves on commit
fn git_watch_paths(manifest_dir: &Path) -> Vec<PathBuf> {
    let git_dir = manifest_dir.join(".git");
    let head = git_dir.join("HEAD");
    let mut paths = Vec::new();

    if let Ok(contents) = fs::read_to_string(&head) {
        if let Some(reference) = contents.trim().strip_prefix("ref: ") {
            let ref_path = git_dir.join(reference);
            if ref_path.exists() {
                paths.push(ref_path);
            }
        }
        paths.push(head);
    }

    paths
}

//! Build metadata captured by the build script.
//! Includes the generated version.rs into a core module so the binary and
//! the library report the same identity.

include!(concat!(env!("OUT_DIR"), "/version.rs"));

/// Program identifier printed by the CLI
pub const PROGRAM_NAME: &str = env!("CARGO_PKG_NAME");

/// Crate version from Cargo.toml
pub const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build time string from the build script (UTC)
pub fn build_time() -> &'static str {
    BUILD_TIME
}

/// Short git hash captured by the build script
pub fn git_hash() -> &'static str {
    GIT_HASH
}

/// `appmeta 0.1.0`
pub fn program_identifier() -> String {
    format!("{PROGRAM_NAME} {PACKAGE_VERSION}")
}

/// Multi-line text shown by `--version` when clap renders the long form
pub fn long_version() -> String {
    format!(
        "{}\ncommit: {}\nbuilt: {}",
        PACKAGE_VERSION,
        git_hash(),
        build_time()
    )
}

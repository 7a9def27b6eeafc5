//! Build-identity metadata
//!
//! Derives display metadata (version, build number, short commit SHA and a
//! human-readable application name) from an injected key/value source.
//! Nothing here reads ambient process state unless handed a [`ProcessEnv`].

pub mod resolver;
pub mod source;

pub use resolver::{
    resolve, AppMetadata, APP_VERSION_KEY, BUILD_NUMBER_KEY, COMMIT_SHA_DISPLAY_LEN,
    COMMIT_SHA_KEY, DEFAULT_BUILD_NUMBER, DEFAULT_COMMIT_SHA, DEFAULT_REPO_SLUG, DEFAULT_VERSION,
    METADATA_KEYS, REPO_NAME_KEY,
};
pub use source::{LayeredSource, MetadataSource, ProcessEnv};

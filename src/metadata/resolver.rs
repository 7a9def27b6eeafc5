//! Derivation of [`AppMetadata`] from a [`MetadataSource`]

use std::fmt;

use serde::Serialize;

use super::source::{MetadataSource, ProcessEnv};
use crate::core::strings::{strip_leading_v, title_case, truncate_chars};

pub const APP_VERSION_KEY: &str = "APP_VERSION";
pub const BUILD_NUMBER_KEY: &str = "BUILD_NUMBER";
pub const COMMIT_SHA_KEY: &str = "COMMIT_SHA";
pub const REPO_NAME_KEY: &str = "REPO_NAME";

/// Every key the resolver reads, in display order
pub const METADATA_KEYS: [&str; 4] = [
    APP_VERSION_KEY,
    BUILD_NUMBER_KEY,
    COMMIT_SHA_KEY,
    REPO_NAME_KEY,
];

pub const DEFAULT_VERSION: &str = "dev";
pub const DEFAULT_BUILD_NUMBER: &str = "0";
pub const DEFAULT_COMMIT_SHA: &str = "unknown";
pub const DEFAULT_REPO_SLUG: &str = "MyApp";

/// Characters of the commit SHA kept for display
pub const COMMIT_SHA_DISPLAY_LEN: usize = 7;

/// Display metadata for one build of the application.
///
/// Immutable once resolved; resolve again to pick up a changed source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppMetadata {
    version: String,
    build_number: String,
    commit_sha: String,
    repo_slug: String,
    display_name: String,
}

impl AppMetadata {
    /// Resolve from the current process environment
    pub fn from_process_env() -> Self {
        resolve(&ProcessEnv)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn build_number(&self) -> &str {
        &self.build_number
    }

    pub fn commit_sha(&self) -> &str {
        &self.commit_sha
    }

    pub fn repo_slug(&self) -> &str {
        &self.repo_slug
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// `"{display_name} v{version} build {build_number} ({commit_sha})"`
    pub fn window_title(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for AppMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} v{} build {} ({})",
            self.display_name, self.version, self.build_number, self.commit_sha
        )
    }
}

/// Human-readable name for a repository slug: `my-cool-app` -> `My Cool App`
pub fn display_name_for(repo_slug: &str) -> String {
    title_case(&repo_slug.replace('-', " "))
}

/// Build an [`AppMetadata`] from `source`.
///
/// Absent keys fall back to their defaults; present keys are used verbatim,
/// including empty values. Total over all inputs.
pub fn resolve(source: &dyn MetadataSource) -> AppMetadata {
    let value_or = |key: &str, default: &str| {
        source.get(key).unwrap_or_else(|| default.to_string())
    };

    let raw_version = value_or(APP_VERSION_KEY, DEFAULT_VERSION);
    let raw_sha = value_or(COMMIT_SHA_KEY, DEFAULT_COMMIT_SHA);
    let repo_slug = value_or(REPO_NAME_KEY, DEFAULT_REPO_SLUG);

    let metadata = AppMetadata {
        version: strip_leading_v(&raw_version).to_string(),
        build_number: value_or(BUILD_NUMBER_KEY, DEFAULT_BUILD_NUMBER),
        commit_sha: truncate_chars(&raw_sha, COMMIT_SHA_DISPLAY_LEN).to_string(),
        display_name: display_name_for(&repo_slug),
        repo_slug,
    };

    log::debug!("Resolved build metadata: {:?}", metadata);
    metadata
}

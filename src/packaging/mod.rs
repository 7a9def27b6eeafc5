//! Packaging artifact checks
//!
//! Key-presence validation for the nfpm package descriptor and the Linux
//! desktop entry shipped under `packaging/`. Absent artifacts are reported
//! as skipped; only artifacts that exist and fail a check make the report
//! fail.

pub mod error;

pub use error::{PackagingError, PackagingResult};

use std::fmt;
use std::path::{Path, PathBuf};

pub const NFPM_FILE_NAME: &str = "nfpm.yaml";
pub const PACKAGING_DIR: &str = "packaging";

/// Markers every desktop entry must contain
pub const DESKTOP_REQUIRED_MARKERS: [&str; 4] =
    ["[Desktop Entry]", "Name=", "Exec=", "Type=Application"];

/// Check an nfpm descriptor: a mapping with `name` and a non-empty `contents` list
pub fn validate_nfpm(text: &str) -> PackagingResult<()> {
    let doc: serde_yaml::Value = serde_yaml::from_str(text)?;
    let mapping = doc.as_mapping().ok_or(PackagingError::NotAMapping)?;

    if !mapping.contains_key("name") {
        return Err(PackagingError::MissingKey("name"));
    }

    let contents = mapping
        .get("contents")
        .ok_or(PackagingError::MissingKey("contents"))?
        .as_sequence()
        .ok_or(PackagingError::NotAList("contents"))?;

    if contents.is_empty() {
        return Err(PackagingError::EmptyList("contents"));
    }
    Ok(())
}

/// Check a desktop entry for the required markers, reporting all that are missing
pub fn validate_desktop_entry(text: &str) -> PackagingResult<()> {
    let missing: Vec<&'static str> = DESKTOP_REQUIRED_MARKERS
        .iter()
        .copied()
        .filter(|marker| !text.contains(marker))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(PackagingError::MissingDesktopKeys(missing))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    NfpmDescriptor,
    DesktopEntry,
}

impl ArtifactKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::NfpmDescriptor => "nfpm descriptor",
            Self::DesktopEntry => "desktop entry",
        }
    }

    fn validate(&self, text: &str) -> PackagingResult<()> {
        match self {
            Self::NfpmDescriptor => validate_nfpm(text),
            Self::DesktopEntry => validate_desktop_entry(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactStatus {
    Valid,
    Invalid(String),
    /// Not present; skipped
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactCheck {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    pub status: ArtifactStatus,
}

impl fmt::Display for ArtifactCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.status {
            ArtifactStatus::Valid => {
                write!(f, "ok      {} ({})", self.path.display(), self.kind.name())
            }
            ArtifactStatus::Invalid(reason) => write!(
                f,
                "invalid {} ({}): {}",
                self.path.display(),
                self.kind.name(),
                reason
            ),
            ArtifactStatus::Missing => {
                write!(f, "skipped {} ({} not present)", self.path.display(), self.kind.name())
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackagingReport {
    pub checks: Vec<ArtifactCheck>,
}

impl PackagingReport {
    /// True unless some present artifact failed its check
    pub fn is_ok(&self) -> bool {
        self.invalid().next().is_none()
    }

    pub fn invalid(&self) -> impl Iterator<Item = &ArtifactCheck> {
        self.checks
            .iter()
            .filter(|c| matches!(c.status, ArtifactStatus::Invalid(_)))
    }

    pub fn checked_count(&self) -> usize {
        self.checks
            .iter()
            .filter(|c| c.status != ArtifactStatus::Missing)
            .count()
    }
}

/// Validate one artifact on disk
pub fn check_artifact(kind: ArtifactKind, path: &Path) -> ArtifactCheck {
    let status = if !path.exists() {
        ArtifactStatus::Missing
    } else {
        let result = std::fs::read_to_string(path)
            .map_err(|source| PackagingError::Io {
                path: path.to_path_buf(),
                source,
            })
            .and_then(|text| kind.validate(&text));

        match result {
            Ok(()) => ArtifactStatus::Valid,
            Err(e) => ArtifactStatus::Invalid(e.to_string()),
        }
    };

    log::debug!("{} {}: {:?}", kind.name(), path.display(), status);
    ArtifactCheck {
        kind,
        path: path.to_path_buf(),
        status,
    }
}

/// Check the artifacts under `root`: `nfpm.yaml` at the root or in
/// `packaging/`, and every `packaging/*.desktop`.
pub fn check_packaging(root: &Path) -> PackagingResult<PackagingReport> {
    let mut report = PackagingReport::default();
    let packaging_dir = root.join(PACKAGING_DIR);

    let nfpm_candidates = [root.join(NFPM_FILE_NAME), packaging_dir.join(NFPM_FILE_NAME)];
    let present: Vec<&PathBuf> = nfpm_candidates.iter().filter(|p| p.exists()).collect();
    if present.is_empty() {
        report.checks.push(ArtifactCheck {
            kind: ArtifactKind::NfpmDescriptor,
            path: packaging_dir.join(NFPM_FILE_NAME),
            status: ArtifactStatus::Missing,
        });
    } else {
        for path in present {
            report
                .checks
                .push(check_artifact(ArtifactKind::NfpmDescriptor, path));
        }
    }

    let desktop_files = find_desktop_entries(&packaging_dir)?;
    if desktop_files.is_empty() {
        report.checks.push(ArtifactCheck {
            kind: ArtifactKind::DesktopEntry,
            path: packaging_dir.join("*.desktop"),
            status: ArtifactStatus::Missing,
        });
    } else {
        for path in &desktop_files {
            report
                .checks
                .push(check_artifact(ArtifactKind::DesktopEntry, path));
        }
    }

    log::info!(
        "Checked {} packaging artifact(s) under {}",
        report.checked_count(),
        root.display()
    );
    Ok(report)
}

fn find_desktop_entries(packaging_dir: &Path) -> PackagingResult<Vec<PathBuf>> {
    let pattern = format!(
        "{}/*.desktop",
        glob::Pattern::escape(&packaging_dir.to_string_lossy())
    );

    let mut paths = Vec::new();
    for entry in glob::glob(&pattern)? {
        match entry {
            Ok(path) => paths.push(path),
            Err(e) => log::warn!("Skipping unreadable path: {}", e),
        }
    }
    paths.sort();
    Ok(paths)
}

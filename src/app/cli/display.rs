//! Rendering of resolved metadata and packaging reports for the terminal

use colored::Colorize;

use crate::metadata::AppMetadata;
use crate::packaging::{ArtifactCheck, ArtifactStatus};

use super::args::OutputFormat;

const KEY_WIDTH: usize = 14;

/// Metadata as aligned `key: value` lines, or pretty JSON
pub fn render_metadata(
    metadata: &AppMetadata,
    format: OutputFormat,
    use_color: bool,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(metadata),
        OutputFormat::Text => {
            let rows = [
                ("Display name", metadata.display_name()),
                ("Repository", metadata.repo_slug()),
                ("Version", metadata.version()),
                ("Build number", metadata.build_number()),
                ("Commit", metadata.commit_sha()),
            ];

            let lines: Vec<String> = rows
                .iter()
                .map(|(key, value)| {
                    let key = format!("{:<width$}", format!("{key}:"), width = KEY_WIDTH);
                    if use_color {
                        format!("{}{}", key.cyan(), value)
                    } else {
                        format!("{}{}", key, value)
                    }
                })
                .collect();
            Ok(lines.join("\n"))
        }
    }
}

/// One line per packaging check, status word coloured when enabled
pub fn render_check(check: &ArtifactCheck, use_color: bool) -> String {
    let line = check.to_string();
    if !use_color {
        return line;
    }
    match check.status {
        ArtifactStatus::Valid => line.green().to_string(),
        ArtifactStatus::Invalid(_) => line.red().to_string(),
        ArtifactStatus::Missing => line.dimmed().to_string(),
    }
}

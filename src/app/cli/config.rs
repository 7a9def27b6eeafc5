//! TOML configuration file loading
//!
//! ```toml
//! log-level = "info"
//! log-format = "ext"
//! log-file = "none"
//! color = false
//!
//! [metadata]
//! APP_VERSION = "v1.4.0"
//! BUILD_NUMBER = 118
//! REPO_NAME = "research-desktop-demo"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::metadata::{MetadataSource, METADATA_KEYS};

use super::args::{is_disabled_path, LOG_LEVELS};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("the specified configuration file does not exist: {0}")]
    NotFound(PathBuf),

    #[error("error reading configuration file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error parsing configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value for '{key}': expected {expected}")]
    InvalidValue { key: String, expected: &'static str },
}

/// Settings read from the configuration file. Every field is optional;
/// command-line flags take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileConfig {
    pub log_level: Option<String>,
    pub log_format: Option<String>,
    pub log_file: Option<PathBuf>,
    pub color: Option<bool>,
    /// `[metadata]` table, consulted after the process environment
    pub metadata: BTreeMap<String, String>,
}

impl MetadataSource for FileConfig {
    fn get(&self, key: &str) -> Option<String> {
        self.metadata.get(key).cloned()
    }
}

/// `<config dir>/Appmeta/appmeta.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("Appmeta").join("appmeta.toml"))
}

impl FileConfig {
    /// Load the explicit file (which must exist), else the default file if
    /// present, else an empty config.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match config_file {
            Some(path) if !path.exists() => return Err(ConfigError::NotFound(path.to_path_buf())),
            Some(path) => path.to_path_buf(),
            None => match default_config_path() {
                Some(path) if path.exists() => path,
                _ => {
                    log::debug!("No configuration file found");
                    return Ok(Self::default());
                }
            },
        };

        log::debug!("Loading configuration from {}", path.display());
        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let table = toml::from_str::<toml::Table>(&contents)
            .map_err(|source| ConfigError::Parse { path, source })?;

        Self::from_table(&table)
    }

    pub fn from_table(config: &toml::Table) -> Result<Self, ConfigError> {
        let mut settings = Self::default();
        settings.apply_toml_values(config)?;
        Ok(settings)
    }

    /// Apply TOML values; unknown keys are ignored
    pub fn apply_toml_values(&mut self, config: &toml::Table) -> Result<(), ConfigError> {
        if let Some(value) = config.get("log-level") {
            let level = expect_str("log-level", value)?;
            if !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
                return Err(ConfigError::InvalidValue {
                    key: "log-level".to_string(),
                    expected: "one of trace, debug, info, warn, error, off",
                });
            }
            self.log_level = Some(level.to_ascii_lowercase());
        }
        if let Some(value) = config.get("log-format") {
            let format = expect_str("log-format", value)?;
            if !["text", "ext", "json"].contains(&format) {
                return Err(ConfigError::InvalidValue {
                    key: "log-format".to_string(),
                    expected: "one of text, ext, json",
                });
            }
            self.log_format = Some(format.to_string());
        }
        if let Some(value) = config.get("log-file") {
            let path = PathBuf::from(expect_str("log-file", value)?);
            self.log_file = (!is_disabled_path(&path)).then_some(path);
        }
        if let Some(value) = config.get("color") {
            self.color = Some(value.as_bool().ok_or_else(|| ConfigError::InvalidValue {
                key: "color".to_string(),
                expected: "a boolean",
            })?);
        }

        if let Some(value) = config.get("metadata") {
            let table = value.as_table().ok_or_else(|| ConfigError::InvalidValue {
                key: "metadata".to_string(),
                expected: "a table",
            })?;
            for (key, value) in table {
                if !METADATA_KEYS.contains(&key.as_str()) {
                    log::warn!("Ignoring unknown metadata key '{}' in configuration", key);
                    continue;
                }
                let text = match value {
                    toml::Value::String(s) => s.clone(),
                    toml::Value::Integer(i) => i.to_string(),
                    _ => {
                        return Err(ConfigError::InvalidValue {
                            key: format!("metadata.{}", key),
                            expected: "a string or integer",
                        })
                    }
                };
                self.metadata.insert(key.clone(), text);
            }
        }

        Ok(())
    }
}

fn expect_str<'a>(key: &str, value: &'a toml::Value) -> Result<&'a str, ConfigError> {
    value.as_str().ok_or_else(|| ConfigError::InvalidValue {
        key: key.to_string(),
        expected: "a string",
    })
}

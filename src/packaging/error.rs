use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PackagingError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("descriptor must be a YAML mapping")]
    NotAMapping,

    #[error("missing required key '{0}'")]
    MissingKey(&'static str),

    #[error("'{0}' must be a list")]
    NotAList(&'static str),

    #[error("'{0}' must not be empty")]
    EmptyList(&'static str),

    #[error("desktop entry missing: {}", .0.join(", "))]
    MissingDesktopKeys(Vec<&'static str>),

    #[error("invalid search pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

pub type PackagingResult<T> = Result<T, PackagingError>;

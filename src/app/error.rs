use crate::app::cli::ConfigError;
use crate::core::logging::LoggingError;
use crate::packaging::PackagingError;
use crate::window::WindowError;

/// Anything that aborts a CLI run
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Logging(#[from] LoggingError),

    #[error(transparent)]
    Window(#[from] WindowError),

    #[error(transparent)]
    Packaging(#[from] PackagingError),

    #[error("failed to render output: {0}")]
    Render(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl AppError {
    /// Configuration and argument problems the user can fix directly
    pub fn is_user_actionable(&self) -> bool {
        matches!(self, Self::Config(_) | Self::Logging(_))
    }
}

//! CLI module containing argument parsing, configuration and display

pub mod args;
pub mod config;
pub mod display;

pub use args::{Args, Commands, OutputFormat};
pub use config::{default_config_path, ConfigError, FileConfig};

#[cfg(test)]
mod tests;

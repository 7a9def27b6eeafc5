//! Command-line arguments
//!
//! Flags with a short form belong before the subcommand so that `run-task`
//! can forward `-c`, `-v` and friends to the program it starts. The long-only
//! logging and colour flags are accepted anywhere. Running with no subcommand
//! prints the program identifier and exits 0.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::core::logging::{level_for_verbosity, LogFormat, LogSettings, LoggingError};

use super::config::FileConfig;

pub const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "appmeta")]
#[command(about = "Build-identity metadata, demo window and packaging checks")]
#[command(version)]
#[command(
    after_help = "Metadata is read from APP_VERSION, BUILD_NUMBER, COMMIT_SHA and REPO_NAME,\nfalling back to the [metadata] table of the configuration file."
)]
pub struct Args {
    /// Configuration file path
    #[arg(short = 'c', long = "config-file", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Log level
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = LOG_LEVELS)]
    pub log_level: Option<String>,

    /// Log output format
    #[arg(long = "log-format", value_name = "FORMAT", value_parser = ["text", "ext", "json"], global = true)]
    pub log_format: Option<String>,

    /// Log file path (use 'none' to disable file logging)
    #[arg(long = "log-file", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,

    /// More log output (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Less log output (repeatable)
    #[arg(short = 'q', long = "quiet", action = ArgAction::Count)]
    pub quiet: u8,

    /// Force colored output (overrides TTY detection)
    #[arg(long = "color", conflicts_with = "no_color", global = true)]
    pub color: bool,

    /// Disable colored output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the resolved build metadata
    Show {
        /// Output format
        #[arg(long = "format", value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the window title derived from the build metadata
    Title,

    /// Press the demo window's "Run Task" button once and print the label
    RunTask {
        /// Program to run
        #[arg(long = "program", value_name = "PROGRAM", default_value = "python")]
        program: String,

        /// Arguments passed to the program (start with `--` to pass a
        /// long flag such as `--color` through unchanged)
        #[arg(
            value_name = "ARGS",
            num_args = 1..,
            trailing_var_arg = true,
            allow_hyphen_values = true,
            default_values_t = vec!["--version".to_string()]
        )]
        args: Vec<String>,
    },

    /// Validate the nfpm descriptor and desktop entries under a directory
    CheckPackaging {
        /// Repository root containing nfpm.yaml and/or packaging/
        #[arg(long = "root", value_name = "DIR", default_value = ".")]
        root: PathBuf,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// `-v` count minus `-q` count
    pub fn verbosity(&self) -> i16 {
        i16::from(self.verbose) - i16::from(self.quiet)
    }

    /// Resolve colour: explicit flags, then config, then TTY detection
    pub fn use_color(&self, config: &FileConfig) -> bool {
        if self.no_color {
            false
        } else if self.color {
            true
        } else {
            config
                .color
                .unwrap_or_else(|| std::io::IsTerminal::is_terminal(&std::io::stdout()))
        }
    }

    /// Merge logging flags over the config file.
    ///
    /// Level precedence: --log-level, config `log-level`, then -v/-q.
    pub fn log_settings(
        &self,
        config: &FileConfig,
        use_color: bool,
    ) -> Result<LogSettings, LoggingError> {
        let level = self
            .log_level
            .clone()
            .or_else(|| config.log_level.clone())
            .unwrap_or_else(|| level_for_verbosity(self.verbosity()).to_string());

        let format = match self.log_format.as_deref().or(config.log_format.as_deref()) {
            Some(f) => f.parse::<LogFormat>()?,
            None => LogFormat::default(),
        };

        let file = match &self.log_file {
            Some(path) if is_disabled_path(path) => None,
            Some(path) => Some(path.clone()),
            None => config.log_file.clone(),
        };

        Ok(LogSettings {
            level,
            format,
            file,
            color: use_color,
        })
    }
}

/// "none" and "-" disable file logging
pub(crate) fn is_disabled_path(path: &std::path::Path) -> bool {
    path.to_str()
        .is_some_and(|s| s.eq_ignore_ascii_case("none") || s == "-")
}

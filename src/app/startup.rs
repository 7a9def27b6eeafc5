use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use clap::{CommandFactory, FromArgMatches};

use super::cli::display::{render_check, render_metadata};
use super::cli::{Args, Commands, FileConfig};
use super::AppError;
use crate::core::logging::init_logging;
use crate::core::version::{long_version, program_identifier};
use crate::metadata::{resolve, LayeredSource, MetadataSource, ProcessEnv};
use crate::packaging::check_packaging;
use crate::window::{DemoWindow, SystemCommandRunner, TaskCommand};

/// How a successfully executed command finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Success,
    /// Packaging checks ran but some artifact was invalid
    ChecksFailed,
}

impl From<CommandStatus> for ExitCode {
    fn from(status: CommandStatus) -> Self {
        match status {
            CommandStatus::Success => ExitCode::SUCCESS,
            CommandStatus::ChecksFailed => ExitCode::FAILURE,
        }
    }
}

/// Entry point for the binary
pub fn startup() -> ExitCode {
    run(std::env::args_os())
}

/// Parse `argv`, load configuration, initialise logging and execute.
///
/// Starts the global logger, so call at most once per process.
pub fn run<I, T>(argv: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = match parse_args(argv) {
        Ok(args) => args,
        Err(e) => {
            // --help and --version land here too, with exit code 0
            let _ = e.print();
            return ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(2));
        }
    };

    let config = match FileConfig::load(args.config_file.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let use_color = args.use_color(&config);
    colored::control::set_override(use_color);

    let logging = args
        .log_settings(&config, use_color)
        .map_err(AppError::from)
        .and_then(|settings| init_logging(&settings).map_err(AppError::from));
    if let Err(e) = logging {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    log::info!("{} starting", program_identifier());

    let mut stdout = std::io::stdout().lock();
    match execute(&args, &config, &ProcessEnv, use_color, &mut stdout) {
        Ok(status) => status.into(),
        Err(e) => {
            if e.is_user_actionable() {
                log::error!("FATAL: {}", e);
            } else {
                log::error!("FATAL: command failed: {:?}", e);
            }
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Parse arguments with the build-time long version attached to `--version`
pub fn parse_args<I, T>(argv: I) -> Result<Args, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = Args::command()
        .long_version(long_version())
        .try_get_matches_from(argv)?;
    Args::from_arg_matches(&matches)
}

/// Run the selected command, writing results to `out`.
///
/// `env` has precedence over the config file's `[metadata]` table.
pub fn execute(
    args: &Args,
    config: &FileConfig,
    env: &dyn MetadataSource,
    use_color: bool,
    out: &mut dyn Write,
) -> Result<CommandStatus, AppError> {
    let source = LayeredSource::new().with_layer(env).with_layer(config);

    match &args.command {
        None => {
            writeln!(out, "{}", program_identifier())?;
        }
        Some(Commands::Show { format }) => {
            let metadata = resolve(&source);
            writeln!(out, "{}", render_metadata(&metadata, *format, use_color)?)?;
        }
        Some(Commands::Title) => {
            writeln!(out, "{}", resolve(&source).window_title())?;
        }
        Some(Commands::RunTask { program, args }) => {
            let metadata = resolve(&source);
            let command = TaskCommand::new(program.clone(), args.clone());
            let mut window = DemoWindow::with_command(&metadata, SystemCommandRunner, command);
            log::info!("Window '{}': running task", window.state().title);

            let label = window.run_task()?;
            writeln!(out, "{}", label)?;
        }
        Some(Commands::CheckPackaging { root }) => {
            let report = check_packaging(root)?;
            for check in &report.checks {
                writeln!(out, "{}", render_check(check, use_color))?;
            }
            if !report.is_ok() {
                log::warn!("{} packaging artifact(s) failed validation", report.invalid().count());
                return Ok(CommandStatus::ChecksFailed);
            }
        }
    }

    Ok(CommandStatus::Success)
}

//! Headless model of the demo window
//!
//! The window has a title, a status label and a single "Run Task" button.
//! Pressing the button runs an external command through an injected
//! [`CommandRunner`], blocking the caller, and writes the trimmed stdout back
//! into the label. Rendering is left to whichever toolkit hosts this state.

use std::process::Command;

use crate::metadata::AppMetadata;

pub const INITIAL_LABEL: &str = "Press the button to run Python task";
pub const BUTTON_TEXT: &str = "Run Task";

#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

pub type WindowResult<T> = Result<T, WindowError>;

/// External command triggered by the button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl TaskCommand {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl Default for TaskCommand {
    /// `python --version`
    fn default() -> Self {
        Self::new("python", vec!["--version".to_string()])
    }
}

/// Captured result of a finished command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// `None` when the process was terminated by a signal
    pub status_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

/// Capability to run an external command to completion
pub trait CommandRunner {
    fn run(&self, command: &TaskCommand) -> WindowResult<CommandOutput>;
}

/// Runs commands with [`std::process::Command`], blocking until they exit
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, command: &TaskCommand) -> WindowResult<CommandOutput> {
        log::debug!("Running {} {:?}", command.program, command.args);

        let output = Command::new(&command.program)
            .args(&command.args)
            .output()
            .map_err(|source| WindowError::Spawn {
                program: command.program.clone(),
                source,
            })?;

        Ok(CommandOutput {
            status_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Everything a toolkit needs to draw the window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowState {
    pub title: String,
    pub label: String,
    pub button_text: String,
}

pub struct DemoWindow<R: CommandRunner> {
    state: WindowState,
    command: TaskCommand,
    runner: R,
}

impl<R: CommandRunner> DemoWindow<R> {
    /// Window titled from `metadata`, wired to run the default task
    pub fn new(metadata: &AppMetadata, runner: R) -> Self {
        Self::with_command(metadata, runner, TaskCommand::default())
    }

    pub fn with_command(metadata: &AppMetadata, runner: R, command: TaskCommand) -> Self {
        Self {
            state: WindowState {
                title: metadata.window_title(),
                label: INITIAL_LABEL.to_string(),
                button_text: BUTTON_TEXT.to_string(),
            },
            command,
            runner,
        }
    }

    pub fn state(&self) -> &WindowState {
        &self.state
    }

    pub fn command(&self) -> &TaskCommand {
        &self.command
    }

    /// Button handler: run the task and show its stdout in the label.
    ///
    /// Exit status and stderr are ignored. On spawn failure the label keeps
    /// its previous text.
    pub fn run_task(&mut self) -> WindowResult<&str> {
        let output = self.runner.run(&self.command)?;

        if output.status_code != Some(0) {
            log::warn!(
                "'{}' exited with status {:?}",
                self.command.program,
                output.status_code
            );
        }

        self.state.label = output.stdout.trim().to_string();
        Ok(&self.state.label)
    }
}

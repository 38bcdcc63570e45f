//! Command execution.
//!
//! [`CommandRunner`] is the seam between command construction and the host:
//! production code uses [`SystemRunner`], tests substitute a recording runner.
//! [`Executor`] folds every outcome into an integer result code.

use crate::config::BackendConfig;
use crate::error::{Result, WtfError};
use crate::ui;
use crate::utils::platform;
use std::io;
use std::process::ExitStatus;

/// Result code for failures that have no exit status of their own.
pub const GENERIC_FAILURE: i32 = 1;

pub trait CommandRunner {
    /// Run `argv[0]` with the remaining elements as arguments, stdio inherited.
    fn run(&self, argv: &[String]) -> io::Result<i32>;

    /// Run a script through the platform shell, stdio inherited.
    fn run_shell(&self, script: &str) -> io::Result<i32>;
}

/// Runner that spawns real processes and blocks until they exit.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, argv: &[String]) -> io::Result<i32> {
        let mut cmd = platform::build_program_command(argv)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;
        cmd.status().map(status_code)
    }

    fn run_shell(&self, script: &str) -> io::Result<i32> {
        platform::build_shell_command(script)
            .status()
            .map(status_code)
    }
}

fn status_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    GENERIC_FAILURE
}

pub struct Executor<'a, R: CommandRunner> {
    runner: &'a R,
    config: &'a BackendConfig,
}

impl<'a, R: CommandRunner> Executor<'a, R> {
    pub fn new(runner: &'a R, config: &'a BackendConfig) -> Self {
        Self { runner, config }
    }

    /// Run an argument vector and return its exit code.
    ///
    /// Launch failures become [`GENERIC_FAILURE`]; nothing is raised.
    pub fn execute(&self, argv: &[String]) -> i32 {
        let command = platform::display_command(argv);
        let outcome = self.runner.run(argv);
        self.settle(classify(command, outcome))
    }

    /// Run a shell script and return the shell's exit code.
    pub fn execute_shell(&self, script: &str) -> i32 {
        let outcome = self.runner.run_shell(script);
        self.settle(classify(script.to_string(), outcome))
    }

    fn settle(&self, outcome: Result<()>) -> i32 {
        match outcome {
            Ok(()) => 0,
            Err(e @ WtfError::ExecutionFailure { .. }) => {
                if self.config.is_tracing() {
                    ui::trace(&e.to_string());
                }
                e.exit_code()
            }
            Err(e) => {
                ui::error(&e.to_string());
                GENERIC_FAILURE
            }
        }
    }
}

/// Turn a raw runner outcome into a typed one.
fn classify(command: String, outcome: io::Result<i32>) -> Result<()> {
    match outcome {
        Ok(0) => Ok(()),
        Ok(code) => Err(WtfError::ExecutionFailure { command, code }),
        Err(e) => Err(WtfError::LaunchFailure {
            command,
            reason: e.to_string(),
        }),
    }
}

//! Blocking subprocess execution

use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use crate::utils::tools::{require_tool, ToolInfo};

/// Result of a subprocess execution
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Whether the command succeeded (exit code 0)
    pub success: bool,

    /// Process exit code; `-N` when killed by signal N, `-1` if unknown
    pub exit_code: i32,

    /// Execution duration
    pub duration: Duration,
}

impl CommandResult {
    /// Create a CommandResult from an exit status
    pub fn from_status(status: ExitStatus, duration: Duration) -> Self {
        let exit_code = status.code().unwrap_or_else(|| signal_code(&status));
        Self {
            success: status.success(),
            exit_code,
            duration,
        }
    }
}

#[cfg(unix)]
fn signal_code(status: &ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    status.signal().map_or(-1, |sig| -sig)
}

#[cfg(not(unix))]
fn signal_code(_status: &ExitStatus) -> i32 {
    -1
}

#[cfg(test)]
impl CommandResult {
    /// Build a result from a bare exit code
    pub fn from_code(exit_code: i32) -> Self {
        Self {
            success: exit_code == 0,
            exit_code,
            duration: Duration::ZERO,
        }
    }
}

/// Runs an external program to completion
pub trait CommandRunner {
    /// Run `program` with `args`, blocking until it exits.
    ///
    /// A non-zero exit is reported through [`CommandResult`], not as `Err`.
    /// `Err` means the process could not be started at all.
    fn run(&mut self, program: &Path, args: &[String]) -> Result<CommandResult>;

    /// Locate `program` before running it
    fn resolve(&self, program: &str, required_for: &str) -> Result<ToolInfo> {
        require_tool(program, required_for)
    }
}

/// Runs commands on the host with inherited stdio
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, program: &Path, args: &[String]) -> Result<CommandResult> {
        let start = Instant::now();

        let status = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .with_context(|| format!("Failed to execute {}", program.display()))?;

        Ok(CommandResult::from_status(status, start.elapsed()))
    }
}

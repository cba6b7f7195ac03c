//! Local command execution through the operating system's shell.
//!
//! Command strings are handed to `sh -c` (`cmd /C` on Windows) verbatim, so
//! pipes, redirection and globbing behave exactly as in a normal shell.

use std::io;
use std::process::{Command, Output};

use tracing::debug;

/// Captured result of one command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    /// Exit code, `None` when the process was terminated by a signal
    pub code: Option<i32>,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<Output> for CommandOutput {
    fn from(output: Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            code: output.status.code(),
        }
    }
}

/// Runs a command string to completion (allows mocking in tests)
pub trait CommandRunner {
    /// # Errors
    ///
    /// Returns an error only when the process could not be spawned or waited
    /// on. A nonzero exit status is a normal [`CommandOutput`].
    fn run(&self, command: &str) -> io::Result<CommandOutput>;
}

/// The platform shell
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemShell;

impl CommandRunner for SystemShell {
    fn run(&self, command: &str) -> io::Result<CommandOutput> {
        let output = shell_command(command).output()?;
        let output = CommandOutput::from(output);
        debug!(command, code = ?output.code, "command finished");
        Ok(output)
    }
}

#[cfg(not(windows))]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    cmd
}

#[cfg(windows)]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(command);
    cmd
}

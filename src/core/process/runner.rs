// procenv: process environment derivation and executable lookup
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution.
//!
//! ```text
//! run()
//!   |
//!   v
//! to_command()
//! program, argv0, args, env_clear + block
//!   |
//!   v
//! spawn() --> wait()
//!   |   \
//!   |    token cancelled --> kill() --> interrupted
//!   v
//! ProcessOutput { exit_code, interrupted }
//! ```

use tokio::process::Command;
use tracing::{debug, trace};

use super::command::CommandDescriptor;
use crate::error::CommandError;

/// Outcome of a finished process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    exit_code: i32,
    interrupted: bool,
}

impl ProcessOutput {
    /// Outcome of a process that exited on its own.
    #[must_use]
    pub const fn exited(exit_code: i32) -> Self {
        Self {
            exit_code,
            interrupted: false,
        }
    }

    /// Outcome of a process killed through its cancellation token.
    #[must_use]
    pub const fn interrupted() -> Self {
        Self {
            exit_code: -1,
            interrupted: true,
        }
    }

    /// Returns the process exit code; `-1` if it was ended by a signal.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.exit_code
    }

    /// Returns whether the process was killed through its cancellation token.
    #[must_use]
    pub const fn is_interrupted(&self) -> bool {
        self.interrupted
    }

    /// Returns true if the process exited with code 0.
    #[must_use]
    pub const fn success(&self) -> bool {
        self.exit_code == 0 && !self.interrupted
    }
}

/// Splits `KEY=VALUE`, allowing Windows' hidden `=C:=C:\dir` entries.
pub fn split_entry(entry: &str) -> Option<(&str, &str)> {
    let start = usize::from(entry.starts_with('='));
    let eq = start + entry[start..].find('=')?;
    Some((&entry[..eq], &entry[eq + 1..]))
}

impl CommandDescriptor {
    /// Builds a tokio command that runs with exactly this descriptor's
    /// environment block.
    #[must_use]
    pub fn to_command(&self) -> Command {
        let mut command = Command::new(self.program());
        #[cfg(unix)]
        command.arg0(self.argv0());
        command.args(self.args().iter().skip(1));
        command.env_clear();
        command.envs(self.env().iter().filter_map(|e| split_entry(e)));
        command.kill_on_drop(true);
        command
    }

    /// Spawns the process with inherited stdio and waits for it.
    ///
    /// If the descriptor carries a cancellation token and it fires first, the
    /// child is killed and the output is marked interrupted.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::SpawnFailed`] if the process cannot be started
    /// and [`CommandError::Wait`] if waiting for or killing it fails.
    pub async fn run(&self) -> Result<ProcessOutput, CommandError> {
        let cmd_line = self.command_line();
        debug!(cmd = %cmd_line, "exec");

        let mut child = self
            .to_command()
            .spawn()
            .map_err(|source| CommandError::SpawnFailed {
                command: cmd_line.clone(),
                source,
            })?;
        trace!(process = %self.argv0(), pid = ?child.id(), "spawned");

        let wait_error = |source: std::io::Error| CommandError::Wait {
            command: cmd_line.clone(),
            source,
        };

        let status = match self.cancellation() {
            Some(token) => {
                tokio::select! {
                    status = child.wait() => status.map_err(wait_error)?,
                    () = token.cancelled() => {
                        debug!(process = %self.argv0(), "cancelled, killing process");
                        child.kill().await.map_err(wait_error)?;
                        return Ok(ProcessOutput::interrupted());
                    }
                }
            }
            None => child.wait().await.map_err(wait_error)?,
        };

        let exit_code = status.code().unwrap_or(-1);
        trace!(process = %self.argv0(), exit_code, "completed");
        Ok(ProcessOutput::exited(exit_code))
    }
}

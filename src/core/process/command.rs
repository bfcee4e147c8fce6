// procenv: process environment derivation and executable lookup
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Spawn-ready command descriptors built from an [`EnvStore`].

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::core::env::store::EnvStore;
use crate::error::CommandError;

/// Everything needed to spawn a child process.
///
/// `args` is the full argument vector: `args[0]` is the name the caller used,
/// not the resolved path, so children see the invocation name they expect.
/// The environment block is a snapshot taken when the descriptor was built.
#[derive(Debug, Clone)]
pub struct CommandDescriptor {
    program: PathBuf,
    args: Vec<String>,
    env: Vec<String>,
    cancel: Option<CancellationToken>,
}

impl CommandDescriptor {
    /// Returns the path handed to the OS.
    #[must_use]
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Returns the full argument vector, including argv0.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Returns the invocation name.
    #[must_use]
    pub fn argv0(&self) -> &str {
        self.args.first().map_or("", String::as_str)
    }

    /// Returns the `KEY=VALUE` environment block.
    #[must_use]
    pub fn env(&self) -> &[String] {
        &self.env
    }

    /// Returns the cancellation token governing the spawned process, if any.
    #[must_use]
    pub const fn cancellation(&self) -> Option<&CancellationToken> {
        self.cancel.as_ref()
    }

    /// Returns the command line as a string (for logging).
    #[must_use]
    pub fn command_line(&self) -> String {
        use std::fmt::Write as _;

        let mut cmd = format!("{}", self.program.display());
        for arg in self.args.iter().skip(1) {
            if arg.contains(' ') {
                let _ = write!(cmd, " \"{arg}\"");
            } else {
                let _ = write!(cmd, " {arg}");
            }
        }
        cmd
    }
}

/// True when `name` has no directory component.
fn is_bare_name(name: &str) -> bool {
    Path::new(name).file_name() == Some(OsStr::new(name))
}

fn argv<I, S>(name: &str, args: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    std::iter::once(name.to_string())
        .chain(args.into_iter().map(Into::into))
        .collect()
}

impl EnvStore {
    /// Builds a descriptor, resolving bare names through this store's `PATH`.
    ///
    /// Resolution failures are not reported here: the unresolved name is used
    /// as the program and the spawn step surfaces the problem.
    pub fn new_command<I, S>(&self, name: &str, args: I) -> CommandDescriptor
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let program = if is_bare_name(name) {
            self.look_path(name).unwrap_or_else(|e| {
                debug!(exe = name, error = %e, "using unresolved name");
                PathBuf::from(name)
            })
        } else {
            PathBuf::from(name)
        };

        CommandDescriptor {
            program,
            args: argv(name, args),
            env: self.environ(),
            cancel: None,
        }
    }

    /// Builds a descriptor whose process is killed when `token` is cancelled.
    ///
    /// The token only governs the spawned process; resolution itself is
    /// synchronous.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::ExecutableNotFound`] if a bare name cannot be
    /// resolved.
    pub fn new_command_context<I, S>(
        &self,
        token: CancellationToken,
        name: &str,
        args: I,
    ) -> Result<CommandDescriptor, CommandError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let program = if is_bare_name(name) {
            self.look_path(name)
                .map_err(|source| CommandError::ExecutableNotFound {
                    name: name.to_string(),
                    source,
                })?
        } else {
            PathBuf::from(name)
        };

        Ok(CommandDescriptor {
            program,
            args: argv(name, args),
            env: self.environ(),
            cancel: Some(token),
        })
    }
}

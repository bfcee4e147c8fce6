// procenv: process environment derivation and executable lookup
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!          ProcenvError (~16 bytes)
//!                  |
//!   +------+-------+--------+
//!   |      |       |        |
//!   v      v       v        v
//!  Env  LookPath Command  Config
//!  Box    Box      Box     Box
//!
//! Sub-errors:
//!   Env       EmptyKey, EqualsInKey
//!   LookPath  { name, cause: NotFound | PermissionDenied | Io }
//!   Command   ExecutableNotFound, SpawnFailed, Wait
//!   Config    InvalidValue, InvalidAssignment
//! ```

use std::io;
use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`ProcenvError`].
pub type ProcenvResult<T> = std::result::Result<T, ProcenvError>;

/// Top-level library error type.
///
/// All sub-errors are boxed to keep this enum small on the stack.
#[derive(Debug, Error)]
pub enum ProcenvError {
    /// Environment mutation failed.
    #[error("environment error: {0}")]
    Env(#[from] Box<EnvError>),

    /// Executable resolution failed.
    #[error("{0}")]
    LookPath(#[from] Box<LookPathError>),

    /// Command construction or execution failed.
    #[error("command error: {0}")]
    Command(#[from] Box<CommandError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),
}

macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for ProcenvError {
                fn from(err: $error) -> Self {
                    ProcenvError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    EnvError => Env,
    LookPathError => LookPath,
    CommandError => Command,
    ConfigError => Config,
}

// --- Environment Errors ---

/// Errors raised by environment mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EnvError {
    /// A mutation was called with an empty variable name.
    #[error("key cannot be empty")]
    EmptyKey,

    /// A mutation was called with a name containing `=` after its first
    /// character, which would not survive a `KEY=VALUE` block entry.
    #[error("key cannot contain '='")]
    EqualsInKey,
}

// --- Resolution Errors ---

/// Returned when a name cannot be classified as an executable file.
///
/// Renders as `exec: "<name>": <cause>` and exposes the cause through
/// [`std::error::Error::source`].
#[derive(Debug, Error)]
#[error("exec: {name:?}: {cause}")]
pub struct LookPathError {
    /// The name that was looked up, exactly as given.
    pub name: String,
    /// Why the lookup failed.
    #[source]
    pub cause: LookPathCause,
}

impl LookPathError {
    pub fn new(name: impl Into<String>, cause: impl Into<LookPathCause>) -> Self {
        Self {
            name: name.into(),
            cause: cause.into(),
        }
    }

    /// Shorthand for a search that exhausted every candidate.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::new(name, LookPathCause::NotFound)
    }

    /// Returns true if no candidate file existed at all.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self.cause, LookPathCause::NotFound)
    }
}

/// Underlying cause of a [`LookPathError`].
#[derive(Debug, Error)]
pub enum LookPathCause {
    /// No candidate in the search list matched.
    #[error("executable file not found in $PATH")]
    NotFound,

    /// The candidate exists but is a directory or lacks execute permission.
    #[error("permission denied")]
    PermissionDenied,

    /// Querying the candidate failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

// --- Command Errors ---

/// Errors raised while building or running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The executable could not be resolved.
    #[error("executable not found: '{name}'")]
    ExecutableNotFound {
        name: String,
        #[source]
        source: LookPathError,
    },

    /// Spawning the child process failed.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: io::Error,
    },

    /// Waiting for the child process failed.
    #[error("failed to wait for process '{command}': {source}")]
    Wait {
        command: String,
        #[source]
        source: io::Error,
    },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// A `KEY=VALUE` assignment could not be parsed.
    #[error("invalid assignment '{0}', expected KEY=VALUE")]
    InvalidAssignment(String),
}

#[cfg(test)]
mod tests;

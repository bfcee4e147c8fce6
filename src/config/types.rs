// procenv: process environment derivation and executable lookup
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for procenv.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, EnvConfig
//! EnvConfig: mode, inherit_path, bash_compatible,
//!            erase [KEY], set/insert/append [KEY=VALUE]
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

use tracing::debug;

use crate::core::env::store::EnvStore;
use crate::core::env::types::EnvMode;
use crate::error::{ConfigError, EnvError};
use crate::logging::LogLevel;

/// A `KEY=VALUE` pair from a config file or the command line.
///
/// Only the first `=` separates; the value may contain more of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Assignment {
    pub key: String,
    pub value: String,
}

impl FromStr for Assignment {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((key, value)) if !key.is_empty() => Ok(Self {
                key: key.to_string(),
                value: value.to_string(),
            }),
            _ => Err(ConfigError::InvalidAssignment(s.to_string())),
        }
    }
}

impl TryFrom<String> for Assignment {
    type Error = ConfigError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Assignment> for String {
    fn from(a: Assignment) -> Self {
        format!("{}={}", a.key, a.value)
    }
}

impl std::fmt::Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// Global options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Console log level (0-6).
    pub log_level: LogLevel,
    /// Optional log file; always written at trace level.
    pub log_file: Option<PathBuf>,
}

/// How the environment handed to children is derived.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnvConfig {
    pub mode: EnvMode,
    /// Append the host `PATH` after the store's own directories.
    pub inherit_path: bool,
    /// Expose positional arguments and `$` for bash-style templates.
    pub bash_compatible: bool,
    pub erase: Vec<String>,
    pub set: Vec<Assignment>,
    pub insert: Vec<Assignment>,
    pub append: Vec<Assignment>,
}

impl EnvConfig {
    /// Captures the host environment and applies this configuration to it.
    ///
    /// # Errors
    ///
    /// Returns an [`EnvError`] if an erase entry is empty or contains `=`.
    pub fn derive(&self) -> std::result::Result<EnvStore, EnvError> {
        let mut store = crate::core::env::derive(self.mode);
        if self.inherit_path {
            store.append_host_path();
        }
        self.apply(&mut store)?;
        Ok(store)
    }

    /// Applies the edits in order: erase, set, insert, append, then bash
    /// compatibility.
    ///
    /// # Errors
    ///
    /// Returns an [`EnvError`] if an erase entry is empty or contains `=`.
    pub fn apply(&self, store: &mut EnvStore) -> std::result::Result<(), EnvError> {
        for key in &self.erase {
            store.erase_env(key)?;
        }
        for a in &self.set {
            store.set_env(&a.key, a.value.as_str())?;
        }
        for a in &self.insert {
            store.insert_env(&a.key, a.value.as_str())?;
        }
        for a in &self.append {
            store.append_env(&a.key, a.value.as_str())?;
        }
        if self.bash_compatible {
            store.add_bash_compatible();
        }

        debug!(
            mode = %self.mode,
            erased = self.erase.len(),
            set = self.set.len(),
            inserted = self.insert.len(),
            appended = self.append.len(),
            "applied environment configuration"
        );
        Ok(())
    }
}

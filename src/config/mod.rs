// procenv: process environment derivation and executable lookup
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for procenv.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. --config files, in order
//! 3. procenv.toml (cwd, optional)
//! 4. PROCENV_* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! PROCENV_GLOBAL__LOG_LEVEL=4      → global.log_level = 4
//! PROCENV_ENV__MODE=cleanup        → env.mode = "cleanup"
//! PROCENV_ENV__INHERIT_PATH=true   → env.inherit_path = true
//! ```
//!
//! # Example
//!
//! ```toml
//! [env]
//! mode = "cleanup"
//! erase = ["LS_COLORS"]
//! set = ["LANG=C"]
//! insert = ["PATH=/opt/tool/bin"]
//! append = ["PKG_CONFIG_PATH=/opt/tool/lib/pkgconfig"]
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use types::{Assignment, EnvConfig, GlobalConfig};

/// Name of the optional configuration file picked up from the working directory.
pub const LOCAL_CONFIG_FILE: &str = "procenv.toml";

/// Prefix of environment variables that override configuration values.
pub const ENV_PREFIX: &str = "PROCENV";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Environment derivation.
    pub env: EnvConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use procenv::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file("ci/procenv.toml")
    ///     .add_toml_file_optional("procenv.toml")
    ///     .with_env_prefix("PROCENV")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Checks values that deserialization alone cannot reject.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an empty `env.erase` entry.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.env.erase.iter().any(String::is_empty) {
            return Err(ConfigError::InvalidValue {
                section: "env".to_string(),
                key: "erase".to_string(),
                message: "variable names cannot be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Format configuration options for display, one `key = value` per line.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let join = |list: &[Assignment]| {
            list.iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        };

        let mut options = BTreeMap::new();
        options.insert(
            "global.log_level",
            self.global.log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file",
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
        options.insert("env.mode", self.env.mode.to_string());
        options.insert("env.inherit_path", self.env.inherit_path.to_string());
        options.insert(
            "env.bash_compatible",
            self.env.bash_compatible.to_string(),
        );
        options.insert("env.erase", self.env.erase.join(", "));
        options.insert("env.set", join(&self.env.set));
        options.insert("env.insert", join(&self.env.insert));
        options.insert("env.append", join(&self.env.append));

        let max_key_len = options.keys().map(|k| k.len()).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}

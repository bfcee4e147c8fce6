// procenv: process environment derivation and executable lookup
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE       ← Config files (can repeat)
//! --cleanup           ← env.mode = "cleanup"
//! --inherit-path      ← env.inherit_path = true
//! --unset KEY         ← appended to env.erase
//! --set/--insert/--append KEY=VALUE
//!                     ← appended to env.set/insert/append
//! --log-level N       ← Console verbosity (0-6)
//!
//! Precedence: CLI flags > PROCENV_* > procenv.toml > --config > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::config::Config;
use crate::config::types::Assignment;
use crate::core::env::types::EnvMode;
use crate::logging::LogLevel;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to TOML configuration file(s).
    /// Can be specified multiple times; later files override earlier ones.
    #[arg(short = 'c', long = "config", value_name = "FILE", action = clap::ArgAction::Append)]
    pub configs: Vec<PathBuf>,

    /// Starts from an allow-listed environment with a fixed system PATH.
    #[arg(long)]
    pub cleanup: bool,

    /// Appends the current PATH after the derived search path.
    #[arg(long = "inherit-path")]
    pub inherit_path: bool,

    /// Sets a variable, replacing any previous value.
    #[arg(short = 's', long = "set", value_name = "KEY=VALUE", action = clap::ArgAction::Append)]
    pub set: Vec<Assignment>,

    /// Prepends to a list variable; PATH edits the search path.
    #[arg(long = "insert", value_name = "KEY=VALUE", action = clap::ArgAction::Append)]
    pub insert: Vec<Assignment>,

    /// Appends to a list variable; PATH edits the search path.
    #[arg(long = "append", value_name = "KEY=VALUE", action = clap::ArgAction::Append)]
    pub append: Vec<Assignment>,

    /// Removes a variable.
    #[arg(short = 'u', long = "unset", value_name = "KEY", action = clap::ArgAction::Append)]
    pub unset: Vec<String>,

    /// Exposes positional arguments and `$` to expansion.
    #[arg(long = "bash-compat")]
    pub bash_compat: bool,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace, 6=dump).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=6)
    )]
    pub log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl GlobalOptions {
    /// Folds command-line flags into a loaded configuration.
    ///
    /// List options are appended after the configured entries, so they run
    /// later and win.
    pub fn apply_to(&self, config: &mut Config) {
        if self.cleanup {
            config.env.mode = EnvMode::Cleanup;
        }
        if self.inherit_path {
            config.env.inherit_path = true;
        }
        if self.bash_compat {
            config.env.bash_compatible = true;
        }

        config.env.erase.extend(self.unset.iter().cloned());
        config.env.set.extend(self.set.iter().cloned());
        config.env.insert.extend(self.insert.iter().cloned());
        config.env.append.extend(self.append.iter().cloned());

        if let Some(level) = self.log_level.and_then(LogLevel::from_u8) {
            config.global.log_level = level;
        }
        if let Some(ref path) = self.log_file {
            config.global.log_file = Some(path.clone());
        }
    }
}

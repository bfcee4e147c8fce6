// procenv: process environment derivation and executable lookup
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for procenv using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! procenv [global options] <command>
//! env [--json]
//! which <name>
//! expand <template>
//! run <name> [args...]
//! options
//! configs
//! ```

pub mod global;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Process environment derivation and executable lookup.
#[derive(Debug, Parser)]
#[command(
    name = "procenv",
    author,
    version,
    about = "Derive child-process environments and resolve executables",
    long_about = "procenv Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Builds the environment a child process would receive, either\n\
                  inherited from the current process or cleaned down to an\n\
                  allow-list, and resolves executables against its PATH.",
    after_help = "CONFIG FILES:\n\n\
                  Files given with --config are loaded in order, then procenv.toml\n\
                  from the current directory if present. PROCENV_<SECTION>__<KEY>\n\
                  environment variables override files, and command-line flags\n\
                  override everything."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Prints the derived environment block, `PATH` last.
    Env {
        /// Print a JSON object instead of `KEY=VALUE` lines.
        #[arg(long)]
        json: bool,
    },

    /// Resolves an executable against the derived `PATH`.
    Which {
        /// Executable name or path.
        name: String,
    },

    /// Expands `$VAR` and `${VAR}` references using the derived environment.
    Expand {
        /// Template to expand.
        template: String,
    },

    /// Runs a program with exactly the derived environment.
    Run {
        /// Executable name or path.
        name: String,

        /// Arguments passed to the program.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Lists all options and their effective values.
    Options,

    /// Lists the configuration files in load order.
    Configs,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

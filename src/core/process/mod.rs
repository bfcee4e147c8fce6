// procenv: process environment derivation and executable lookup
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command construction and spawning.
//!
//! ```text
//! EnvStore::new_command("git", ["status"])            (never fails)
//! EnvStore::new_command_context(token, "git", [..])   (fails if unresolved)
//!       --> CommandDescriptor { program, argv (argv0 = "git"), env block }
//!       --> to_command() / run()
//!           tokio::process::Command, env cleared + block
//!           token cancelled --> kill child
//!       --> ProcessOutput { exit_code, interrupted }
//! ```

pub mod command;
mod runner;
#[cfg(test)]
mod tests;

pub use command::CommandDescriptor;
pub use runner::{ProcessOutput, split_entry};

// procenv: process environment derivation and executable lookup
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment inspection commands: `env`, `which` and `expand`.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::core::env::store::EnvStore;
use crate::core::process::split_entry;
use crate::error::{ProcenvResult, Result};

/// Renders the environment block as `KEY=VALUE` lines, or as a JSON object
/// with sorted keys.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_environ(store: &EnvStore, json: bool) -> Result<String> {
    let block = store.environ();
    if json {
        let map: BTreeMap<&str, &str> = block.iter().filter_map(|e| split_entry(e)).collect();
        Ok(serde_json::to_string_pretty(&map)?)
    } else {
        Ok(block.join("\n"))
    }
}

/// Print the derived environment.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn run_env_command(store: &EnvStore, json: bool) -> Result<()> {
    println!("{}", format_environ(store, json)?);
    Ok(())
}

/// Resolves `name` against the store's search path.
///
/// # Errors
///
/// Returns a lookup error if no executable matches.
pub fn resolve(store: &EnvStore, name: &str) -> ProcenvResult<PathBuf> {
    Ok(store.look_path(name)?)
}

/// Print the resolved path of an executable.
///
/// # Errors
///
/// Returns an error if no executable matches.
pub fn run_which_command(store: &EnvStore, name: &str) -> Result<()> {
    let path = resolve(store, name)?;
    println!("{}", path.display());
    Ok(())
}

/// Print a template with variable references expanded.
pub fn run_expand_command(store: &EnvStore, template: &str) {
    println!("{}", store.expand_env(template));
}

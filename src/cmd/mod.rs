// procenv: process environment derivation and executable lookup
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   env, which, expand, run, options, configs
//! ```

pub mod config;
pub mod env;
pub mod run;

#[cfg(test)]
mod tests;

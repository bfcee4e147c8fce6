// procenv: process environment derivation and executable lookup
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment derivation.
//!
//! # Architecture
//!
//! ```text
//! EnvStore (HashMap<String, String> + PathList)
//! Sources: EnvStore::inherit(), EnvStore::cleanup(), derive(EnvMode)
//! Ops: set/insert/append/erase/get/lookup/expand/environ
//! ```
//!
//! - **PATH kept apart**: stored as an ordered [`PathList`](path_list::PathList)
//! - **Snapshot**: the host environment is read once, at construction
//! - **Case-insensitive directories on Windows**

pub mod allowlist;
pub mod expand;
pub mod path_list;
pub mod store;
pub mod types;


use store::EnvStore;
use types::EnvMode;

/// Captures the current process environment in the given mode.
#[must_use]
pub fn derive(mode: EnvMode) -> EnvStore {
    match mode {
        EnvMode::Inherit => EnvStore::inherit(),
        EnvMode::Cleanup => EnvStore::cleanup(),
    }
}

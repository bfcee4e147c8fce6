// procenv: process environment derivation and executable lookup
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for environment derivation and process launching.
//!
//! ```text
//!              core
//!               |
//!     +---------+---------+
//!     |         |         |
//!     v         v         v
//!    env     resolve   process
//!     |         |         |
//!  EnvStore  Posix    CommandDescriptor
//!  PathList  Windows  run / cancel
//!  allowlist
//! ```

pub mod env;
pub mod process;
pub mod resolve;

// procenv: process environment derivation and executable lookup
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Executable resolution.
//!
//! ```text
//! EnvStore::look_path(name)
//!        |
//!        v
//!   NativeResolver (cfg-selected)
//!    |                     |
//!    v                     v
//! PosixResolver       WindowsResolver
//!  '/' -> explicit     ':' '\' '/' -> explicit (+PATHEXT)
//!  "" dir = "."        cwd searched first
//!  needs x bit         any non-directory
//!    \                     /
//!     v                   v
//!   PathBuf | LookPathError { name, cause }
//! ```
//!
//! Both resolvers compile everywhere; only the execute-bit check is Unix-only.

mod posix;
mod windows;


use std::path::PathBuf;

use crate::core::env::path_list::PathList;
use crate::core::env::store::EnvStore;
use crate::core::env::types::PathCase;
use crate::error::LookPathError;

pub use posix::PosixResolver;
pub use windows::{DEFAULT_PATHEXT, WindowsResolver};

/// Turns an executable name into a verified file path.
pub trait ExecutableResolver {
    /// Resolves `name`, searching `paths` when it is a bare name.
    ///
    /// # Errors
    ///
    /// Returns a [`LookPathError`] carrying `name` and the cause. A bare name
    /// with no match fails with [`LookPathCause::NotFound`]; an explicit path
    /// reports why that file was rejected.
    ///
    /// [`LookPathCause::NotFound`]: crate::error::LookPathCause::NotFound
    fn look_path(&self, name: &str, paths: &PathList) -> Result<PathBuf, LookPathError>;

    /// Directory comparison rule of the filesystem this resolver targets.
    fn path_case(&self) -> PathCase;

    /// Checks whether `dir` is in `paths` under this resolver's comparison rule.
    fn path_list_exists(&self, paths: &PathList, dir: &str) -> bool {
        let case = self.path_case();
        paths.iter().any(|d| case.matches(d, dir))
    }
}

/// Resolver for the platform this binary was built for.
#[cfg(windows)]
pub type NativeResolver = WindowsResolver;

/// Resolver for the platform this binary was built for.
#[cfg(not(windows))]
pub type NativeResolver = PosixResolver;

/// Builds the native resolver for a store.
///
/// On Windows the extension list comes from the store's own `PATHEXT`.
#[cfg(windows)]
#[must_use]
pub fn native_resolver(store: &EnvStore) -> NativeResolver {
    WindowsResolver::from_pathext(store.lookup_env("PATHEXT"))
}

/// Builds the native resolver for a store.
#[cfg(not(windows))]
#[must_use]
pub const fn native_resolver(_store: &EnvStore) -> NativeResolver {
    PosixResolver
}

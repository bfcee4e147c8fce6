// procenv: process environment derivation and executable lookup
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! POSIX executable lookup.

use std::fs::{self, Metadata};
use std::path::{Path, PathBuf};

use tracing::trace;

use super::ExecutableResolver;
use crate::core::env::path_list::PathList;
use crate::core::env::types::PathCase;
use crate::error::{LookPathCause, LookPathError};

/// Resolves names the way POSIX shells do.
///
/// Any name containing `/` bypasses the search, even `dir/tool`; an empty
/// search entry stands for the current directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PosixResolver;

#[cfg(unix)]
fn is_executable(meta: &Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn is_executable(meta: &Metadata) -> bool {
    meta.is_file()
}

/// Accepts regular files with at least one execute bit.
fn check_executable(path: &Path) -> Result<(), LookPathCause> {
    let meta = fs::metadata(path)?;
    if meta.is_file() && is_executable(&meta) {
        Ok(())
    } else {
        Err(LookPathCause::PermissionDenied)
    }
}

impl ExecutableResolver for PosixResolver {
    fn look_path(&self, name: &str, paths: &PathList) -> Result<PathBuf, LookPathError> {
        if name.contains('/') {
            return check_executable(Path::new(name))
                .map(|()| PathBuf::from(name))
                .map_err(|cause| LookPathError::new(name, cause));
        }

        for dir in paths.iter() {
            let dir = if dir.is_empty() { "." } else { dir };
            let candidate = Path::new(dir).join(name);
            match check_executable(&candidate) {
                Ok(()) => return Ok(candidate),
                Err(cause) => trace!(candidate = %candidate.display(), %cause, "skipped"),
            }
        }

        Err(LookPathError::not_found(name))
    }

    fn path_case(&self) -> PathCase {
        PathCase::Sensitive
    }
}

// procenv: process environment derivation and executable lookup
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Windows executable lookup with `PATHEXT` matching.
//!
//! ```text
//! PATHEXT ".EXE;bat" --> [".exe", ".bat"]   (unset --> DEFAULT_PATHEXT)
//!
//! candidate "dir\prog":
//!   has extension? try "dir\prog" as-is
//!   then "dir\prog.exe", "dir\prog.bat", ...
//!   first existing non-directory wins
//!
//! bare "prog": working directory first ("prog.exe"), then each PATH dir
//! ```

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::ExecutableResolver;
use crate::core::env::path_list::PathList;
use crate::core::env::types::PathCase;
use crate::error::{LookPathCause, LookPathError};

/// Extensions tried when `PATHEXT` is unset.
pub const DEFAULT_PATHEXT: &[&str] = &[".com", ".exe", ".bat", ".cmd"];

const PATH_SEPARATORS: [char; 3] = [':', '\\', '/'];

/// Resolves names the way `cmd.exe` does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowsResolver {
    extensions: Vec<String>,
}

impl Default for WindowsResolver {
    fn default() -> Self {
        Self::from_pathext(None)
    }
}

impl WindowsResolver {
    /// Builds a resolver from a `PATHEXT` value.
    ///
    /// Entries are lower-cased and given a leading dot; empty entries are
    /// skipped. `None` or an empty value selects [`DEFAULT_PATHEXT`].
    #[must_use]
    pub fn from_pathext(pathext: Option<&str>) -> Self {
        let extensions = match pathext {
            Some(value) if !value.is_empty() => value
                .to_lowercase()
                .split(';')
                .filter(|e| !e.is_empty())
                .map(|e| {
                    if e.starts_with('.') {
                        e.to_string()
                    } else {
                        format!(".{e}")
                    }
                })
                .collect(),
            _ => DEFAULT_PATHEXT.iter().map(|e| (*e).to_string()).collect(),
        };
        Self { extensions }
    }

    /// Returns the extensions tried, in order.
    #[must_use]
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    fn find_executable(&self, path: &Path) -> Result<PathBuf, LookPathCause> {
        if self.extensions.is_empty() {
            return check_file(path).map(|()| path.to_path_buf());
        }
        if has_extension(&path.to_string_lossy()) && check_file(path).is_ok() {
            return Ok(path.to_path_buf());
        }
        self.extensions
            .iter()
            .map(|ext| with_extension(path, ext))
            .find(|candidate| check_file(candidate).is_ok())
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound).into())
    }
}

/// Accepts anything that exists and is not a directory.
fn check_file(path: &Path) -> Result<(), LookPathCause> {
    if fs::metadata(path)?.is_dir() {
        Err(LookPathCause::PermissionDenied)
    } else {
        Ok(())
    }
}

/// True if the last path segment contains a dot.
fn has_extension(name: &str) -> bool {
    name.rfind('.').is_some_and(|dot| {
        name.rfind(PATH_SEPARATORS)
            .is_none_or(|separator| separator < dot)
    })
}

fn with_extension(path: &Path, ext: &str) -> PathBuf {
    let mut joined = OsString::from(path.as_os_str());
    joined.push(ext);
    PathBuf::from(joined)
}

impl ExecutableResolver for WindowsResolver {
    fn look_path(&self, name: &str, paths: &PathList) -> Result<PathBuf, LookPathError> {
        if name.contains(PATH_SEPARATORS) {
            return self
                .find_executable(Path::new(name))
                .map_err(|cause| LookPathError::new(name, cause));
        }

        // The working directory is searched first and matches come back
        // relative, e.g. `prog.exe`.
        if let Ok(found) = self.find_executable(Path::new(name)) {
            return Ok(found);
        }

        paths
            .iter()
            .find_map(|dir| self.find_executable(&Path::new(dir).join(name)).ok())
            .ok_or_else(|| LookPathError::not_found(name))
    }

    fn path_case(&self) -> PathCase {
        PathCase::Insensitive
    }
}

// procenv: process environment derivation and executable lookup
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Ordered list of executable search directories.

use super::types::{LIST_SEPARATOR, PathCase};

/// Ordered sequence of search directories.
///
/// Order is significant: resolvers scan front to back. An empty entry is kept
/// as-is and means "current directory" to the POSIX resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathList {
    dirs: Vec<String>,
    case: PathCase,
}

impl PathList {
    #[must_use]
    pub const fn new(case: PathCase) -> Self {
        Self {
            dirs: Vec::new(),
            case,
        }
    }

    /// Splits a `PATH`-style value, dropping repeated directories.
    ///
    /// An empty value yields an empty list, not a single empty entry.
    #[must_use]
    pub fn parse(value: &str, case: PathCase) -> Self {
        let mut list = Self::new(case);
        if !value.is_empty() {
            list.extend_unique(
                std::env::split_paths(value).map(|p| p.to_string_lossy().into_owned()),
            );
        }
        list
    }

    /// Builds a list from directories, dropping repeated ones.
    pub fn from_dirs<I, S>(dirs: I, case: PathCase) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self::new(case);
        list.extend_unique(dirs);
        list
    }

    /// Returns the equality rule used for [`contains`](Self::contains).
    #[must_use]
    pub const fn case(&self) -> PathCase {
        self.case
    }

    /// Checks whether `dir` is already present.
    #[must_use]
    pub fn contains(&self, dir: &str) -> bool {
        self.dirs.iter().any(|d| self.case.matches(d, dir))
    }

    /// Adds `dir` as the first entry.
    pub fn prepend(&mut self, dir: impl Into<String>) {
        self.dirs.insert(0, dir.into());
    }

    /// Adds `dir` as the last entry.
    pub fn push(&mut self, dir: impl Into<String>) {
        self.dirs.push(dir.into());
    }

    /// Adds `dir` as the last entry unless it is already present.
    ///
    /// Returns whether the entry was added.
    pub fn push_unique(&mut self, dir: impl Into<String>) -> bool {
        let dir = dir.into();
        if self.contains(&dir) {
            return false;
        }
        self.dirs.push(dir);
        true
    }

    /// Appends every directory not already present, keeping their order.
    pub fn extend_unique<I, S>(&mut self, dirs: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for dir in dirs {
            self.push_unique(dir);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.dirs.iter().map(String::as_str)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.dirs
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    /// Joins the entries with the platform list separator.
    #[must_use]
    pub fn join(&self) -> String {
        let mut sep = [0; 4];
        self.dirs.join(&*LIST_SEPARATOR.encode_utf8(&mut sep))
    }
}

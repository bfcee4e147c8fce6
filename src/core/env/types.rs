// procenv: process environment derivation and executable lookup
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Types shared by the environment store.
//!
//! ```text
//! EnvMode:  Inherit | Cleanup   (how a store is seeded)
//! PathCase: Sensitive | Insensitive
//!           native(): Insensitive on Windows (PATH == Path == path)
//! LIST_SEPARATOR: ';' on Windows, ':' elsewhere
//! ```

use serde::{Deserialize, Serialize};

/// Separator between entries of list-valued variables such as `PATH`.
pub const LIST_SEPARATOR: char = if cfg!(windows) { ';' } else { ':' };

/// How an [`EnvStore`](super::store::EnvStore) is seeded from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvMode {
    /// Copy the full host environment (default).
    #[default]
    Inherit,
    /// Copy only allow-listed variables and use a fixed system PATH.
    Cleanup,
}

impl std::fmt::Display for EnvMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Inherit => write!(f, "inherit"),
            Self::Cleanup => write!(f, "cleanup"),
        }
    }
}

/// Equality rule for directory strings in a search list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathCase {
    /// Byte-exact comparison (POSIX filesystems).
    Sensitive,
    /// ASCII case-insensitive comparison (Windows filesystems).
    Insensitive,
}

impl PathCase {
    /// Returns the rule of the filesystem this binary was built for.
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(windows) {
            Self::Insensitive
        } else {
            Self::Sensitive
        }
    }

    /// Compares two directory strings under this rule.
    ///
    /// Trailing separators are ignored, so `/usr/bin/` matches `/usr/bin`.
    #[must_use]
    pub fn matches(self, a: &str, b: &str) -> bool {
        let (a, b) = (self.trim_dir(a), self.trim_dir(b));
        match self {
            Self::Sensitive => a == b,
            Self::Insensitive => a.eq_ignore_ascii_case(b),
        }
    }

    fn separators(self) -> &'static [char] {
        match self {
            Self::Sensitive => &['/'],
            Self::Insensitive => &['/', '\\'],
        }
    }

    /// Strips trailing separators, keeping roots such as `/` and `C:\`.
    fn trim_dir(self, dir: &str) -> &str {
        let trimmed = dir.trim_end_matches(self.separators());
        if trimmed.is_empty() || trimmed.ends_with(':') {
            let keep = dir.len().min(trimmed.len() + 1);
            &dir[..keep]
        } else {
            trimmed
        }
    }
}

impl Default for PathCase {
    fn default() -> Self {
        Self::native()
    }
}

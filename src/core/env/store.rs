// procenv: process environment derivation and executable lookup
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mutable environment table with a separately tracked search path.
//!
//! # Architecture
//!
//! ```text
//! EnvStore
//!   vars:  HashMap<String, String>   (never holds PATH after construction)
//!   paths: PathList                  (PATH, ordered)
//!   home:  Option<String>            (USERPROFILE on Windows)
//!
//! inherit_from(host)  all vars but PATH, host PATH de-duplicated
//! cleanup_from(host)  ALLOWED_ENV vars only, fixed cleanup PATH
//!
//! set / insert / append / erase --> environ() = ["K=V", ..., "PATH=..."]
//! ```

use std::collections::HashMap;
use std::path::PathBuf;

use tracing::{debug, trace};

use super::allowlist::{allowed_name, cleanup_path};
use super::expand::expand;
use super::path_list::PathList;
use super::types::{LIST_SEPARATOR, PathCase};
use crate::core::resolve::{ExecutableResolver, native_resolver};
use crate::error::{EnvError, LookPathError};

const HOME_KEY: &str = "home";

fn is_path_key(key: &str) -> bool {
    key.eq_ignore_ascii_case("PATH")
}

/// A leading `=` is allowed for Windows' hidden per-drive variables (`=C:`).
fn ensure_key(key: &str) -> Result<(), EnvError> {
    if key.is_empty() {
        Err(EnvError::EmptyKey)
    } else if key.chars().skip(1).any(|c| c == '=') {
        Err(EnvError::EqualsInKey)
    } else {
        Ok(())
    }
}

/// Reads the current process environment, replacing invalid Unicode.
fn host_vars() -> impl Iterator<Item = (String, String)> {
    std::env::vars_os().map(|(k, v)| {
        (
            k.to_string_lossy().into_owned(),
            v.to_string_lossy().into_owned(),
        )
    })
}

/// A derived environment for child processes.
///
/// `PATH` is never stored as a variable: it lives in [`paths`](Self::paths)
/// and is rendered last by [`environ`](Self::environ). The one exception is
/// [`set_env`](Self::set_env), which stores any key verbatim.
///
/// # Thread Safety
/// Mutations take `&mut self`; concurrent readers are fine, concurrent
/// writers need external locking like any other value.
#[derive(Debug, Clone, Default)]
pub struct EnvStore {
    vars: HashMap<String, String>,
    paths: PathList,
    home: Option<String>,
}

impl EnvStore {
    /// Creates an empty store with an empty search path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures the current process environment.
    #[must_use]
    pub fn inherit() -> Self {
        Self::inherit_from(host_vars())
    }

    /// Builds a store from an explicit host environment.
    ///
    /// Every variable except `PATH` (in any casing) is copied; the `PATH`
    /// value becomes the search list with repeated directories dropped
    /// (trailing separators are ignored when comparing).
    pub fn inherit_from<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut store = Self::new();
        let mut host_path: Option<String> = None;

        for (key, value) in vars {
            let key = key.into();
            if key.is_empty() {
                continue;
            }
            if is_path_key(&key) {
                if host_path.is_none() {
                    host_path = Some(value.into());
                }
                continue;
            }
            store.vars.insert(key, value.into());
        }

        store.paths = PathList::parse(
            host_path.as_deref().unwrap_or_default(),
            PathCase::native(),
        );
        store.home = store.windows_home();

        debug!(
            vars = store.vars.len(),
            paths = store.paths.len(),
            "inherited host environment"
        );
        store
    }

    /// Captures a minimal environment from the current process.
    #[must_use]
    pub fn cleanup() -> Self {
        Self::cleanup_from(host_vars())
    }

    /// Builds a cleanup store from an explicit host environment.
    ///
    /// Only allow-listed variables are copied. The search list is the fixed
    /// system path for the platform and ignores the host `PATH`.
    pub fn cleanup_from<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut store = Self::new();

        for (key, value) in vars {
            let key = key.into();
            if let Some(name) = allowed_name(&key) {
                store.vars.insert(name.to_string(), value.into());
            } else {
                trace!(key = %key, "dropped from cleanup environment");
            }
        }

        store.paths = PathList::from_dirs(
            cleanup_path(store.lookup_env("SystemRoot")),
            PathCase::native(),
        );
        store.home = store.windows_home();

        debug!(
            vars = store.vars.len(),
            paths = store.paths.len(),
            "built cleanup environment"
        );
        store
    }

    fn windows_home(&self) -> Option<String> {
        if cfg!(windows) {
            self.vars
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case("USERPROFILE"))
                .map(|(_, v)| v.clone())
        } else {
            None
        }
    }

    /// Appends directories from a host `PATH` value that are not yet listed.
    ///
    /// Lets a cleanup store fall back to the caller's tools after the
    /// system directories.
    pub fn append_inherited_path(&mut self, host_path: &str) {
        let before = self.paths.len();
        let inherited = PathList::parse(host_path, self.paths.case());
        self.paths.extend_unique(inherited.iter());
        debug!(added = self.paths.len() - before, "appended inherited PATH");
    }

    /// Appends the current process `PATH`, see [`append_inherited_path`](Self::append_inherited_path).
    pub fn append_host_path(&mut self) {
        let host_path = std::env::var_os("PATH").unwrap_or_default();
        self.append_inherited_path(&host_path.to_string_lossy());
    }

    /// Sets a variable, replacing any previous value.
    ///
    /// Unlike [`insert_env`](Self::insert_env) and
    /// [`append_env`](Self::append_env), a `PATH` key is stored as an ordinary
    /// variable here and does not touch the search list.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::EmptyKey`] if `key` is empty and
    /// [`EnvError::EqualsInKey`] if it contains `=` past the first character.
    pub fn set_env(&mut self, key: &str, value: impl Into<String>) -> Result<(), EnvError> {
        ensure_key(key)?;
        self.vars.insert(key.to_string(), value.into());
        Ok(())
    }

    /// Prepends `value` to a variable.
    ///
    /// For `PATH` the value becomes the first search directory. For other
    /// keys the result is `value<SEP>old`, or just `value` if unset.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::EmptyKey`] if `key` is empty and
    /// [`EnvError::EqualsInKey`] if it contains `=` past the first character.
    pub fn insert_env(&mut self, key: &str, value: impl Into<String>) -> Result<(), EnvError> {
        ensure_key(key)?;
        let value = value.into();
        if is_path_key(key) {
            self.paths.prepend(value);
            return Ok(());
        }
        match self.vars.get_mut(key) {
            Some(existing) => {
                let mut joined = value;
                joined.push(LIST_SEPARATOR);
                joined.push_str(existing);
                *existing = joined;
            }
            None => {
                self.vars.insert(key.to_string(), value);
            }
        }
        Ok(())
    }

    /// Appends `value` to a variable.
    ///
    /// For `PATH` the value becomes the last search directory. For other keys
    /// the result is `old<SEP>value`, or just `value` if unset.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::EmptyKey`] if `key` is empty and
    /// [`EnvError::EqualsInKey`] if it contains `=` past the first character.
    pub fn append_env(&mut self, key: &str, value: impl Into<String>) -> Result<(), EnvError> {
        ensure_key(key)?;
        let value = value.into();
        if is_path_key(key) {
            self.paths.push(value);
            return Ok(());
        }
        match self.vars.get_mut(key) {
            Some(existing) => {
                existing.push(LIST_SEPARATOR);
                existing.push_str(&value);
            }
            None => {
                self.vars.insert(key.to_string(), value);
            }
        }
        Ok(())
    }

    /// Removes a variable if present. The search list is never affected.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::EmptyKey`] if `key` is empty and
    /// [`EnvError::EqualsInKey`] if it contains `=` past the first character.
    pub fn erase_env(&mut self, key: &str) -> Result<(), EnvError> {
        ensure_key(key)?;
        self.vars.remove(key);
        Ok(())
    }

    /// Returns the value of a variable, or `""` when absent.
    #[must_use]
    pub fn get_env(&self, key: &str) -> &str {
        self.lookup_env(key).unwrap_or_default()
    }

    /// Returns the value of a variable, distinguishing absent from empty.
    #[must_use]
    pub fn lookup_env(&self, key: &str) -> Option<&str> {
        if key.is_empty() {
            return None;
        }
        self.vars.get(key).map(String::as_str).or_else(|| {
            if key == HOME_KEY {
                self.home.as_deref()
            } else {
                None
            }
        })
    }

    /// Substitutes `$VAR` and `${VAR}` references with values from this store.
    #[must_use]
    pub fn expand_env(&self, template: &str) -> String {
        expand(template, |name| self.get_env(name))
    }

    /// Materializes the store as `KEY=VALUE` strings.
    ///
    /// Variable order is unspecified; `PATH` is always the last entry and is
    /// built from the search list. A `PATH` variable stored through
    /// [`set_env`](Self::set_env) is shadowed by it.
    #[must_use]
    pub fn environ(&self) -> Vec<String> {
        let mut block = Vec::with_capacity(self.vars.len() + 2);
        block.extend(
            self.vars
                .iter()
                .filter(|(k, _)| !is_path_key(k))
                .map(|(k, v)| format!("{k}={v}")),
        );
        if let Some(home) = &self.home
            && !self.vars.contains_key(HOME_KEY)
        {
            block.push(format!("{HOME_KEY}={home}"));
        }
        block.push(format!("PATH={}", self.paths.join()));
        block
    }

    /// Exposes the process arguments as `0`..`N` and the process id as `$`.
    pub fn add_bash_compatible(&mut self) {
        self.add_bash_compatible_from(std::env::args(), std::process::id());
    }

    /// Like [`add_bash_compatible`](Self::add_bash_compatible) with explicit values.
    ///
    /// Existing variables with the same names are overwritten.
    pub fn add_bash_compatible_from<I, S>(&mut self, args: I, pid: u32)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for (i, arg) in args.into_iter().enumerate() {
            self.vars.insert(i.to_string(), arg.into());
        }
        self.vars.insert("$".to_string(), pid.to_string());
    }

    /// Returns the search list.
    #[must_use]
    pub const fn paths(&self) -> &PathList {
        &self.paths
    }

    /// Checks whether `dir` is in the search list, using the platform's
    /// directory comparison.
    #[must_use]
    pub fn path_list_exists(&self, dir: &str) -> bool {
        self.paths.contains(dir)
    }

    /// Returns the home override, if any.
    #[must_use]
    pub fn home(&self) -> Option<&str> {
        self.home.as_deref()
    }

    /// Replaces the home override emitted as `home=...`.
    pub fn set_home(&mut self, home: Option<String>) {
        self.home = home;
    }

    /// Iterates over the variables, excluding `PATH` and the home override.
    pub fn vars(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Resolves `name` against this store's search list.
    ///
    /// # Errors
    ///
    /// Returns a [`LookPathError`] if no executable file matches.
    pub fn look_path(&self, name: &str) -> Result<PathBuf, LookPathError> {
        self.look_path_with(&native_resolver(self), name)
    }

    /// Resolves `name` with an explicit resolver.
    ///
    /// # Errors
    ///
    /// Returns a [`LookPathError`] if no executable file matches.
    pub fn look_path_with<R>(&self, resolver: &R, name: &str) -> Result<PathBuf, LookPathError>
    where
        R: ExecutableResolver + ?Sized,
    {
        let result = resolver.look_path(name, &self.paths);
        match &result {
            Ok(path) => trace!(exe = name, path = %path.display(), "resolved executable"),
            Err(e) => debug!(exe = name, error = %e, "executable lookup failed"),
        }
        result
    }
}

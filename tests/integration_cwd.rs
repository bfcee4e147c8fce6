// procenv: process environment derivation and executable lookup
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! An empty search entry resolves against the current directory.
//!
//! Kept alone in its own binary because it changes the working directory.

#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use procenv::core::env::path_list::PathList;
use procenv::core::env::types::PathCase;
use procenv::core::resolve::{ExecutableResolver, PosixResolver};

#[test]
fn empty_entry_means_current_directory() {
    let dir = tempfile::tempdir().unwrap();
    let tool = dir.path().join("local-tool");
    std::fs::write(&tool, b"#!/bin/sh\n").unwrap();
    std::fs::set_permissions(&tool, std::fs::Permissions::from_mode(0o755)).unwrap();

    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();

    let paths = PathList::parse("/procenv/missing::/procenv/also-missing", PathCase::Sensitive);
    let found = PosixResolver.look_path("local-tool", &paths);
    let without_empty = PosixResolver.look_path(
        "local-tool",
        &PathList::from_dirs(["/procenv/missing"], PathCase::Sensitive),
    );

    std::env::set_current_dir(previous).unwrap();

    assert_eq!(found.unwrap(), Path::new("./local-tool"));
    assert!(without_empty.unwrap_err().is_not_found());
}

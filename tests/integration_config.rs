// procenv: process environment derivation and executable lookup
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests the Config module with realistic TOML configurations.

use std::collections::HashMap;

use procenv::config::{Config, ENV_PREFIX};
use procenv::core::env::types::EnvMode;

// =============================================================================
// Loading from TOML strings
// =============================================================================

#[test]
fn config_parse_serializes_back() {
    let toml = r#"
[global]
log_level = 4

[env]
mode = "cleanup"
erase = ["LS_COLORS"]
set = ["LANG=C", "EDITOR=vi -n"]
"#;
    let config = Config::parse(toml).unwrap();
    insta::assert_snapshot!(serde_json::to_string_pretty(&config).unwrap(), @r#"
    {
      "global": {
        "log_level": 4,
        "log_file": null
      },
      "env": {
        "mode": "cleanup",
        "inherit_path": false,
        "bash_compatible": false,
        "erase": [
          "LS_COLORS"
        ],
        "set": [
          "LANG=C",
          "EDITOR=vi -n"
        ],
        "insert": [],
        "append": []
      }
    }
    "#);
}

#[test]
fn config_parse_rejects_unknown_section() {
    assert!(Config::parse("[paths]\nprefix = \"/build\"\n").is_err());
}

// =============================================================================
// Layering
// =============================================================================

#[test]
fn config_files_then_env_vars() {
    let dir = tempfile::tempdir().unwrap();
    let team = dir.path().join("team.toml");
    let user = dir.path().join("user.toml");
    std::fs::write(
        &team,
        "[env]\nmode = \"cleanup\"\ninsert = [\"PATH=/opt/team/bin\"]\n",
    )
    .unwrap();
    std::fs::write(&user, "[global]\nlog_level = 1\n").unwrap();

    let config = Config::builder()
        .add_toml_file(&team)
        .add_toml_file(&user)
        .with_env_prefix(ENV_PREFIX)
        .with_env_source(HashMap::from([(
            "PROCENV_ENV__BASH_COMPATIBLE".to_string(),
            "true".to_string(),
        )]))
        .build()
        .unwrap();

    assert_eq!(config.env.mode, EnvMode::Cleanup);
    assert_eq!(config.env.insert.len(), 1);
    assert_eq!(config.global.log_level.as_u8(), 1);
    assert!(config.env.bash_compatible);
}

#[test]
fn config_invalid_toml_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(&path, "[env\nmode = ").unwrap();
    assert!(Config::from_file(&path).is_err());
}

#[test]
fn config_derive_applies_edits() {
    let config = Config::parse(
        r#"
[env]
mode = "cleanup"
erase = ["HOME"]
set = ["PROCENV_MARKER=1"]
insert = ["PATH=/opt/first"]
append = ["PATH=/opt/last"]
"#,
    )
    .unwrap();
    let store = config.env.derive().unwrap();

    assert!(store.lookup_env("HOME").is_none());
    assert_eq!(store.get_env("PROCENV_MARKER"), "1");
    assert_eq!(store.paths().iter().next(), Some("/opt/first"));
    assert_eq!(store.paths().iter().last(), Some("/opt/last"));
}

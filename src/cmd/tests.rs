// procenv: process environment derivation and executable lookup
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use tokio_util::sync::CancellationToken;

use super::env::{format_environ, resolve};
use super::run::{INTERRUPTED_EXIT_CODE, exit_status, run_program};
use crate::core::env::store::EnvStore;
use crate::core::env::types::LIST_SEPARATOR;
use crate::core::process::ProcessOutput;
use crate::error::ProcenvError;

fn sample_store() -> EnvStore {
    let path = format!("/opt/bin{LIST_SEPARATOR}/usr/bin");
    let mut store = EnvStore::inherit_from([("PATH", path.as_str())]);
    store.set_env("LANG", "C").unwrap();
    store
}

#[test]
fn test_format_environ_json() {
    let json = format_environ(&sample_store(), true).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["LANG"], "C");
    assert_eq!(
        value["PATH"],
        format!("/opt/bin{LIST_SEPARATOR}/usr/bin").as_str()
    );
    assert_eq!(value.as_object().map(serde_json::Map::len), Some(2));
}

#[test]
fn test_format_environ_lines_path_last() {
    let text = format_environ(&sample_store(), false).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "LANG=C");
    assert!(lines[1].starts_with("PATH=/opt/bin"));
}

#[test]
fn test_resolve_missing_is_lookup_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = EnvStore::inherit_from([("PATH", dir.path().to_string_lossy().into_owned())]);
    let err = resolve(&store, "procenv-missing-tool").unwrap_err();
    match err {
        ProcenvError::LookPath(e) => assert!(e.is_not_found()),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_exit_status_mapping() {
    let cases = [
        (ProcessOutput::default(), 0),
        (ProcessOutput::exited(3), 3),
        (ProcessOutput::exited(255), 255),
        (ProcessOutput::exited(-1), 1),
        (ProcessOutput::exited(1 << 16), 1),
        (ProcessOutput::interrupted(), INTERRUPTED_EXIT_CODE),
    ];
    for (output, expected) in cases {
        assert_eq!(exit_status(output), expected, "{output:?}");
    }
}

#[tokio::test]
async fn test_run_program_unresolved_name() {
    let store = EnvStore::new();
    let err = run_program(
        &store,
        CancellationToken::new(),
        "procenv-missing-tool",
        &[],
    )
    .await
    .unwrap_err();
    assert!(matches!(err, ProcenvError::Command(_)));
    insta::assert_snapshot!(err.to_string(), @"command error: executable not found: 'procenv-missing-tool'");
}

#[tokio::test]
#[cfg(unix)]
async fn test_run_program_exit_code() {
    let store = EnvStore::cleanup();
    let output = run_program(
        &store,
        CancellationToken::new(),
        "sh",
        &["-c".to_string(), "exit 7".to_string()],
    )
    .await
    .unwrap();
    assert_eq!(exit_status(output), 7);
}

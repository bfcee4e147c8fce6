// procenv: process environment derivation and executable lookup
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::{Path, PathBuf};
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use super::runner::split_entry;
use crate::core::env::store::EnvStore;
use crate::error::CommandError;

fn store_with_path(dir: &Path) -> EnvStore {
    EnvStore::inherit_from([("PATH", dir.to_string_lossy().into_owned())])
}

#[cfg(unix)]
fn fake_tool(dir: &Path, name: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, b"#!/bin/sh\nexit 0\n").unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[test]
#[cfg(unix)]
fn test_new_command_keeps_invocation_name_as_argv0() {
    let dir = tempfile::tempdir().unwrap();
    let git = fake_tool(dir.path(), "git");
    let env = store_with_path(dir.path());

    let cmd = env.new_command("git", ["status"]);
    assert_eq!(cmd.program(), git);
    assert_eq!(cmd.argv0(), "git");
    assert_eq!(cmd.args(), ["git", "status"]);
    assert!(cmd.cancellation().is_none());
}

#[test]
fn test_new_command_falls_back_to_unresolved_name() {
    let dir = tempfile::tempdir().unwrap();
    let env = store_with_path(dir.path());

    let cmd = env.new_command("procenv-missing-tool", ["--flag"]);
    assert_eq!(cmd.program(), Path::new("procenv-missing-tool"));
    assert_eq!(cmd.args(), ["procenv-missing-tool", "--flag"]);
}

#[test]
fn test_new_command_with_path_is_not_resolved() {
    let env = EnvStore::new();
    let cmd = env.new_command("./scripts/build.sh", Vec::<String>::new());
    assert_eq!(cmd.program(), Path::new("./scripts/build.sh"));
    assert_eq!(cmd.argv0(), "./scripts/build.sh");
}

#[test]
fn test_new_command_context_fails_on_unresolved_name() {
    let dir = tempfile::tempdir().unwrap();
    let env = store_with_path(dir.path());

    let err = env
        .new_command_context(CancellationToken::new(), "procenv-missing-tool", ["x"])
        .unwrap_err();
    match err {
        CommandError::ExecutableNotFound { name, source } => {
            assert_eq!(name, "procenv-missing-tool");
            assert!(source.is_not_found());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
#[cfg(unix)]
fn test_new_command_context_resolves_and_keeps_token() {
    let dir = tempfile::tempdir().unwrap();
    let tool = fake_tool(dir.path(), "tool");
    let env = store_with_path(dir.path());
    let token = CancellationToken::new();

    let cmd = env
        .new_command_context(token.clone(), "tool", ["a", "b c"])
        .unwrap();
    assert_eq!(cmd.program(), tool);
    assert_eq!(cmd.argv0(), "tool");
    assert!(cmd.cancellation().is_some());
    assert_eq!(
        cmd.command_line(),
        format!("{} a \"b c\"", tool.display())
    );
}

#[test]
fn test_environment_block_is_a_snapshot() {
    let mut env = EnvStore::new();
    env.set_env("STAGE", "before").unwrap();
    let cmd = env.new_command("procenv-missing-tool", Vec::<String>::new());
    env.set_env("STAGE", "after").unwrap();

    assert!(cmd.env().contains(&"STAGE=before".to_string()));
    assert!(!cmd.env().contains(&"STAGE=after".to_string()));
    assert!(cmd.env().last().is_some_and(|e| e.starts_with("PATH=")));
}

#[test]
fn test_split_entry() {
    assert_eq!(split_entry("A=1"), Some(("A", "1")));
    assert_eq!(split_entry("A=1=2"), Some(("A", "1=2")));
    assert_eq!(split_entry("EMPTY="), Some(("EMPTY", "")));
    assert_eq!(split_entry(r"=C:=C:\dir"), Some(("=C:", r"C:\dir")));
    assert_eq!(split_entry("NOEQUALS"), None);
}

#[tokio::test]
#[cfg(unix)]
async fn test_run_uses_only_the_block() {
    let mut env = EnvStore::cleanup();
    env.set_env("PROCENV_TEST_VAR", "expected").unwrap();

    let cmd = env.new_command(
        "sh",
        [
            "-c",
            r#"test "$PROCENV_TEST_VAR" = expected && test -z "$CARGO_MANIFEST_DIR""#,
        ],
    );
    let output = cmd.run().await.expect("sh should run");
    assert!(output.success(), "exit code {}", output.exit_code());
}

#[tokio::test]
#[cfg(unix)]
async fn test_run_reports_exit_code() {
    let env = EnvStore::cleanup();
    let output = env
        .new_command("sh", ["-c", "exit 42"])
        .run()
        .await
        .expect("sh should run");
    insta::assert_snapshot!(output.exit_code().to_string(), @"42");
    assert!(!output.is_interrupted());
}

#[tokio::test]
#[cfg(unix)]
async fn test_run_kills_process_on_cancellation() {
    let env = EnvStore::cleanup();
    let token = CancellationToken::new();
    let cmd = env
        .new_command_context(token.clone(), "sleep", ["30"])
        .expect("sleep should resolve");

    let canceller = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        token.cancel();
    });

    let output = tokio::time::timeout(Duration::from_secs(10), cmd.run())
        .await
        .expect("run should return after cancellation")
        .expect("sleep should spawn");
    canceller.await.unwrap();

    assert!(output.is_interrupted());
    assert!(!output.success());
}

#[tokio::test]
async fn test_run_spawn_failure() {
    let env = EnvStore::new();
    let err = env
        .new_command("procenv-missing-tool", Vec::<String>::new())
        .run()
        .await
        .unwrap_err();
    assert!(matches!(err, CommandError::SpawnFailed { .. }));
}

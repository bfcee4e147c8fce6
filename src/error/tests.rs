// procenv: process environment derivation and executable lookup
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::error::Error as _;

use super::{
    CommandError, ConfigError, EnvError, LookPathCause, LookPathError, ProcenvError,
    ProcenvResult,
};

#[test]
fn test_look_path_error_display_quotes_name() {
    let err = LookPathError::not_found("my tool");
    insta::assert_snapshot!(err.to_string(), @r#"exec: "my tool": executable file not found in $PATH"#);
}

#[test]
fn test_look_path_error_permission_display() {
    let err = LookPathError::new("./script.sh", LookPathCause::PermissionDenied);
    insta::assert_snapshot!(err.to_string(), @r#"exec: "./script.sh": permission denied"#);
    assert!(!err.is_not_found());
}

#[test]
fn test_look_path_error_unwraps_to_cause() {
    let io = std::io::Error::from(std::io::ErrorKind::NotFound);
    let err = LookPathError::new("/no/such/file", io);

    let source = err.source().expect("look path error should have a source");
    let cause = source
        .downcast_ref::<LookPathCause>()
        .expect("source should be the cause");
    assert!(matches!(cause, LookPathCause::Io(e) if e.kind() == std::io::ErrorKind::NotFound));
}

#[test]
fn test_command_error_wraps_look_path_error() {
    let err = CommandError::ExecutableNotFound {
        name: "git".to_string(),
        source: LookPathError::not_found("git"),
    };
    insta::assert_snapshot!(err.to_string(), @"executable not found: 'git'");
    assert!(err.source().is_some());
}

#[test]
fn test_env_error_display() {
    insta::assert_snapshot!(EnvError::EmptyKey.to_string(), @"key cannot be empty");
    insta::assert_snapshot!(EnvError::EqualsInKey.to_string(), @"key cannot contain '='");
}

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidAssignment("NOVALUE".to_string());
    insta::assert_snapshot!(err.to_string(), @"invalid assignment 'NOVALUE', expected KEY=VALUE");
}

#[test]
fn test_procenv_error_from_sub_errors() {
    let err: ProcenvError = EnvError::EmptyKey.into();
    assert!(matches!(err, ProcenvError::Env(_)));

    let err: ProcenvError = EnvError::EqualsInKey.into();
    insta::assert_snapshot!(err.to_string(), @"environment error: key cannot contain '='");

    let err: ProcenvError = LookPathError::not_found("x").into();
    insta::assert_snapshot!(err.to_string(), @r#"exec: "x": executable file not found in $PATH"#);

    let err: ProcenvError = CommandError::ExecutableNotFound {
        name: "x".to_string(),
        source: LookPathError::not_found("x"),
    }
    .into();
    assert!(matches!(err, ProcenvError::Command(_)));

    let err: ProcenvError = ConfigError::InvalidAssignment("x".to_string()).into();
    assert!(matches!(err, ProcenvError::Config(_)));
}

#[test]
fn test_procenv_error_size() {
    let size = std::mem::size_of::<ProcenvError>();
    assert!(size <= 24, "ProcenvError is {size} bytes, expected <= 24");
}

#[test]
fn test_procenv_result_size() {
    let size = std::mem::size_of::<ProcenvResult<()>>();
    assert!(size <= 24, "ProcenvResult<()> is {size} bytes, expected <= 24");
}

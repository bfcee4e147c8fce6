// procenv: process environment derivation and executable lookup
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::core::env::types::EnvMode;
use crate::logging::LogLevel;
use clap::Parser;

#[test]
fn test_parse_env_json() {
    let cli = Cli::try_parse_from(["procenv", "env", "--json"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Env { json: true })));
}

#[test]
fn test_parse_which() {
    let cli = Cli::try_parse_from(["procenv", "--cleanup", "which", "git"]).unwrap();
    assert!(cli.global.cleanup);
    match cli.command {
        Some(Command::Which { name }) => assert_eq!(name, "git"),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_parse_run_keeps_hyphen_args() {
    let cli = Cli::try_parse_from(["procenv", "run", "ls", "-la", "--color=never", "/tmp"]).unwrap();
    match cli.command {
        Some(Command::Run { name, args }) => {
            assert_eq!(name, "ls");
            assert_eq!(args, ["-la", "--color=never", "/tmp"]);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_parse_assignments() {
    let cli = Cli::try_parse_from([
        "procenv",
        "-s",
        "LANG=C",
        "--insert",
        "PATH=/opt/bin",
        "--append",
        "FLAGS=-O2 -g",
        "-u",
        "LS_COLORS",
        "env",
    ])
    .unwrap();
    let g = &cli.global;
    insta::assert_snapshot!(
        format!(
            "set={:?}\ninsert={:?}\nappend={:?}\nunset={:?}",
            g.set.iter().map(ToString::to_string).collect::<Vec<_>>(),
            g.insert.iter().map(ToString::to_string).collect::<Vec<_>>(),
            g.append.iter().map(ToString::to_string).collect::<Vec<_>>(),
            g.unset,
        ),
        @r#"
    set=["LANG=C"]
    insert=["PATH=/opt/bin"]
    append=["FLAGS=-O2 -g"]
    unset=["LS_COLORS"]
    "#
    );
}

#[test]
fn test_parse_rejects_bad_assignment() {
    let err = Cli::try_parse_from(["procenv", "--set", "NOEQUALS", "env"]).unwrap_err();
    assert!(
        err.to_string()
            .contains("invalid assignment 'NOEQUALS', expected KEY=VALUE"),
        "{err}"
    );
}

#[test]
fn test_parse_rejects_log_level_out_of_range() {
    assert!(Cli::try_parse_from(["procenv", "-l", "7", "env"]).is_err());
}

#[test]
fn test_apply_to_config() {
    let cli = Cli::try_parse_from([
        "procenv",
        "--cleanup",
        "--inherit-path",
        "--bash-compat",
        "-l",
        "5",
        "--log-file",
        "out.log",
        "-s",
        "B=2",
        "-u",
        "OLD",
        "options",
    ])
    .unwrap();

    let mut config = Config::parse("[env]\nset = [\"A=1\"]\nerase = [\"TMP\"]\n").unwrap();
    cli.global.apply_to(&mut config);

    assert_eq!(config.env.mode, EnvMode::Cleanup);
    assert!(config.env.inherit_path);
    assert!(config.env.bash_compatible);
    assert_eq!(config.env.erase, ["TMP", "OLD"]);
    assert_eq!(
        config
            .env
            .set
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>(),
        ["A=1", "B=2"]
    );
    assert_eq!(config.global.log_level, LogLevel::TRACE);
    assert_eq!(
        config.global.log_file.as_deref(),
        Some(std::path::Path::new("out.log"))
    );
}

#[test]
fn test_apply_to_leaves_config_without_flags() {
    let cli = Cli::try_parse_from(["procenv", "options"]).unwrap();
    let mut config = Config::parse("[env]\nmode = \"cleanup\"\n").unwrap();
    cli.global.apply_to(&mut config);
    assert_eq!(config.env.mode, EnvMode::Cleanup);
    assert_eq!(config.global.log_level, LogLevel::WARN);
}

#[test]
fn test_no_command() {
    let cli = Cli::try_parse_from(["procenv"]).unwrap();
    assert!(cli.command.is_none());
}

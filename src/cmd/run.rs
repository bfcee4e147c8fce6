// procenv: process environment derivation and executable lookup
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The `run` command: spawn a program with the derived environment.
//!
//! ```text
//! resolve (hard fail) --> spawn --> wait
//!                           ^
//!              Ctrl-C --> token.cancel() --> kill
//! ```

use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::core::env::store::EnvStore;
use crate::core::process::ProcessOutput;
use crate::error::{ProcenvResult, Result};

/// Exit status reported when the child was killed on interrupt.
pub const INTERRUPTED_EXIT_CODE: u8 = 130;

/// Runs `name` under `token`, resolving it first.
///
/// # Errors
///
/// Returns a command error if `name` cannot be resolved, spawned or waited on.
pub async fn run_program(
    store: &EnvStore,
    token: CancellationToken,
    name: &str,
    args: &[String],
) -> ProcenvResult<ProcessOutput> {
    let cmd = store.new_command_context(token, name, args.iter().cloned())?;
    Ok(cmd.run().await?)
}

/// Maps a child outcome onto this process's exit status.
///
/// Codes outside `0..=255` (signals, large Windows codes) become 1.
#[must_use]
pub fn exit_status(output: ProcessOutput) -> u8 {
    if output.is_interrupted() {
        INTERRUPTED_EXIT_CODE
    } else {
        u8::try_from(output.exit_code()).unwrap_or(1)
    }
}

/// Runs a program, cancelling it on Ctrl-C, and returns its exit status.
///
/// # Errors
///
/// Returns an error if the program cannot be resolved, spawned or waited on.
pub async fn run_run_command(store: &EnvStore, name: &str, args: &[String]) -> Result<u8> {
    let token = CancellationToken::new();
    let interrupt = tokio::spawn({
        let token = token.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("interrupt received");
                token.cancel();
            }
        }
    });

    let output = run_program(store, token, name, args).await;
    interrupt.abort();

    let output = output?;
    if output.is_interrupted() {
        warn!(exe = name, "process interrupted");
    }
    Ok(exit_status(output))
}

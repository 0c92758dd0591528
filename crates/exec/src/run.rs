// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Spawn a single external command under a timeout.

use std::time::{Duration, Instant};

use tracing::Instrument;

use crate::error::ExecError;
use crate::result::CommandOutput;

/// Run `program` with `args`, killing and returning [`ExecError::Timeout`]
/// if it hasn't exited within `timeout`.
pub async fn run_command(
    program: &str,
    args: &[impl AsRef<str>],
    timeout: Duration,
) -> Result<CommandOutput, ExecError> {
    let cmd_span = tracing::info_span!("exec.run", command = %program, args = ?args.iter().map(AsRef::as_ref).collect::<Vec<_>>());
    run_command_inner(program, args, timeout).instrument(cmd_span).await
}

async fn run_command_inner(
    program: &str,
    args: &[impl AsRef<str>],
    timeout: Duration,
) -> Result<CommandOutput, ExecError> {
    let start = Instant::now();
    let mut process = tokio::process::Command::new(program);
    process.args(args.iter().map(AsRef::as_ref));
    process.stdout(std::process::Stdio::piped());
    process.stderr(std::process::Stdio::piped());
    process.kill_on_drop(true);

    let child = process.spawn().map_err(|source| ExecError::SpawnFailed {
        command: program.to_string(),
        source,
    })?;

    let output = match tokio::time::timeout(timeout, child.wait_with_output()).await {
        Ok(result) => result.map_err(|source| ExecError::SpawnFailed {
            command: program.to_string(),
            source,
        })?,
        Err(_) => {
            return Err(ExecError::Timeout { command: program.to_string(), timeout });
        }
    };

    let duration = start.elapsed();
    let exit_code = output.status.code().unwrap_or(-1);
    tracing::debug!(exit_code, duration_ms = duration.as_millis() as u64, "command finished");

    Ok(CommandOutput {
        exit_code,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        duration,
    })
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

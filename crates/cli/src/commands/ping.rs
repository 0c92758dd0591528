// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `ping` / `ping --all`: exercises the ping fan-out scenario from the CLI.

use clap::Args;

use crate::client::{require_success, BiosClient};
use crate::exit_error::ExitError;
use crate::output::{self, OutputFormat};

#[derive(Debug, Args)]
pub struct PingArgs {
    /// Fan out to every responder on `global.get.system.ping` instead of
    /// targeting a single host.
    #[arg(long)]
    pub all: bool,
}

pub async fn run(client: &BiosClient, args: PingArgs, format: OutputFormat) -> Result<(), ExitError> {
    if args.all {
        let envelopes = client.ping_all().await.map_err(|e| ExitError::new(1, e.to_string()))?;
        for envelope in &envelopes {
            output::print_envelope(format, envelope);
        }
        return Ok(());
    }

    let envelope = client.ping().await.map_err(|e| ExitError::new(1, e.to_string()))?;
    let envelope = require_success(envelope).map_err(|e| ExitError::new(2, e.to_string()))?;
    output::print_envelope(format, &envelope);
    Ok(())
}

#[cfg(test)]
#[path = "ping_tests.rs"]
mod tests;

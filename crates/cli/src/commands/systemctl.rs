// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `systemctl <svc> <action>`: drives a bare systemd unit name, distinct
//! from `app-systemctl` which resolves the unit through an installed app.

use clap::Args;
use flexbios_core::Verb;

use crate::client::{require_success, BiosClient};
use crate::exit_error::ExitError;
use crate::output::{self, OutputFormat};

#[derive(Debug, Args)]
pub struct SystemctlArgs {
    /// Bare unit name (`.service` appended if missing).
    pub unit: String,
    /// status | is-enabled | show | start | stop | restart | enable | disable
    pub action: String,
    /// Required when `action` is `show`.
    #[arg(long)]
    pub property: Option<String>,
}

fn verb_for(action: &str) -> Verb {
    match action {
        "status" | "is-enabled" | "show" => Verb::Get,
        _ => Verb::Post,
    }
}

pub async fn run(client: &BiosClient, args: SystemctlArgs, format: OutputFormat) -> Result<(), ExitError> {
    let result = if args.action == "show" {
        let property = args
            .property
            .ok_or_else(|| ExitError::new(2, "systemctl show requires --property"))?;
        client.systemctl_show(&args.unit, &property).await
    } else {
        client.systemctl(verb_for(&args.action), &args.unit, &args.action).await
    };

    let envelope = result.map_err(|e| ExitError::new(1, e.to_string()))?;
    let envelope = require_success(envelope).map_err(|e| ExitError::new(2, e.to_string()))?;
    output::print_envelope(format, &envelope);
    Ok(())
}

#[cfg(test)]
#[path = "systemctl_tests.rs"]
mod tests;

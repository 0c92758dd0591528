// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `flexbiosctl`: a thin CLI over `BiosClient`, one subcommand per bios
//! subject family.

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};

use flexbios_cli::client::BiosClient;
use flexbios_cli::color;
use flexbios_cli::commands::{apps, git, ping, store, systemctl};
use flexbios_cli::exit_error::ExitError;
use flexbios_cli::output::OutputFormat;
use flexbios_daemon::bus::{MessageBus, NatsBus};

#[derive(Debug, Parser)]
#[command(name = "flexbiosctl", about = "Control-plane client for a FlexBIOS node")]
struct Cli {
    /// Target host's globalUUID.
    #[arg(long, env = "FLEXBIOS_UUID")]
    uuid: String,

    /// NATS server URL to connect to.
    #[arg(long, env = "FLEXBIOS_NATS_URL", default_value = "nats://127.0.0.1:4222")]
    nats_url: String,

    /// Per-request timeout, in milliseconds.
    #[arg(long, default_value_t = 5000)]
    timeout_ms: u64,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    Ping(ping::PingArgs),
    AppsInstalled,
    AppsLibrary,
    AppInstall(apps::AppInstallArgs),
    AppUninstall(apps::AppUninstallArgs),
    AppSystemctl(apps::AppSystemctlArgs),
    Systemctl(systemctl::SystemctlArgs),
    GithubDownload(git::GithubDownloadArgs),
    StoreGetStores,
    StoreAddObject(store::StoreAddObjectArgs),
    StoreDownloadObject(store::StoreDownloadObjectArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let command = Cli::command().styles(color::styles());
    let cli = match Cli::from_arg_matches(&command.get_matches()) {
        Ok(cli) => cli,
        Err(err) => err.exit(),
    };
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err.message);
            ExitCode::from(err.code.clamp(0, 255) as u8)
        }
    }
}

async fn run(cli: Cli) -> Result<(), ExitError> {
    let bus: Arc<dyn MessageBus> = Arc::new(
        NatsBus::connect(&cli.nats_url)
            .await
            .map_err(|e| ExitError::new(1, format!("connecting to {}: {e}", cli.nats_url)))?,
    );
    let client = BiosClient::new(bus, cli.uuid, Duration::from_millis(cli.timeout_ms));
    let format = cli.format;

    match cli.command {
        Command::Ping(args) => ping::run(&client, args, format).await,
        Command::AppsInstalled => apps::installed(&client, format).await,
        Command::AppsLibrary => apps::library(&client, format).await,
        Command::AppInstall(args) => apps::install(&client, args, format).await,
        Command::AppUninstall(args) => apps::uninstall(&client, args, format).await,
        Command::AppSystemctl(args) => apps::systemctl(&client, args, format).await,
        Command::Systemctl(args) => systemctl::run(&client, args, format).await,
        Command::GithubDownload(args) => git::download(&client, args, format).await,
        Command::StoreGetStores => store::get_stores(&client, format).await,
        Command::StoreAddObject(args) => store::add_object(&client, args, format).await,
        Command::StoreDownloadObject(args) => store::download_object(&client, args, format).await,
    }
}

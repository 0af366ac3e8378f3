//! Taxi CLI - query the hotspot backend and render its layers from the terminal.

use std::time::Duration;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "taxi-cli",
    version,
    about = "NYC taxi hotspot map toolkit"
)]
struct Cli {
    /// Backend base URL
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: taxi_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    taxi_cmd::run(
        cli.command,
        &cli.base_url,
        Duration::from_secs(cli.timeout_secs),
    )
    .await
}

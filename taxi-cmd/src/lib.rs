//! Command implementations for the taxi hotspot CLI.
//!
//! Provides subcommands that query the hotspot backend, run the rows through
//! the same renderer as the browser map, and print or export the result.

use std::path::PathBuf;
use std::time::Duration;

use clap::Subcommand;
use taxi_grid::api::HttpCellSource;
use taxi_grid::config::MapConfig;
use taxi_grid::hour::Hour;

pub mod export;
pub mod summary;

#[derive(Subcommand)]
pub enum Command {
    /// Fetch and render the hotspots for one hour
    Hotspots {
        /// Hour of day (0-23)
        #[arg(long, default_value = "0")]
        hour: Hour,

        /// Print the drawables as JSON instead of one line each
        #[arg(long)]
        json: bool,
    },

    /// Fetch and render the anomaly layer
    Anomalies {
        /// Print the drawables as JSON instead of one line each
        #[arg(long)]
        json: bool,
    },

    /// Write a standalone Leaflet HTML page with both layers
    Export {
        /// Hour of day (0-23) for the hotspot layer
        #[arg(long, default_value = "0")]
        hour: Hour,

        /// Output HTML path
        #[arg(short = 'o', long)]
        out: PathBuf,
    },
}

pub async fn run(command: Command, base_url: &str, timeout: Duration) -> anyhow::Result<()> {
    let client = reqwest::Client::builder().timeout(timeout).build()?;
    let source = HttpCellSource::with_client(client, base_url);

    match command {
        Command::Hotspots { hour, json } => {
            print!("{}", summary::hotspot_report(&source, hour, json).await?);
            Ok(())
        }
        Command::Anomalies { json } => {
            print!("{}", summary::anomaly_report(&source, json).await?);
            Ok(())
        }
        Command::Export { hour, out } => {
            export::run_export(&source, hour, &out, &MapConfig::default()).await
        }
    }
}

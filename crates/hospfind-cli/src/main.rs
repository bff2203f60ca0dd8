mod dataset;
mod search;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::dataset::DatasetCommands;

/// Patient location used when none is given (Sarasota, FL).
const DEFAULT_LATITUDE: f64 = 27.3364;
const DEFAULT_LONGITUDE: f64 = -82.5307;

#[derive(Debug, Parser)]
#[command(name = "hospfind-cli")]
#[command(about = "Recommend nearby hospitals from a symptom description")]
struct Cli {
    /// Hospital dataset CSV (overrides HOSPFIND_DATASET_PATH)
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Triage a complaint and list the best matching hospitals
    Search {
        /// Patient latitude in decimal degrees
        #[arg(long, default_value_t = DEFAULT_LATITUDE, allow_negative_numbers = true)]
        lat: f64,

        /// Patient longitude in decimal degrees
        #[arg(long, default_value_t = DEFAULT_LONGITUDE, allow_negative_numbers = true)]
        lon: f64,

        /// Complaint or symptoms, e.g. "patah tulang" or "sesak napas"
        #[arg(long, default_value = "")]
        complaint: String,

        /// Print the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Inspect the hospital dataset
    Dataset {
        #[command(subcommand)]
        command: DatasetCommands,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = hospfind_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let dataset_path = cli.dataset.unwrap_or_else(|| config.dataset_path.clone());
    let params = hospfind_core::SearchParams::from_app_config(&config);

    match cli.command {
        Some(Commands::Search {
            lat,
            lon,
            complaint,
            json,
        }) => {
            let query = hospfind_core::UserQuery::new(lat, lon, complaint);
            search::run_search(&dataset_path, &query, &params, json)?;
        }
        Some(Commands::Dataset {
            command: DatasetCommands::Stats,
        }) => dataset::run_dataset_stats(&dataset_path)?,
        None => println!("hospfind-cli ready; see --help for commands"),
    }

    Ok(())
}

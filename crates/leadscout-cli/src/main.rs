mod export;
mod search;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "leadscout")]
#[command(about = "Find businesses without a web presence via Places text search")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search for places and rank websiteless businesses first
    Search {
        /// Free-text query, e.g. "coffee shops in houston"
        query: String,
        /// Places API key (falls back to GOOGLE_PLACES_API_KEY)
        #[arg(long)]
        api_key: Option<String>,
        /// Write results as CSV; file name derived from the query when omitted
        #[arg(long, value_name = "PATH", num_args = 0..=1)]
        csv: Option<Option<PathBuf>>,
        /// Print the normalized rows as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = leadscout_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Search {
            query,
            api_key,
            csv,
            json,
        }) => {
            search::run_search(
                &config,
                &query,
                api_key.as_deref(),
                csv.map(|path| search::CsvTarget::new(path, &query)),
                json,
            )
            .await
        }
        None => {
            println!("leadscout: run `leadscout search <QUERY>` to find leads");
            Ok(())
        }
    }
}

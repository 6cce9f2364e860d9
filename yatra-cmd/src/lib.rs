//! Command implementations for the Yatra CLI.
//!
//! Provides subcommands for syncing the destination catalog fixture from
//! the hosted backend and validating an existing fixture.

use clap::Subcommand;

pub mod sync;
pub mod validate;

#[derive(Subcommand)]
pub enum Command {
    /// Fetch the destination catalog from the backend and write the CSV fixture
    Sync {
        /// Base URL of the hosted backend (e.g. https://xyz.supabase.co)
        #[arg(long)]
        api_url: String,

        /// API key for the backend REST endpoint
        #[arg(long, env = "YATRA_API_KEY")]
        api_key: String,

        /// Output path for the destinations CSV fixture
        #[arg(short = 'o', long, default_value = "fixtures/destinations.csv")]
        output_csv: String,
    },

    /// Re-parse an existing fixture and report its row count
    Validate {
        /// Path to the destinations CSV fixture
        #[arg(short = 'c', long, default_value = "fixtures/destinations.csv")]
        csv: String,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Sync {
            api_url,
            api_key,
            output_csv,
        } => sync::run_sync(&api_url, &api_key, &output_csv).await,
        Command::Validate { csv } => validate::run_validate(&csv),
    }
}

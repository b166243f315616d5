//! Planner server entry point.

mod cli;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use planner_api::{serve, AppState};

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    // Load .env.local if it exists (PLANNER_DATABASE etc.)
    let _ = dotenvy::from_filename(".env.local");

    let cli = Cli::parse();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level().to_string()));

    fmt().with_env_filter(filter).with_target(false).init();

    let config = cli.api_config();
    let state = match AppState::open(config.clone()) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("Error: failed to open {}: {}", config.database_path.display(), e);
            std::process::exit(1);
        }
    };
    info!(database = %config.database_path.display(), "starting planner");

    if let Err(e) = serve(config, state).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

//! Command-line interface definition using clap.

use std::path::PathBuf;

use clap::Parser;
use planner_api::config::default_database_path;
use planner_api::ApiConfig;

/// Planner - tasks, weekly schedule and reading list backend
#[derive(Parser, Debug)]
#[command(name = "planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Host to bind to
    #[arg(long, env = "PLANNER_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind to
    #[arg(short, long, env = "PLANNER_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Path to the SQLite database file
    #[arg(short, long, env = "PLANNER_DATABASE")]
    pub database: Option<PathBuf>,

    /// Allowed CORS origin (repeatable; default allows any)
    #[arg(long = "cors-origin")]
    pub cors_origins: Vec<String>,
}

impl Cli {
    /// Returns the database path, defaulting to ~/.planner/planner.db.
    pub fn database_path(&self) -> PathBuf {
        self.database.clone().unwrap_or_else(default_database_path)
    }

    /// Returns the log level based on verbosity.
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }

    /// Builds the server configuration.
    pub fn api_config(&self) -> ApiConfig {
        let mut config =
            ApiConfig::new(self.host.clone(), self.port).with_database_path(self.database_path());
        if !self.cors_origins.is_empty() {
            config = config.with_cors_origins(self.cors_origins.clone());
        }
        config
    }
}

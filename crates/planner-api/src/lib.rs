//! REST API for Planner.
//!
//! This crate exposes the planner backend over JSON/HTTP:
//! - Tasks, short tasks and notes (plain CRUD)
//! - The weekly schedule grid (bulk replace, moving hours, completion, progress)
//! - The reading list (CRUD with order override, reorder)
//!
//! # Example
//!
//! ```ignore
//! use planner_api::{serve, ApiConfig, AppState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ApiConfig::default();
//!     let state = AppState::open(config.clone())?;
//!
//!     serve(config, state).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod state;
pub mod types;

pub use config::ApiConfig;
pub use error::{ApiError, Result};
pub use router::{create_router, serve};
pub use state::AppState;

//! Application state shared across handlers.

use std::sync::Arc;

use planner_persistence::{Database, PersistenceError};
use planner_schedule::ScheduleManager;
use planner_shelf::BookShelf;

use crate::config::ApiConfig;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// API configuration.
    pub config: Arc<ApiConfig>,
    /// Record store, used directly by the plain CRUD handlers.
    pub db: Arc<Database>,
    /// Weekly schedule manager.
    pub schedule: ScheduleManager,
    /// Reading list manager.
    pub shelf: BookShelf,
}

impl AppState {
    /// Creates a new AppState over an open database.
    pub fn new(config: ApiConfig, db: Database) -> Self {
        let db = Arc::new(db);
        Self {
            config: Arc::new(config),
            schedule: ScheduleManager::new(Arc::clone(&db)),
            shelf: BookShelf::new(Arc::clone(&db)),
            db,
        }
    }

    /// Opens the database named in `config` and builds the state.
    pub fn open(config: ApiConfig) -> Result<Self, PersistenceError> {
        let db = Database::open(&config.database_path)?;
        Ok(Self::new(config, db))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_open_creates_database_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data/planner.db");

        let state = AppState::open(ApiConfig::default().with_database_path(&path)).unwrap();
        assert!(path.exists());
        assert!(state.schedule.list().unwrap().is_empty());
        assert!(state.shelf.list().unwrap().is_empty());
    }
}

//! Connection ownership and transaction boundaries.

use std::fs;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use rusqlite::{Connection, Transaction};
use tracing::{debug, info};

use crate::error::{PersistenceError, Result};
use crate::migrations::apply_migrations;

/// The record store: one SQLite connection guarded by a mutex.
///
/// Every multi-step mutation goes through [`Database::transaction`], which
/// commits when the closure returns `Ok` and rolls back otherwise.
pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    /// Opens (or creates) a database file and applies pending migrations.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|source| PersistenceError::DirectoryError {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let conn = Connection::open(path)?;
        let db = Self::bootstrap(conn)?;
        info!(path = %path.display(), "opened database");
        Ok(db)
    }

    /// Opens a fresh in-memory database with the full schema.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self::bootstrap(conn)?;
        debug!("opened in-memory database");
        Ok(db)
    }

    fn bootstrap(mut conn: Connection) -> Result<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        conn.busy_timeout(Duration::from_secs(5))?;
        apply_migrations(&mut conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| PersistenceError::LockPoisoned(e.to_string()))
    }

    /// Runs a read or single-statement write against the connection.
    pub fn with_conn<T, E>(
        &self,
        f: impl FnOnce(&Connection) -> std::result::Result<T, E>,
    ) -> std::result::Result<T, E>
    where
        E: From<PersistenceError>,
    {
        let conn = self.lock()?;
        f(&*conn)
    }

    /// Runs `f` inside a transaction.
    ///
    /// The transaction is committed only if `f` returns `Ok`; on any error
    /// (including a failed commit) it is rolled back when dropped.
    pub fn transaction<T, E>(
        &self,
        f: impl FnOnce(&Transaction<'_>) -> std::result::Result<T, E>,
    ) -> std::result::Result<T, E>
    where
        E: From<PersistenceError>,
    {
        let mut conn = self.lock()?;
        let tx = conn.transaction().map_err(PersistenceError::from)?;
        let value = f(&tx)?;
        tx.commit().map_err(PersistenceError::from)?;
        Ok(value)
    }
}

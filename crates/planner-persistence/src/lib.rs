//! Record store for Planner.
//!
//! This crate owns the SQLite schema and exposes one repository per table.
//! Repositories borrow a [`rusqlite::Connection`], so the same code runs
//! against a plain connection or inside a transaction opened through
//! [`Database::transaction`].
//!
//! # Example
//!
//! ```no_run
//! use planner_persistence::{Database, SqliteTaskRepository, TaskRepository};
//! use planner_models::TaskDraft;
//!
//! let db = Database::open("/home/user/.planner/planner.db").unwrap();
//!
//! let task = db
//!     .transaction(|tx| {
//!         SqliteTaskRepository::new(tx).insert_task(&TaskDraft::new("Write report", 4.0, 2))
//!     })
//!     .unwrap();
//!
//! let loaded = db
//!     .with_conn(|conn| SqliteTaskRepository::new(conn).get_task(task.id))
//!     .unwrap();
//! assert_eq!(loaded.map(|t| t.title), Some("Write report".to_string()));
//! ```

pub mod book_store;
pub mod db;
pub mod error;
pub mod migrations;
pub mod note_store;
pub mod schedule_store;
pub mod short_task_store;
pub mod task_store;

pub use book_store::{BookRepository, SqliteBookRepository};
pub use db::Database;
pub use error::{PersistenceError, Result};
pub use note_store::{NoteRepository, SqliteNoteRepository};
pub use schedule_store::{ScheduleRepository, SqliteScheduleRepository};
pub use short_task_store::{ShortTaskRepository, SqliteShortTaskRepository};
pub use task_store::{SqliteTaskRepository, TaskRepository};

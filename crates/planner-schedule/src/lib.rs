//! Weekly schedule grid for Planner.
//!
//! This crate provides the `ScheduleManager`, which keeps the day → task →
//! hours grid consistent:
//! - Bulk replacement of the whole grid in one transaction
//! - Moving hours of a task from one day to another
//! - Completion toggling and per-day progress aggregation
//!
//! The reconciliation rules live in [`ScheduleGrid`], written against the
//! repository traits of `planner-persistence`; the manager opens a
//! transaction per call and runs the grid over it.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use planner_models::{NewScheduleEntry, Weekday};
//! use planner_persistence::Database;
//! use planner_schedule::{MoveHours, ScheduleManager};
//!
//! let db = Arc::new(Database::open("/tmp/planner.db").unwrap());
//! let schedule = ScheduleManager::new(db);
//!
//! schedule
//!     .bulk_replace(&[NewScheduleEntry::new(Weekday::Monday, None, 2.0)])
//!     .unwrap();
//!
//! let request = MoveHours::from_parts(Some(1), Some("Pazartesi"), Some("Salı"), Some(1.0)).unwrap();
//! let _ = schedule.move_hours(&request);
//! ```

pub mod error;
pub mod grid;
pub mod manager;
pub mod moves;

pub use error::{Result, ScheduleError};
pub use grid::{ScheduleGrid, SqliteGrid};
pub use manager::ScheduleManager;
pub use moves::{transfer, MoveHours, MoveOutcome};

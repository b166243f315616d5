//! ScheduleManager - transactional entry point for the weekly grid.

use std::sync::Arc;

use planner_models::{EntryId, NewScheduleEntry, ScheduleEntry, WeeklyProgress};
use planner_persistence::Database;
use tracing::{debug, info};

use crate::error::Result;
use crate::grid::SqliteGrid;
use crate::moves::{MoveHours, MoveOutcome};

/// Weekly schedule manager.
///
/// Each mutating call runs in its own transaction: if any step fails, none
/// of the call's changes are kept.
#[derive(Clone)]
pub struct ScheduleManager {
    db: Arc<Database>,
}

impl ScheduleManager {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Discards the whole grid and inserts `entries` in order.
    pub fn bulk_replace(&self, entries: &[NewScheduleEntry]) -> Result<Vec<ScheduleEntry>> {
        let created = self
            .db
            .transaction(|tx| SqliteGrid::over(tx).replace_all(entries))?;
        info!(count = created.len(), "replaced weekly schedule");
        Ok(created)
    }

    /// Moves hours of a task between two days.
    pub fn move_hours(&self, request: &MoveHours) -> Result<MoveOutcome> {
        let outcome = self
            .db
            .transaction(|tx| SqliteGrid::over(tx).move_hours(request))?;
        info!(
            task_id = %request.task,
            from = %request.from,
            to = %request.to,
            hours = request.hours,
            source_removed = outcome.source.is_none(),
            "moved scheduled hours"
        );
        Ok(outcome)
    }

    /// Sets the completed flag of an entry. Idempotent.
    pub fn set_completion(&self, id: EntryId, completed: bool) -> Result<ScheduleEntry> {
        let entry = self
            .db
            .transaction(|tx| SqliteGrid::over(tx).set_completion(id, completed))?;
        debug!(entry_id = %id, completed, "updated completion");
        Ok(entry)
    }

    pub fn progress(&self) -> Result<WeeklyProgress> {
        self.db.with_conn(|conn| SqliteGrid::over(conn).progress())
    }

    pub fn list(&self) -> Result<Vec<ScheduleEntry>> {
        self.db.with_conn(|conn| SqliteGrid::over(conn).list())
    }

    pub fn get(&self, id: EntryId) -> Result<ScheduleEntry> {
        self.db.with_conn(|conn| SqliteGrid::over(conn).get(id))
    }

    pub fn create(&self, entry: &NewScheduleEntry) -> Result<ScheduleEntry> {
        let created = self
            .db
            .transaction(|tx| SqliteGrid::over(tx).create(entry))?;
        debug!(entry_id = %created.id, day = %created.day, "created schedule entry");
        Ok(created)
    }

    pub fn update(&self, id: EntryId, entry: &NewScheduleEntry) -> Result<ScheduleEntry> {
        self.db
            .transaction(|tx| SqliteGrid::over(tx).update(id, entry))
    }

    pub fn delete(&self, id: EntryId) -> Result<()> {
        self.db.transaction(|tx| SqliteGrid::over(tx).delete(id))?;
        debug!(entry_id = %id, "deleted schedule entry");
        Ok(())
    }
}

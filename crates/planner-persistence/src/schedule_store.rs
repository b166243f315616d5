//! Weekly schedule table access.
//!
//! Days are stored as their label text; rows with an unknown label are
//! reported as conversion errors rather than silently skipped.

use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};

use planner_models::{EntryId, NewScheduleEntry, ScheduleEntry, TaskId, Weekday};

use crate::error::Result;

const ENTRY_SELECT_SQL: &str = "SELECT id, day, task_id, hours, completed FROM weekly_schedules";

/// Repository interface for weekly schedule entries.
pub trait ScheduleRepository {
    /// Lists all entries ordered by id.
    fn list_entries(&self) -> Result<Vec<ScheduleEntry>>;
    fn get_entry(&self, id: EntryId) -> Result<Option<ScheduleEntry>>;
    /// Finds the entry for a (day, task) pair.
    fn find_entry(&self, day: Weekday, task: TaskId) -> Result<Option<ScheduleEntry>>;
    fn insert_entry(&self, entry: &NewScheduleEntry) -> Result<ScheduleEntry>;
    fn update_entry(&self, entry: &ScheduleEntry) -> Result<bool>;
    fn delete_entry(&self, id: EntryId) -> Result<bool>;
    /// Removes every entry and returns how many were removed.
    fn clear_entries(&self) -> Result<usize>;
}

/// SQLite-backed schedule repository.
pub struct SqliteScheduleRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteScheduleRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ScheduleRepository for SqliteScheduleRepository<'_> {
    fn list_entries(&self) -> Result<Vec<ScheduleEntry>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ENTRY_SELECT_SQL} ORDER BY id ASC"))?;
        let entries = stmt
            .query_map([], entry_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(entries)
    }

    fn get_entry(&self, id: EntryId) -> Result<Option<ScheduleEntry>> {
        let entry = self
            .conn
            .query_row(
                &format!("{ENTRY_SELECT_SQL} WHERE id = ?1"),
                params![id.get()],
                entry_from_row,
            )
            .optional()?;
        Ok(entry)
    }

    fn find_entry(&self, day: Weekday, task: TaskId) -> Result<Option<ScheduleEntry>> {
        let entry = self
            .conn
            .query_row(
                &format!("{ENTRY_SELECT_SQL} WHERE day = ?1 AND task_id = ?2"),
                params![day.label(), task.get()],
                entry_from_row,
            )
            .optional()?;
        Ok(entry)
    }

    fn insert_entry(&self, entry: &NewScheduleEntry) -> Result<ScheduleEntry> {
        self.conn.execute(
            "INSERT INTO weekly_schedules (day, task_id, hours, completed) VALUES (?1, ?2, ?3, ?4)",
            params![
                entry.day.label(),
                entry.task.map(TaskId::get),
                entry.hours,
                entry.completed,
            ],
        )?;

        Ok(ScheduleEntry {
            id: EntryId::new(self.conn.last_insert_rowid()),
            day: entry.day,
            task: entry.task,
            hours: entry.hours,
            completed: entry.completed,
        })
    }

    fn update_entry(&self, entry: &ScheduleEntry) -> Result<bool> {
        let changed = self.conn.execute(
            "UPDATE weekly_schedules SET day = ?1, task_id = ?2, hours = ?3, completed = ?4
             WHERE id = ?5",
            params![
                entry.day.label(),
                entry.task.map(TaskId::get),
                entry.hours,
                entry.completed,
                entry.id.get(),
            ],
        )?;
        Ok(changed > 0)
    }

    fn delete_entry(&self, id: EntryId) -> Result<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM weekly_schedules WHERE id = ?1", params![id.get()])?;
        Ok(changed > 0)
    }

    fn clear_entries(&self) -> Result<usize> {
        let removed = self.conn.execute("DELETE FROM weekly_schedules", [])?;
        Ok(removed)
    }
}

fn entry_from_row(row: &Row<'_>) -> rusqlite::Result<ScheduleEntry> {
    let label: String = row.get(1)?;
    let day = label
        .parse::<Weekday>()
        .map_err(|err| rusqlite::Error::FromSqlConversionFailure(1, Type::Text, Box::new(err)))?;

    Ok(ScheduleEntry {
        id: EntryId::new(row.get(0)?),
        day,
        task: row.get::<_, Option<i64>>(2)?.map(TaskId::new),
        hours: row.get(3)?,
        completed: row.get(4)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;
    use crate::task_store::{SqliteTaskRepository, TaskRepository};
    use crate::PersistenceError;
    use planner_models::TaskDraft;

    #[test]
    fn test_insert_and_find_entry() {
        let db = Database::open_in_memory().unwrap();
        db.with_conn(|conn| {
            let task = SqliteTaskRepository::new(conn).insert_task(&TaskDraft::new("Gym", 3.0, 3))?;
            let repo = SqliteScheduleRepository::new(conn);

            let created =
                repo.insert_entry(&NewScheduleEntry::new(Weekday::Tuesday, Some(task.id), 1.5))?;
            let found = repo.find_entry(Weekday::Tuesday, task.id)?.unwrap();
            assert_eq!(found, created);
            assert!(repo.find_entry(Weekday::Monday, task.id)?.is_none());
            Ok::<_, PersistenceError>(())
        })
        .unwrap();
    }

    #[test]
    fn test_duplicate_day_task_pair_rejected_by_index() {
        let db = Database::open_in_memory().unwrap();
        let result = db.with_conn(|conn| {
            let task = SqliteTaskRepository::new(conn).insert_task(&TaskDraft::new("Gym", 3.0, 3))?;
            let repo = SqliteScheduleRepository::new(conn);
            repo.insert_entry(&NewScheduleEntry::new(Weekday::Friday, Some(task.id), 1.0))?;
            repo.insert_entry(&NewScheduleEntry::new(Weekday::Friday, Some(task.id), 2.0))
        });
        assert!(matches!(result, Err(PersistenceError::Sqlite(_))));
    }

    #[test]
    fn test_null_task_entries_may_repeat() {
        let db = Database::open_in_memory().unwrap();
        db.with_conn(|conn| {
            let repo = SqliteScheduleRepository::new(conn);
            repo.insert_entry(&NewScheduleEntry::new(Weekday::Friday, None, 1.0))?;
            repo.insert_entry(&NewScheduleEntry::new(Weekday::Friday, None, 2.0))?;
            assert_eq!(repo.list_entries()?.len(), 2);
            Ok::<_, PersistenceError>(())
        })
        .unwrap();
    }

    #[test]
    fn test_deleting_task_cascades_to_entries() {
        let db = Database::open_in_memory().unwrap();
        db.with_conn(|conn| {
            let tasks = SqliteTaskRepository::new(conn);
            let task = tasks.insert_task(&TaskDraft::new("Gym", 3.0, 3))?;
            let repo = SqliteScheduleRepository::new(conn);
            repo.insert_entry(&NewScheduleEntry::new(Weekday::Monday, Some(task.id), 1.0))?;

            tasks.delete_task(task.id)?;
            assert!(repo.list_entries()?.is_empty());
            Ok::<_, PersistenceError>(())
        })
        .unwrap();
    }

    #[test]
    fn test_clear_entries_counts_rows() {
        let db = Database::open_in_memory().unwrap();
        db.with_conn(|conn| {
            let repo = SqliteScheduleRepository::new(conn);
            repo.insert_entry(&NewScheduleEntry::new(Weekday::Monday, None, 1.0))?;
            repo.insert_entry(&NewScheduleEntry::new(Weekday::Sunday, None, 1.0))?;
            assert_eq!(repo.clear_entries()?, 2);
            assert!(repo.list_entries()?.is_empty());
            Ok::<_, PersistenceError>(())
        })
        .unwrap();
    }

    #[test]
    fn test_unknown_stored_day_is_an_error() {
        let db = Database::open_in_memory().unwrap();
        let result = db.with_conn(|conn| {
            conn.execute(
                "INSERT INTO weekly_schedules (day, task_id, hours, completed) VALUES ('Someday', NULL, 1, 0)",
                [],
            )?;
            SqliteScheduleRepository::new(conn).list_entries()
        });
        assert!(result.is_err());
    }
}

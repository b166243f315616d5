//! Short task table access.

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Row};

use planner_models::{ShortTask, ShortTaskDraft, ShortTaskId};

use crate::error::Result;

/// Repository interface for short tasks.
pub trait ShortTaskRepository {
    fn insert_short_task(&self, draft: &ShortTaskDraft) -> Result<ShortTask>;
    fn get_short_task(&self, id: ShortTaskId) -> Result<Option<ShortTask>>;
    /// Lists every short task, soft-deleted ones included.
    fn list_short_tasks(&self) -> Result<Vec<ShortTask>>;
    fn update_short_task(&self, short_task: &ShortTask) -> Result<bool>;
    /// Sets the soft-delete flag; returns false if the id is unknown.
    fn soft_delete_short_task(&self, id: ShortTaskId) -> Result<bool>;
    fn delete_short_task(&self, id: ShortTaskId) -> Result<bool>;
}

/// SQLite-backed short task repository.
pub struct SqliteShortTaskRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteShortTaskRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ShortTaskRepository for SqliteShortTaskRepository<'_> {
    fn insert_short_task(&self, draft: &ShortTaskDraft) -> Result<ShortTask> {
        let created_at = Utc::now();
        self.conn.execute(
            "INSERT INTO short_tasks (title, created_at, is_short_task, is_deleted)
             VALUES (?1, ?2, ?3, ?4)",
            params![draft.title, created_at, draft.is_short_task, draft.is_deleted],
        )?;

        Ok(ShortTask {
            id: ShortTaskId::new(self.conn.last_insert_rowid()),
            title: draft.title.clone(),
            created_at,
            is_short_task: draft.is_short_task,
            is_deleted: draft.is_deleted,
        })
    }

    fn get_short_task(&self, id: ShortTaskId) -> Result<Option<ShortTask>> {
        let short_task = self
            .conn
            .query_row(
                "SELECT id, title, created_at, is_short_task, is_deleted
                 FROM short_tasks WHERE id = ?1",
                params![id.get()],
                short_task_from_row,
            )
            .optional()?;
        Ok(short_task)
    }

    fn list_short_tasks(&self) -> Result<Vec<ShortTask>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, created_at, is_short_task, is_deleted
             FROM short_tasks ORDER BY id ASC",
        )?;
        let items = stmt
            .query_map([], short_task_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(items)
    }

    fn update_short_task(&self, short_task: &ShortTask) -> Result<bool> {
        let changed = self.conn.execute(
            "UPDATE short_tasks SET title = ?1, is_short_task = ?2, is_deleted = ?3 WHERE id = ?4",
            params![
                short_task.title,
                short_task.is_short_task,
                short_task.is_deleted,
                short_task.id.get(),
            ],
        )?;
        Ok(changed > 0)
    }

    fn soft_delete_short_task(&self, id: ShortTaskId) -> Result<bool> {
        let changed = self.conn.execute(
            "UPDATE short_tasks SET is_deleted = 1 WHERE id = ?1",
            params![id.get()],
        )?;
        Ok(changed > 0)
    }

    fn delete_short_task(&self, id: ShortTaskId) -> Result<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM short_tasks WHERE id = ?1", params![id.get()])?;
        Ok(changed > 0)
    }
}

fn short_task_from_row(row: &Row<'_>) -> rusqlite::Result<ShortTask> {
    Ok(ShortTask {
        id: ShortTaskId::new(row.get(0)?),
        title: row.get(1)?,
        created_at: row.get(2)?,
        is_short_task: row.get(3)?,
        is_deleted: row.get(4)?,
    })
}

//! Task table access.

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Row};

use planner_models::{Task, TaskDraft, TaskId};

use crate::error::Result;

const TASK_SELECT_SQL: &str = "SELECT id, title, duration, days, is_short_task, is_deleted, created_at
FROM tasks";

/// Repository interface for tasks.
pub trait TaskRepository {
    fn insert_task(&self, draft: &TaskDraft) -> Result<Task>;
    /// Looks a task up by id, soft-deleted or not.
    fn get_task(&self, id: TaskId) -> Result<Option<Task>>;
    fn list_tasks(&self, include_deleted: bool) -> Result<Vec<Task>>;
    fn update_task(&self, task: &Task) -> Result<bool>;
    fn delete_task(&self, id: TaskId) -> Result<bool>;
}

/// SQLite-backed task repository.
pub struct SqliteTaskRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTaskRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TaskRepository for SqliteTaskRepository<'_> {
    fn insert_task(&self, draft: &TaskDraft) -> Result<Task> {
        let created_at = Utc::now();
        self.conn.execute(
            "INSERT INTO tasks (title, duration, days, is_short_task, is_deleted, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                draft.title,
                draft.duration,
                draft.days,
                draft.is_short_task,
                draft.is_deleted,
                created_at,
            ],
        )?;

        Ok(Task {
            id: TaskId::new(self.conn.last_insert_rowid()),
            title: draft.title.clone(),
            duration: draft.duration,
            days: draft.days,
            is_short_task: draft.is_short_task,
            is_deleted: draft.is_deleted,
            created_at,
        })
    }

    fn get_task(&self, id: TaskId) -> Result<Option<Task>> {
        let task = self
            .conn
            .query_row(
                &format!("{TASK_SELECT_SQL} WHERE id = ?1"),
                params![id.get()],
                task_from_row,
            )
            .optional()?;
        Ok(task)
    }

    fn list_tasks(&self, include_deleted: bool) -> Result<Vec<Task>> {
        let sql = if include_deleted {
            format!("{TASK_SELECT_SQL} ORDER BY id ASC")
        } else {
            format!("{TASK_SELECT_SQL} WHERE is_deleted = 0 ORDER BY id ASC")
        };
        let mut stmt = self.conn.prepare(&sql)?;
        let tasks = stmt
            .query_map([], task_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(tasks)
    }

    fn update_task(&self, task: &Task) -> Result<bool> {
        let changed = self.conn.execute(
            "UPDATE tasks
             SET title = ?1, duration = ?2, days = ?3, is_short_task = ?4, is_deleted = ?5
             WHERE id = ?6",
            params![
                task.title,
                task.duration,
                task.days,
                task.is_short_task,
                task.is_deleted,
                task.id.get(),
            ],
        )?;
        Ok(changed > 0)
    }

    fn delete_task(&self, id: TaskId) -> Result<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM tasks WHERE id = ?1", params![id.get()])?;
        Ok(changed > 0)
    }
}

fn task_from_row(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: TaskId::new(row.get(0)?),
        title: row.get(1)?,
        duration: row.get(2)?,
        days: row.get(3)?,
        is_short_task: row.get(4)?,
        is_deleted: row.get(5)?,
        created_at: row.get(6)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    #[test]
    fn test_insert_and_get_task() {
        let db = Database::open_in_memory().unwrap();
        db.with_conn(|conn| {
            let repo = SqliteTaskRepository::new(conn);
            let created = repo.insert_task(&TaskDraft::new("Study", 2.5, 3))?;
            let loaded = repo.get_task(created.id)?.unwrap();

            assert_eq!(loaded.title, "Study");
            assert_eq!(loaded.duration, 2.5);
            assert_eq!(loaded.days, 3);
            assert!(!loaded.is_deleted);
            assert_eq!(loaded.created_at, created.created_at);
            Ok::<_, crate::PersistenceError>(())
        })
        .unwrap();
    }

    #[test]
    fn test_list_hides_soft_deleted_unless_requested() {
        let db = Database::open_in_memory().unwrap();
        db.with_conn(|conn| {
            let repo = SqliteTaskRepository::new(conn);
            repo.insert_task(&TaskDraft::new("Visible", 1.0, 1))?;
            let mut hidden = repo.insert_task(&TaskDraft::new("Hidden", 1.0, 1))?;
            hidden.is_deleted = true;
            assert!(repo.update_task(&hidden)?);

            let active = repo.list_tasks(false)?;
            assert_eq!(active.len(), 1);
            assert_eq!(active[0].title, "Visible");
            assert_eq!(repo.list_tasks(true)?.len(), 2);
            assert!(repo.get_task(hidden.id)?.is_some());
            Ok::<_, crate::PersistenceError>(())
        })
        .unwrap();
    }

    #[test]
    fn test_delete_missing_task_reports_false() {
        let db = Database::open_in_memory().unwrap();
        let removed = db
            .with_conn(|conn| SqliteTaskRepository::new(conn).delete_task(TaskId::new(404)))
            .unwrap();
        assert!(!removed);
    }
}

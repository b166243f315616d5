//! Note table access.

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension, Row};

use planner_models::{Note, NoteDraft, NoteId};

use crate::error::Result;

/// Repository interface for notes.
pub trait NoteRepository {
    fn insert_note(&self, draft: &NoteDraft) -> Result<Note>;
    fn get_note(&self, id: NoteId) -> Result<Option<Note>>;
    fn list_notes(&self) -> Result<Vec<Note>>;
    fn update_note(&self, note: &Note) -> Result<bool>;
    fn delete_note(&self, id: NoteId) -> Result<bool>;
}

/// SQLite-backed note repository.
pub struct SqliteNoteRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteNoteRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl NoteRepository for SqliteNoteRepository<'_> {
    fn insert_note(&self, draft: &NoteDraft) -> Result<Note> {
        let created_at = Utc::now();
        self.conn.execute(
            "INSERT INTO notes (content, created_at) VALUES (?1, ?2)",
            params![draft.content, created_at],
        )?;
        Ok(Note {
            id: NoteId::new(self.conn.last_insert_rowid()),
            content: draft.content.clone(),
            created_at,
        })
    }

    fn get_note(&self, id: NoteId) -> Result<Option<Note>> {
        let note = self
            .conn
            .query_row(
                "SELECT id, content, created_at FROM notes WHERE id = ?1",
                params![id.get()],
                note_from_row,
            )
            .optional()?;
        Ok(note)
    }

    fn list_notes(&self) -> Result<Vec<Note>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, content, created_at FROM notes ORDER BY id ASC")?;
        let notes = stmt
            .query_map([], note_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(notes)
    }

    fn update_note(&self, note: &Note) -> Result<bool> {
        let changed = self.conn.execute(
            "UPDATE notes SET content = ?1 WHERE id = ?2",
            params![note.content, note.id.get()],
        )?;
        Ok(changed > 0)
    }

    fn delete_note(&self, id: NoteId) -> Result<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM notes WHERE id = ?1", params![id.get()])?;
        Ok(changed > 0)
    }
}

fn note_from_row(row: &Row<'_>) -> rusqlite::Result<Note> {
    Ok(Note {
        id: NoteId::new(row.get(0)?),
        content: row.get(1)?,
        created_at: row.get(2)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;
    use crate::PersistenceError;

    #[test]
    fn test_note_crud() {
        let db = Database::open_in_memory().unwrap();
        db.with_conn(|conn| {
            let repo = SqliteNoteRepository::new(conn);
            let mut note = repo.insert_note(&NoteDraft::new("first"))?;

            note.content = "edited".to_string();
            assert!(repo.update_note(&note)?);
            assert_eq!(repo.get_note(note.id)?.unwrap().content, "edited");

            assert!(repo.delete_note(note.id)?);
            assert!(repo.get_note(note.id)?.is_none());
            assert!(repo.list_notes()?.is_empty());
            Ok::<_, PersistenceError>(())
        })
        .unwrap();
    }
}

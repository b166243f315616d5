//! Note handlers.

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use tracing::debug;

use planner_models::{Note, NoteDraft, NoteId, NotePatch};
use planner_persistence::{NoteRepository, SqliteNoteRepository};

use crate::error::{ApiError, Result};
use crate::extract::{JsonBody, PathId};
use crate::state::AppState;

/// GET /notes/ - List notes.
pub async fn list_notes(State(state): State<AppState>) -> Result<Json<Vec<Note>>> {
    let notes = state
        .db
        .with_conn(|conn| SqliteNoteRepository::new(conn).list_notes())?;
    Ok(Json(notes))
}

/// POST /notes/ - Create a note.
pub async fn create_note(
    State(state): State<AppState>,
    JsonBody(draft): JsonBody<NoteDraft>,
) -> Result<(StatusCode, Json<Note>)> {
    draft.validate()?;
    let note = state
        .db
        .transaction(|tx| SqliteNoteRepository::new(tx).insert_note(&draft))?;
    debug!(note_id = %note.id, summary = %note.summary(), "created note");
    Ok((StatusCode::CREATED, Json(note)))
}

/// GET /notes/:id/ - Get a note.
pub async fn get_note(State(state): State<AppState>, PathId(id): PathId<i64>) -> Result<Json<Note>> {
    let note = state
        .db
        .with_conn(|conn| find(&SqliteNoteRepository::new(conn), NoteId::new(id)))?;
    Ok(Json(note))
}

/// PUT /notes/:id/ - Replace a note's content.
pub async fn update_note(
    State(state): State<AppState>,
    PathId(id): PathId<i64>,
    JsonBody(draft): JsonBody<NoteDraft>,
) -> Result<Json<Note>> {
    draft.validate()?;
    let patch = NotePatch {
        content: Some(draft.content),
    };
    save_patch(&state, NoteId::new(id), patch).map(Json)
}

/// PATCH /notes/:id/ - Update some fields of a note.
pub async fn patch_note(
    State(state): State<AppState>,
    PathId(id): PathId<i64>,
    JsonBody(patch): JsonBody<NotePatch>,
) -> Result<Json<Note>> {
    patch.validate()?;
    save_patch(&state, NoteId::new(id), patch).map(Json)
}

/// DELETE /notes/:id/ - Delete a note.
pub async fn delete_note(State(state): State<AppState>, PathId(id): PathId<i64>) -> Result<StatusCode> {
    let id = NoteId::new(id);
    let removed = state
        .db
        .transaction(|tx| SqliteNoteRepository::new(tx).delete_note(id))?;
    if !removed {
        return Err(not_found(id));
    }
    Ok(StatusCode::NO_CONTENT)
}

fn save_patch(state: &AppState, id: NoteId, patch: NotePatch) -> Result<Note> {
    state.db.transaction(|tx| {
        let notes = SqliteNoteRepository::new(tx);
        let mut note = find(&notes, id)?;
        patch.apply(&mut note);
        notes.update_note(&note)?;
        Ok(note)
    })
}

fn find(notes: &impl NoteRepository, id: NoteId) -> Result<Note> {
    notes.get_note(id)?.ok_or_else(|| not_found(id))
}

fn not_found(id: NoteId) -> ApiError {
    ApiError::NotFound(format!("note not found: {}", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use planner_persistence::Database;

    fn make_test_state() -> AppState {
        AppState::new(ApiConfig::default(), Database::open_in_memory().unwrap())
    }

    #[tokio::test]
    async fn test_note_lifecycle() {
        let state = make_test_state();
        let (status, note) = create_note(State(state.clone()), JsonBody(NoteDraft::new("remember")))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::CREATED);

        let updated = update_note(
            State(state.clone()),
            PathId(note.id.get()),
            JsonBody(NoteDraft::new("remember this")),
        )
        .await
        .unwrap();
        assert_eq!(updated.content, "remember this");

        delete_note(State(state.clone()), PathId(note.id.get())).await.unwrap();
        let result = get_note(State(state), PathId(note.id.get())).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_blank_note_rejected() {
        let state = make_test_state();
        let result = create_note(State(state), JsonBody(NoteDraft::new(""))).await;
        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }
}

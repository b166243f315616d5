//! Task handlers.
//!
//! Soft-deleted tasks are hidden from every endpoint here; they remain
//! visible to the weekly grid through their id.

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use tracing::info;

use planner_models::{Task, TaskDraft, TaskId, TaskPatch};
use planner_persistence::{SqliteTaskRepository, TaskRepository};

use crate::error::{ApiError, Result};
use crate::extract::{JsonBody, PathId};
use crate::state::AppState;

/// GET /tasks/ - List tasks that are not soft-deleted.
pub async fn list_tasks(State(state): State<AppState>) -> Result<Json<Vec<Task>>> {
    let tasks = state
        .db
        .with_conn(|conn| SqliteTaskRepository::new(conn).list_tasks(false))?;
    Ok(Json(tasks))
}

/// POST /tasks/ - Create a task.
pub async fn create_task(
    State(state): State<AppState>,
    JsonBody(draft): JsonBody<TaskDraft>,
) -> Result<(StatusCode, Json<Task>)> {
    draft.validate()?;
    let task = state
        .db
        .transaction(|tx| SqliteTaskRepository::new(tx).insert_task(&draft))?;
    info!(task_id = %task.id, title = %task.title, "created task");
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /tasks/:id/ - Get an active task.
pub async fn get_task(State(state): State<AppState>, PathId(id): PathId<i64>) -> Result<Json<Task>> {
    let task = state
        .db
        .with_conn(|conn| find_active(&SqliteTaskRepository::new(conn), TaskId::new(id)))?;
    Ok(Json(task))
}

/// PUT /tasks/:id/ - Replace a task.
pub async fn update_task(
    State(state): State<AppState>,
    PathId(id): PathId<i64>,
    JsonBody(draft): JsonBody<TaskDraft>,
) -> Result<Json<Task>> {
    draft.validate()?;
    let task = state.db.transaction(|tx| {
        let tasks = SqliteTaskRepository::new(tx);
        let mut task = find_active(&tasks, TaskId::new(id))?;
        task.replace_with(draft);
        tasks.update_task(&task)?;
        Ok::<_, ApiError>(task)
    })?;
    Ok(Json(task))
}

/// PATCH /tasks/:id/ - Update some fields of a task.
pub async fn patch_task(
    State(state): State<AppState>,
    PathId(id): PathId<i64>,
    JsonBody(patch): JsonBody<TaskPatch>,
) -> Result<Json<Task>> {
    patch.validate()?;
    let task = state.db.transaction(|tx| {
        let tasks = SqliteTaskRepository::new(tx);
        let mut task = find_active(&tasks, TaskId::new(id))?;
        patch.apply(&mut task);
        tasks.update_task(&task)?;
        Ok::<_, ApiError>(task)
    })?;
    Ok(Json(task))
}

/// DELETE /tasks/:id/ - Permanently delete a task and its schedule entries.
pub async fn delete_task(State(state): State<AppState>, PathId(id): PathId<i64>) -> Result<StatusCode> {
    let id = TaskId::new(id);
    state.db.transaction(|tx| {
        let tasks = SqliteTaskRepository::new(tx);
        find_active(&tasks, id)?;
        tasks.delete_task(id)?;
        Ok::<_, ApiError>(())
    })?;
    info!(task_id = %id, "deleted task");
    Ok(StatusCode::NO_CONTENT)
}

fn find_active(tasks: &impl TaskRepository, id: TaskId) -> Result<Task> {
    tasks
        .get_task(id)?
        .filter(|task| !task.is_deleted)
        .ok_or_else(|| ApiError::NotFound(format!("task not found: {}", id)))
}

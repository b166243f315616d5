//! Short task handlers.

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use tracing::info;

use planner_models::{ShortTask, ShortTaskDraft, ShortTaskId, ShortTaskPatch};
use planner_persistence::{ShortTaskRepository, SqliteShortTaskRepository};

use crate::error::{ApiError, Result};
use crate::extract::{JsonBody, PathId};
use crate::state::AppState;
use crate::types::StatusResponse;

/// GET /short-tasks/ - List short tasks, soft-deleted ones included.
pub async fn list_short_tasks(State(state): State<AppState>) -> Result<Json<Vec<ShortTask>>> {
    let items = state
        .db
        .with_conn(|conn| SqliteShortTaskRepository::new(conn).list_short_tasks())?;
    Ok(Json(items))
}

/// POST /short-tasks/ - Create a short task.
pub async fn create_short_task(
    State(state): State<AppState>,
    JsonBody(draft): JsonBody<ShortTaskDraft>,
) -> Result<(StatusCode, Json<ShortTask>)> {
    draft.validate()?;
    let item = state
        .db
        .transaction(|tx| SqliteShortTaskRepository::new(tx).insert_short_task(&draft))?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// GET /short-tasks/:id/ - Get a short task.
pub async fn get_short_task(
    State(state): State<AppState>,
    PathId(id): PathId<i64>,
) -> Result<Json<ShortTask>> {
    let item = state
        .db
        .with_conn(|conn| find(&SqliteShortTaskRepository::new(conn), ShortTaskId::new(id)))?;
    Ok(Json(item))
}

/// PUT /short-tasks/:id/ - Replace a short task.
pub async fn update_short_task(
    State(state): State<AppState>,
    PathId(id): PathId<i64>,
    JsonBody(draft): JsonBody<ShortTaskDraft>,
) -> Result<Json<ShortTask>> {
    draft.validate()?;
    let item = state.db.transaction(|tx| {
        let items = SqliteShortTaskRepository::new(tx);
        let mut item = find(&items, ShortTaskId::new(id))?;
        item.replace_with(draft);
        items.update_short_task(&item)?;
        Ok::<_, ApiError>(item)
    })?;
    Ok(Json(item))
}

/// PATCH /short-tasks/:id/ - Update some fields of a short task.
pub async fn patch_short_task(
    State(state): State<AppState>,
    PathId(id): PathId<i64>,
    JsonBody(patch): JsonBody<ShortTaskPatch>,
) -> Result<Json<ShortTask>> {
    patch.validate()?;
    let item = state.db.transaction(|tx| {
        let items = SqliteShortTaskRepository::new(tx);
        let mut item = find(&items, ShortTaskId::new(id))?;
        patch.apply(&mut item);
        items.update_short_task(&item)?;
        Ok::<_, ApiError>(item)
    })?;
    Ok(Json(item))
}

/// DELETE /short-tasks/:id/ - Permanently delete a short task.
pub async fn delete_short_task(
    State(state): State<AppState>,
    PathId(id): PathId<i64>,
) -> Result<StatusCode> {
    let id = ShortTaskId::new(id);
    let removed = state
        .db
        .transaction(|tx| SqliteShortTaskRepository::new(tx).delete_short_task(id))?;
    if !removed {
        return Err(not_found(id));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// POST /short-tasks/:id/soft_delete/ - Flag a short task as deleted.
pub async fn soft_delete_short_task(
    State(state): State<AppState>,
    PathId(id): PathId<i64>,
) -> Result<Json<StatusResponse>> {
    let id = ShortTaskId::new(id);
    let found = state
        .db
        .transaction(|tx| SqliteShortTaskRepository::new(tx).soft_delete_short_task(id))?;
    if !found {
        return Err(not_found(id));
    }
    info!(short_task_id = %id, "soft deleted short task");
    Ok(Json(StatusResponse::new("short task soft deleted")))
}

fn find(items: &impl ShortTaskRepository, id: ShortTaskId) -> Result<ShortTask> {
    items.get_short_task(id)?.ok_or_else(|| not_found(id))
}

fn not_found(id: ShortTaskId) -> ApiError {
    ApiError::NotFound(format!("short task not found: {}", id))
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
    async fn test_soft_delete_keeps_short_task_visible() {
        let state = make_test_state();
        let (_, created) = create_short_task(
            State(state.clone()),
            JsonBody(ShortTaskDraft::new("Call bank")),
        )
        .await
        .unwrap();
        assert!(created.is_short_task);

        let response = soft_delete_short_task(State(state.clone()), PathId(created.id.get()))
            .await
            .unwrap();
        assert_eq!(response.status, "short task soft deleted");

        let listed = list_short_tasks(State(state.clone())).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert!(listed[0].is_deleted);

        let detail = get_short_task(State(state), PathId(created.id.get())).await.unwrap();
        assert!(detail.is_deleted);
    }

    #[tokio::test]
    async fn test_soft_delete_unknown_short_task() {
        let state = make_test_state();
        let result = soft_delete_short_task(State(state), PathId(404)).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_patch_and_delete_short_task() {
        let state = make_test_state();
        let (_, created) = create_short_task(State(state.clone()), JsonBody(ShortTaskDraft::new("a")))
            .await
            .unwrap();

        let patch = ShortTaskPatch {
            title: Some("b".to_string()),
            ..ShortTaskPatch::default()
        };
        let patched = patch_short_task(State(state.clone()), PathId(created.id.get()), JsonBody(patch))
            .await
            .unwrap();
        assert_eq!(patched.title, "b");

        let status = delete_short_task(State(state.clone()), PathId(created.id.get()))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(list_short_tasks(State(state)).await.unwrap().is_empty());
    }
}

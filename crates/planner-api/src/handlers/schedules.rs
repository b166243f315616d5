//! Weekly schedule handlers.

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use planner_models::{BookId, EntryId, NewScheduleEntry, ScheduleEntry, WeeklyProgress};
use planner_schedule::MoveHours;

use crate::error::Result;
use crate::extract::{JsonBody, PathId};
use crate::state::AppState;
use crate::types::{BulkCreateRequest, BulkCreateResponse, MoveTaskRequest, StatusResponse};

/// GET /weekly-schedules/ - List every entry.
pub async fn list_schedules(State(state): State<AppState>) -> Result<Json<Vec<ScheduleEntry>>> {
    Ok(Json(state.schedule.list()?))
}

/// POST /weekly-schedules/ - Create a single entry.
pub async fn create_schedule(
    State(state): State<AppState>,
    JsonBody(entry): JsonBody<NewScheduleEntry>,
) -> Result<(StatusCode, Json<ScheduleEntry>)> {
    let created = state.schedule.create(&entry)?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /weekly-schedules/:id/ - Get an entry.
pub async fn get_schedule(
    State(state): State<AppState>,
    PathId(id): PathId<i64>,
) -> Result<Json<ScheduleEntry>> {
    Ok(Json(state.schedule.get(EntryId::new(id))?))
}

/// PUT /weekly-schedules/:id/ - Replace an entry.
pub async fn update_schedule(
    State(state): State<AppState>,
    PathId(id): PathId<i64>,
    JsonBody(entry): JsonBody<NewScheduleEntry>,
) -> Result<Json<ScheduleEntry>> {
    Ok(Json(state.schedule.update(EntryId::new(id), &entry)?))
}

/// DELETE /weekly-schedules/:id/ - Delete an entry.
pub async fn delete_schedule(
    State(state): State<AppState>,
    PathId(id): PathId<i64>,
) -> Result<StatusCode> {
    state.schedule.delete(EntryId::new(id))?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /weekly-schedules/:id/mark_complete/ - Mark an entry complete.
pub async fn mark_complete(
    State(state): State<AppState>,
    PathId(id): PathId<i64>,
) -> Result<Json<StatusResponse>> {
    state.schedule.set_completion(EntryId::new(id), true)?;
    Ok(Json(StatusResponse::new("task marked as complete")))
}

/// POST /weekly-schedules/:id/mark_incomplete/ - Mark an entry incomplete.
pub async fn mark_incomplete(
    State(state): State<AppState>,
    PathId(id): PathId<i64>,
) -> Result<Json<StatusResponse>> {
    state.schedule.set_completion(EntryId::new(id), false)?;
    Ok(Json(StatusResponse::new("task marked as incomplete")))
}

/// POST /weekly-schedules/create_bulk/ - Replace the whole grid.
pub async fn create_bulk(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<BulkCreateRequest>,
) -> Result<Json<BulkCreateResponse>> {
    let schedules = state.schedule.bulk_replace(&req.schedules)?;
    Ok(Json(BulkCreateResponse {
        status: "schedules created".to_string(),
        schedules,
    }))
}

/// GET /weekly-schedules/get_schedules/ - List every entry.
pub async fn get_schedules(State(state): State<AppState>) -> Result<Json<Vec<ScheduleEntry>>> {
    list_schedules(State(state)).await
}

/// POST /weekly-schedules/move_task/ - Move hours of a task between days.
pub async fn move_task(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<MoveTaskRequest>,
) -> Result<Json<StatusResponse>> {
    let request = MoveHours::from_parts(
        req.task_id,
        req.old_day.as_deref(),
        req.new_day.as_deref(),
        req.new_hours,
    )?;
    state.schedule.move_hours(&request)?;
    Ok(Json(StatusResponse::new("Task moved successfully")))
}

/// GET /weekly-schedules/get_weekly_progress/ - Completion per day and task title.
pub async fn get_weekly_progress(State(state): State<AppState>) -> Result<Json<WeeklyProgress>> {
    Ok(Json(state.schedule.progress()?))
}

/// DELETE /weekly-schedules/:id/delete_book/ - Delete a book by id.
///
/// Kept under the schedule resource for existing clients.
pub async fn delete_book_via_schedules(
    State(state): State<AppState>,
    PathId(id): PathId<i64>,
) -> Result<Json<StatusResponse>> {
    state.shelf.delete(BookId::new(id))?;
    Ok(Json(StatusResponse::new("book deleted")))
}

//! Reading list handlers.
//!
//! Book bodies are taken as raw JSON maps so that `order` can be read and
//! committed before the remaining fields are validated.

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde_json::{Map, Value};

use planner_models::{Book, BookId};
use planner_shelf::{OrderAssignment, ShelfError, UpdateMode};

use crate::error::{ApiError, Result};
use crate::extract::{JsonBody, PathId};
use crate::state::AppState;
use crate::types::StatusResponse;

/// GET /books/ - List books by display order.
pub async fn list_books(State(state): State<AppState>) -> Result<Json<Vec<Book>>> {
    Ok(Json(state.shelf.list()?))
}

/// POST /books/ - Add a book.
pub async fn create_book(
    State(state): State<AppState>,
    JsonBody(fields): JsonBody<Map<String, Value>>,
) -> Result<(StatusCode, Json<Book>)> {
    let book = state.shelf.create(&fields)?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// GET /books/:id/ - Get a book.
pub async fn get_book(State(state): State<AppState>, PathId(id): PathId<i64>) -> Result<Json<Book>> {
    Ok(Json(state.shelf.get(BookId::new(id))?))
}

/// PUT /books/:id/ - Replace a book.
pub async fn update_book(
    State(state): State<AppState>,
    PathId(id): PathId<i64>,
    JsonBody(fields): JsonBody<Map<String, Value>>,
) -> Result<Json<Book>> {
    let book = state
        .shelf
        .update(BookId::new(id), &fields, UpdateMode::Full)?;
    Ok(Json(book))
}

/// PATCH /books/:id/ - Update some fields of a book.
pub async fn patch_book(
    State(state): State<AppState>,
    PathId(id): PathId<i64>,
    JsonBody(fields): JsonBody<Map<String, Value>>,
) -> Result<Json<Book>> {
    let book = state
        .shelf
        .update(BookId::new(id), &fields, UpdateMode::Partial)?;
    Ok(Json(book))
}

/// DELETE /books/:id/ - Remove a book.
pub async fn delete_book(State(state): State<AppState>, PathId(id): PathId<i64>) -> Result<StatusCode> {
    state.shelf.delete(BookId::new(id))?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /tasks/books/reorder/ - Assign new positions to several books.
///
/// An unknown id is reported as a bad request.
pub async fn reorder_books(
    State(state): State<AppState>,
    JsonBody(assignments): JsonBody<Vec<OrderAssignment>>,
) -> Result<Json<StatusResponse>> {
    state.shelf.reorder(&assignments).map_err(|err| match err {
        ShelfError::NotFound(_) => ApiError::BadRequest(err.to_string()),
        other => other.into(),
    })?;
    Ok(Json(StatusResponse::new("books reordered")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use planner_persistence::Database;
    use serde_json::json;

    fn make_test_state() -> AppState {
        AppState::new(ApiConfig::default(), Database::open_in_memory().unwrap())
    }

    fn fields(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[tokio::test]
    async fn test_reorder_unknown_book_is_bad_request() {
        let state = make_test_state();
        let (_, book) = create_book(
            State(state.clone()),
            JsonBody(fields(json!({"title": "Dune", "author": "Herbert", "status": "reading"}))),
        )
        .await
        .unwrap();

        let result = reorder_books(
            State(state.clone()),
            JsonBody(vec![
                OrderAssignment::new(book.id, 3),
                OrderAssignment::new(BookId::new(404), 1),
            ]),
        )
        .await;
        assert!(
            matches!(result, Err(ApiError::BadRequest(msg)) if msg == "Book with ID 404 does not exist.")
        );

        let stored = get_book(State(state), PathId(book.id.get())).await.unwrap();
        assert_eq!(stored.details.order, 0);
    }

    #[tokio::test]
    async fn test_delete_missing_book() {
        let state = make_test_state();
        let result = delete_book(State(state), PathId(1)).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }
}

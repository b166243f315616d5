//! Router configuration and server setup.

use axum::{
    http::HeaderValue,
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{info, warn};

use crate::config::ApiConfig;
use crate::handlers;
use crate::state::AppState;

/// Creates the API router with all routes configured.
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        // Health
        .route("/health", get(handlers::health))
        // Tasks
        .route(
            "/tasks/",
            get(handlers::list_tasks).post(handlers::create_task),
        )
        .route(
            "/tasks/:id/",
            get(handlers::get_task)
                .put(handlers::update_task)
                .patch(handlers::patch_task)
                .delete(handlers::delete_task),
        )
        // Short tasks
        .route(
            "/short-tasks/",
            get(handlers::list_short_tasks).post(handlers::create_short_task),
        )
        .route(
            "/short-tasks/:id/",
            get(handlers::get_short_task)
                .put(handlers::update_short_task)
                .patch(handlers::patch_short_task)
                .delete(handlers::delete_short_task),
        )
        .route(
            "/short-tasks/:id/soft_delete/",
            post(handlers::soft_delete_short_task),
        )
        // Notes
        .route(
            "/notes/",
            get(handlers::list_notes).post(handlers::create_note),
        )
        .route(
            "/notes/:id/",
            get(handlers::get_note)
                .put(handlers::update_note)
                .patch(handlers::patch_note)
                .delete(handlers::delete_note),
        )
        // Weekly schedules
        .route(
            "/weekly-schedules/",
            get(handlers::list_schedules).post(handlers::create_schedule),
        )
        .route("/weekly-schedules/create_bulk/", post(handlers::create_bulk))
        .route(
            "/weekly-schedules/get_schedules/",
            get(handlers::get_schedules),
        )
        .route("/weekly-schedules/move_task/", post(handlers::move_task))
        .route(
            "/weekly-schedules/get_weekly_progress/",
            get(handlers::get_weekly_progress),
        )
        .route(
            "/weekly-schedules/:id/",
            get(handlers::get_schedule)
                .put(handlers::update_schedule)
                .delete(handlers::delete_schedule),
        )
        .route(
            "/weekly-schedules/:id/mark_complete/",
            post(handlers::mark_complete),
        )
        .route(
            "/weekly-schedules/:id/mark_incomplete/",
            post(handlers::mark_incomplete),
        )
        .route(
            "/weekly-schedules/:id/delete_book/",
            delete(handlers::delete_book_via_schedules),
        )
        // Books
        .route(
            "/books/",
            get(handlers::list_books).post(handlers::create_book),
        )
        .route("/tasks/books/reorder/", post(handlers::reorder_books))
        .route(
            "/books/:id/",
            get(handlers::get_book)
                .put(handlers::update_book)
                .patch(handlers::patch_book)
                .delete(handlers::delete_book),
        )
        // Apply middleware
        .layer(cors)
        .with_state(state)
}

fn cors_layer(config: &ApiConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if config.allows_any_origin() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}

/// Starts the API server.
pub async fn serve(config: ApiConfig, state: AppState) -> Result<(), std::io::Error> {
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("API server listening on {}", addr);
    axum::serve(listener, create_router(state)).await
}

//! Error types for reading list operations.

use planner_models::{BookId, ValidationError};
use planner_persistence::PersistenceError;
use thiserror::Error;

/// Errors that can occur during reading list operations.
#[derive(Error, Debug)]
pub enum ShelfError {
    /// One or more fields failed validation.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Book with ID {0} does not exist.")]
    NotFound(BookId),

    /// Persistence error.
    #[error("persistence error: {0}")]
    Persistence(#[from] PersistenceError),
}

/// Result type alias for reading list operations.
pub type Result<T> = std::result::Result<T, ShelfError>;

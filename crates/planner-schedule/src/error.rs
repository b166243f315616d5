//! Error types for weekly schedule operations.

use planner_models::{TaskId, ValidationError};
use planner_persistence::PersistenceError;
use thiserror::Error;

/// Errors that can occur during weekly schedule operations.
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// Input is missing or malformed.
    #[error("{0}")]
    Validation(String),

    /// The addressed task or entry does not exist.
    #[error("{0}")]
    NotFound(String),

    /// An entry refers to a task id that does not resolve.
    #[error("Task with ID {0} does not exist.")]
    ReferenceNotFound(TaskId),

    /// Persistence error.
    #[error("persistence error: {0}")]
    Persistence(#[from] PersistenceError),
}

impl From<ValidationError> for ScheduleError {
    fn from(err: ValidationError) -> Self {
        ScheduleError::Validation(err.to_string())
    }
}

/// Result type alias for weekly schedule operations.
pub type Result<T> = std::result::Result<T, ScheduleError>;

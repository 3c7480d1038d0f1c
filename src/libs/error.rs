//! Error taxonomy for task store and persistence operations.
//!
//! Validation and not-found conditions are recoverable and meant to be
//! reported back to the user by the command layer. Format and I/O errors
//! come out of the persistence adapter.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    /// A task text that trimmed down to nothing was submitted.
    #[error("Task text cannot be empty")]
    EmptyText,

    /// An operation referenced an id that is not in the store.
    #[error("Task not found: {0}")]
    NotFound(String),

    /// The tasks file exists but does not contain a valid JSON array.
    #[error("Tasks file is not a valid JSON array: {0}")]
    Format(#[from] serde_json::Error),

    /// Reading or writing the tasks file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type TaskResult<T> = Result<T, TaskError>;

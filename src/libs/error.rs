//! Error types for task persistence and file transfer.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for the task library.
pub type Result<T> = std::result::Result<T, TaskError>;

/// Errors produced by the persistence collaborator and by import/export.
///
/// Malformed import lines are not errors; they are skipped.
#[derive(Debug, Error)]
pub enum TaskError {
    /// A statement against the task database failed
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// The CSV writer or reader failed below the line level
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The import source could not be read
    #[error("An error occurred while importing tasks from file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The export destination could not be written
    #[error("An error occurred while saving tasks to file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No stored task has this id
    #[error("Task with ID {0} not found")]
    NotFound(i32),

    /// An update was requested for a task that was never persisted
    #[error("Task has no ID; it must be created before it can be updated")]
    MissingId,

    /// The database assigned a row id outside the task id range
    #[error("Database assigned row id {0}, which does not fit a task ID")]
    IdOutOfRange(i64),
}

impl TaskError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read { path: path.into(), source }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write { path: path.into(), source }
    }
}

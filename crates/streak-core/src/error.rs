//! Error types for the tracker library.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::TaskName;

/// Comprehensive error type for all tracker operations.
#[derive(Error, Debug)]
pub enum TrackerError {
    /// A mutation violated day gating or terminal-state rules
    #[error("Invalid transition: {reason}")]
    InvalidTransition { reason: String },
    /// Day completion attempted while required tasks are still open
    #[error("Day {day} has incomplete tasks: {}", join_tasks(.missing))]
    IncompleteTasks { day: u32, missing: Vec<TaskName> },
    /// Rule or metric values out of range
    #[error("Validation failed for field '{field}': {reason}")]
    ValidationFailed { field: String, reason: String },
    /// Stale revision token on a conditional write
    #[error("Challenge {id} was modified since it was read")]
    Conflict { id: u64 },
    /// No backing store reachable
    #[error("Storage unavailable: {message}")]
    StorageUnavailable { message: String },
    /// Challenge not found for the given ID
    #[error("Challenge with ID {id} not found")]
    ChallengeNotFound { id: u64 },
    /// Attachment not found on the given challenge
    #[error("Attachment '{key}' not found on challenge {id}")]
    AttachmentNotFound { id: u64, key: String },
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

fn join_tasks(tasks: &[TaskName]) -> String {
    tasks
        .iter()
        .map(|task| task.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> TrackerError {
        TrackerError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating validation errors.
pub struct ValidationErrorBuilder {
    field: String,
}

impl ValidationErrorBuilder {
    /// Create a new validation error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> TrackerError {
        TrackerError::ValidationFailed {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl TrackerError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for validation errors.
    pub fn validation(field: impl Into<String>) -> ValidationErrorBuilder {
        ValidationErrorBuilder::new(field)
    }

    /// Creates an invalid transition error.
    pub fn invalid_transition(reason: impl Into<String>) -> Self {
        TrackerError::InvalidTransition {
            reason: reason.into(),
        }
    }

    /// True for both the challenge and the attachment flavour of not-found.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            TrackerError::ChallengeNotFound { .. } | TrackerError::AttachmentNotFound { .. }
        )
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| TrackerError::database(message).with_source(e))
    }
}

/// Result type alias for tracker operations
pub type Result<T> = std::result::Result<T, TrackerError>;

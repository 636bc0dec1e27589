//! SQLite persistence for challenges and their attachments.
//!
//! This module provides the synchronous, connection-level operations behind
//! [`crate::store::SqliteStore`]. Challenges are stored as JSON documents with
//! a revision counter used for conditional writes; progress photos live in a
//! separate attachments table keyed by challenge and attachment key.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{Result, TrackerError};

pub mod attachment_queries;
pub mod challenge_queries;
pub mod migrations;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens the database file and initializes the schema.
    ///
    /// A file that cannot be opened is reported as
    /// [`TrackerError::StorageUnavailable`].
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let connection =
            Connection::open(path).map_err(|e| TrackerError::StorageUnavailable {
                message: format!("cannot open '{}': {e}", path.display()),
            })?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}

//! Persistence adapter contract.
//!
//! The engine never talks to a database directly. Anything that can store a
//! revisioned document plus binary attachments per document can back a
//! [`Tracker`](crate::tracker::Tracker) by implementing [`ChallengeStore`].
//! Two adapters ship with the crate:
//!
//! - [`SqliteStore`]: a file-backed store on top of [`crate::db::Database`]
//! - [`MemoryStore`]: an in-process store with the same revision semantics
//!
//! # Revisions
//!
//! Every successful `create` or `put` hands back a fresh [`Revision`]. A `put`
//! carrying any other revision than the latest one fails with
//! [`TrackerError::Conflict`](crate::TrackerError::Conflict) and leaves the
//! stored document untouched. Stores surface conflicts; they never merge.

use std::future::Future;

use crate::{
    error::Result,
    models::{Challenge, Revision},
};

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// A binary artifact attached to a challenge document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl Attachment {
    pub fn new(mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data,
        }
    }
}

/// Attachment key of a day's progress photo.
///
/// ```rust
/// assert_eq!(streak_core::store::photo_attachment_key(7), "day-7-photo");
/// ```
pub fn photo_attachment_key(day: u32) -> String {
    format!("day-{day}-photo")
}

/// Storage operations the tracker depends on.
pub trait ChallengeStore: Send + Sync {
    /// Stores a new challenge, returning its assigned ID and first revision.
    fn create(&self, challenge: &Challenge) -> impl Future<Output = Result<(u64, Revision)>> + Send;

    /// Loads a challenge with its current revision, or `ChallengeNotFound`.
    fn get(&self, id: u64) -> impl Future<Output = Result<Challenge>> + Send;

    /// Loads every challenge in no particular order.
    fn list_all(&self) -> impl Future<Output = Result<Vec<Challenge>>> + Send;

    /// Conditionally replaces a challenge guarded by `challenge.revision`.
    fn put(&self, challenge: &Challenge) -> impl Future<Output = Result<Revision>> + Send;

    /// Associates a binary artifact with a challenge under `key`.
    fn put_attachment(
        &self,
        id: u64,
        key: &str,
        revision: &Revision,
        attachment: Attachment,
    ) -> impl Future<Output = Result<()>> + Send;

    /// Fetches an attachment, or `AttachmentNotFound`.
    fn get_attachment(&self, id: u64, key: &str) -> impl Future<Output = Result<Attachment>> + Send;

    /// Removes every challenge and attachment.
    fn delete_all(&self) -> impl Future<Output = Result<()>> + Send;
}

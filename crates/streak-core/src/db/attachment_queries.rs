//! Binary attachment storage.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result, TrackerError},
    models::Revision,
    store::Attachment,
};

const SELECT_CHALLENGE_REV_SQL: &str = "SELECT rev FROM challenges WHERE id = ?1";
const UPSERT_ATTACHMENT_SQL: &str = "INSERT OR REPLACE INTO attachments (challenge_id, key, mime_type, data, created_at) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_ATTACHMENT_SQL: &str =
    "SELECT mime_type, data FROM attachments WHERE challenge_id = ?1 AND key = ?2";

impl super::Database {
    /// Stores an attachment under `key`, replacing any previous one.
    ///
    /// The revision must match the stored challenge; it is checked but not
    /// advanced.
    pub fn put_attachment(
        &mut self,
        id: u64,
        key: &str,
        revision: &Revision,
        attachment: &Attachment,
    ) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let stored: Option<i64> = tx
            .query_row(SELECT_CHALLENGE_REV_SQL, params![id as i64], |row| row.get(0))
            .optional()
            .db_context("Failed to read challenge revision")?;

        match stored {
            None => return Err(TrackerError::ChallengeNotFound { id }),
            Some(rev) if rev.to_string() != revision.as_str() => {
                return Err(TrackerError::Conflict { id });
            }
            Some(_) => {}
        }

        tx.execute(
            UPSERT_ATTACHMENT_SQL,
            params![
                id as i64,
                key,
                attachment.mime_type,
                attachment.data,
                Timestamp::now().to_string()
            ],
        )
        .db_context("Failed to store attachment")?;

        tx.commit().db_context("Failed to commit transaction")
    }

    /// Retrieves an attachment, `None` if the challenge has none under `key`.
    pub fn get_attachment(&self, id: u64, key: &str) -> Result<Option<Attachment>> {
        self.connection
            .query_row(SELECT_ATTACHMENT_SQL, params![id as i64, key], |row| {
                Ok(Attachment {
                    mime_type: row.get(0)?,
                    data: row.get(1)?,
                })
            })
            .optional()
            .db_context("Failed to query attachment")
    }
}

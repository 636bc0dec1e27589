//! Challenge document CRUD with revision-guarded updates.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result, TrackerError},
    models::{Challenge, Revision},
};

const INSERT_CHALLENGE_SQL: &str = "INSERT INTO challenges (rev, name, status, document, created_at, updated_at) VALUES (1, ?1, ?2, ?3, ?4, ?5)";
const SELECT_CHALLENGE_SQL: &str = "SELECT id, rev, document FROM challenges WHERE id = ?1";
const SELECT_ALL_CHALLENGES_SQL: &str = "SELECT id, rev, document FROM challenges";
const CHECK_CHALLENGE_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM challenges WHERE id = ?1)";
const UPDATE_CHALLENGE_SQL: &str = "UPDATE challenges SET rev = rev + 1, name = ?1, status = ?2, document = ?3, updated_at = ?4 WHERE id = ?5 AND rev = ?6";
const DELETE_ALL_ATTACHMENTS_SQL: &str = "DELETE FROM attachments";
const DELETE_ALL_CHALLENGES_SQL: &str = "DELETE FROM challenges";

impl super::Database {
    /// Helper function to construct a Challenge from a database row
    fn build_challenge_from_row(row: &rusqlite::Row) -> rusqlite::Result<Challenge> {
        let id = row.get::<_, i64>(0)? as u64;
        let rev: i64 = row.get(1)?;
        let document: String = row.get(2)?;

        let mut challenge: Challenge = serde_json::from_str(&document)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e)))?;
        challenge.id = id;
        challenge.revision = Some(Revision::new(rev.to_string()));
        Ok(challenge)
    }

    /// Stores a new challenge document and returns its assigned ID and first
    /// revision.
    pub fn insert_challenge(&mut self, challenge: &Challenge) -> Result<(u64, Revision)> {
        let document = serde_json::to_string(challenge)?;
        let now = Timestamp::now().to_string();

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            INSERT_CHALLENGE_SQL,
            params![
                challenge.name,
                challenge.status.as_str(),
                document,
                &now,
                &now
            ],
        )
        .db_context("Failed to insert challenge")?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok((id, Revision::new("1")))
    }

    /// Retrieves a challenge by its ID.
    pub fn get_challenge(&self, id: u64) -> Result<Option<Challenge>> {
        self.connection
            .query_row(
                SELECT_CHALLENGE_SQL,
                params![id as i64],
                Self::build_challenge_from_row,
            )
            .optional()
            .db_context("Failed to query challenge")
    }

    /// Lists every stored challenge in storage order.
    pub fn list_challenges(&self) -> Result<Vec<Challenge>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ALL_CHALLENGES_SQL)
            .db_context("Failed to prepare query")?;

        let challenges = stmt
            .query_map([], Self::build_challenge_from_row)
            .db_context("Failed to query challenges")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read challenge rows")?;

        Ok(challenges)
    }

    /// Replaces a challenge document if its revision still matches the
    /// stored one, returning the new revision.
    pub fn update_challenge(&mut self, challenge: &Challenge) -> Result<Revision> {
        let id = challenge.id;
        // Tokens we did not issue can never match
        let expected = challenge
            .revision
            .as_ref()
            .and_then(|rev| rev.as_str().parse::<i64>().ok())
            .ok_or(TrackerError::Conflict { id })?;

        let document = serde_json::to_string(challenge)?;
        let now = Timestamp::now().to_string();

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let rows_affected = tx
            .execute(
                UPDATE_CHALLENGE_SQL,
                params![
                    challenge.name,
                    challenge.status.as_str(),
                    document,
                    &now,
                    id as i64,
                    expected
                ],
            )
            .db_context("Failed to update challenge")?;

        if rows_affected == 0 {
            let exists: bool = tx
                .query_row(CHECK_CHALLENGE_EXISTS_SQL, params![id as i64], |row| {
                    row.get(0)
                })
                .db_context("Failed to check challenge existence")?;

            return Err(if exists {
                TrackerError::Conflict { id }
            } else {
                TrackerError::ChallengeNotFound { id }
            });
        }

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Revision::new((expected + 1).to_string()))
    }

    /// Irreversibly removes every challenge and attachment.
    pub fn delete_all(&mut self) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(DELETE_ALL_ATTACHMENTS_SQL, [])
            .db_context("Failed to delete attachments")?;
        tx.execute(DELETE_ALL_CHALLENGES_SQL, [])
            .db_context("Failed to delete challenges")?;

        tx.commit().db_context("Failed to commit transaction")
    }
}

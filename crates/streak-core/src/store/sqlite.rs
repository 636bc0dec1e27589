//! File-backed store on SQLite.

use std::path::{Path, PathBuf};

use log::debug;
use tokio::task;

use super::{Attachment, ChallengeStore};
use crate::{
    db::Database,
    error::{Result, TrackerError},
    models::{Challenge, Revision},
};

/// [`ChallengeStore`] backed by a SQLite file.
///
/// Each operation opens its own connection on the blocking thread pool, so
/// the store itself is just a path and is cheap to clone.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    db_path: PathBuf,
}

impl SqliteStore {
    /// Opens (and if needed creates) the database at `path`.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::StorageUnavailable` if the file cannot be opened
    /// Returns `TrackerError::Database` if schema initialization fails
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let store = Self {
            db_path: path.as_ref().to_path_buf(),
        };
        store.run(|_db| Ok(())).await?;
        Ok(store)
    }

    async fn run<T, F>(&self, operation: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            operation(&mut db)
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}

impl ChallengeStore for SqliteStore {
    async fn create(&self, challenge: &Challenge) -> Result<(u64, Revision)> {
        let challenge = challenge.clone();
        let (id, revision) = self.run(move |db| db.insert_challenge(&challenge)).await?;
        debug!("Created challenge {id} at revision {revision}");
        Ok((id, revision))
    }

    async fn get(&self, id: u64) -> Result<Challenge> {
        self.run(move |db| db.get_challenge(id))
            .await?
            .ok_or(TrackerError::ChallengeNotFound { id })
    }

    async fn list_all(&self) -> Result<Vec<Challenge>> {
        self.run(|db| db.list_challenges()).await
    }

    async fn put(&self, challenge: &Challenge) -> Result<Revision> {
        let challenge = challenge.clone();
        let id = challenge.id;
        let revision = self.run(move |db| db.update_challenge(&challenge)).await?;
        debug!("Stored challenge {id} at revision {revision}");
        Ok(revision)
    }

    async fn put_attachment(
        &self,
        id: u64,
        key: &str,
        revision: &Revision,
        attachment: Attachment,
    ) -> Result<()> {
        let key = key.to_string();
        let revision = revision.clone();
        self.run(move |db| db.put_attachment(id, &key, &revision, &attachment))
            .await
    }

    async fn get_attachment(&self, id: u64, key: &str) -> Result<Attachment> {
        let owned_key = key.to_string();
        self.run(move |db| db.get_attachment(id, &owned_key))
            .await?
            .ok_or_else(|| TrackerError::AttachmentNotFound {
                id,
                key: key.to_string(),
            })
    }

    async fn delete_all(&self) -> Result<()> {
        self.run(|db| db.delete_all()).await
    }
}

//! In-process store.

use std::collections::HashMap;

use tokio::sync::Mutex;

use super::{Attachment, ChallengeStore};
use crate::{
    error::{Result, TrackerError},
    models::{Challenge, Revision},
};

#[derive(Debug, Default)]
struct Inner {
    next_id: u64,
    documents: HashMap<u64, (u64, Challenge)>,
    attachments: HashMap<(u64, String), Attachment>,
}

impl Inner {
    fn current_rev(&self, id: u64) -> Result<u64> {
        self.documents
            .get(&id)
            .map(|(rev, _)| *rev)
            .ok_or(TrackerError::ChallengeNotFound { id })
    }
}

/// [`ChallengeStore`] keeping everything in memory.
///
/// Revision checks behave exactly like [`super::SqliteStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
    offline: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose backing is never reachable; every call fails with
    /// `StorageUnavailable`.
    pub fn offline() -> Self {
        Self {
            offline: true,
            ..Self::default()
        }
    }

    fn ensure_online(&self) -> Result<()> {
        if self.offline {
            return Err(TrackerError::StorageUnavailable {
                message: "in-memory store is offline".to_string(),
            });
        }
        Ok(())
    }
}

fn parse_revision(id: u64, revision: Option<&Revision>) -> Result<u64> {
    revision
        .and_then(|rev| rev.as_str().parse::<u64>().ok())
        .ok_or(TrackerError::Conflict { id })
}

impl ChallengeStore for MemoryStore {
    async fn create(&self, challenge: &Challenge) -> Result<(u64, Revision)> {
        self.ensure_online()?;
        let mut inner = self.inner.lock().await;
        inner.next_id += 1;
        let id = inner.next_id;

        let mut stored = challenge.clone();
        stored.id = id;
        stored.revision = None;
        inner.documents.insert(id, (1, stored));
        Ok((id, Revision::new("1")))
    }

    async fn get(&self, id: u64) -> Result<Challenge> {
        self.ensure_online()?;
        let inner = self.inner.lock().await;
        let (rev, stored) = inner
            .documents
            .get(&id)
            .ok_or(TrackerError::ChallengeNotFound { id })?;

        let mut challenge = stored.clone();
        challenge.revision = Some(Revision::new(rev.to_string()));
        Ok(challenge)
    }

    async fn list_all(&self) -> Result<Vec<Challenge>> {
        self.ensure_online()?;
        let inner = self.inner.lock().await;
        Ok(inner
            .documents
            .values()
            .map(|(rev, stored)| {
                let mut challenge = stored.clone();
                challenge.revision = Some(Revision::new(rev.to_string()));
                challenge
            })
            .collect())
    }

    async fn put(&self, challenge: &Challenge) -> Result<Revision> {
        self.ensure_online()?;
        let id = challenge.id;
        let mut inner = self.inner.lock().await;
        let current = inner.current_rev(id)?;
        if parse_revision(id, challenge.revision.as_ref())? != current {
            return Err(TrackerError::Conflict { id });
        }

        let next = current + 1;
        let mut stored = challenge.clone();
        stored.revision = None;
        inner.documents.insert(id, (next, stored));
        Ok(Revision::new(next.to_string()))
    }

    async fn put_attachment(
        &self,
        id: u64,
        key: &str,
        revision: &Revision,
        attachment: Attachment,
    ) -> Result<()> {
        self.ensure_online()?;
        let mut inner = self.inner.lock().await;
        if parse_revision(id, Some(revision))? != inner.current_rev(id)? {
            return Err(TrackerError::Conflict { id });
        }
        inner.attachments.insert((id, key.to_string()), attachment);
        Ok(())
    }

    async fn get_attachment(&self, id: u64, key: &str) -> Result<Attachment> {
        self.ensure_online()?;
        let inner = self.inner.lock().await;
        inner
            .attachments
            .get(&(id, key.to_string()))
            .cloned()
            .ok_or_else(|| TrackerError::AttachmentNotFound {
                id,
                key: key.to_string(),
            })
    }

    async fn delete_all(&self) -> Result<()> {
        self.ensure_online()?;
        let mut inner = self.inner.lock().await;
        inner.documents.clear();
        inner.attachments.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::{
        models::{ChallengeType, Preset},
        rules,
    };

    fn create_test_challenge() -> Challenge {
        Challenge::new(
            "Memory",
            ChallengeType::Hard,
            75,
            date(2026, 1, 1),
            rules::instantiate_preset(Preset::Hard),
        )
    }

    #[tokio::test]
    async fn test_stale_revision_is_rejected() {
        let store = MemoryStore::new();
        let (id, _) = store.create(&create_test_challenge()).await.unwrap();

        let first = store.get(id).await.unwrap();
        let mut second = first.clone();

        let mut renamed = first.clone();
        renamed.name = "Renamed".to_string();
        store.put(&renamed).await.unwrap();

        second.name = "Lost update".to_string();
        assert!(matches!(
            store.put(&second).await,
            Err(TrackerError::Conflict { .. })
        ));
        assert_eq!(store.get(id).await.unwrap().name, "Renamed");
    }

    #[tokio::test]
    async fn test_offline_store_is_unavailable() {
        let store = MemoryStore::offline();
        assert!(matches!(
            store.create(&create_test_challenge()).await,
            Err(TrackerError::StorageUnavailable { .. })
        ));
    }
}

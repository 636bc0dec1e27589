//! High-level tracker API over a challenge store.
//!
//! The [`Tracker`] is the thin shell between an interface and the pure
//! engine. Every mutating call follows the same round trip:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   store.get     │    │  engine / rules │    │   store.put     │
//! │ (fresh snapshot │───▶│ (new snapshot   │───▶│ (guarded by the │
//! │  + revision)    │    │  or error)      │    │  read revision) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! A `Conflict` from the store is returned as is. The tracker never retries
//! or merges; callers re-issue the operation, which starts from a fresh read.
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for SQLite-backed trackers with XDG defaults
//! - [`challenge_ops`]: Challenge lifecycle, rules and statistics
//! - [`day_ops`]: Task toggles, day completion, metrics and photos
//!
//! # Usage Examples
//!
//! ```rust
//! use streak_core::{
//!     models::{ChallengeType, TaskName},
//!     params::{CreateChallenge, ToggleTask},
//!     store::MemoryStore,
//!     Tracker,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = Tracker::with_store(MemoryStore::new());
//!
//! let challenge = tracker
//!     .create_challenge(&CreateChallenge {
//!         name: "Summer".to_string(),
//!         challenge_type: ChallengeType::Hard,
//!         duration: None,
//!         start_date: None,
//!         rules: None,
//!     })
//!     .await?;
//!
//! let challenge = tracker
//!     .toggle_task(&ToggleTask { id: challenge.id, day: 1, task: TaskName::Water })
//!     .await?;
//! assert!(challenge.day(1).unwrap().tasks.water);
//! # Ok(())
//! # }
//! ```

use log::debug;

use crate::{
    error::Result,
    models::Challenge,
    store::{ChallengeStore, SqliteStore},
};

pub mod builder;
pub mod challenge_ops;
pub mod day_ops;


pub use builder::TrackerBuilder;

/// Main tracker interface for managing challenges.
pub struct Tracker<S = SqliteStore> {
    pub(crate) store: S,
}

impl<S: ChallengeStore> Tracker<S> {
    /// Creates a tracker on top of any store implementation.
    pub fn with_store(store: S) -> Self {
        Self { store }
    }

    /// Persists a snapshot computed by the caller and returns it with its
    /// new revision.
    ///
    /// The snapshot must carry the revision it was read at; a stale one fails
    /// with `Conflict` and nothing is written.
    pub async fn save(&self, challenge: Challenge) -> Result<Challenge> {
        let mut challenge = challenge;
        let revision = self.store.put(&challenge).await?;
        challenge.revision = Some(revision);
        Ok(challenge)
    }

    /// Reads the latest snapshot, applies `operation` and writes the result
    /// back under the read revision.
    pub(crate) async fn apply<F>(&self, id: u64, operation: F) -> Result<Challenge>
    where
        F: FnOnce(&Challenge) -> Result<Challenge>,
    {
        let current = self.store.get(id).await?;
        let next = operation(&current)?;
        debug!(
            "Writing challenge {id} over revision {}",
            current
                .revision
                .as_ref()
                .map_or("<none>", |revision| revision.as_str())
        );
        self.save(next).await
    }

    pub(crate) async fn load(&self, id: u64) -> Result<Challenge> {
        self.store.get(id).await
    }
}

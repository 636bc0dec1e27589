//! Core library for the Streak challenge tracker.
//!
//! Streak tracks fixed-length daily discipline challenges: a rule set decides
//! which tasks each day requires, days unlock strictly in order, and the
//! challenge completes when its final day does.
//!
//! # Layers
//!
//! - **Models** ([`models`]): the challenge document, its day ledger and rules
//! - **Rules** ([`rules`]): preset tables and rule edits
//! - **Engine** ([`engine`]): pure progression functions and statistics
//! - **Store** ([`store`], [`db`]): revisioned persistence behind a trait
//! - **Tracker** ([`tracker`]): read, compute, conditional write
//! - **Display** ([`display`]): markdown formatting for terminal output
//!
//! # Quick Start
//!
//! ```rust
//! use streak_core::{
//!     models::{ChallengeType, TaskName},
//!     params::{CreateChallenge, DayRef, ToggleTask},
//!     TrackerBuilder, TrackerError,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("streak.db"))
//!     .build()
//!     .await?;
//!
//! let challenge = tracker
//!     .create_challenge(&CreateChallenge {
//!         name: "75 Hard".to_string(),
//!         challenge_type: ChallengeType::Hard,
//!         duration: None,
//!         start_date: None,
//!         rules: None,
//!     })
//!     .await?;
//!
//! tracker
//!     .toggle_task(&ToggleTask { id: challenge.id, day: 1, task: TaskName::Water })
//!     .await?;
//!
//! match tracker.complete_day(&DayRef { id: challenge.id, day: 1 }).await {
//!     Err(TrackerError::IncompleteTasks { missing, .. }) => println!("Still to do: {missing:?}"),
//!     other => println!("{}", other?),
//! }
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod engine;
pub mod error;
pub mod models;
pub mod params;
pub mod rules;
pub mod store;
pub mod tracker;

// Re-export commonly used types
pub use db::Database;
pub use display::{Challenges, CreateResult, DayView, OperationStatus, UpdateResult};
pub use error::{Result, TrackerError};
pub use models::{
    Challenge, ChallengeStatus, ChallengeType, DayRecord, Revision, RuleSet, StatsSnapshot,
    TaskName,
};
pub use params::{
    AttachPhoto, CreateChallenge, DayRef, EditRules, EditStartDate, Id, RecordJournal,
    RecordMeasurement, RecordWeight, ToggleTask,
};
pub use store::{ChallengeStore, MemoryStore, SqliteStore};
pub use tracker::{Tracker, TrackerBuilder};

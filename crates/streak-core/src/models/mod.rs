//! Data models for challenges, rule sets and day records.
//!
//! These are plain data types. State transitions live in [`crate::engine`]
//! and rule edits in [`crate::rules`]; both take a model by reference and
//! return a fresh value instead of mutating in place. Display
//! implementations are located in [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use streak_core::{models::{Challenge, ChallengeType, Preset}, rules};
//! use jiff::civil::date;
//!
//! let challenge = Challenge::new(
//!     "Spring reset",
//!     ChallengeType::Hard,
//!     75,
//!     date(2026, 3, 1),
//!     rules::instantiate_preset(Preset::Hard),
//! );
//! assert!(challenge.is_active());
//! assert_eq!(challenge.end_date(), date(2026, 5, 14));
//! ```

pub mod challenge;
pub mod day;
pub mod rules;
pub mod stats;
pub mod status;

#[cfg(test)]
mod tests;

pub use challenge::{Challenge, Revision};
pub use day::{DayRecord, DayTasks, TaskName};
pub use rules::{AlcoholRule, DietRule, PhotoRule, ReadingType, RuleField, RuleSet};
pub use stats::{StatsSnapshot, WeightDelta};
pub use status::{ChallengeStatus, ChallengeType, Preset};

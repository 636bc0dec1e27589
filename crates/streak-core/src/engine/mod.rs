//! The challenge progression engine.
//!
//! Everything in this module is synchronous and side-effect free: each
//! operation takes the current [`Challenge`](crate::models::Challenge)
//! snapshot by reference and either returns a complete new snapshot or an
//! error. Persisting the result is the caller's job (see
//! [`crate::tracker::Tracker`]), which keeps a failed write from ever leaving
//! a half-updated value in memory.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Read snapshot  │    │     Engine      │    │ Conditional put │
//! │  (store.get)    │───▶│ (progression,   │───▶│  (store.put +   │
//! │                 │    │  stats)         │    │   revision)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! The gating predicate ([`progression::is_day_selectable`] plus the active
//! status check) is shared by task toggles, metric entries, photo flags and
//! day completion alike.

pub mod progression;
pub mod stats;

#[cfg(test)]
mod tests;

pub use progression::{
    complete_day, compute_next_unlocked_day, edit_rules, edit_start_date, is_day_selectable,
    mark_failed, mark_photo_attached, record_journal, record_measurement, record_weight,
    toggle_task,
};
pub use stats::compute_stats;

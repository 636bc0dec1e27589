//! Display formatting for challenges and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! the wrappers here add context a bare model cannot know about, such as
//! which tasks a given day requires or whether an update just happened.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Views & Result  │    │    Markdown     │
//! │ (Challenge, ..) │───▶│    Wrappers     │───▶│     Output      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! All output is markdown, rendered for the terminal by the CLI.
//!
//! ## Module Organization
//!
//! - [`collections`]: [`Challenges`] list wrapper
//! - [`day`]: [`DayView`] checklist of one day
//! - [`results`]: [`CreateResult`] and [`UpdateResult`]
//! - [`status`]: [`OperationStatus`] confirmations
//! - [`datetime`]: [`LocalDateTime`] timestamp formatting
//! - [`models`]: `Display` implementations for domain models
//!
//! ```rust
//! use streak_core::display::OperationStatus;
//!
//! let done = OperationStatus::success("All challenges deleted");
//! assert_eq!(done.to_string(), "Success: All challenges deleted\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod day;
pub mod models;
pub mod results;
pub mod status;

pub use collections::Challenges;
pub use datetime::LocalDateTime;
pub use day::DayView;
pub use models::task_label;
pub use results::{CreateResult, UpdateResult};
pub use status::OperationStatus;

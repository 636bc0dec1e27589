//! Result wrapper types for displaying operation outcomes.
//!
//! Create and update results print a short confirmation line followed by the
//! full challenge.

use std::fmt;

use crate::models::Challenge;

/// Wrapper type for displaying a freshly created challenge.
///
/// Formats the new ID followed by the challenge details and rules.
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Challenge> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created challenge with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of an update, optionally listing
/// what changed.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use streak_core::{display::UpdateResult, models::{Challenge, ChallengeType, Preset}, rules};
///
/// let challenge = Challenge::new(
///     "Focus",
///     ChallengeType::Hard,
///     75,
///     date(2026, 1, 1),
///     rules::instantiate_preset(Preset::Hard),
/// );
/// let result = UpdateResult::with_changes(challenge, vec!["Completed day 1".to_string()]);
/// assert!(result.to_string().contains("- Completed day 1"));
/// ```
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create an UpdateResult without a change list.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult listing the changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<Challenge> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated challenge with ID: {}", self.resource.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

//! Collection wrapper types for displaying groups of challenges.

use std::fmt;

use crate::models::Challenge;

/// Newtype wrapper for displaying a list of challenges as compact summaries.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use streak_core::{display::Challenges, models::{Challenge, ChallengeType, Preset}, rules};
///
/// let challenge = Challenge::new(
///     "Winter",
///     ChallengeType::Soft,
///     30,
///     date(2026, 12, 1),
///     rules::instantiate_preset(Preset::Soft),
/// );
/// let output = Challenges(vec![challenge]).to_string();
/// assert!(output.contains("Winter"));
/// assert!(output.contains("0/30 days"));
/// ```
pub struct Challenges(pub Vec<Challenge>);

impl Challenges {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Challenge> {
        self.0.iter()
    }
}

impl IntoIterator for Challenges {
    type Item = Challenge;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Challenges {
    type Item = &'a Challenge;
    type IntoIter = std::slice::Iter<'a, Challenge>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Challenges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No challenges found.");
        }

        for challenge in &self.0 {
            writeln!(
                f,
                "## {} (ID: {}) ({}/{} days)",
                challenge.name,
                challenge.id,
                challenge.completed_days(),
                challenge.duration
            )?;
            writeln!(f)?;
            writeln!(f, "- **Status**: {}", challenge.status.with_icon())?;
            writeln!(f, "- **Type**: {}", challenge.challenge_type)?;
            writeln!(
                f,
                "- **Dates**: {} to {}",
                challenge.start_date,
                challenge.end_date()
            )?;
            writeln!(f)?;
        }
        Ok(())
    }
}

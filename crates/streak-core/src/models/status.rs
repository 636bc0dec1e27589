//! Status enumerations for challenges.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle state of a challenge.
///
/// `Completed` and `Failed` are terminal: no task, day or rule mutation is
/// accepted once a challenge has left `Active`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeStatus {
    /// Challenge is in progress and accepts daily updates
    #[default]
    Active,

    /// Every day up to the duration was completed
    Completed,

    /// The user gave up on the challenge
    Failed,
}

impl FromStr for ChallengeStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(ChallengeStatus::Active),
            "completed" => Ok(ChallengeStatus::Completed),
            "failed" => Ok(ChallengeStatus::Failed),
            _ => Err(format!("Invalid challenge status: {s}")),
        }
    }
}

impl ChallengeStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ChallengeStatus::Active => "active",
            ChallengeStatus::Completed => "completed",
            ChallengeStatus::Failed => "failed",
        }
    }

    /// Whether the status accepts no further mutation.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ChallengeStatus::Active)
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// ```rust
    /// use streak_core::models::ChallengeStatus;
    ///
    /// assert_eq!(ChallengeStatus::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(ChallengeStatus::Active.with_icon(), "➤ Active");
    /// assert_eq!(ChallengeStatus::Failed.with_icon(), "✗ Failed");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            ChallengeStatus::Completed => "✓ Completed",
            ChallengeStatus::Active => "➤ Active",
            ChallengeStatus::Failed => "✗ Failed",
        }
    }
}

/// Which rule family a challenge was created from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeType {
    Soft,
    Balanced,
    #[default]
    Hard,
    /// User-defined rules; the only type whose rules stay fully editable
    Custom,
}

impl FromStr for ChallengeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "soft" => Ok(ChallengeType::Soft),
            "balanced" => Ok(ChallengeType::Balanced),
            "hard" => Ok(ChallengeType::Hard),
            "custom" => Ok(ChallengeType::Custom),
            _ => Err(format!("Invalid challenge type: {s}")),
        }
    }
}

impl ChallengeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChallengeType::Soft => "soft",
            ChallengeType::Balanced => "balanced",
            ChallengeType::Hard => "hard",
            ChallengeType::Custom => "custom",
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, ChallengeType::Custom)
    }

    /// The preset backing this type, `None` for custom challenges.
    pub fn preset(&self) -> Option<Preset> {
        match self {
            ChallengeType::Soft => Some(Preset::Soft),
            ChallengeType::Balanced => Some(Preset::Balanced),
            ChallengeType::Hard => Some(Preset::Hard),
            ChallengeType::Custom => None,
        }
    }
}

/// The locked rule presets shipped with the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Soft,
    Balanced,
    Hard,
}

impl From<Preset> for ChallengeType {
    fn from(preset: Preset) -> Self {
        match preset {
            Preset::Soft => ChallengeType::Soft,
            Preset::Balanced => ChallengeType::Balanced,
            Preset::Hard => ChallengeType::Hard,
        }
    }
}

//! Challenge aggregate definition.

use std::{collections::BTreeMap, fmt};

use jiff::{civil::Date, Span, Timestamp};
use serde::{Deserialize, Serialize};

use super::{ChallengeStatus, ChallengeType, DayRecord, RuleSet};

/// Opaque revision token handed out by a store.
///
/// It must be passed back on every update so the store can detect lost
/// updates. Nothing outside a store implementation looks inside it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Revision(String);

impl Revision {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Root aggregate: one run of a challenge and all of its day records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Challenge {
    /// Unique identifier assigned by the store at creation (0 until then)
    #[serde(default)]
    pub id: u64,

    /// Revision token of the snapshot this value was read as
    #[serde(skip)]
    pub revision: Option<Revision>,

    pub name: String,

    /// First calendar day of the challenge
    pub start_date: Date,

    #[serde(default)]
    pub status: ChallengeStatus,

    pub challenge_type: ChallengeType,

    /// Length of the challenge in days
    pub duration: u32,

    /// Set only on the transition to [`ChallengeStatus::Completed`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<Timestamp>,

    pub rules: RuleSet,

    /// Sparse ledger keyed by day number (1..=duration)
    #[serde(default)]
    pub days: BTreeMap<u32, DayRecord>,

    pub created_at: Timestamp,

    pub updated_at: Timestamp,
}

impl Challenge {
    /// Creates an unsaved, active challenge with an empty day map.
    pub fn new(
        name: impl Into<String>,
        challenge_type: ChallengeType,
        duration: u32,
        start_date: Date,
        rules: RuleSet,
    ) -> Self {
        let now = Timestamp::now();
        Self {
            id: 0,
            revision: None,
            name: name.into(),
            start_date,
            status: ChallengeStatus::Active,
            challenge_type,
            duration,
            completion_date: None,
            rules,
            days: BTreeMap::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == ChallengeStatus::Active
    }

    pub fn day(&self, day: u32) -> Option<&DayRecord> {
        self.days.get(&day)
    }

    pub fn is_day_completed(&self, day: u32) -> bool {
        self.days.get(&day).is_some_and(|record| record.completed)
    }

    pub fn completed_days(&self) -> u32 {
        self.days.values().filter(|record| record.completed).count() as u32
    }

    /// Calendar date of a one-based day number.
    pub fn day_date(&self, day: u32) -> Date {
        match Span::new().try_days(i64::from(day.saturating_sub(1))) {
            Ok(offset) => self.start_date.saturating_add(offset),
            Err(_) => Date::MAX,
        }
    }

    /// Last calendar day of the challenge, inclusive.
    pub fn end_date(&self) -> Date {
        self.day_date(self.duration.max(1))
    }
}

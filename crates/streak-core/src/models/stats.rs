//! Summary statistics derived from a challenge's day records.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// Change in recorded body weight over the challenge.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum WeightDelta {
    /// Last recorded weight minus the first
    Change(f64),
    /// Fewer than two weight entries exist
    InsufficientData,
}

/// Snapshot computed on demand; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatsSnapshot {
    /// Pages credited on days with the reading task checked
    pub pages_read: u64,
    /// Ounces credited on days with the water task checked
    pub water_ounces: u64,
    pub workouts: u32,
    pub diet_days: u32,
    pub weight_delta: WeightDelta,
    pub measurement_days: u32,
    pub journal_entries: u32,
    /// Days marked completed
    pub perfect_days: u32,
    /// Photos the photo rule asks for, regardless of uploads
    pub required_photos: u32,
    /// Days present in the ledger
    pub active_days: u32,
    pub start_date: Date,
    /// Last day of the challenge, inclusive
    pub end_date: Date,
}

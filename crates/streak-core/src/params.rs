//! Parameter structures for tracker operations
//!
//! These structures are shared by every interface (the CLI today, tests, any
//! future front end) and carry no framework-specific derives. Interface layers
//! define their own argument types and convert into these:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │    Tracker      │
//! │  (clap derives) │───▶│ (minimal deps)  │───▶│   operations    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::{
    models::{ChallengeType, RuleSet, TaskName},
    rules::RuleEdit,
};

/// Generic parameters for operations requiring just a challenge ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the challenge to operate on
    pub id: u64,
}

/// Parameters for creating a new challenge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateChallenge {
    /// Display name of the challenge
    pub name: String,
    pub challenge_type: ChallengeType,
    /// Length in days, defaults to 75
    pub duration: Option<u32>,
    /// First day, defaults to today
    pub start_date: Option<Date>,
    /// Rules for custom challenges. For preset types only the
    /// always-editable toggles are taken from here.
    pub rules: Option<RuleSet>,
}

/// Addresses one day of a challenge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayRef {
    pub id: u64,
    /// One-based day number
    pub day: u32,
}

/// Parameters for flipping a task checkbox.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleTask {
    pub id: u64,
    pub day: u32,
    pub task: TaskName,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordWeight {
    pub id: u64,
    pub day: u32,
    pub weight: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordJournal {
    pub id: u64,
    pub day: u32,
    /// Journal text; blank text clears the entry
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordMeasurement {
    pub id: u64,
    pub day: u32,
    /// Body part name, e.g. "waist"
    pub part: String,
    pub value: f64,
}

/// Parameters for uploading a day's progress photo.
#[derive(Debug, Clone)]
pub struct AttachPhoto {
    pub id: u64,
    pub day: u32,
    /// MIME type of the image, e.g. "image/jpeg"
    pub mime_type: String,
    pub data: Vec<u8>,
}

/// Parameters for a single rule edit on a challenge.
#[derive(Debug, Clone)]
pub struct EditRules {
    pub id: u64,
    pub edit: RuleEdit,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditStartDate {
    pub id: u64,
    pub start_date: Date,
}

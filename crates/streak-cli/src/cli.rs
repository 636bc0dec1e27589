//! Command-line argument definitions using clap
//!
//! Argument structs here carry every clap-specific concern (flags, help text,
//! value parsing) and convert into the interface-agnostic parameter types of
//! `streak_core::params`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Tracker
//! ```
//!
//! Domain enums (`ChallengeType`, `TaskName`, rule enums) are parsed through
//! their `FromStr` implementations, so the accepted spellings match the core
//! crate exactly.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use jiff::civil::Date;
use streak_core::{
    models::{
        AlcoholRule, ChallengeType, DietRule, PhotoRule, ReadingType, RuleField, RuleSet,
        TaskName,
    },
    params::{
        CreateChallenge, DayRef, EditRules, EditStartDate, Id, RecordJournal, RecordMeasurement,
        RecordWeight, ToggleTask,
    },
    rules::{self, RuleEdit},
};

// ============================================================================
// Challenge commands
// ============================================================================

/// Create a new challenge
///
/// Preset types (soft, balanced, hard) use fixed rules; only the tracking
/// toggles and --outdoor are taken from the flags below. Custom challenges
/// start from the hard preset and apply every flag.
#[derive(Args)]
pub struct CreateChallengeArgs {
    /// Name of the challenge
    pub name: String,
    #[arg(
        short = 't',
        long = "type",
        default_value = "hard",
        help = "Challenge type: soft, balanced, hard or custom"
    )]
    pub challenge_type: ChallengeType,
    #[arg(short, long, help = "Length in days (default 75)")]
    pub duration: Option<u32>,
    #[arg(short, long, help = "First day as YYYY-MM-DD (default today)")]
    pub start: Option<Date>,

    #[arg(long, help = "Workouts per day, 1 to 3 (custom only)")]
    pub workouts: Option<u8>,
    #[arg(
        long,
        value_delimiter = ',',
        help = "Minutes per workout as a comma-separated list (custom only)"
    )]
    pub workout_minutes: Vec<u32>,
    #[arg(long, help = "Require one workout outdoors")]
    pub outdoor: bool,
    #[arg(long, help = "Daily water target in ounces (custom only)")]
    pub water: Option<u32>,
    #[arg(long, help = "Daily reading target in pages (custom only)")]
    pub reading: Option<u32>,
    #[arg(
        long,
        help = "What counts as reading: non_fiction, any_book, book_or_audio (custom only)"
    )]
    pub reading_type: Option<ReadingType>,
    #[arg(long, help = "Diet rule: strict, one_cheat_day, cut_vice (custom only)")]
    pub diet: Option<DietRule>,
    #[arg(long, help = "Vice to cut when the diet rule is cut_vice (custom only)")]
    pub vice: Option<String>,
    #[arg(long, help = "Alcohol rule: none, one_cheat_day, no_limit (custom only)")]
    pub alcohol: Option<AlcoholRule>,
    #[arg(
        long,
        help = "Photo rule: none, first_and_last, weekly, daily (custom only)"
    )]
    pub photos: Option<PhotoRule>,
    #[arg(long, help = "Track body weight")]
    pub track_weight: bool,
    #[arg(long, help = "Track body measurements")]
    pub track_measurements: bool,
    #[arg(long, help = "Keep a daily journal")]
    pub journal: bool,
}

impl CreateChallengeArgs {
    fn rule_set(&self) -> RuleSet {
        let mut rule_set = rules::initial_rules(self.challenge_type, None);

        if let Some(count) = self.workouts {
            rule_set = rules::resize_workouts(&rule_set, count, true);
        }
        if !self.workout_minutes.is_empty() {
            if self.workouts.is_none() {
                let count = self.workout_minutes.len().min(usize::from(rules::MAX_WORKOUTS));
                rule_set = rules::resize_workouts(&rule_set, count as u8, true);
            }
            for (slot, minutes) in rule_set
                .workout_durations
                .iter_mut()
                .zip(&self.workout_minutes)
            {
                *slot = *minutes;
            }
        }
        if let Some(water) = self.water {
            rule_set.water_target = water;
        }
        if let Some(reading) = self.reading {
            rule_set.reading_target = reading;
        }
        if let Some(reading_type) = self.reading_type {
            rule_set.reading_type = reading_type;
        }
        if let Some(diet) = self.diet {
            rule_set = rules::apply_diet_rule_edit(&rule_set, diet);
        }
        if let Some(vice) = &self.vice {
            rule_set.vice = Some(vice.trim().to_string()).filter(|v| !v.is_empty());
        }
        if let Some(alcohol) = self.alcohol {
            rule_set.alcohol_rule = alcohol;
        }
        if let Some(photos) = self.photos {
            rule_set.photo_rule = photos;
        }
        rule_set.outdoor_workout |= self.outdoor;
        rule_set.track_weight = self.track_weight;
        rule_set.track_measurements = self.track_measurements;
        rule_set.use_journal = self.journal;
        rule_set
    }
}

impl From<CreateChallengeArgs> for CreateChallenge {
    fn from(val: CreateChallengeArgs) -> Self {
        let rules = Some(val.rule_set());
        CreateChallenge {
            name: val.name,
            challenge_type: val.challenge_type,
            duration: val.duration,
            start_date: val.start,
            rules,
        }
    }
}

/// Identify a challenge
#[derive(Args)]
pub struct ChallengeIdArgs {
    #[arg(help = "Unique identifier of the challenge")]
    pub id: u64,
}

impl From<ChallengeIdArgs> for Id {
    fn from(val: ChallengeIdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Move the first day of an active challenge
#[derive(Args)]
pub struct StartDateArgs {
    #[arg(help = "Unique identifier of the challenge")]
    pub id: u64,
    #[arg(help = "New first day as YYYY-MM-DD")]
    pub date: Date,
}

impl From<StartDateArgs> for EditStartDate {
    fn from(val: StartDateArgs) -> Self {
        EditStartDate {
            id: val.id,
            start_date: val.date,
        }
    }
}

/// Change one rule of an active challenge
///
/// Locked presets only accept track_weight, track_measurements, use_journal
/// and outdoor_workout; other edits are ignored. The special field `workouts`
/// resizes the number of daily workouts on custom challenges.
#[derive(Args)]
pub struct RuleArgs {
    #[arg(help = "Unique identifier of the challenge")]
    pub id: u64,
    #[arg(help = "Rule field, e.g. water, reading, diet, workouts, workout_duration_2, journal")]
    pub field: String,
    #[arg(help = "New value")]
    pub value: String,
}

impl TryFrom<RuleArgs> for EditRules {
    type Error = String;

    fn try_from(val: RuleArgs) -> Result<Self, Self::Error> {
        let key = val.field.trim().to_lowercase().replace('-', "_");
        let edit = match key.as_str() {
            "workouts" | "workout_count" => {
                let count = val
                    .value
                    .trim()
                    .parse::<u8>()
                    .map_err(|_| format!("Invalid workout count: {}", val.value))?;
                RuleEdit::Workouts(count)
            }
            "diet" | "diet_rule" => RuleEdit::Diet(val.value.parse::<DietRule>()?),
            _ => RuleEdit::Field {
                field: val.field.parse::<RuleField>()?,
                value: val.value,
            },
        };
        Ok(EditRules { id: val.id, edit })
    }
}

#[derive(Subcommand)]
pub enum ChallengeCommands {
    /// Create a new challenge
    #[command(alias = "c")]
    Create(CreateChallengeArgs),
    /// List all challenges, newest first
    #[command(alias = "l")]
    List,
    /// Show a challenge with its rules
    #[command(alias = "s")]
    Show(ChallengeIdArgs),
    /// Show statistics for a challenge
    Stats(ChallengeIdArgs),
    /// Give up on an active challenge
    Fail(ChallengeIdArgs),
    /// Move the first day of an active challenge
    StartDate(StartDateArgs),
    /// Change one rule of an active challenge
    #[command(alias = "r")]
    Rule(RuleArgs),
}

// ============================================================================
// Day commands
// ============================================================================

/// Show one day as a checklist
#[derive(Args)]
pub struct ShowDayArgs {
    #[arg(help = "Unique identifier of the challenge")]
    pub id: u64,
    #[arg(help = "Day number (default: the current day)")]
    pub day: Option<u32>,
}

/// Identify a day of a challenge
#[derive(Args)]
pub struct DayArgs {
    #[arg(help = "Unique identifier of the challenge")]
    pub id: u64,
    #[arg(help = "Day number, starting at 1")]
    pub day: u32,
}

impl From<DayArgs> for DayRef {
    fn from(val: DayArgs) -> Self {
        DayRef {
            id: val.id,
            day: val.day,
        }
    }
}

/// Check or uncheck a task
#[derive(Args)]
pub struct ToggleTaskArgs {
    #[arg(help = "Unique identifier of the challenge")]
    pub id: u64,
    #[arg(help = "Day number, starting at 1")]
    pub day: u32,
    #[arg(help = "Task: diet, workout1, workout2, workout3, water, reading, photo")]
    pub task: TaskName,
}

impl From<ToggleTaskArgs> for ToggleTask {
    fn from(val: ToggleTaskArgs) -> Self {
        ToggleTask {
            id: val.id,
            day: val.day,
            task: val.task,
        }
    }
}

/// Record body weight for a day
#[derive(Args)]
pub struct WeightArgs {
    #[arg(help = "Unique identifier of the challenge")]
    pub id: u64,
    #[arg(help = "Day number, starting at 1")]
    pub day: u32,
    #[arg(help = "Body weight")]
    pub weight: f64,
}

impl From<WeightArgs> for RecordWeight {
    fn from(val: WeightArgs) -> Self {
        RecordWeight {
            id: val.id,
            day: val.day,
            weight: val.weight,
        }
    }
}

/// Write the journal entry for a day
#[derive(Args)]
pub struct JournalArgs {
    #[arg(help = "Unique identifier of the challenge")]
    pub id: u64,
    #[arg(help = "Day number, starting at 1")]
    pub day: u32,
    #[arg(help = "Journal text; an empty string clears the entry")]
    pub text: String,
}

impl From<JournalArgs> for RecordJournal {
    fn from(val: JournalArgs) -> Self {
        RecordJournal {
            id: val.id,
            day: val.day,
            text: val.text,
        }
    }
}

/// Record a body measurement for a day
#[derive(Args)]
pub struct MeasureArgs {
    #[arg(help = "Unique identifier of the challenge")]
    pub id: u64,
    #[arg(help = "Day number, starting at 1")]
    pub day: u32,
    #[arg(help = "Body part, e.g. waist")]
    pub part: String,
    #[arg(help = "Measured value")]
    pub value: f64,
}

impl From<MeasureArgs> for RecordMeasurement {
    fn from(val: MeasureArgs) -> Self {
        RecordMeasurement {
            id: val.id,
            day: val.day,
            part: val.part,
            value: val.value,
        }
    }
}

/// Attach a progress photo to a day
#[derive(Args)]
pub struct PhotoArgs {
    #[arg(help = "Unique identifier of the challenge")]
    pub id: u64,
    #[arg(help = "Day number, starting at 1")]
    pub day: u32,
    #[arg(help = "Image file (jpg, png, gif, webp or heic)")]
    pub file: PathBuf,
}

#[derive(Subcommand)]
pub enum DayCommands {
    /// Show a day as a checklist
    #[command(alias = "s")]
    Show(ShowDayArgs),
    /// Check or uncheck a task
    #[command(alias = "t")]
    Toggle(ToggleTaskArgs),
    /// Complete a day once every required task is checked
    #[command(alias = "c")]
    Complete(DayArgs),
    /// Record body weight
    Weight(WeightArgs),
    /// Write the journal entry
    Journal(JournalArgs),
    /// Record a body measurement
    Measure(MeasureArgs),
    /// Attach a progress photo
    Photo(PhotoArgs),
}

/// Delete every challenge and photo
#[derive(Args)]
pub struct ResetArgs {
    #[arg(long, help = "Confirm the irreversible deletion")]
    pub yes: bool,
}

//! Rule configuration embedded in every challenge.
//!
//! Each rule dimension is a closed enum so that adding a value surfaces at
//! every `match` that consumes it.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// What counts toward the daily reading target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReadingType {
    NonFiction,
    AnyBook,
    /// Audiobooks count at an equivalent page rate
    BookOrAudio,
}

impl FromStr for ReadingType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "non_fiction" | "nonfiction" => Ok(ReadingType::NonFiction),
            "any_book" | "any" => Ok(ReadingType::AnyBook),
            "book_or_audio" | "audio" => Ok(ReadingType::BookOrAudio),
            _ => Err(format!("Invalid reading type: {s}")),
        }
    }
}

impl ReadingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadingType::NonFiction => "non_fiction",
            ReadingType::AnyBook => "any_book",
            ReadingType::BookOrAudio => "book_or_audio",
        }
    }
}

/// Daily diet obligation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DietRule {
    /// Follow the diet every day; also forbids alcohol
    Strict,
    OneCheatDay,
    /// Cut out a single named vice (see [`RuleSet::vice`])
    CutVice,
}

impl FromStr for DietRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "strict" => Ok(DietRule::Strict),
            "one_cheat_day" | "cheat_day" => Ok(DietRule::OneCheatDay),
            "cut_vice" | "vice" => Ok(DietRule::CutVice),
            _ => Err(format!("Invalid diet rule: {s}")),
        }
    }
}

impl DietRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            DietRule::Strict => "strict",
            DietRule::OneCheatDay => "one_cheat_day",
            DietRule::CutVice => "cut_vice",
        }
    }
}

/// Alcohol allowance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AlcoholRule {
    /// No alcohol at all
    #[serde(rename = "none")]
    Abstain,
    OneCheatDay,
    NoLimit,
}

impl FromStr for AlcoholRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "none" | "abstain" => Ok(AlcoholRule::Abstain),
            "one_cheat_day" | "cheat_day" => Ok(AlcoholRule::OneCheatDay),
            "no_limit" | "unlimited" => Ok(AlcoholRule::NoLimit),
            _ => Err(format!("Invalid alcohol rule: {s}")),
        }
    }
}

impl AlcoholRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlcoholRule::Abstain => "none",
            AlcoholRule::OneCheatDay => "one_cheat_day",
            AlcoholRule::NoLimit => "no_limit",
        }
    }
}

/// Progress photo cadence.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PhotoRule {
    #[serde(rename = "none")]
    Off,
    FirstAndLast,
    Weekly,
    Daily,
}

impl FromStr for PhotoRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "none" | "off" => Ok(PhotoRule::Off),
            "first_and_last" | "first_last" => Ok(PhotoRule::FirstAndLast),
            "weekly" => Ok(PhotoRule::Weekly),
            "daily" => Ok(PhotoRule::Daily),
            _ => Err(format!("Invalid photo rule: {s}")),
        }
    }
}

impl PhotoRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhotoRule::Off => "none",
            PhotoRule::FirstAndLast => "first_and_last",
            PhotoRule::Weekly => "weekly",
            PhotoRule::Daily => "daily",
        }
    }

    /// Whether a progress photo is due on `day` of a challenge lasting
    /// `duration` days.
    pub fn requires_photo_on(&self, day: u32, duration: u32) -> bool {
        match self {
            PhotoRule::Off => false,
            PhotoRule::FirstAndLast => day == 1 || day == duration,
            PhotoRule::Weekly => day % 7 == 1,
            PhotoRule::Daily => true,
        }
    }

    /// Number of photos the rule asks for over the whole challenge.
    ///
    /// ```rust
    /// use streak_core::models::PhotoRule;
    ///
    /// assert_eq!(PhotoRule::Weekly.required_count(10), 2);
    /// assert_eq!(PhotoRule::FirstAndLast.required_count(1), 1);
    /// ```
    pub fn required_count(&self, duration: u32) -> u32 {
        match self {
            PhotoRule::Off => 0,
            PhotoRule::FirstAndLast => {
                if duration > 1 {
                    2
                } else {
                    1
                }
            }
            PhotoRule::Weekly => duration.div_ceil(7),
            PhotoRule::Daily => duration,
        }
    }
}

/// The obligations a challenge enforces.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RuleSet {
    /// Number of workouts per day (1 to 3)
    pub workout_count: u8,

    /// Target minutes per workout, one entry per workout
    pub workout_durations: Vec<u32>,

    /// At least one workout must happen outdoors
    pub outdoor_workout: bool,

    /// Daily water target in ounces
    pub water_target: u32,

    /// Daily reading target in pages
    pub reading_target: u32,

    pub reading_type: ReadingType,

    pub diet_rule: DietRule,

    /// Named vice when the diet rule is [`DietRule::CutVice`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vice: Option<String>,

    pub alcohol_rule: AlcoholRule,

    pub photo_rule: PhotoRule,

    #[serde(default)]
    pub track_weight: bool,

    #[serde(default)]
    pub track_measurements: bool,

    #[serde(default)]
    pub use_journal: bool,
}

/// Addressable fields of a [`RuleSet`] for single-field edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleField {
    /// Duration of the workout at the given zero-based index
    WorkoutDuration(usize),
    OutdoorWorkout,
    WaterTarget,
    ReadingTarget,
    ReadingType,
    DietRule,
    Vice,
    AlcoholRule,
    PhotoRule,
    TrackWeight,
    TrackMeasurements,
    UseJournal,
}

impl FromStr for RuleField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize(s);
        if let Some(index) = key.strip_prefix("workout_duration_") {
            return index
                .parse::<usize>()
                .ok()
                .filter(|n| *n >= 1)
                .map(|n| RuleField::WorkoutDuration(n - 1))
                .ok_or_else(|| format!("Invalid workout index in field: {s}"));
        }
        match key.as_str() {
            "outdoor_workout" | "outdoor" => Ok(RuleField::OutdoorWorkout),
            "water_target" | "water" => Ok(RuleField::WaterTarget),
            "reading_target" | "reading" => Ok(RuleField::ReadingTarget),
            "reading_type" => Ok(RuleField::ReadingType),
            "diet_rule" | "diet" => Ok(RuleField::DietRule),
            "vice" => Ok(RuleField::Vice),
            "alcohol_rule" | "alcohol" => Ok(RuleField::AlcoholRule),
            "photo_rule" | "photos" => Ok(RuleField::PhotoRule),
            "track_weight" => Ok(RuleField::TrackWeight),
            "track_measurements" => Ok(RuleField::TrackMeasurements),
            "use_journal" | "journal" => Ok(RuleField::UseJournal),
            _ => Err(format!("Unknown rule field: {s}")),
        }
    }
}

impl fmt::Display for RuleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleField::WorkoutDuration(index) => write!(f, "workout_duration_{}", index + 1),
            RuleField::OutdoorWorkout => f.write_str("outdoor_workout"),
            RuleField::WaterTarget => f.write_str("water_target"),
            RuleField::ReadingTarget => f.write_str("reading_target"),
            RuleField::ReadingType => f.write_str("reading_type"),
            RuleField::DietRule => f.write_str("diet_rule"),
            RuleField::Vice => f.write_str("vice"),
            RuleField::AlcoholRule => f.write_str("alcohol_rule"),
            RuleField::PhotoRule => f.write_str("photo_rule"),
            RuleField::TrackWeight => f.write_str("track_weight"),
            RuleField::TrackMeasurements => f.write_str("track_measurements"),
            RuleField::UseJournal => f.write_str("use_journal"),
        }
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase().replace(['-', ' '], "_")
}

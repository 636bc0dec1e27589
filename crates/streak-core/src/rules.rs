//! Rule configuration operations.
//!
//! Every function here is a pure transformation: it takes a [`RuleSet`] by
//! reference and returns a new one. Edits that are not allowed (a locked
//! preset field, an unparseable enum value) come back as an unchanged copy
//! rather than an error, matching the form-driven editing flow; the single
//! gate that can fail is [`validate_for_start`].
//!
//! # Examples
//!
//! ```rust
//! use streak_core::{models::{AlcoholRule, DietRule, Preset, RuleField}, rules};
//!
//! let hard = rules::instantiate_preset(Preset::Hard);
//!
//! // Locked presets ignore edits outside the always-editable set.
//! let same = rules::apply_field_edit(&hard, RuleField::WaterTarget, "64", false);
//! assert_eq!(same.water_target, hard.water_target);
//!
//! // ...but the tracking toggles remain editable.
//! let tracked = rules::apply_field_edit(&hard, RuleField::TrackWeight, "true", false);
//! assert!(tracked.track_weight);
//!
//! let strict = rules::apply_diet_rule_edit(&rules::instantiate_preset(Preset::Soft), DietRule::Strict);
//! assert_eq!(strict.alcohol_rule, AlcoholRule::Abstain);
//! ```

use log::{debug, warn};

use crate::{
    error::{Result, TrackerError},
    models::{
        AlcoholRule, ChallengeType, DietRule, PhotoRule, Preset, ReadingType, RuleField, RuleSet, TaskName,
    },
};

/// Minutes assigned to a workout slot added by [`resize_workouts`].
pub const DEFAULT_WORKOUT_MINUTES: u32 = 30;

/// Upper bound for [`RuleSet::workout_count`].
pub const MAX_WORKOUTS: u8 = 3;

/// Fields that stay editable on a locked preset.
pub const ALWAYS_EDITABLE_FIELDS: [RuleField; 4] = [
    RuleField::TrackWeight,
    RuleField::TrackMeasurements,
    RuleField::UseJournal,
    RuleField::OutdoorWorkout,
];

/// A single rule change requested against a live challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleEdit {
    /// Raw form input for one field
    Field { field: RuleField, value: String },
    /// Diet change, which may also force the alcohol rule
    Diet(DietRule),
    /// New number of daily workouts
    Workouts(u8),
}

/// Returns a fresh copy of a preset's rules.
pub fn instantiate_preset(preset: Preset) -> RuleSet {
    match preset {
        Preset::Soft => RuleSet {
            workout_count: 1,
            workout_durations: vec![45],
            outdoor_workout: false,
            water_target: 85,
            reading_target: 10,
            reading_type: ReadingType::BookOrAudio,
            diet_rule: DietRule::OneCheatDay,
            vice: None,
            alcohol_rule: AlcoholRule::OneCheatDay,
            photo_rule: PhotoRule::FirstAndLast,
            track_weight: false,
            track_measurements: false,
            use_journal: false,
        },
        Preset::Balanced => RuleSet {
            workout_count: 2,
            workout_durations: vec![45, 30],
            outdoor_workout: false,
            water_target: 100,
            reading_target: 10,
            reading_type: ReadingType::AnyBook,
            diet_rule: DietRule::OneCheatDay,
            vice: None,
            alcohol_rule: AlcoholRule::Abstain,
            photo_rule: PhotoRule::Weekly,
            track_weight: false,
            track_measurements: false,
            use_journal: false,
        },
        Preset::Hard => RuleSet {
            workout_count: 2,
            workout_durations: vec![45, 45],
            outdoor_workout: true,
            water_target: 128,
            reading_target: 10,
            reading_type: ReadingType::NonFiction,
            diet_rule: DietRule::Strict,
            vice: None,
            alcohol_rule: AlcoholRule::Abstain,
            photo_rule: PhotoRule::Daily,
            track_weight: false,
            track_measurements: false,
            use_journal: false,
        },
    }
}

pub fn is_always_editable(field: RuleField) -> bool {
    ALWAYS_EDITABLE_FIELDS.contains(&field)
}

/// Copies the always-editable fields of `source` onto a copy of `base`.
pub fn with_editable_fields(base: &RuleSet, source: &RuleSet) -> RuleSet {
    let mut next = base.clone();
    for field in ALWAYS_EDITABLE_FIELDS {
        match field {
            RuleField::TrackWeight => next.track_weight = source.track_weight,
            RuleField::TrackMeasurements => next.track_measurements = source.track_measurements,
            RuleField::UseJournal => next.use_journal = source.use_journal,
            RuleField::OutdoorWorkout => next.outdoor_workout = source.outdoor_workout,
            _ => {}
        }
    }
    next
}

/// Rules a new challenge starts with.
///
/// Presets get a fresh copy of their table with the always-editable toggles
/// taken from `supplied`. Custom challenges use `supplied` as is, falling
/// back to the hard preset.
pub fn initial_rules(challenge_type: ChallengeType, supplied: Option<&RuleSet>) -> RuleSet {
    match (challenge_type.preset(), supplied) {
        (Some(preset), Some(source)) => with_editable_fields(&instantiate_preset(preset), source),
        (Some(preset), None) => instantiate_preset(preset),
        (None, Some(source)) => source.clone(),
        (None, None) => instantiate_preset(Preset::Hard),
    }
}

/// Applies one field edit from raw input.
///
/// On a locked preset (`is_custom == false`) only
/// [`ALWAYS_EDITABLE_FIELDS`] are touched. Numeric fields never fail: the
/// input is parsed as an integer, negatives clamp to 0 and garbage becomes 0.
pub fn apply_field_edit(rules: &RuleSet, field: RuleField, value: &str, is_custom: bool) -> RuleSet {
    if !is_custom && !is_always_editable(field) {
        warn!("Ignoring edit of locked preset field {field}");
        return rules.clone();
    }

    let mut next = rules.clone();
    match field {
        RuleField::WaterTarget => next.water_target = coerce_count(value),
        RuleField::ReadingTarget => next.reading_target = coerce_count(value),
        RuleField::WorkoutDuration(index) => match next.workout_durations.get_mut(index) {
            Some(slot) => *slot = coerce_count(value),
            None => warn!("Workout {} is not configured, ignoring duration edit", index + 1),
        },
        RuleField::OutdoorWorkout => set_flag(&mut next.outdoor_workout, field, value),
        RuleField::TrackWeight => set_flag(&mut next.track_weight, field, value),
        RuleField::TrackMeasurements => set_flag(&mut next.track_measurements, field, value),
        RuleField::UseJournal => set_flag(&mut next.use_journal, field, value),
        RuleField::ReadingType => set_parsed(&mut next.reading_type, value),
        RuleField::PhotoRule => set_parsed(&mut next.photo_rule, value),
        RuleField::AlcoholRule => {
            let mut alcohol = next.alcohol_rule;
            set_parsed(&mut alcohol, value);
            if next.diet_rule == DietRule::Strict && alcohol != AlcoholRule::Abstain {
                warn!("Strict diet forbids alcohol, keeping alcohol rule at none");
            } else {
                next.alcohol_rule = alcohol;
            }
        }
        RuleField::DietRule => match value.parse::<DietRule>() {
            Ok(diet) => return apply_diet_rule_edit(&next, diet),
            Err(e) => warn!("{e}"),
        },
        RuleField::Vice => {
            let trimmed = value.trim();
            next.vice = (!trimmed.is_empty()).then(|| trimmed.to_string());
        }
    }

    debug!("Applied rule edit {field} = {value:?}");
    next
}

/// Sets the diet rule, forcing alcohol to none when the diet is strict.
pub fn apply_diet_rule_edit(rules: &RuleSet, diet: DietRule) -> RuleSet {
    let mut next = rules.clone();
    next.diet_rule = diet;
    if diet == DietRule::Strict {
        next.alcohol_rule = AlcoholRule::Abstain;
    }
    next
}

/// Changes the number of daily workouts, padding new slots with
/// [`DEFAULT_WORKOUT_MINUTES`] and truncating removed ones.
///
/// The count is clamped to `1..=MAX_WORKOUTS`. Locked presets are returned
/// unchanged.
pub fn resize_workouts(rules: &RuleSet, new_count: u8, is_custom: bool) -> RuleSet {
    if !is_custom {
        warn!("Ignoring workout resize on a locked preset");
        return rules.clone();
    }

    let count = new_count.clamp(1, MAX_WORKOUTS);
    let mut next = rules.clone();
    next.workout_count = count;
    next.workout_durations
        .resize(usize::from(count), DEFAULT_WORKOUT_MINUTES);
    next
}

/// Restores the structural invariants of a rule set before it is persisted:
/// strict diets forbid alcohol and there is exactly one duration per workout.
pub fn normalized(rules: &RuleSet) -> RuleSet {
    let mut next = apply_diet_rule_edit(rules, rules.diet_rule);
    next.workout_count = next.workout_count.clamp(1, MAX_WORKOUTS);
    next.workout_durations
        .resize(usize::from(next.workout_count), DEFAULT_WORKOUT_MINUTES);
    next
}

/// The gate a rule set must pass before a challenge is created or a rule
/// edit is persisted.
pub fn validate_for_start(rules: &RuleSet) -> Result<()> {
    if rules.water_target == 0 {
        return Err(TrackerError::validation("water_target").with_reason("must be greater than 0"));
    }
    if rules.reading_target == 0 {
        return Err(
            TrackerError::validation("reading_target").with_reason("must be greater than 0")
        );
    }
    if let Some(index) = rules.workout_durations.iter().position(|minutes| *minutes == 0) {
        return Err(TrackerError::validation(RuleField::WorkoutDuration(index).to_string())
            .with_reason("must be greater than 0"));
    }
    if rules.workout_durations.len() != usize::from(rules.workout_count) {
        return Err(TrackerError::validation("workout_durations").with_reason(format!(
            "expected {} entries, found {}",
            rules.workout_count,
            rules.workout_durations.len()
        )));
    }
    Ok(())
}

/// Tasks that must be checked before `day` can be completed.
pub fn required_tasks(rules: &RuleSet, day: u32, duration: u32) -> Vec<TaskName> {
    let mut tasks = vec![TaskName::Diet];
    tasks.extend((1..=rules.workout_count.min(MAX_WORKOUTS)).filter_map(TaskName::workout));
    tasks.push(TaskName::Water);
    tasks.push(TaskName::Reading);
    if rules.photo_rule.requires_photo_on(day, duration) {
        tasks.push(TaskName::ProgressPhoto);
    }
    tasks
}

/// Parses form input as a non-negative count from its leading integer part.
///
/// Trailing text is ignored (`"3.5"` is 3, `"12abc"` is 12). Negative or
/// unparseable input is 0 and overflow saturates.
///
/// ```rust
/// use streak_core::rules::coerce_count;
///
/// assert_eq!(coerce_count(" 64 oz"), 64);
/// assert_eq!(coerce_count("-4"), 0);
/// ```
pub fn coerce_count(value: &str) -> u32 {
    let value = value.trim();
    let (negative, digits) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value.strip_prefix('+').unwrap_or(value)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];
    if negative || digits.is_empty() {
        return 0;
    }
    digits.parse::<u32>().unwrap_or(u32::MAX)
}

fn set_flag(slot: &mut bool, field: RuleField, value: &str) {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => *slot = true,
        "false" | "no" | "off" | "0" => *slot = false,
        _ => warn!("Invalid boolean {value:?} for {field}"),
    }
}

fn set_parsed<T>(slot: &mut T, value: &str)
where
    T: std::str::FromStr<Err = String>,
{
    match value.parse::<T>() {
        Ok(parsed) => *slot = parsed,
        Err(e) => warn!("{e}"),
    }
}

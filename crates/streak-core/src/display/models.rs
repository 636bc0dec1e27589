//! Display implementations for domain models.
//!
//! Everything here renders markdown for the terminal renderer.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::{
    engine,
    models::{
        AlcoholRule, Challenge, ChallengeStatus, ChallengeType, DietRule, PhotoRule, ReadingType,
        RuleSet, StatsSnapshot, TaskName, WeightDelta,
    },
};

macro_rules! display_as_str {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

display_as_str!(
    ChallengeStatus,
    ChallengeType,
    TaskName,
    ReadingType,
    DietRule,
    AlcoholRule,
    PhotoRule,
);

/// Human-readable label of a task checkbox.
pub fn task_label(task: TaskName) -> String {
    match task {
        TaskName::Diet => "Diet".to_string(),
        TaskName::Water => "Water".to_string(),
        TaskName::Reading => "Reading".to_string(),
        TaskName::ProgressPhoto => "Progress photo".to_string(),
        workout => format!("Workout {}", workout.workout_number().unwrap_or(1)),
    }
}

impl fmt::Display for WeightDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightDelta::Change(delta) => write!(f, "{delta:+.1}"),
            WeightDelta::InsufficientData => f.write_str("insufficient data"),
        }
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let minutes: Vec<String> = self
            .workout_durations
            .iter()
            .map(|m| format!("{m} min"))
            .collect();
        writeln!(
            f,
            "- **Workouts**: {} per day ({}){}",
            self.workout_count,
            minutes.join(", "),
            if self.outdoor_workout {
                ", one outdoors"
            } else {
                ""
            }
        )?;
        writeln!(f, "- **Water**: {} oz", self.water_target)?;
        writeln!(
            f,
            "- **Reading**: {} pages ({})",
            self.reading_target, self.reading_type
        )?;
        match (&self.diet_rule, &self.vice) {
            (DietRule::CutVice, Some(vice)) => writeln!(f, "- **Diet**: cut {vice}")?,
            (diet, _) => writeln!(f, "- **Diet**: {diet}")?,
        }
        writeln!(f, "- **Alcohol**: {}", self.alcohol_rule)?;
        writeln!(f, "- **Photos**: {}", self.photo_rule)?;

        let tracked: Vec<&str> = [
            (self.track_weight, "weight"),
            (self.track_measurements, "measurements"),
            (self.use_journal, "journal"),
        ]
        .into_iter()
        .filter_map(|(on, name)| on.then_some(name))
        .collect();
        if !tracked.is_empty() {
            writeln!(f, "- **Tracking**: {}", tracked.join(", "))?;
        }
        Ok(())
    }
}

impl fmt::Display for Challenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;

        writeln!(f, "- Status: {}", self.status.with_icon())?;
        writeln!(f, "- Type: {}", self.challenge_type)?;
        writeln!(
            f,
            "- Dates: {} to {} ({} days)",
            self.start_date,
            self.end_date(),
            self.duration
        )?;
        writeln!(
            f,
            "- Progress: {}/{} days completed",
            self.completed_days(),
            self.duration
        )?;
        if self.is_active() {
            writeln!(
                f,
                "- Current day: {}",
                engine::compute_next_unlocked_day(self)
            )?;
        }
        if let Some(completed) = &self.completion_date {
            writeln!(f, "- Completed: {}", LocalDateTime(completed))?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        writeln!(f, "\n## Rules")?;
        writeln!(f)?;
        write!(f, "{}", self.rules)
    }
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Statistics")?;
        writeln!(f)?;
        writeln!(f, "- **Dates**: {} to {}", self.start_date, self.end_date)?;
        writeln!(f, "- **Perfect days**: {}", self.perfect_days)?;
        writeln!(f, "- **Days logged**: {}", self.active_days)?;
        writeln!(f, "- **Workouts**: {}", self.workouts)?;
        writeln!(f, "- **Pages read**: {}", self.pages_read)?;
        writeln!(f, "- **Water**: {} oz", self.water_ounces)?;
        writeln!(f, "- **Diet days**: {}", self.diet_days)?;
        writeln!(f, "- **Weight change**: {}", self.weight_delta)?;
        writeln!(f, "- **Measurement days**: {}", self.measurement_days)?;
        writeln!(f, "- **Journal entries**: {}", self.journal_entries)?;
        writeln!(f, "- **Required photos**: {}", self.required_photos)
    }
}

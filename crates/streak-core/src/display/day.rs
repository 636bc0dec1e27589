//! Display of a single day within its challenge.

use std::fmt;

use super::models::task_label;
use crate::{
    engine,
    models::{Challenge, DayRecord, TaskName},
    rules,
};

/// One day of a challenge rendered as a checklist.
///
/// Required tasks always appear, whether or not the day has been touched.
/// Workout slots and the photo task only show when the rules ask for them.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use streak_core::{display::DayView, models::{Challenge, ChallengeType, Preset}, rules};
///
/// let challenge = Challenge::new(
///     "Focus",
///     ChallengeType::Hard,
///     75,
///     date(2026, 1, 1),
///     rules::instantiate_preset(Preset::Hard),
/// );
/// let output = DayView::new(&challenge, 1).to_string();
/// assert!(output.contains("## Day 1 of 75 (2026-01-01)"));
/// assert!(output.contains("- [ ] Workout 2"));
/// ```
pub struct DayView<'a> {
    pub challenge: &'a Challenge,
    pub day: u32,
}

impl<'a> DayView<'a> {
    pub fn new(challenge: &'a Challenge, day: u32) -> Self {
        Self { challenge, day }
    }

    fn state(&self, record: &DayRecord) -> &'static str {
        if record.completed {
            "✓ completed"
        } else if !self.challenge.is_active() {
            "closed"
        } else if engine::is_day_selectable(self.challenge, self.day) {
            "open"
        } else {
            "locked"
        }
    }
}

fn checkbox(done: bool) -> &'static str {
    if done {
        "[x]"
    } else {
        "[ ]"
    }
}

impl fmt::Display for DayView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let empty = DayRecord::default();
        let record = self.challenge.day(self.day).unwrap_or(&empty);
        let rules_set = &self.challenge.rules;

        writeln!(
            f,
            "## Day {} of {} ({})",
            self.day,
            self.challenge.duration,
            self.challenge.day_date(self.day)
        )?;
        writeln!(f)?;
        writeln!(f, "Status: {}", self.state(record))?;
        writeln!(f)?;

        for task in rules::required_tasks(rules_set, self.day, self.challenge.duration) {
            let detail = match task {
                TaskName::Water => format!(" ({} oz)", rules_set.water_target),
                TaskName::Reading => format!(" ({} pages)", rules_set.reading_target),
                _ => task
                    .workout_number()
                    .and_then(|n| rules_set.workout_durations.get(usize::from(n) - 1))
                    .map(|minutes| format!(" ({minutes} min)"))
                    .unwrap_or_default(),
            };
            writeln!(
                f,
                "- {} {}{detail}",
                checkbox(record.tasks.get(task)),
                task_label(task)
            )?;
        }

        if record.photo_attached {
            writeln!(f, "\nPhoto attached.")?;
        }
        if let Some(weight) = record.weight {
            writeln!(f, "\n**Weight**: {weight}")?;
        }
        if record.has_measurements() {
            writeln!(f, "\n**Measurements**")?;
            writeln!(f)?;
            for (part, value) in &record.measurements {
                writeln!(f, "- {part}: {value}")?;
            }
        }
        if let Some(journal) = &record.journal {
            writeln!(f, "\n**Journal**")?;
            writeln!(f)?;
            writeln!(f, "{journal}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;
    use crate::models::{ChallengeType, PhotoRule, Preset};

    fn create_test_challenge() -> Challenge {
        let mut rules = rules::instantiate_preset(Preset::Soft);
        rules.photo_rule = PhotoRule::Off;
        Challenge::new("Soft", ChallengeType::Soft, 10, date(2026, 1, 1), rules)
    }

    #[test]
    fn test_untouched_day_lists_required_tasks() {
        let challenge = create_test_challenge();
        let output = DayView::new(&challenge, 1).to_string();

        assert!(output.contains("Status: open"));
        assert!(output.contains("- [ ] Diet"));
        assert!(output.contains("- [ ] Workout 1 (45 min)"));
        assert!(!output.contains("Workout 2"));
        assert!(!output.contains("Progress photo"));
    }

    #[test]
    fn test_locked_and_checked_days() {
        let mut challenge = create_test_challenge();
        assert!(DayView::new(&challenge, 3).to_string().contains("Status: locked"));

        let record = challenge.days.entry(1).or_default();
        record.tasks.water = true;
        record.weight = Some(172.4);
        let output = DayView::new(&challenge, 1).to_string();
        assert!(output.contains("- [x] Water (85 oz)"));
        assert!(output.contains("**Weight**: 172.4"));
    }
}

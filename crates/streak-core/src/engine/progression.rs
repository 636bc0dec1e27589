//! Day unlocking and challenge state transitions.

use jiff::{civil::Date, Timestamp};
use log::{debug, info};

use crate::{
    error::{Result, TrackerError},
    models::{Challenge, ChallengeStatus, DayRecord, TaskName},
    rules::{self, RuleEdit},
};

/// Day the caller should show by default: one past the highest completed day,
/// capped at the duration, or day 1 when nothing is completed yet.
pub fn compute_next_unlocked_day(challenge: &Challenge) -> u32 {
    challenge
        .days
        .iter()
        .filter(|(_, record)| record.completed)
        .map(|(day, _)| *day)
        .max()
        .map_or(1, |highest| highest.saturating_add(1).min(challenge.duration.max(1)))
}

/// Whether `day` may be opened: day 1 always, otherwise a completed day or
/// the day right after one.
pub fn is_day_selectable(challenge: &Challenge, day: u32) -> bool {
    day == 1
        || challenge.is_day_completed(day)
        || (day > 1 && challenge.is_day_completed(day - 1))
}

/// Flips one task checkbox, creating the day record on first touch.
pub fn toggle_task(challenge: &Challenge, day: u32, task: TaskName) -> Result<Challenge> {
    ensure_open_day(challenge, day)?;

    if let Some(number) = task.workout_number() {
        if number > challenge.rules.workout_count {
            return Err(TrackerError::validation(task.as_str()).with_reason(format!(
                "challenge is configured for {} workout(s)",
                challenge.rules.workout_count
            )));
        }
    }

    let mut next = challenge.clone();
    let record = next.days.entry(day).or_default();
    let value = !record.tasks.get(task);
    record.tasks.set(task, value);
    touch(&mut next);

    debug!(
        "Challenge {} day {day}: {} -> {value}",
        challenge.id,
        task.as_str()
    );
    Ok(next)
}

/// Marks a day completed once every task the rules require is checked.
///
/// Completing the final day also completes the challenge and stamps the
/// completion date.
pub fn complete_day(challenge: &Challenge, day: u32) -> Result<Challenge> {
    ensure_open_day(challenge, day)?;

    let empty = DayRecord::default();
    let record = challenge.day(day).unwrap_or(&empty);
    let missing: Vec<TaskName> = rules::required_tasks(&challenge.rules, day, challenge.duration)
        .into_iter()
        .filter(|task| !record.tasks.get(*task))
        .collect();
    if !missing.is_empty() {
        return Err(TrackerError::IncompleteTasks { day, missing });
    }

    let mut next = challenge.clone();
    next.days.entry(day).or_default().completed = true;
    touch(&mut next);
    debug!("Challenge {} day {day} completed", challenge.id);

    if day == challenge.duration {
        next.status = ChallengeStatus::Completed;
        next.completion_date = Some(next.updated_at);
        info!("Challenge {} '{}' completed", challenge.id, challenge.name);
    }

    Ok(next)
}

/// Gives up on an active challenge. Day records are left as they are.
pub fn mark_failed(challenge: &Challenge) -> Result<Challenge> {
    ensure_active(challenge)?;

    let mut next = challenge.clone();
    next.status = ChallengeStatus::Failed;
    touch(&mut next);
    info!("Challenge {} '{}' marked as failed", challenge.id, challenge.name);
    Ok(next)
}

pub fn edit_start_date(challenge: &Challenge, new_date: Date) -> Result<Challenge> {
    ensure_active(challenge)?;

    let mut next = challenge.clone();
    next.start_date = new_date;
    touch(&mut next);
    Ok(next)
}

/// Applies a rule edit and validates the result before it may be persisted.
pub fn edit_rules(challenge: &Challenge, edit: &RuleEdit) -> Result<Challenge> {
    ensure_active(challenge)?;

    let is_custom = challenge.challenge_type.is_custom();
    let edited = match edit {
        RuleEdit::Field { field, value } => {
            rules::apply_field_edit(&challenge.rules, *field, value, is_custom)
        }
        RuleEdit::Diet(diet) if is_custom => rules::apply_diet_rule_edit(&challenge.rules, *diet),
        RuleEdit::Diet(_) => challenge.rules.clone(),
        RuleEdit::Workouts(count) => rules::resize_workouts(&challenge.rules, *count, is_custom),
    };
    let edited = rules::normalized(&edited);
    rules::validate_for_start(&edited)?;

    let mut next = challenge.clone();
    next.rules = edited;
    touch(&mut next);
    Ok(next)
}

pub fn record_weight(challenge: &Challenge, day: u32, weight: f64) -> Result<Challenge> {
    ensure_selectable(challenge, day)?;
    if !challenge.rules.track_weight {
        return Err(TrackerError::validation("weight").with_reason("weight tracking is disabled"));
    }
    if !(weight.is_finite() && weight > 0.0) {
        return Err(TrackerError::validation("weight").with_reason("must be a positive number"));
    }

    let mut next = challenge.clone();
    next.days.entry(day).or_default().weight = Some(weight);
    touch(&mut next);
    Ok(next)
}

/// Stores the journal text for a day; blank text clears the entry.
pub fn record_journal(challenge: &Challenge, day: u32, text: &str) -> Result<Challenge> {
    ensure_selectable(challenge, day)?;
    if !challenge.rules.use_journal {
        return Err(TrackerError::validation("journal").with_reason("daily journal is disabled"));
    }

    let mut next = challenge.clone();
    let trimmed = text.trim();
    next.days.entry(day).or_default().journal =
        (!trimmed.is_empty()).then(|| trimmed.to_string());
    touch(&mut next);
    Ok(next)
}

pub fn record_measurement(
    challenge: &Challenge,
    day: u32,
    part: &str,
    value: f64,
) -> Result<Challenge> {
    ensure_selectable(challenge, day)?;
    if !challenge.rules.track_measurements {
        return Err(TrackerError::validation("measurements")
            .with_reason("measurement tracking is disabled"));
    }
    let part = part.trim().to_lowercase();
    if part.is_empty() {
        return Err(TrackerError::validation("measurements").with_reason("body part is required"));
    }
    if !(value.is_finite() && value > 0.0) {
        return Err(TrackerError::validation(part).with_reason("must be a positive number"));
    }

    let mut next = challenge.clone();
    next.days
        .entry(day)
        .or_default()
        .measurements
        .insert(part, value);
    touch(&mut next);
    Ok(next)
}

/// Flags a day as having a progress photo. Call only after the attachment
/// itself was stored.
pub fn mark_photo_attached(challenge: &Challenge, day: u32) -> Result<Challenge> {
    ensure_selectable(challenge, day)?;

    let mut next = challenge.clone();
    let record = next.days.entry(day).or_default();
    record.photo_attached = true;
    if !record.completed {
        record.tasks.progress_photo = true;
    }
    touch(&mut next);
    Ok(next)
}

fn ensure_active(challenge: &Challenge) -> Result<()> {
    if challenge.status.is_terminal() {
        return Err(TrackerError::invalid_transition(format!(
            "challenge {} is {}",
            challenge.id,
            challenge.status.as_str()
        )));
    }
    Ok(())
}

/// Status and gating checks shared by every per-day write.
fn ensure_selectable(challenge: &Challenge, day: u32) -> Result<()> {
    ensure_active(challenge)?;
    if day == 0 || day > challenge.duration {
        return Err(TrackerError::invalid_transition(format!(
            "day {day} is outside 1..={}",
            challenge.duration
        )));
    }
    if !is_day_selectable(challenge, day) {
        return Err(TrackerError::invalid_transition(format!(
            "day {day} is locked until day {} is completed",
            day - 1
        )));
    }
    Ok(())
}

/// Like [`ensure_selectable`], and the day's checkboxes must still be open.
fn ensure_open_day(challenge: &Challenge, day: u32) -> Result<()> {
    ensure_selectable(challenge, day)?;
    if challenge.is_day_completed(day) {
        return Err(TrackerError::invalid_transition(format!(
            "day {day} is already completed"
        )));
    }
    Ok(())
}

fn touch(challenge: &mut Challenge) {
    challenge.updated_at = Timestamp::now();
}

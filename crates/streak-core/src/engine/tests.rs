//! Tests for the progression engine and statistics.

use jiff::civil::date;

use super::*;
use crate::{
    error::TrackerError,
    models::{
        Challenge, ChallengeStatus, ChallengeType, DietRule, PhotoRule, Preset, RuleField,
        TaskName, WeightDelta,
    },
    rules::{self, RuleEdit},
};

/// Helper function to create an unsaved custom challenge without photo duties
fn create_test_challenge(duration: u32) -> Challenge {
    let mut rules = rules::instantiate_preset(Preset::Hard);
    rules.photo_rule = PhotoRule::Off;
    Challenge::new(
        "Test Challenge",
        ChallengeType::Custom,
        duration,
        date(2026, 1, 1),
        rules,
    )
}

/// Checks every required task of a day, then completes it
fn fill_and_complete(challenge: &Challenge, day: u32) -> crate::Result<Challenge> {
    let mut current = challenge.clone();
    for task in rules::required_tasks(&current.rules, day, current.duration) {
        if !current.day(day).is_some_and(|r| r.tasks.get(task)) {
            current = toggle_task(&current, day, task)?;
        }
    }
    complete_day(&current, day)
}

fn assert_sequential(challenge: &Challenge) {
    for (day, record) in &challenge.days {
        if record.completed && *day > 1 {
            assert!(
                challenge.is_day_completed(day - 1),
                "day {day} completed before day {}",
                day - 1
            );
        }
    }
}

fn permutations(items: &[u32]) -> Vec<Vec<u32>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }
    let mut result = Vec::new();
    for (i, item) in items.iter().enumerate() {
        let mut rest = items.to_vec();
        rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, *item);
            result.push(tail);
        }
    }
    result
}

#[test]
fn test_day_one_is_always_selectable() {
    let active = create_test_challenge(3);
    assert!(is_day_selectable(&active, 1));

    let failed = mark_failed(&active).unwrap();
    assert!(is_day_selectable(&failed, 1));

    let mut completed = active.clone();
    for day in 1..=3 {
        completed = fill_and_complete(&completed, day).unwrap();
    }
    assert_eq!(completed.status, ChallengeStatus::Completed);
    assert!(is_day_selectable(&completed, 1));
}

#[test]
fn test_day_selectable_rules() {
    let challenge = create_test_challenge(5);
    assert!(!is_day_selectable(&challenge, 2));

    let challenge = fill_and_complete(&challenge, 1).unwrap();
    assert!(is_day_selectable(&challenge, 1));
    assert!(is_day_selectable(&challenge, 2));
    assert!(!is_day_selectable(&challenge, 3));
}

#[test]
fn test_no_completion_order_breaks_sequence() {
    for order in permutations(&[1, 2, 3, 4]) {
        let mut challenge = create_test_challenge(4);
        for day in order {
            if let Ok(next) = fill_and_complete(&challenge, day) {
                challenge = next;
            }
            assert_sequential(&challenge);
        }
    }
}

#[test]
fn test_complete_day_out_of_order_is_invalid_transition() {
    let challenge = create_test_challenge(5);
    assert!(matches!(
        complete_day(&challenge, 2),
        Err(TrackerError::InvalidTransition { .. })
    ));
    assert!(matches!(
        toggle_task(&challenge, 3, TaskName::Water),
        Err(TrackerError::InvalidTransition { .. })
    ));
}

#[test]
fn test_complete_day_fails_for_every_incomplete_subset() {
    let challenge = create_test_challenge(5);
    let required = rules::required_tasks(&challenge.rules, 1, challenge.duration);
    let all = (1u32 << required.len()) - 1;

    for mask in 0..all {
        let mut current = challenge.clone();
        let mut expected_missing = Vec::new();
        for (bit, task) in required.iter().enumerate() {
            if mask & (1 << bit) != 0 {
                current = toggle_task(&current, 1, *task).unwrap();
            } else {
                expected_missing.push(*task);
            }
        }
        match complete_day(&current, 1) {
            Err(TrackerError::IncompleteTasks { day, missing }) => {
                assert_eq!(day, 1);
                assert_eq!(missing, expected_missing);
            }
            other => panic!("mask {mask:#b}: expected IncompleteTasks, got {other:?}"),
        }
    }
}

#[test]
fn test_photo_task_required_when_rule_demands_it() {
    let mut challenge = create_test_challenge(3);
    challenge.rules.photo_rule = PhotoRule::Daily;
    let mut current = challenge.clone();
    for task in [
        TaskName::Diet,
        TaskName::Workout1,
        TaskName::Workout2,
        TaskName::Water,
        TaskName::Reading,
    ] {
        current = toggle_task(&current, 1, task).unwrap();
    }
    assert!(matches!(
        complete_day(&current, 1),
        Err(TrackerError::IncompleteTasks { ref missing, .. }) if missing == &[TaskName::ProgressPhoto]
    ));

    let current = mark_photo_attached(&current, 1).unwrap();
    assert!(complete_day(&current, 1).is_ok());
}

#[test]
fn test_toggle_task_twice_restores_value() {
    let challenge = create_test_challenge(3);
    let once = toggle_task(&challenge, 1, TaskName::Reading).unwrap();
    assert!(once.day(1).unwrap().tasks.reading);
    let twice = toggle_task(&once, 1, TaskName::Reading).unwrap();
    assert!(!twice.day(1).unwrap().tasks.reading);
}

#[test]
fn test_toggle_task_does_not_mutate_input() {
    let challenge = create_test_challenge(3);
    let snapshot = challenge.clone();
    let _ = toggle_task(&challenge, 1, TaskName::Diet).unwrap();
    assert_eq!(challenge, snapshot);
    assert!(challenge.days.is_empty());
}

#[test]
fn test_toggle_task_rejects_completed_day_and_extra_workouts() {
    let challenge = fill_and_complete(&create_test_challenge(3), 1).unwrap();
    assert!(matches!(
        toggle_task(&challenge, 1, TaskName::Diet),
        Err(TrackerError::InvalidTransition { .. })
    ));
    assert!(matches!(
        toggle_task(&challenge, 2, TaskName::Workout3),
        Err(TrackerError::ValidationFailed { .. })
    ));
    assert!(matches!(
        toggle_task(&challenge, 4, TaskName::Diet),
        Err(TrackerError::InvalidTransition { .. })
    ));
}

#[test]
fn test_full_run_completes_challenge() {
    let mut challenge = create_test_challenge(3);
    for day in 1..=3 {
        challenge = fill_and_complete(&challenge, day).unwrap();
    }

    assert_eq!(challenge.status, ChallengeStatus::Completed);
    assert!(challenge.completion_date.is_some());
    assert_eq!(compute_stats(&challenge).perfect_days, 3);

    assert!(matches!(
        toggle_task(&challenge, 3, TaskName::Diet),
        Err(TrackerError::InvalidTransition { .. })
    ));
}

#[test]
fn test_completing_earlier_day_keeps_challenge_active() {
    let challenge = fill_and_complete(&create_test_challenge(3), 1).unwrap();
    assert_eq!(challenge.status, ChallengeStatus::Active);
    assert!(challenge.completion_date.is_none());
}

#[test]
fn test_mark_failed_transitions() {
    let challenge = fill_and_complete(&create_test_challenge(3), 1).unwrap();
    let failed = mark_failed(&challenge).unwrap();
    assert_eq!(failed.status, ChallengeStatus::Failed);
    assert!(failed.completion_date.is_none());
    assert_eq!(failed.days, challenge.days);

    assert!(matches!(
        mark_failed(&failed),
        Err(TrackerError::InvalidTransition { .. })
    ));
    assert!(matches!(
        complete_day(&failed, 2),
        Err(TrackerError::InvalidTransition { .. })
    ));
}

#[test]
fn test_mark_failed_on_completed_challenge() {
    let mut challenge = create_test_challenge(1);
    challenge = fill_and_complete(&challenge, 1).unwrap();
    assert_eq!(challenge.status, ChallengeStatus::Completed);

    let result = mark_failed(&challenge);
    assert!(matches!(result, Err(TrackerError::InvalidTransition { .. })));
    assert_eq!(challenge.status, ChallengeStatus::Completed);
}

#[test]
fn test_edit_start_date_only_while_active() {
    let challenge = create_test_challenge(3);
    let moved = edit_start_date(&challenge, date(2026, 2, 1)).unwrap();
    assert_eq!(moved.start_date, date(2026, 2, 1));

    let failed = mark_failed(&moved).unwrap();
    assert!(matches!(
        edit_start_date(&failed, date(2026, 3, 1)),
        Err(TrackerError::InvalidTransition { .. })
    ));
}

#[test]
fn test_next_unlocked_day() {
    let challenge = create_test_challenge(2);
    assert_eq!(compute_next_unlocked_day(&challenge), 1);

    let challenge = toggle_task(&challenge, 1, TaskName::Water).unwrap();
    assert_eq!(compute_next_unlocked_day(&challenge), 1);

    let challenge = fill_and_complete(&challenge, 1).unwrap();
    assert_eq!(compute_next_unlocked_day(&challenge), 2);

    let challenge = fill_and_complete(&challenge, 2).unwrap();
    assert_eq!(compute_next_unlocked_day(&challenge), 2);
}

#[test]
fn test_metrics_editable_after_day_completion() {
    let mut challenge = create_test_challenge(3);
    challenge.rules.track_weight = true;
    challenge.rules.use_journal = true;
    challenge.rules.track_measurements = true;
    let challenge = fill_and_complete(&challenge, 1).unwrap();

    let challenge = record_weight(&challenge, 1, 180.5).unwrap();
    let challenge = record_journal(&challenge, 1, "  felt great  ").unwrap();
    let challenge = record_measurement(&challenge, 1, "Waist", 34.0).unwrap();

    let day = challenge.day(1).unwrap();
    assert_eq!(day.weight, Some(180.5));
    assert_eq!(day.journal.as_deref(), Some("felt great"));
    assert_eq!(day.measurements.get("waist"), Some(&34.0));

    let cleared = record_journal(&challenge, 1, "   ").unwrap();
    assert!(cleared.day(1).unwrap().journal.is_none());
}

#[test]
fn test_metrics_validation() {
    let challenge = create_test_challenge(3);
    assert!(matches!(
        record_weight(&challenge, 1, 150.0),
        Err(TrackerError::ValidationFailed { .. })
    ));

    let mut tracked = challenge.clone();
    tracked.rules.track_weight = true;
    tracked.rules.track_measurements = true;
    assert!(record_weight(&tracked, 1, 0.0).is_err());
    assert!(record_weight(&tracked, 1, f64::NAN).is_err());
    assert!(record_measurement(&tracked, 1, "", 10.0).is_err());
    assert!(record_measurement(&tracked, 1, "hips", -1.0).is_err());
    assert!(matches!(
        record_weight(&tracked, 2, 150.0),
        Err(TrackerError::InvalidTransition { .. })
    ));
}

#[test]
fn test_photo_flag_on_completed_day_keeps_tasks() {
    let challenge = fill_and_complete(&create_test_challenge(3), 1).unwrap();
    let flagged = mark_photo_attached(&challenge, 1).unwrap();
    let day = flagged.day(1).unwrap();
    assert!(day.photo_attached);
    assert!(!day.tasks.progress_photo);
    assert!(day.completed);
}

#[test]
fn test_edit_rules_respects_lock() {
    let mut locked = create_test_challenge(3);
    locked.challenge_type = ChallengeType::Hard;

    let same = edit_rules(
        &locked,
        &RuleEdit::Field {
            field: RuleField::WaterTarget,
            value: "10".to_string(),
        },
    )
    .unwrap();
    assert_eq!(same.rules, locked.rules);

    let same = edit_rules(&locked, &RuleEdit::Workouts(3)).unwrap();
    assert_eq!(same.rules.workout_count, 2);

    let tracked = edit_rules(
        &locked,
        &RuleEdit::Field {
            field: RuleField::TrackWeight,
            value: "true".to_string(),
        },
    )
    .unwrap();
    assert!(tracked.rules.track_weight);
}

#[test]
fn test_edit_rules_validates_custom_values() {
    let challenge = create_test_challenge(3);
    let result = edit_rules(
        &challenge,
        &RuleEdit::Field {
            field: RuleField::ReadingTarget,
            value: "zero".to_string(),
        },
    );
    assert!(matches!(result, Err(TrackerError::ValidationFailed { .. })));

    let mut soft = challenge.clone();
    soft.rules.diet_rule = DietRule::OneCheatDay;
    soft.rules.alcohol_rule = crate::models::AlcoholRule::NoLimit;
    let strict = edit_rules(&soft, &RuleEdit::Diet(DietRule::Strict)).unwrap();
    assert_eq!(strict.rules.alcohol_rule, crate::models::AlcoholRule::Abstain);

    let resized = edit_rules(&challenge, &RuleEdit::Workouts(3)).unwrap();
    assert_eq!(resized.rules.workout_durations.len(), 3);
}

#[test]
fn test_stats_of_empty_challenge() {
    let stats = compute_stats(&create_test_challenge(75));
    assert_eq!(stats.pages_read, 0);
    assert_eq!(stats.water_ounces, 0);
    assert_eq!(stats.workouts, 0);
    assert_eq!(stats.diet_days, 0);
    assert_eq!(stats.measurement_days, 0);
    assert_eq!(stats.journal_entries, 0);
    assert_eq!(stats.perfect_days, 0);
    assert_eq!(stats.active_days, 0);
    assert_eq!(stats.required_photos, 0);
    assert_eq!(stats.weight_delta, WeightDelta::InsufficientData);
}

#[test]
fn test_stats_water_total() {
    let mut challenge = create_test_challenge(3);
    challenge.rules.water_target = 128;
    let challenge = fill_and_complete(&challenge, 1).unwrap();
    let mut challenge = toggle_task(&challenge, 2, TaskName::Water).unwrap();
    challenge.days.entry(3).or_default().tasks.reading = true;

    let stats = compute_stats(&challenge);
    assert_eq!(stats.water_ounces, 256);
    assert_eq!(stats.pages_read, 20);
    assert_eq!(stats.workouts, 2);
    assert_eq!(stats.diet_days, 1);
    assert_eq!(stats.active_days, 3);
}

#[test]
fn test_stats_weight_delta_and_entries() {
    let mut challenge = create_test_challenge(10);
    challenge.rules.track_weight = true;
    challenge.rules.use_journal = true;
    let challenge = record_weight(&challenge, 1, 200.0).unwrap();
    let stats = compute_stats(&challenge);
    assert_eq!(stats.weight_delta, WeightDelta::InsufficientData);

    let mut challenge = fill_and_complete(&challenge, 1).unwrap();
    challenge = record_journal(&challenge, 2, "day two").unwrap();
    challenge.days.entry(5).or_default().weight = Some(194.5);
    challenge.days.entry(3).or_default().weight = Some(197.0);

    let stats = compute_stats(&challenge);
    assert_eq!(stats.weight_delta, WeightDelta::Change(-5.5));
    assert_eq!(stats.journal_entries, 1);
}

#[test]
fn test_stats_required_photos_and_dates() {
    let mut challenge = create_test_challenge(10);
    challenge.rules.photo_rule = PhotoRule::Weekly;
    let stats = compute_stats(&challenge);
    assert_eq!(stats.required_photos, 2);
    assert_eq!(stats.start_date, date(2026, 1, 1));
    assert_eq!(stats.end_date, date(2026, 1, 10));

    challenge.rules.photo_rule = PhotoRule::Daily;
    assert_eq!(compute_stats(&challenge).required_photos, 10);
    challenge.rules.photo_rule = PhotoRule::FirstAndLast;
    assert_eq!(compute_stats(&challenge).required_photos, 2);
    challenge.duration = 1;
    assert_eq!(compute_stats(&challenge).required_photos, 1);
}

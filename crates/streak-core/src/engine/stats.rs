//! Statistics aggregation over a challenge's day records.

use crate::models::{Challenge, StatsSnapshot, WeightDelta};

/// Computes the completion summary in a single pass over the day map.
///
/// Page and water totals credit the configured target for every day the
/// matching task is checked. The required photo count comes from the photo
/// rule and duration alone, not from uploaded attachments.
pub fn compute_stats(challenge: &Challenge) -> StatsSnapshot {
    let rules = &challenge.rules;

    let mut pages_read = 0u64;
    let mut water_ounces = 0u64;
    let mut workouts = 0u32;
    let mut diet_days = 0u32;
    let mut measurement_days = 0u32;
    let mut journal_entries = 0u32;
    let mut perfect_days = 0u32;
    let mut first_weight: Option<f64> = None;
    let mut last_weight: Option<f64> = None;
    let mut weight_entries = 0u32;

    // BTreeMap iteration is ascending by day number
    for record in challenge.days.values() {
        let tasks = &record.tasks;
        if tasks.reading {
            pages_read += u64::from(rules.reading_target);
        }
        if tasks.water {
            water_ounces += u64::from(rules.water_target);
        }
        workouts += tasks.workouts_done();
        if tasks.diet {
            diet_days += 1;
        }
        if record.has_measurements() {
            measurement_days += 1;
        }
        if record.has_journal() {
            journal_entries += 1;
        }
        if record.completed {
            perfect_days += 1;
        }
        if let Some(weight) = record.weight.filter(|w| *w > 0.0) {
            first_weight.get_or_insert(weight);
            last_weight = Some(weight);
            weight_entries += 1;
        }
    }

    let weight_delta = match (first_weight, last_weight) {
        (Some(first), Some(last)) if weight_entries >= 2 => WeightDelta::Change(last - first),
        _ => WeightDelta::InsufficientData,
    };

    StatsSnapshot {
        pages_read,
        water_ounces,
        workouts,
        diet_days,
        weight_delta,
        measurement_days,
        journal_entries,
        perfect_days,
        required_photos: rules.photo_rule.required_count(challenge.duration),
        active_days: challenge.days.len() as u32,
        start_date: challenge.start_date,
        end_date: challenge.end_date(),
    }
}

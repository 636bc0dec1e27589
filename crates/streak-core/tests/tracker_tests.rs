mod common;

use std::path::Path;

use common::{create_params, create_test_tracker};
use streak_core::{
    models::{ChallengeStatus, ChallengeType, PhotoRule, Preset, TaskName, WeightDelta},
    params::{AttachPhoto, CreateChallenge, DayRef, Id, RecordMeasurement, RecordWeight, ToggleTask},
    rules,
    store::SqliteStore,
    Tracker, TrackerBuilder, TrackerError,
};
use tempfile::TempDir;

async fn open_tracker(db_path: &Path) -> Tracker {
    TrackerBuilder::new()
        .with_database_path(Some(db_path))
        .build()
        .await
        .expect("Failed to open tracker")
}

async fn check_all(tracker: &Tracker, id: u64, day: u32) {
    let challenge = tracker.get_challenge(&Id { id }).await.unwrap();
    for task in rules::required_tasks(&challenge.rules, day, challenge.duration) {
        tracker
            .toggle_task(&ToggleTask { id, day, task })
            .await
            .expect("Failed to toggle task");
    }
}

#[tokio::test]
async fn test_complete_challenge_workflow() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let mut custom = rules::instantiate_preset(Preset::Hard);
    custom.photo_rule = PhotoRule::Weekly;
    custom.track_weight = true;
    custom.track_measurements = true;
    let challenge = tracker
        .create_challenge(&CreateChallenge {
            duration: Some(10),
            rules: Some(custom),
            ..create_params("Ten days", ChallengeType::Custom)
        })
        .await
        .expect("Failed to create challenge");

    for day in 1..=10 {
        check_all(&tracker, challenge.id, day).await;
        if day == 1 || day == 10 {
            tracker
                .record_weight(&RecordWeight {
                    id: challenge.id,
                    day,
                    weight: if day == 1 { 200.0 } else { 195.5 },
                })
                .await
                .unwrap();
        }
        tracker
            .complete_day(&DayRef {
                id: challenge.id,
                day,
            })
            .await
            .expect("Failed to complete day");
    }

    tracker
        .record_measurement(&RecordMeasurement {
            id: challenge.id,
            day: 3,
            part: "Waist".to_string(),
            value: 34.0,
        })
        .await
        .expect_err("completed challenge must reject metrics");

    let finished = tracker.get_challenge(&Id { id: challenge.id }).await.unwrap();
    assert_eq!(finished.status, ChallengeStatus::Completed);
    assert!(finished.completion_date.is_some());

    let stats = tracker.stats(&Id { id: challenge.id }).await.unwrap();
    assert_eq!(stats.perfect_days, 10);
    assert_eq!(stats.workouts, 20);
    assert_eq!(stats.water_ounces, 1280);
    assert_eq!(stats.required_photos, 2);
    assert_eq!(stats.weight_delta, WeightDelta::Change(-4.5));
}

#[tokio::test]
async fn test_database_persistence_across_trackers() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("nested").join("streak.db");

    let id = {
        let tracker = TrackerBuilder::new()
            .with_database_path(Some(&db_path))
            .build()
            .await
            .unwrap();
        let challenge = tracker
            .create_challenge(&create_params("Persisted", ChallengeType::Soft))
            .await
            .unwrap();
        tracker
            .toggle_task(&ToggleTask {
                id: challenge.id,
                day: 1,
                task: TaskName::Reading,
            })
            .await
            .unwrap();
        challenge.id
    };

    let tracker = TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .unwrap();
    let challenge = tracker.get_challenge(&Id { id }).await.unwrap();
    assert_eq!(challenge.name, "Persisted");
    assert!(challenge.day(1).unwrap().tasks.reading);
    assert_eq!(tracker.active_challenge().await.unwrap().map(|c| c.id), Some(id));
}

#[tokio::test]
async fn test_concurrent_writers_conflict() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("shared.db");
    let phone = open_tracker(&db_path).await;
    let laptop = open_tracker(&db_path).await;

    let challenge = phone
        .create_challenge(&create_params("Shared", ChallengeType::Hard))
        .await
        .unwrap();

    // Both devices read the same revision
    let seen_by_phone = phone.get_challenge(&Id { id: challenge.id }).await.unwrap();
    let seen_by_laptop = laptop.get_challenge(&Id { id: challenge.id }).await.unwrap();
    assert_eq!(seen_by_phone.revision, seen_by_laptop.revision);

    let phone_edit = streak_core::engine::toggle_task(&seen_by_phone, 1, TaskName::Water).unwrap();
    let laptop_edit =
        streak_core::engine::toggle_task(&seen_by_laptop, 1, TaskName::Reading).unwrap();

    phone.save(phone_edit).await.expect("First write wins");
    let result = laptop.save(laptop_edit).await;
    assert!(matches!(result, Err(TrackerError::Conflict { .. })));

    // Re-issuing the operation starts from the fresh snapshot
    let retried = laptop
        .toggle_task(&ToggleTask {
            id: challenge.id,
            day: 1,
            task: TaskName::Reading,
        })
        .await
        .unwrap();
    let record = retried.day(1).unwrap();
    assert!(record.tasks.water);
    assert!(record.tasks.reading);
}

#[tokio::test]
async fn test_photo_round_trip_on_disk() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let challenge = tracker
        .create_challenge(&create_params("Photos", ChallengeType::Hard))
        .await
        .unwrap();

    let updated = tracker
        .attach_photo(&AttachPhoto {
            id: challenge.id,
            day: 1,
            mime_type: "image/jpeg".to_string(),
            data: vec![0xff, 0xd8, 0xff, 0xe0],
        })
        .await
        .expect("Failed to attach photo");
    assert!(updated.day(1).unwrap().photo_attached);

    let photo = tracker
        .get_photo(&DayRef {
            id: challenge.id,
            day: 1,
        })
        .await
        .unwrap()
        .expect("photo should be stored");
    assert_eq!(photo.mime_type, "image/jpeg");
    assert_eq!(photo.data.len(), 4);

    let missing = tracker
        .get_photo(&DayRef {
            id: challenge.id,
            day: 2,
        })
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_error_handling_invalid_operations() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let result = tracker.get_challenge(&Id { id: 999 }).await;
    assert!(matches!(result, Err(TrackerError::ChallengeNotFound { id: 999 })));

    let result = tracker.mark_failed(&Id { id: 999 }).await;
    assert!(matches!(result, Err(ref e) if e.is_not_found()));

    let challenge = tracker
        .create_challenge(&create_params("Errors", ChallengeType::Hard))
        .await
        .unwrap();

    let result = tracker
        .toggle_task(&ToggleTask {
            id: challenge.id,
            day: 0,
            task: TaskName::Diet,
        })
        .await;
    assert!(matches!(result, Err(TrackerError::InvalidTransition { .. })));

    let result = tracker
        .toggle_task(&ToggleTask {
            id: challenge.id,
            day: 76,
            task: TaskName::Diet,
        })
        .await;
    assert!(matches!(result, Err(TrackerError::InvalidTransition { .. })));

    let result = tracker
        .toggle_task(&ToggleTask {
            id: challenge.id,
            day: 1,
            task: TaskName::Workout3,
        })
        .await;
    assert!(matches!(result, Err(TrackerError::ValidationFailed { .. })));

    let failed = tracker.mark_failed(&Id { id: challenge.id }).await.unwrap();
    assert_eq!(failed.status, ChallengeStatus::Failed);
    let result = tracker.mark_failed(&Id { id: challenge.id }).await;
    assert!(matches!(result, Err(TrackerError::InvalidTransition { .. })));
}

#[tokio::test]
async fn test_reset_all_clears_database() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    let first = tracker
        .create_challenge(&create_params("First", ChallengeType::Hard))
        .await
        .unwrap();
    tracker.mark_failed(&Id { id: first.id }).await.unwrap();
    tracker
        .create_challenge(&create_params("Second", ChallengeType::Soft))
        .await
        .unwrap();
    assert_eq!(tracker.list_challenges().await.unwrap().len(), 2);

    tracker.reset_all().await.unwrap();

    assert!(tracker.list_challenges().await.unwrap().is_empty());
    assert!(tracker.active_challenge().await.unwrap().is_none());
}

#[tokio::test]
async fn test_unreachable_database_is_unavailable() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("missing").join("streak.db");

    let result = SqliteStore::open(&db_path).await;
    assert!(matches!(result, Err(TrackerError::StorageUnavailable { .. })));
}

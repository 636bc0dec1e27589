use jiff::civil::date;
use streak_core::{models::ChallengeType, params::CreateChallenge, Tracker, TrackerBuilder};
use tempfile::TempDir;

/// Helper function to create a tracker on a fresh database file
pub async fn create_test_tracker() -> (TempDir, Tracker) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let tracker = TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create tracker");
    (temp_dir, tracker)
}

pub fn create_params(name: &str, challenge_type: ChallengeType) -> CreateChallenge {
    CreateChallenge {
        name: name.to_string(),
        challenge_type,
        duration: None,
        start_date: Some(date(2026, 1, 1)),
        rules: None,
    }
}

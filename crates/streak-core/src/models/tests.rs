#[cfg(test)]
mod model_tests {
    use jiff::civil::date;

    use crate::{
        models::{
            AlcoholRule, Challenge, ChallengeStatus, ChallengeType, DayRecord, DietRule,
            PhotoRule, Preset, ReadingType, RuleField, TaskName,
        },
        rules,
    };

    fn create_test_challenge() -> Challenge {
        Challenge::new(
            "Test Challenge",
            ChallengeType::Balanced,
            75,
            date(2026, 1, 1),
            rules::instantiate_preset(Preset::Balanced),
        )
    }

    #[test]
    fn test_new_challenge_is_active_and_empty() {
        let challenge = create_test_challenge();
        assert_eq!(challenge.id, 0);
        assert!(challenge.revision.is_none());
        assert_eq!(challenge.status, ChallengeStatus::Active);
        assert!(challenge.days.is_empty());
        assert!(challenge.completion_date.is_none());
    }

    #[test]
    fn test_day_dates() {
        let challenge = create_test_challenge();
        assert_eq!(challenge.day_date(1), date(2026, 1, 1));
        assert_eq!(challenge.day_date(32), date(2026, 2, 1));
        assert_eq!(challenge.end_date(), date(2026, 3, 16));
    }

    #[test]
    fn test_status_parsing_and_icons() {
        assert_eq!("Active".parse::<ChallengeStatus>(), Ok(ChallengeStatus::Active));
        assert_eq!("failed".parse::<ChallengeStatus>(), Ok(ChallengeStatus::Failed));
        assert!("paused".parse::<ChallengeStatus>().is_err());
        assert!(ChallengeStatus::Completed.is_terminal());
        assert!(!ChallengeStatus::Active.is_terminal());
        assert_eq!(ChallengeStatus::Failed.with_icon(), "✗ Failed");
    }

    #[test]
    fn test_challenge_type_presets() {
        assert_eq!(ChallengeType::Hard.preset(), Some(Preset::Hard));
        assert_eq!(ChallengeType::Custom.preset(), None);
        assert_eq!(ChallengeType::from(Preset::Soft), ChallengeType::Soft);
        assert_eq!("CUSTOM".parse::<ChallengeType>(), Ok(ChallengeType::Custom));
    }

    #[test]
    fn test_rule_enum_parsing() {
        assert_eq!("non-fiction".parse::<ReadingType>(), Ok(ReadingType::NonFiction));
        assert_eq!("cut vice".parse::<DietRule>(), Ok(DietRule::CutVice));
        assert_eq!("none".parse::<AlcoholRule>(), Ok(AlcoholRule::Abstain));
        assert_eq!("first-and-last".parse::<PhotoRule>(), Ok(PhotoRule::FirstAndLast));
        assert!("monthly".parse::<PhotoRule>().is_err());
    }

    #[test]
    fn test_rule_field_parsing() {
        assert_eq!("water".parse::<RuleField>(), Ok(RuleField::WaterTarget));
        assert_eq!(
            "workout-duration-2".parse::<RuleField>(),
            Ok(RuleField::WorkoutDuration(1))
        );
        assert!("workout_duration_0".parse::<RuleField>().is_err());
        assert_eq!(RuleField::WorkoutDuration(2).to_string(), "workout_duration_3");
        assert_eq!(
            RuleField::UseJournal.to_string().parse::<RuleField>(),
            Ok(RuleField::UseJournal)
        );
    }

    #[test]
    fn test_task_names() {
        assert_eq!("progress-photo".parse::<TaskName>(), Ok(TaskName::ProgressPhoto));
        assert_eq!("workout_2".parse::<TaskName>(), Ok(TaskName::Workout2));
        assert_eq!(TaskName::workout(3), Some(TaskName::Workout3));
        assert_eq!(TaskName::workout(4), None);
        assert_eq!(TaskName::Water.workout_number(), None);
    }

    #[test]
    fn test_day_record_helpers() {
        let mut record = DayRecord::default();
        assert!(!record.has_journal());
        record.journal = Some("   ".to_string());
        assert!(!record.has_journal());
        record.journal = Some("ok".to_string());
        assert!(record.has_journal());

        record.tasks.set(TaskName::Workout1, true);
        record.tasks.set(TaskName::Workout3, true);
        assert_eq!(record.tasks.workouts_done(), 2);
        assert!(record.tasks.get(TaskName::Workout3));
    }

    #[test]
    fn test_challenge_document_format() {
        let mut challenge = create_test_challenge();
        challenge.days.entry(3).or_default().tasks.water = true;

        let json = serde_json::to_value(&challenge).unwrap();
        assert_eq!(json["status"], "active");
        assert_eq!(json["challenge_type"], "balanced");
        assert_eq!(json["start_date"], "2026-01-01");
        assert_eq!(json["rules"]["alcohol_rule"], "none");
        assert_eq!(json["rules"]["photo_rule"], "weekly");
        assert_eq!(json["days"]["3"]["tasks"]["water"], true);
        assert!(json.get("revision").is_none());

        let parsed: Challenge = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, challenge);
    }
}

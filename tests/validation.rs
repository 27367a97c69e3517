#[cfg(test)]
mod tests {
    use pawlog::api::models::CreateActivityRequest;
    use pawlog::api::validation::{validate_activity, validate_message, MessageError};
    use pawlog::store::ActivityType;
    use serde_json::json;

    fn request(body: serde_json::Value) -> CreateActivityRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_valid_activity_is_normalized() {
        let new = validate_activity(request(json!({
            "petName": "  Rex  ",
            "activityType": "walk",
            "duration": "12.5",
            "dateTime": "2024-01-15T10:30",
        })))
        .unwrap();

        assert_eq!(new.pet_name, "Rex");
        assert_eq!(new.activity_type, ActivityType::Walk);
        assert_eq!(new.duration, 12.5);
        assert_eq!(new.date_time, "2024-01-15T10:30");
        assert_eq!(new.occurred_on.to_string(), "2024-01-15");
    }

    #[test]
    fn test_zoned_and_long_form_timestamps_parse() {
        let valid = |date_time: &str| {
            validate_activity(request(json!({
                "petName": "Rex",
                "activityType": "meal",
                "duration": 1,
                "dateTime": date_time,
            })))
        };

        assert!(valid("2024-01-15T10:30Z").is_ok());
        assert!(valid("2024-01-15T10:30:00.000+0000").is_ok());
        assert!(valid("2024-01-15T10:30:00-05:00").is_ok());
        assert!(valid("2024-01-15 10:30+0200").is_ok());

        let long_form = valid("January 15, 2024 10:30").unwrap();
        assert_eq!(long_form.occurred_on.to_string(), "2024-01-15");
        let short_month = valid("Jan 15, 2024").unwrap();
        assert_eq!(short_month.occurred_on.to_string(), "2024-01-15");

        assert!(valid("2024-01-15T10:30Zulu").is_err());
        assert!(valid("15th of never").is_err());
    }

    #[test]
    fn test_every_violation_is_reported() {
        let errors = validate_activity(request(json!({}))).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&"Pet name is required".to_string()));
        assert!(errors.contains(&"Date and time are required".to_string()));

        let errors = validate_activity(request(json!({
            "petName": "   ",
            "activityType": "nap",
            "duration": 0,
            "dateTime": "not a date",
        })))
        .unwrap_err();
        assert_eq!(
            errors,
            vec![
                "Pet name is required",
                "Valid activity type is required (walk, meal, medication)",
                "Duration/quantity must be greater than 0",
                "Valid date and time format is required",
            ]
        );
    }

    #[test]
    fn test_error_count_matches_broken_rules() {
        let errors = validate_activity(request(json!({
            "petName": "Rex",
            "activityType": "meal",
            "duration": -3,
            "dateTime": "2024-01-15T08:00:00Z",
        })))
        .unwrap_err();
        assert_eq!(errors, vec!["Duration/quantity must be greater than 0"]);

        let errors = validate_activity(request(json!({
            "petName": "Rex",
            "activityType": "Walk",
            "duration": "abc",
            "dateTime": "2024-01-15",
        })))
        .unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_message_is_trimmed() {
        assert_eq!(validate_message(Some("  hi there \n"), 1000).unwrap(), "hi there");
    }

    #[test]
    fn test_blank_message_is_rejected() {
        assert_eq!(validate_message(None, 1000), Err(MessageError::Empty));
        let err = validate_message(Some(" \t "), 1000).unwrap_err();
        assert_eq!(err, MessageError::Empty);
        assert_eq!(err.reason(), "empty");
    }

    #[test]
    fn test_length_is_checked_after_trimming() {
        let padded = format!("   {}   ", "a".repeat(1000));
        assert!(validate_message(Some(padded.as_str()), 1000).is_ok());

        let long = "b".repeat(1001);
        let err = validate_message(Some(long.as_str()), 1000).unwrap_err();
        assert_eq!(err.reason(), "too_long");
        assert_eq!(err.to_string(), "Message is too long (maximum 1000 characters)");
    }
}

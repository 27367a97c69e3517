#[cfg(test)]
mod tests {
    use pawlog::responder::{matching_rule, respond, RULES};
    use pawlog::summary::DailySummary;

    fn walks(minutes: f64) -> DailySummary {
        DailySummary {
            walks: minutes,
            total_activities: usize::from(minutes > 0.0),
            ..Default::default()
        }
    }

    fn meals(count: usize) -> DailySummary {
        DailySummary {
            meals: count,
            total_activities: count,
            ..Default::default()
        }
    }

    fn rule_name(message: &str) -> Option<&'static str> {
        matching_rule(message).map(|r| r.name)
    }

    #[test]
    fn test_rule_order_is_fixed() {
        let names: Vec<_> = RULES.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            ["walk", "meal", "medication", "summary", "help", "thanks", "greeting"]
        );
    }

    #[test]
    fn test_first_match_wins() {
        // "walks" beats "today" and "how"
        assert_eq!(rule_name("How many walks today?"), Some("walk"));
        // "food" beats "what"
        assert_eq!(rule_name("What food did she get?"), Some("meal"));
        // "med" beats "status"
        assert_eq!(rule_name("Meds status"), Some("medication"));
        assert_eq!(rule_name("Show me the summary"), Some("summary"));
        assert_eq!(rule_name("Thanks a lot"), Some("thanks"));
        assert_eq!(rule_name("HEY"), Some("greeting"));
        assert_eq!(rule_name("blorp"), None);
    }

    #[test]
    fn test_keywords_match_inside_words() {
        // "eat" inside "great", "hi" inside "this"
        assert_eq!(rule_name("great"), Some("meal"));
        assert_eq!(rule_name("this"), Some("greeting"));
    }

    #[test]
    fn test_walk_thresholds() {
        let zero = respond("How many walks today?", &walks(0.0));
        assert!(zero.contains("0 minutes"));
        assert!(zero.contains("Time for a walk!"));

        let short = respond("walk?", &walks(12.5));
        assert!(short.contains("12.5 minutes"));
        assert!(short.contains("Consider adding more walks"));

        let good = respond("How many walks today?", &walks(45.0));
        assert!(good.contains("45 minutes"));
        assert!(good.contains("good amount"));

        let edge = respond("exercise", &walks(60.0));
        assert!(edge.contains("good amount"));

        let lots = respond("exercise", &walks(61.0));
        assert!(lots.contains("very active"));
    }

    #[test]
    fn test_meal_thresholds() {
        assert!(respond("meals?", &meals(0)).contains("Don't forget to feed"));
        assert!(respond("meals?", &meals(1)).contains("eating enough"));
        assert!(respond("meals?", &meals(2)).contains("Good feeding schedule"));
        assert!(respond("meals?", &meals(3)).contains("Good feeding schedule"));
        assert!(respond("meals?", &meals(4)).contains("quite a few meals"));
    }

    #[test]
    fn test_medication_replies() {
        let none = respond("medicine", &DailySummary::default());
        assert!(none.contains("0 medications"));
        assert!(none.contains("as prescribed"));

        let given = respond(
            "medicine",
            &DailySummary {
                medications: 2,
                total_activities: 2,
                ..Default::default()
            },
        );
        assert!(given.contains("2 medications"));
        assert!(given.contains("never skip doses"));
    }

    #[test]
    fn test_summary_closing_depends_on_total() {
        let empty = respond("status", &DailySummary::default());
        assert!(empty.contains("Total activities logged: 0"));
        assert!(empty.contains("Start logging"));

        let busy = respond(
            "status",
            &DailySummary {
                walks: 30.0,
                meals: 2,
                medications: 1,
                total_activities: 4,
            },
        );
        assert!(busy.contains("30 minutes of walking, 2 meals, and 1 medications"));
        assert!(busy.contains("Keep up the good work"));
    }

    #[test]
    fn test_greeting_and_fallback_use_todays_tally() {
        assert!(respond("hello", &DailySummary::default()).contains("Ready to start tracking"));
        assert!(respond("hello", &meals(3)).contains("logged 3 activities today"));

        let quiet = respond("blorp", &DailySummary::default());
        assert!(quiet.starts_with("I understand"));
        assert!(!quiet.contains("So far today"));

        let busy = respond("blorp", &meals(2));
        assert!(busy.contains("So far today: 0 minutes of walking, 2 meals, and 0 medications."));
    }
}

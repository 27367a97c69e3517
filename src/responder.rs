//! Rule-based chat replies about today's activities.
//!
//! Rules are checked in table order against the lowercased message and the
//! first one whose keyword appears anywhere in the text answers. Keywords are
//! plain substrings, so "hi" also fires inside "this" or "which".

use crate::summary::DailySummary;

pub struct Rule {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    reply: fn(&DailySummary) -> String,
}

impl Rule {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k))
    }
}

pub const RULES: &[Rule] = &[
    Rule {
        name: "walk",
        keywords: &["walk", "exercise"],
        reply: walk_reply,
    },
    Rule {
        name: "meal",
        keywords: &["meal", "food", "eat"],
        reply: meal_reply,
    },
    Rule {
        name: "medication",
        keywords: &["medication", "medicine", "med"],
        reply: medication_reply,
    },
    Rule {
        name: "summary",
        keywords: &["summary", "today", "status"],
        reply: summary_reply,
    },
    Rule {
        name: "help",
        keywords: &["help", "what", "how"],
        reply: help_reply,
    },
    Rule {
        name: "thanks",
        keywords: &["thank"],
        reply: thanks_reply,
    },
    Rule {
        name: "greeting",
        keywords: &["hello", "hi", "hey"],
        reply: greeting_reply,
    },
];

/// The rule that would answer `message`, or `None` for the fallback.
pub fn matching_rule(message: &str) -> Option<&'static Rule> {
    let lowered = message.to_lowercase();
    RULES.iter().find(|rule| rule.matches(&lowered))
}

pub fn respond(message: &str, today: &DailySummary) -> String {
    match matching_rule(message) {
        Some(rule) => (rule.reply)(today),
        None => fallback_reply(today),
    }
}

fn walk_reply(s: &DailySummary) -> String {
    let advice = if s.walks == 0.0 {
        "Time for a walk! Regular exercise is important for your pet's health and happiness."
    } else if s.walks < 30.0 {
        "Consider adding more walks for better health! Most dogs need 30-60 minutes of daily exercise."
    } else if s.walks > 60.0 {
        "Wow! Your pet is very active today! Make sure they have plenty of water and rest."
    } else {
        "Great job on keeping them active! This is a good amount of daily exercise."
    };
    format!("Your pet has walked {} minutes today. {}", s.walks, advice)
}

fn meal_reply(s: &DailySummary) -> String {
    let advice = match s.meals {
        0 => "Don't forget to feed your pet! Regular feeding times help maintain their health.",
        1 => "Make sure they're eating enough throughout the day! Most pets need 2-3 meals daily.",
        2 | 3 => "Good feeding schedule! Consistency in meal times helps with digestion.",
        _ => "That's quite a few meals! Make sure portions are appropriate for your pet's size and age.",
    };
    format!("Your pet has had {} meals today. {}", s.meals, advice)
}

fn medication_reply(s: &DailySummary) -> String {
    let advice = if s.medications == 0 {
        "If your pet needs medication, don't forget to administer it as prescribed by your vet."
    } else {
        "Always follow your vet's instructions and never skip doses! Consistent medication helps your pet stay healthy."
    };
    format!("Your pet has had {} medications today. {}", s.medications, advice)
}

fn summary_reply(s: &DailySummary) -> String {
    let closing = if s.is_empty() {
        "Start logging some activities to track your pet's day!"
    } else {
        "Keep up the good work caring for your pet!"
    };
    format!(
        "Today's summary: {} minutes of walking, {} meals, and {} medications. Total activities logged: {}. {}",
        s.walks, s.meals, s.medications, s.total_activities, closing
    )
}

fn help_reply(_: &DailySummary) -> String {
    "I can help you track your pet's activities! Ask me about walks, meals, medications, or request today's summary. \
     I remember our conversation and your pet's activity patterns. \
     Try asking: \"How many walks today?\" or \"Show me today's summary\""
        .to_string()
}

fn thanks_reply(_: &DailySummary) -> String {
    "You're welcome! I'm here to help you keep track of your pet's health and activities. \
     Feel free to ask me anything about your pet's daily routine!"
        .to_string()
}

fn greeting_reply(s: &DailySummary) -> String {
    let middle = if s.is_empty() {
        "Ready to start tracking your pet's activities?".to_string()
    } else {
        format!("I see you've logged {} activities today.", s.total_activities)
    };
    format!("Hello! I'm your pet activity assistant. {} How can I help you today?", middle)
}

fn fallback_reply(s: &DailySummary) -> String {
    let mut reply = String::from("I understand you're asking about your pet's activities. ");
    if !s.is_empty() {
        reply.push_str(&format!(
            "So far today: {} minutes of walking, {} meals, and {} medications. ",
            s.walks, s.meals, s.medications
        ));
    }
    reply.push_str(
        "Feel free to ask me about walks, meals, medications, or request today's summary. \
         I'm here to help you keep track of your pet's daily activities!",
    );
    reply
}

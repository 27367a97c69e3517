use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityType {
    Walk,
    Meal,
    Medication,
}

impl ActivityType {
    pub const ALL: [ActivityType; 3] = [Self::Walk, Self::Meal, Self::Medication];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Walk => "walk",
            Self::Meal => "meal",
            Self::Medication => "medication",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityType {
    type Err = ();

    /// Exact, case-sensitive match against the closed set.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or(())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: u64,
    pub pet_name: String,
    pub activity_type: ActivityType,
    #[serde(serialize_with = "serialize_quantity")]
    pub duration: f64,
    /// Echoed back exactly as submitted.
    pub date_time: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip)]
    pub occurred_on: NaiveDate,
}

/// Writes whole quantities as JSON integers (`20`, not `20.0`).
pub fn serialize_quantity<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    // Integers above 2^53 are not exact in f64 anyway.
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
    if value.fract() == 0.0 && value.abs() <= MAX_EXACT {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// A validated activity waiting for an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewActivity {
    pub pet_name: String,
    pub activity_type: ActivityType,
    pub duration: f64,
    pub date_time: String,
    pub occurred_on: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub id: u64,
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

/// Filters for the general activity listing. Unset fields match everything.
#[derive(Debug, Clone, Default)]
pub struct ActivityFilter {
    pub date: Option<NaiveDate>,
    pub pet_name: Option<String>,
    pub activity_type: Option<String>,
}

impl ActivityFilter {
    pub fn matches(&self, activity: &Activity) -> bool {
        if let Some(date) = self.date {
            if activity.occurred_on != date {
                return false;
            }
        }
        if let Some(ref needle) = self.pet_name {
            if !activity
                .pet_name
                .to_lowercase()
                .contains(&needle.to_lowercase())
            {
                return false;
            }
        }
        if let Some(ref kind) = self.activity_type {
            if activity.activity_type.as_str() != kind {
                return false;
            }
        }
        true
    }
}

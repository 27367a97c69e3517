//! Per-day aggregation of logged activities.

use chrono::NaiveDate;
use serde::Serialize;

use crate::dates::display_date;
use crate::store::{serialize_quantity, Activity, ActivityType};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySummary {
    /// Total walk minutes.
    #[serde(serialize_with = "serialize_quantity")]
    pub walks: f64,
    pub meals: usize,
    pub medications: usize,
    pub total_activities: usize,
}

impl DailySummary {
    pub fn is_empty(&self) -> bool {
        self.total_activities == 0
    }
}

pub const INVALID_DATE: &str = "Invalid Date";

/// Summary payload returned by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryReport {
    #[serde(flatten)]
    pub summary: DailySummary,
    /// Only present for today's summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub needs_walk_reminder: Option<bool>,
    pub date: String,
}

impl SummaryReport {
    pub fn for_date(summary: DailySummary, date: NaiveDate) -> Self {
        Self {
            summary,
            needs_walk_reminder: None,
            date: display_date(date),
        }
    }

    /// Zero summary for a date that could not be parsed.
    pub fn invalid_date() -> Self {
        Self {
            summary: DailySummary::default(),
            needs_walk_reminder: None,
            date: INVALID_DATE.to_string(),
        }
    }

    pub fn for_today(summary: DailySummary, date: NaiveDate, hour: u32, reminder_hour: u32) -> Self {
        Self {
            needs_walk_reminder: Some(needs_walk_reminder(&summary, hour, reminder_hour)),
            ..Self::for_date(summary, date)
        }
    }
}

/// Aggregates the activities that occurred on `date` (local calendar day).
pub fn summarize(activities: &[Activity], date: NaiveDate) -> DailySummary {
    activities
        .iter()
        .filter(|a| a.occurred_on == date)
        .fold(DailySummary::default(), |mut acc, a| {
            match a.activity_type {
                ActivityType::Walk => acc.walks += a.duration,
                ActivityType::Meal => acc.meals += 1,
                ActivityType::Medication => acc.medications += 1,
            }
            acc.total_activities += 1;
            acc
        })
}

/// True once the local hour reaches `reminder_hour` with no walk logged.
pub fn needs_walk_reminder(summary: &DailySummary, hour: u32, reminder_hour: u32) -> bool {
    hour >= reminder_hour && summary.walks == 0.0
}

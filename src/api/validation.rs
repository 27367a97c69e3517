//! Request validation, run before any store mutation.

use thiserror::Error;

use crate::api::models::CreateActivityRequest;
use crate::dates::parse_date_time;
use crate::store::{ActivityType, NewActivity};

/// Checks every activity rule and reports all violations, one message each.
pub fn validate_activity(req: CreateActivityRequest) -> Result<NewActivity, Vec<String>> {
    let mut errors = Vec::new();

    let pet_name = req
        .pet_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty());
    if pet_name.is_none() {
        errors.push("Pet name is required".to_string());
    }

    let activity_type = req
        .activity_type
        .as_deref()
        .and_then(|kind| kind.parse::<ActivityType>().ok());
    if activity_type.is_none() {
        errors.push("Valid activity type is required (walk, meal, medication)".to_string());
    }

    let duration = req
        .duration
        .as_ref()
        .and_then(coerce_duration)
        .filter(|d| *d > 0.0);
    if duration.is_none() {
        errors.push("Duration/quantity must be greater than 0".to_string());
    }

    let occurred_at = match req.date_time.as_deref() {
        None | Some("") => {
            errors.push("Date and time are required".to_string());
            None
        }
        Some(raw) => {
            let parsed = parse_date_time(raw);
            if parsed.is_none() {
                errors.push("Valid date and time format is required".to_string());
            }
            parsed
        }
    };

    match (pet_name, activity_type, duration, req.date_time, occurred_at) {
        (Some(pet_name), Some(activity_type), Some(duration), Some(date_time), Some(occurred_at))
            if errors.is_empty() =>
        {
            Ok(NewActivity {
                pet_name: pet_name.to_string(),
                activity_type,
                duration,
                date_time,
                occurred_on: occurred_at.date_naive(),
            })
        }
        _ => Err(errors),
    }
}

/// Accepts a JSON number or a numeric string; anything else, including
/// non-finite values, is rejected.
fn coerce_duration(value: &serde_json::Value) -> Option<f64> {
    let number = match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageError {
    #[error("Message is required and cannot be empty")]
    Empty,
    #[error("Message is too long (maximum {max} characters)")]
    TooLong { max: usize, length: usize },
}

impl MessageError {
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::TooLong { .. } => "too_long",
        }
    }
}

/// Trims `message`, then rejects it if empty or longer than `max_length`
/// characters. Returns the trimmed text.
pub fn validate_message(message: Option<&str>, max_length: usize) -> Result<String, MessageError> {
    let trimmed = message.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(MessageError::Empty);
    }

    let length = trimmed.chars().count();
    if length > max_length {
        return Err(MessageError::TooLong {
            max: max_length,
            length,
        });
    }

    Ok(trimmed.to_string())
}

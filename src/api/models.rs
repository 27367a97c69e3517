use serde::{Deserialize, Serialize};

use crate::dates::parse_calendar_date;
use crate::store::{ActivityFilter, ChatMessage};

/// Body of `POST /api/activities`. Every field is optional so that missing
/// fields surface as validation errors instead of a deserialization failure.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateActivityRequest {
    pub pet_name: Option<String>,
    pub activity_type: Option<String>,
    /// A JSON number or a numeric string.
    pub duration: Option<serde_json::Value>,
    pub date_time: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityQuery {
    pub date: Option<String>,
    pub pet_name: Option<String>,
    pub activity_type: Option<String>,
}

impl ActivityQuery {
    /// Blank parameters are ignored. Returns `None` when `date` cannot be
    /// parsed: no record falls on an invalid day, so nothing can match.
    pub fn into_filter(self) -> Option<ActivityFilter> {
        let date = match non_blank(self.date) {
            Some(raw) => Some(parse_calendar_date(&raw)?),
            None => None,
        };

        Some(ActivityFilter {
            date,
            pet_name: non_blank(self.pet_name),
            activity_type: non_blank(self.activity_type),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[derive(Debug, Default, Deserialize)]
pub struct SendMessageRequest {
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatTurn {
    pub user_message: ChatMessage,
    pub bot_message: ChatMessage,
}

/// Envelope shared by every JSON response.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl<T> ApiResponse<T> {
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
            count: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }
}

impl ApiResponse<()> {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
            count: None,
        }
    }
}

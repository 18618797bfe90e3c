use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::not_blank;
use crate::models::EventStatus;

/// Request payload for creating a new event
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_create_window"))]
pub struct CreateEventRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Title must be between 1 and 255 characters"
    ))]
    #[validate(custom(function = "not_blank", message = "Title is required"))]
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 5000))]
    pub description: Option<String>,

    pub start_time: DateTime<Utc>,

    pub end_time: DateTime<Utc>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 255))]
    pub location: Option<String>,

    #[serde(default = "default_status")]
    pub status: EventStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1, message = "Max participants must be at least 1"))]
    pub max_participants: Option<u32>,
}

/// Request payload for updating an existing event
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_update_window"))]
pub struct UpdateEventRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 5000))]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 255))]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EventStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1))]
    pub max_participants: Option<u32>,
}

impl UpdateEventRequest {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.start_time.is_none()
            && self.end_time.is_none()
            && self.location.is_none()
            && self.status.is_none()
            && self.max_participants.is_none()
    }
}

fn default_status() -> EventStatus {
    EventStatus::Draft
}

fn window_error() -> ValidationError {
    super::error_with_message(
        "invalid_time_window",
        "End time must be after start time".to_string(),
    )
}

fn validate_create_window(request: &CreateEventRequest) -> Result<(), ValidationError> {
    if request.end_time <= request.start_time {
        return Err(window_error());
    }
    Ok(())
}

fn validate_update_window(request: &UpdateEventRequest) -> Result<(), ValidationError> {
    if let (Some(start), Some(end)) = (request.start_time, request.end_time)
        && end <= start
    {
        return Err(window_error());
    }
    Ok(())
}

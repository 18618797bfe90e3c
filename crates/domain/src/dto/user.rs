use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::{error_with_message, not_blank};
use crate::models::UserStatus;

/// Request payload for provisioning a judge account
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateJudgeRequest {
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    #[validate(length(max = 100))]
    #[validate(custom(function = "not_blank", message = "First name is required"))]
    pub first_name: String,

    #[validate(length(max = 100))]
    #[validate(custom(function = "not_blank", message = "Last name is required"))]
    pub last_name: String,
}

/// Admin change of a user's role or account status
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_has_change"))]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[validate(length(max = 100))]
    #[validate(custom(function = "not_blank", message = "First name is required"))]
    pub first_name: String,

    #[validate(length(max = 100))]
    #[validate(custom(function = "not_blank", message = "Last name is required"))]
    pub last_name: String,
}

fn validate_has_change(request: &UpdateUserRequest) -> Result<(), ValidationError> {
    if request.role_id.is_none() && request.status.is_none() {
        return Err(error_with_message(
            "empty_update",
            "Provide a role or a status to change".to_string(),
        ));
    }
    Ok(())
}

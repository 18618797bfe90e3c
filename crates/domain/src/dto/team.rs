use serde::{Deserialize, Serialize};
use validator::Validate;

use super::not_blank;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTeamRequest {
    #[validate(length(max = 100, message = "Team name must be at most 100 characters"))]
    #[validate(custom(function = "not_blank", message = "Please enter a team name"))]
    pub name: String,
}

impl CreateTeamRequest {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct JoinTeamRequest {
    #[validate(custom(function = "not_blank", message = "Please enter a valid invitation code"))]
    pub invitation_code: String,
}

impl JoinTeamRequest {
    pub fn new(invitation_code: &str) -> Self {
        Self {
            invitation_code: invitation_code.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_name_trimmed_and_required() {
        let request = CreateTeamRequest::new("  Night Owls  ");
        assert_eq!(request.name, "Night Owls");
        assert!(request.validate().is_ok());

        assert!(CreateTeamRequest::new("   ").validate().is_err());
        assert!(CreateTeamRequest::new(&"x".repeat(101)).validate().is_err());
    }

    #[test]
    fn test_invitation_code_wire_name() {
        let request = JoinTeamRequest::new(" K9X2 ");
        assert!(request.validate().is_ok());
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["invitationCode"], "K9X2");

        assert!(JoinTeamRequest::new("").validate().is_err());
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{DomainError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MemberRole {
    Leader,
    Member,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberUser {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
}

impl MemberUser {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    pub role: MemberRole,
    pub user: MemberUser,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamEventRef {
    pub id: Uuid,
    pub title: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamCompetition {
    pub id: Uuid,
    pub event: TeamEventRef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSubmissionRef {
    pub id: Uuid,
}

/// A team the caller belongs to (`GET /teams/my-teams`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MyTeam {
    pub id: Uuid,
    pub name: String,
    pub invitation_code: String,
    pub competition: TeamCompetition,
    #[serde(default)]
    pub members: Vec<TeamMember>,
    #[serde(default)]
    pub submission: Option<TeamSubmissionRef>,
}

impl MyTeam {
    pub fn belongs_to_event(&self, event_id: Uuid) -> bool {
        self.competition.event.id == event_id
    }

    pub fn has_submitted(&self) -> bool {
        self.submission.is_some()
    }

    pub fn leader(&self) -> Option<&TeamMember> {
        leader_of(&self.members)
    }

    pub fn is_leader(&self, user_id: Uuid) -> bool {
        self.leader().is_some_and(|leader| leader.user.id == user_id)
    }

    pub fn has_member(&self, user_id: Uuid) -> bool {
        self.members.iter().any(|member| member.user.id == user_id)
    }

    /// Reports a member list that does not carry exactly one leader.
    pub fn check_single_leader(&self) -> Result<()> {
        check_single_leader(&self.name, &self.members)
    }
}

/// Minimal team record returned when a team is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSummary {
    pub id: Uuid,
    pub name: String,
    pub invitation_code: String,
}

/// A team as listed for a competition (`GET /competitions/:id/teams`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: Uuid,
    pub name: String,
    pub invitation_code: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub competition_id: Uuid,
    #[serde(default)]
    pub members: Vec<TeamMember>,
}

impl Team {
    pub fn leader(&self) -> Option<&TeamMember> {
        leader_of(&self.members)
    }

    pub fn check_single_leader(&self) -> Result<()> {
        check_single_leader(&self.name, &self.members)
    }
}

fn leader_of(members: &[TeamMember]) -> Option<&TeamMember> {
    members.iter().find(|member| member.role == MemberRole::Leader)
}

fn check_single_leader(team_name: &str, members: &[TeamMember]) -> Result<()> {
    let leaders = members
        .iter()
        .filter(|member| member.role == MemberRole::Leader)
        .count();

    if leaders == 1 {
        Ok(())
    } else {
        Err(DomainError::InvariantViolation(format!(
            "Team '{}' has {} leaders, expected exactly one",
            team_name, leaders
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(role: MemberRole) -> TeamMember {
        TeamMember {
            team_id: None,
            user_id: None,
            role,
            user: MemberUser {
                id: Uuid::new_v4(),
                first_name: "Grace".to_string(),
                last_name: "Hopper".to_string(),
            },
        }
    }

    fn team(members: Vec<TeamMember>) -> MyTeam {
        MyTeam {
            id: Uuid::new_v4(),
            name: "Compilers".to_string(),
            invitation_code: "ABC123".to_string(),
            competition: TeamCompetition {
                id: Uuid::new_v4(),
                event: TeamEventRef {
                    id: Uuid::new_v4(),
                    title: "Hackathon".to_string(),
                    status: "PUBLISHED".to_string(),
                },
            },
            members,
            submission: None,
        }
    }

    #[test]
    fn test_single_leader_accepted() {
        let team = team(vec![member(MemberRole::Leader), member(MemberRole::Member)]);
        assert!(team.check_single_leader().is_ok());

        let leader_id = team.leader().unwrap().user.id;
        assert!(team.is_leader(leader_id));
        assert!(team.has_member(leader_id));
    }

    #[test]
    fn test_leaderless_and_double_leader_rejected() {
        assert!(team(vec![member(MemberRole::Member)]).check_single_leader().is_err());
        assert!(
            team(vec![member(MemberRole::Leader), member(MemberRole::Leader)])
                .check_single_leader()
                .is_err()
        );
    }

    #[test]
    fn test_my_team_from_api_shape() {
        let json = r#"{
            "id": "11111111-1111-4111-8111-111111111111",
            "name": "Rustaceans",
            "invitationCode": "RUST42",
            "competition": {
                "id": "22222222-2222-4222-8222-222222222222",
                "event": {
                    "id": "33333333-3333-4333-8333-333333333333",
                    "title": "Systems Jam",
                    "status": "PUBLISHED"
                }
            },
            "members": [
                {
                    "role": "LEADER",
                    "user": {
                        "id": "44444444-4444-4444-8444-444444444444",
                        "firstName": "Ferris",
                        "lastName": "Crab"
                    }
                }
            ],
            "submission": { "id": "55555555-5555-4555-8555-555555555555" }
        }"#;

        let team: MyTeam = serde_json::from_str(json).unwrap();
        assert!(team.has_submitted());
        assert!(team.belongs_to_event(
            "33333333-3333-4333-8333-333333333333".parse().unwrap()
        ));
        assert_eq!(team.leader().unwrap().user.full_name(), "Ferris Crab");
    }
}

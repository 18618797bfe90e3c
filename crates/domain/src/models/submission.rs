use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmissionStatus {
    Pending,
    Reviewed,
    Scored,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionContent {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionTeam {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionEventRef {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionCompetitionRef {
    pub id: Uuid,
    #[serde(default)]
    pub event_id: Option<Uuid>,
    #[serde(default)]
    pub event: Option<SubmissionEventRef>,
}

impl SubmissionCompetitionRef {
    pub fn event_id(&self) -> Option<Uuid> {
        self.event_id
            .or_else(|| self.event.as_ref().and_then(|event| event.id))
    }
}

/// A submission made by the caller, alone or through a team (`GET /submissions/me`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MySubmission {
    pub id: Uuid,
    #[serde(default)]
    pub content: SubmissionContent,
    pub submitted_at: DateTime<Utc>,
    pub competition: SubmissionCompetitionRef,
    #[serde(default)]
    pub team: Option<SubmissionTeam>,
    #[serde(default)]
    pub final_score: Option<Decimal>,
}

impl MySubmission {
    pub fn is_scored(&self) -> bool {
        self.final_score.is_some()
    }
}

/// What the API hands back right after a team or individual submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedSubmission {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    #[serde(default)]
    pub content: SubmissionContent,
    #[serde(default)]
    pub team_id: Option<Uuid>,
}

/// Submission row in a competition listing for judges and organizers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionSubmission {
    pub id: Uuid,
    #[serde(default)]
    pub team: Option<SubmissionTeam>,
    pub submitted_at: DateTime<Utc>,
    pub status: SubmissionStatus,
    #[serde(default)]
    pub final_score: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionDetail {
    pub id: Uuid,
    #[serde(default)]
    pub content: SubmissionContent,
    #[serde(default)]
    pub team: Option<SubmissionTeam>,
    pub submitted_at: DateTime<Utc>,
    pub status: SubmissionStatus,
    #[serde(default)]
    pub final_score: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submitter {
    pub first_name: String,
    pub last_name: String,
}

/// Leaderboard rows arrive already ranked by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub final_score: Decimal,
    #[serde(default)]
    pub team: Option<SubmissionTeam>,
    #[serde(default)]
    pub submitter: Option<Submitter>,
}

impl LeaderboardEntry {
    pub fn display_name(&self) -> String {
        match (&self.team, &self.submitter) {
            (Some(team), _) => team.name.clone(),
            (None, Some(submitter)) => {
                format!("{} {}", submitter.first_name, submitter.last_name)
            }
            (None, None) => "Unknown".to_string(),
        }
    }
}

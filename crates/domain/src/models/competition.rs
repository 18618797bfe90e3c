use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JudgingCriterion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_score: Option<Decimal>,
}

impl JudgingCriterion {
    pub fn new(name: impl Into<String>, max_score: Decimal) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: None,
            weight: None,
            max_score: Some(max_score),
        }
    }

    /// Scoring ceiling for this criterion. Older records only carry `weight`.
    pub fn ceiling(&self) -> Decimal {
        self.max_score.or(self.weight).unwrap_or(Decimal::ZERO)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competition {
    pub id: Uuid,
    pub event_id: Uuid,
    pub is_team_based: bool,
    #[serde(default)]
    pub team_size: Option<u32>,
    #[serde(default)]
    pub min_team_size: Option<u32>,
    #[serde(default)]
    pub max_team_size: Option<u32>,
    #[serde(default)]
    pub judging_criteria: Vec<JudgingCriterion>,
}

impl Competition {
    pub fn total_possible_score(&self) -> Decimal {
        self.judging_criteria.iter().map(JudgingCriterion::ceiling).sum()
    }

    /// Identifier for the listing routes under `/competitions/:id` (teams, submissions,
    /// leaderboard, judges), which the API addresses through the event it extends.
    /// Creating a team or an individual submission takes the competition's own id.
    pub fn api_key(&self) -> Uuid {
        self.event_id
    }

    /// Upper bound on team members, falling back to the legacy single `teamSize`.
    pub fn team_capacity(&self) -> Option<u32> {
        self.max_team_size.or(self.team_size)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JudgeProfile {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JudgeAssignment {
    pub competition_id: Uuid,
    pub judge_id: Uuid,
    pub assigned_at: DateTime<Utc>,
    pub judge: JudgeProfile,
}

/// Competition row on the judge dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitionToJudge {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: String,
    #[serde(default)]
    pub submissions_awaiting_evaluation: u32,
    #[serde(default)]
    pub total_submissions: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JudgeDashboard {
    #[serde(default)]
    pub competitions_to_judge: Vec<CompetitionToJudge>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ceiling_prefers_max_score_over_weight() {
        let criterion = JudgingCriterion {
            id: None,
            name: "Innovation".to_string(),
            description: None,
            weight: Some(Decimal::from(10)),
            max_score: Some(Decimal::from(25)),
        };
        assert_eq!(criterion.ceiling(), Decimal::from(25));

        let legacy = JudgingCriterion {
            max_score: None,
            ..criterion
        };
        assert_eq!(legacy.ceiling(), Decimal::from(10));
    }

    #[test]
    fn test_competition_from_api_shape() {
        let json = r#"{
            "id": "0b7c6a1e-1f6a-4a55-9d0e-0c1b2d3e4f51",
            "eventId": "5f0c7b1e-8f6a-4a55-9d0e-0c1b2d3e4f50",
            "isTeamBased": true,
            "minTeamSize": 2,
            "maxTeamSize": 4,
            "judgingCriteria": [
                { "name": "Design", "maxScore": 25 },
                { "name": "Impact", "maxScore": 12.5 }
            ]
        }"#;

        let competition: Competition = serde_json::from_str(json).unwrap();
        assert!(competition.is_team_based);
        assert_eq!(competition.team_capacity(), Some(4));
        assert_eq!(competition.total_possible_score(), Decimal::new(375, 1));
    }
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::{error_with_message, not_blank};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CriterionInput {
    #[validate(length(max = 100))]
    #[validate(custom(function = "not_blank", message = "Criterion name is required"))]
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[validate(custom(function = "positive_score"))]
    pub max_score: Decimal,
}

impl CriterionInput {
    pub fn new(name: impl Into<String>, max_score: Decimal) -> Self {
        Self {
            name: name.into(),
            description: None,
            max_score,
        }
    }

    fn is_filled(&self) -> bool {
        !self.name.trim().is_empty() && self.max_score > Decimal::ZERO
    }
}

/// Request payload promoting an event to a judged competition
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_team_sizes"))]
pub struct CreateCompetitionRequest {
    pub is_team_based: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_team_size: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_team_size: Option<u32>,

    #[validate(length(
        min = 1,
        message = "Add at least one judging criterion with a name and a score greater than 0"
    ))]
    #[validate(nested)]
    pub judging_criteria: Vec<CriterionInput>,
}

impl CreateCompetitionRequest {
    /// Drops unfinished criterion rows and, for individual competitions, the team sizes.
    pub fn new(
        is_team_based: bool,
        min_team_size: Option<u32>,
        max_team_size: Option<u32>,
        judging_criteria: Vec<CriterionInput>,
    ) -> Self {
        let judging_criteria = judging_criteria
            .into_iter()
            .filter(CriterionInput::is_filled)
            .map(|mut criterion| {
                criterion.name = criterion.name.trim().to_string();
                criterion
            })
            .collect();

        Self {
            is_team_based,
            min_team_size: min_team_size.filter(|_| is_team_based),
            max_team_size: max_team_size.filter(|_| is_team_based),
            judging_criteria,
        }
    }
}

/// Request payload for adjusting competition settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCompetitionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_team_based: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1))]
    pub min_team_size: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1))]
    pub max_team_size: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub judging_criteria: Option<Vec<CriterionInput>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignJudgeRequest {
    pub judge_id: Uuid,
}

fn positive_score(score: &Decimal) -> Result<(), ValidationError> {
    if *score > Decimal::ZERO {
        Ok(())
    } else {
        Err(error_with_message(
            "non_positive_score",
            "Maximum score must be greater than 0".to_string(),
        ))
    }
}

fn validate_team_sizes(request: &CreateCompetitionRequest) -> Result<(), ValidationError> {
    if !request.is_team_based {
        return Ok(());
    }

    match (request.min_team_size, request.max_team_size) {
        (Some(min), Some(max)) if min >= 1 && min <= max => Ok(()),
        (Some(min), Some(max)) => Err(error_with_message(
            "invalid_team_size",
            format!(
                "Team size must satisfy 1 <= minimum <= maximum (got {}..{})",
                min, max
            ),
        )),
        _ => Err(error_with_message(
            "missing_team_size",
            "Team-based competitions need a minimum and maximum team size".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_and_zero_criteria_are_dropped() {
        let request = CreateCompetitionRequest::new(
            true,
            Some(2),
            Some(4),
            vec![
                CriterionInput::new("  Innovation ", Decimal::from(25)),
                CriterionInput::new("   ", Decimal::from(25)),
                CriterionInput::new("Polish", Decimal::ZERO),
            ],
        );

        assert_eq!(request.judging_criteria.len(), 1);
        assert_eq!(request.judging_criteria[0].name, "Innovation");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_no_criteria_rejected() {
        let request = CreateCompetitionRequest::new(
            false,
            None,
            None,
            vec![CriterionInput::new("", Decimal::from(10))],
        );
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_individual_competition_sends_no_sizes() {
        let request = CreateCompetitionRequest::new(
            false,
            Some(2),
            Some(4),
            vec![CriterionInput::new("Accuracy", Decimal::from(100))],
        );
        assert!(request.min_team_size.is_none());
        assert!(request.validate().is_ok());

        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("minTeamSize").is_none());
        assert_eq!(json["judgingCriteria"][0]["maxScore"], 100.0);
    }

    #[test]
    fn test_inverted_team_sizes_rejected() {
        let request = CreateCompetitionRequest::new(
            true,
            Some(5),
            Some(3),
            vec![CriterionInput::new("Teamwork", Decimal::from(10))],
        );
        assert!(request.validate().is_err());

        let request = CreateCompetitionRequest::new(
            true,
            None,
            Some(3),
            vec![CriterionInput::new("Teamwork", Decimal::from(10))],
        );
        assert!(request.validate().is_err());
    }
}

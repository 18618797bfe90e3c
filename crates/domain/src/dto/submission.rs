use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use super::{error_with_message, not_blank};
use crate::models::JudgingCriterion;
use crate::{DomainError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct SubmissionPayload {
    #[validate(url(message = "Please enter a valid URL"))]
    pub url: String,

    #[validate(length(max = 5000))]
    #[validate(custom(function = "not_blank", message = "Please describe your project"))]
    pub description: String,
}

/// Body of both team and individual submissions: `{"content": {"url", "description"}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewSubmission {
    #[validate(nested)]
    pub content: SubmissionPayload,
}

impl NewSubmission {
    pub fn new(url: &str, description: &str) -> Self {
        Self {
            content: SubmissionPayload {
                url: url.trim().to_string(),
                description: description.trim().to_string(),
            },
        }
    }
}

/// A judge's scores keyed by criterion name, plus free-form comments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    pub scores: BTreeMap<String, Decimal>,
    pub comments: String,
}

impl EvaluationRequest {
    pub fn total(&self) -> Decimal {
        self.scores.values().copied().sum()
    }

    /// Every criterion needs a score within `0..=ceiling`; names outside the criteria are refused.
    pub fn validate_against(&self, criteria: &[JudgingCriterion]) -> Result<()> {
        let mut errors = ValidationErrors::new();

        for criterion in criteria {
            match self.scores.get(&criterion.name) {
                None => errors.add(
                    "scores",
                    error_with_message(
                        "missing_score",
                        format!("{} score is required", criterion.name),
                    ),
                ),
                Some(score) if *score < Decimal::ZERO => errors.add(
                    "scores",
                    error_with_message(
                        "score_below_zero",
                        format!("{} score must be at least 0", criterion.name),
                    ),
                ),
                Some(score) if *score > criterion.ceiling() => errors.add(
                    "scores",
                    error_with_message(
                        "score_above_max",
                        format!(
                            "{} score cannot exceed {}",
                            criterion.name,
                            criterion.ceiling()
                        ),
                    ),
                ),
                Some(_) => {}
            }
        }

        for name in self.scores.keys() {
            if !criteria.iter().any(|criterion| &criterion.name == name) {
                errors.add(
                    "scores",
                    error_with_message("unknown_criterion", format!("Unknown criterion '{}'", name)),
                );
            }
        }

        if self.comments.chars().count() > 5000 {
            errors.add(
                "comments",
                error_with_message(
                    "too_long",
                    "Comments must be at most 5000 characters".to_string(),
                ),
            );
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criteria() -> Vec<JudgingCriterion> {
        vec![
            JudgingCriterion::new("Design", Decimal::from(25)),
            JudgingCriterion::new("Impact", Decimal::from(10)),
        ]
    }

    fn evaluation(design: i64, impact: i64) -> EvaluationRequest {
        EvaluationRequest {
            scores: BTreeMap::from([
                ("Design".to_string(), Decimal::from(design)),
                ("Impact".to_string(), Decimal::from(impact)),
            ]),
            comments: "Solid work".to_string(),
        }
    }

    #[test]
    fn test_scores_within_bounds_accepted() {
        let request = evaluation(25, 0);
        assert!(request.validate_against(&criteria()).is_ok());
        assert_eq!(request.total(), Decimal::from(25));
    }

    #[test]
    fn test_score_above_ceiling_rejected() {
        let err = evaluation(26, 5).validate_against(&criteria()).unwrap_err();
        assert_eq!(err.field_messages(), vec!["scores: Design score cannot exceed 25"]);
    }

    #[test]
    fn test_negative_missing_and_unknown_scores_rejected() {
        assert!(evaluation(-1, 5).validate_against(&criteria()).is_err());

        let mut missing = evaluation(10, 5);
        missing.scores.remove("Impact");
        assert!(missing.validate_against(&criteria()).is_err());

        let mut unknown = evaluation(10, 5);
        unknown.scores.insert("Style".to_string(), Decimal::ONE);
        assert!(unknown.validate_against(&criteria()).is_err());
    }

    #[test]
    fn test_submission_requires_absolute_url() {
        assert!(NewSubmission::new("https://github.com/org/repo", "Our app").validate().is_ok());
        assert!(NewSubmission::new("github.com/org/repo", "Our app").validate().is_err());
        assert!(NewSubmission::new("https://github.com/org/repo", "  ").validate().is_err());
    }

    #[test]
    fn test_submission_body_shape() {
        let json = serde_json::to_value(NewSubmission::new(" https://a.example/x ", "Demo")).unwrap();
        assert_eq!(json["content"]["url"], "https://a.example/x");
        assert_eq!(json["content"]["description"], "Demo");
    }
}

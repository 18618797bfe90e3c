use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::ValidationErrors;

use super::error_with_message;
use crate::models::SurveyQuestion;
use crate::{DomainError, Result};

/// Answers keyed by question id, posted as `{"answers": {...}}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SurveyResponseRequest {
    pub answers: BTreeMap<String, String>,
}

impl SurveyResponseRequest {
    pub fn validate_against(&self, questions: &[SurveyQuestion]) -> Result<()> {
        let mut errors = ValidationErrors::new();

        for question in questions {
            let answered = self
                .answers
                .get(&question.id)
                .is_some_and(|answer| !answer.trim().is_empty());
            if !answered {
                errors.add(
                    "answers",
                    error_with_message(
                        "unanswered",
                        format!("Question '{}' needs an answer", question.text),
                    ),
                );
            }
        }

        for id in self.answers.keys() {
            if !questions.iter().any(|question| &question.id == id) {
                errors.add(
                    "answers",
                    error_with_message("unknown_question", format!("Unknown question '{}'", id)),
                );
            }
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
    use crate::models::SurveyQuestionKind;

    fn questions() -> Vec<SurveyQuestion> {
        vec![
            SurveyQuestion {
                id: "q1".to_string(),
                text: "Overall rating".to_string(),
                kind: SurveyQuestionKind::Rating1To5,
            },
            SurveyQuestion {
                id: "q2".to_string(),
                text: "What should change?".to_string(),
                kind: SurveyQuestionKind::LongText,
            },
        ]
    }

    #[test]
    fn test_all_questions_must_be_answered() {
        let mut request = SurveyResponseRequest::default();
        request.answers.insert("q1".to_string(), "5".to_string());
        assert!(request.validate_against(&questions()).is_err());

        request.answers.insert("q2".to_string(), "Longer breaks".to_string());
        assert!(request.validate_against(&questions()).is_ok());
    }

    #[test]
    fn test_unknown_question_rejected() {
        let mut request = SurveyResponseRequest::default();
        request.answers.insert("q1".to_string(), "4".to_string());
        request.answers.insert("q2".to_string(), "Nothing".to_string());
        request.answers.insert("q7".to_string(), "?".to_string());
        assert!(request.validate_against(&questions()).is_err());
    }
}

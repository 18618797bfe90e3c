use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SurveyQuestionKind {
    #[serde(rename = "RATING_1_5")]
    Rating1To5,
    ShortText,
    LongText,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyQuestion {
    pub id: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: SurveyQuestionKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuestionSummary {
    Rating {
        average: f64,
        #[serde(default)]
        counts: BTreeMap<String, u64>,
    },
    Text {
        #[serde(default)]
        responses: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyQuestionResult {
    pub question_id: String,
    pub question_text: String,
    pub question_type: String,
    pub summary: QuestionSummary,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyResults {
    pub total_responses: u64,
    #[serde(default)]
    pub results_by_question: Vec<SurveyQuestionResult>,
}

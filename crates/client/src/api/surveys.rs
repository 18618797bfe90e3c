use domain::dto::SurveyResponseRequest;
use domain::models::SurveyQuestion;
use tracing::info;
use uuid::Uuid;

use super::ApiClient;
use crate::error::Result;

impl ApiClient {
    pub async fn standard_survey(&self) -> Result<Vec<SurveyQuestion>> {
        self.list(self.get("/surveys/standard")).await
    }

    pub async fn respond_to_survey(
        &self,
        event_id: Uuid,
        response: &SurveyResponseRequest,
        questions: &[SurveyQuestion],
    ) -> Result<Option<String>> {
        response.validate_against(questions)?;
        let message = self
            .acknowledge(
                self.post(&format!("/surveys/events/{}/responses", event_id))
                    .json(response),
            )
            .await?;
        info!("Submitted survey response for event {}", event_id);
        Ok(message)
    }
}

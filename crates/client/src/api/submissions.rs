use domain::dto::EvaluationRequest;
use domain::models::{JudgingCriterion, MySubmission, SubmissionDetail};
use tracing::info;
use uuid::Uuid;

use super::ApiClient;
use crate::error::Result;

impl ApiClient {
    pub async fn my_submissions(&self) -> Result<Vec<MySubmission>> {
        self.list(self.get("/submissions/me")).await
    }

    pub async fn submission_detail(&self, submission_id: Uuid) -> Result<SubmissionDetail> {
        self.data(self.get(&format!("/submissions/{}", submission_id)))
            .await
    }

    /// Scores are checked against the competition's criteria before anything is sent.
    pub async fn submit_evaluation(
        &self,
        submission_id: Uuid,
        evaluation: &EvaluationRequest,
        criteria: &[JudgingCriterion],
    ) -> Result<Option<String>> {
        evaluation.validate_against(criteria)?;
        let message = self
            .acknowledge(
                self.post(&format!("/submissions/{}/evaluations", submission_id))
                    .json(evaluation),
            )
            .await?;
        info!(
            "Evaluated submission {} (total {})",
            submission_id,
            evaluation.total()
        );
        Ok(message)
    }
}

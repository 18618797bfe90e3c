use domain::dto::{
    AssignJudgeRequest, CreateCompetitionRequest, CreateJudgeRequest, NewSubmission,
    UpdateCompetitionRequest,
};
use domain::models::{
    Competition, CompetitionSubmission, CreatedSubmission, JudgeAssignment, JudgeDashboard,
    LeaderboardEntry, Team, User,
};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use super::ApiClient;
use crate::error::Result;

// Listing and judge routes under /competitions/:id take the owning event's id
// (`Competition::api_key`); the submission route takes the competition id.
impl ApiClient {
    pub async fn promote_to_competition(
        &self,
        event_id: Uuid,
        request: &CreateCompetitionRequest,
    ) -> Result<Competition> {
        request.validate()?;
        let competition = self
            .data(
                self.post(&format!("/events/{}/competition", event_id))
                    .json(request),
            )
            .await?;
        info!("Promoted event {} to a competition", event_id);
        Ok(competition)
    }

    pub async fn update_competition(
        &self,
        event_id: Uuid,
        request: &UpdateCompetitionRequest,
    ) -> Result<Competition> {
        request.validate()?;
        let competition = self
            .data(
                self.patch(&format!("/events/{}/competition", event_id))
                    .json(request),
            )
            .await?;
        info!("Updated competition settings for event {}", event_id);
        Ok(competition)
    }

    pub async fn competition_teams(&self, competition_key: Uuid) -> Result<Vec<Team>> {
        self.list(self.get(&format!("/competitions/{}/teams", competition_key)))
            .await
    }

    pub async fn competition_submissions(
        &self,
        competition_key: Uuid,
    ) -> Result<Vec<CompetitionSubmission>> {
        self.list(self.get(&format!("/competitions/{}/submissions", competition_key)))
            .await
    }

    pub async fn leaderboard(&self, competition_key: Uuid) -> Result<Vec<LeaderboardEntry>> {
        self.list(self.get(&format!("/competitions/{}/leaderboard", competition_key)))
            .await
    }

    pub async fn submit_individual(
        &self,
        competition_id: Uuid,
        submission: &NewSubmission,
    ) -> Result<CreatedSubmission> {
        submission.validate()?;
        let created: CreatedSubmission = self
            .data(
                self.post(&format!("/competitions/{}/submission", competition_id))
                    .json(submission),
            )
            .await?;
        info!("Submitted {} to competition {}", created.id, competition_id);
        Ok(created)
    }

    pub async fn competition_judges(&self, competition_key: Uuid) -> Result<Vec<JudgeAssignment>> {
        self.list(self.get(&format!("/competitions/{}/judges", competition_key)))
            .await
    }

    pub async fn assign_judge(
        &self,
        competition_key: Uuid,
        judge_id: Uuid,
    ) -> Result<Option<String>> {
        let message = self
            .acknowledge(
                self.post(&format!("/competitions/{}/judges", competition_key))
                    .json(&AssignJudgeRequest { judge_id }),
            )
            .await?;
        info!("Assigned judge {} to competition {}", judge_id, competition_key);
        Ok(message)
    }

    pub async fn remove_judge(&self, competition_key: Uuid, judge_id: Uuid) -> Result<Option<String>> {
        let message = self
            .acknowledge(self.delete(&format!(
                "/competitions/{}/judges/{}",
                competition_key, judge_id
            )))
            .await?;
        info!("Removed judge {} from competition {}", judge_id, competition_key);
        Ok(message)
    }

    pub async fn create_judge(&self, request: &CreateJudgeRequest) -> Result<User> {
        request.validate()?;
        let user: User = self.data(self.post("/users/judges").json(request)).await?;
        info!("Created judge account {}", user.email);
        Ok(user)
    }

    pub async fn judge_dashboard(&self) -> Result<JudgeDashboard> {
        self.data(self.get("/dashboard")).await
    }
}

use domain::dto::{CreateTeamRequest, JoinTeamRequest, NewSubmission};
use domain::models::{CreatedSubmission, MyTeam, TeamSummary};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use super::ApiClient;
use crate::error::Result;

impl ApiClient {
    pub async fn my_teams(&self) -> Result<Vec<MyTeam>> {
        self.list(self.get("/teams/my-teams")).await
    }

    pub async fn create_team(
        &self,
        competition_id: Uuid,
        request: &CreateTeamRequest,
    ) -> Result<TeamSummary> {
        request.validate()?;
        let team: TeamSummary = self
            .data(
                self.post(&format!("/teams/competitions/{}", competition_id))
                    .json(request),
            )
            .await?;
        info!("Created team {} ({})", team.name, team.id);
        Ok(team)
    }

    pub async fn join_team(&self, request: &JoinTeamRequest) -> Result<Option<String>> {
        request.validate()?;
        let message = self.acknowledge(self.post("/teams/join").json(request)).await?;
        info!("Joined team with invitation code");
        Ok(message)
    }

    pub async fn leave_team(&self, team_id: Uuid) -> Result<Option<String>> {
        let message = self
            .acknowledge(self.post(&format!("/teams/{}/leave", team_id)))
            .await?;
        info!("Left team {}", team_id);
        Ok(message)
    }

    pub async fn remove_team_member(&self, team_id: Uuid, user_id: Uuid) -> Result<Option<String>> {
        let message = self
            .acknowledge(self.delete(&format!("/teams/{}/members/{}", team_id, user_id)))
            .await?;
        info!("Removed member {} from team {}", user_id, team_id);
        Ok(message)
    }

    pub async fn submit_for_team(
        &self,
        team_id: Uuid,
        submission: &NewSubmission,
    ) -> Result<CreatedSubmission> {
        submission.validate()?;
        let created: CreatedSubmission = self
            .data(
                self.post(&format!("/teams/{}/submission", team_id))
                    .json(submission),
            )
            .await?;
        info!("Team {} submitted {}", team_id, created.id);
        Ok(created)
    }
}

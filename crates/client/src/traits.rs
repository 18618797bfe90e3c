use domain::dto::{CreateTeamRequest, JoinTeamRequest, NewSubmission};
use domain::models::{
    CreatedSubmission, Event, LeaderboardEntry, MySubmission, MyTeam, Registration, TeamSummary,
};
use uuid::Uuid;

use crate::Result;
use crate::api::ApiClient;

/// The reads needed to work out what the viewer can do on an event page.
#[async_trait::async_trait]
pub trait ParticipationSource: Send + Sync {
    async fn event(&self, event_id: Uuid) -> Result<Event>;
    async fn my_registration(&self, event_id: Uuid) -> Result<Option<Registration>>;
    async fn my_teams(&self) -> Result<Vec<MyTeam>>;
    async fn my_submissions(&self) -> Result<Vec<MySubmission>>;
    async fn leaderboard(&self, competition_key: Uuid) -> Result<Vec<LeaderboardEntry>>;
}

/// Writes that change a viewer's participation in an event.
#[async_trait::async_trait]
pub trait ParticipationCommands: Send + Sync {
    async fn register(&self, event_id: Uuid) -> Result<Registration>;
    async fn create_team(
        &self,
        competition_id: Uuid,
        request: &CreateTeamRequest,
    ) -> Result<TeamSummary>;
    async fn join_team(&self, request: &JoinTeamRequest) -> Result<Option<String>>;
    async fn leave_team(&self, team_id: Uuid) -> Result<Option<String>>;
    async fn submit_for_team(
        &self,
        team_id: Uuid,
        submission: &NewSubmission,
    ) -> Result<CreatedSubmission>;
    async fn submit_individual(
        &self,
        competition_id: Uuid,
        submission: &NewSubmission,
    ) -> Result<CreatedSubmission>;
}

#[async_trait::async_trait]
impl ParticipationSource for ApiClient {
    async fn event(&self, event_id: Uuid) -> Result<Event> {
        self.get_event(event_id).await
    }

    async fn my_registration(&self, event_id: Uuid) -> Result<Option<Registration>> {
        self.my_event_registration(event_id).await
    }

    async fn my_teams(&self) -> Result<Vec<MyTeam>> {
        ApiClient::my_teams(self).await
    }

    async fn my_submissions(&self) -> Result<Vec<MySubmission>> {
        ApiClient::my_submissions(self).await
    }

    async fn leaderboard(&self, competition_key: Uuid) -> Result<Vec<LeaderboardEntry>> {
        ApiClient::leaderboard(self, competition_key).await
    }
}

#[async_trait::async_trait]
impl ParticipationCommands for ApiClient {
    async fn register(&self, event_id: Uuid) -> Result<Registration> {
        self.register_for_event(event_id).await
    }

    async fn create_team(
        &self,
        competition_id: Uuid,
        request: &CreateTeamRequest,
    ) -> Result<TeamSummary> {
        ApiClient::create_team(self, competition_id, request).await
    }

    async fn join_team(&self, request: &JoinTeamRequest) -> Result<Option<String>> {
        ApiClient::join_team(self, request).await
    }

    async fn leave_team(&self, team_id: Uuid) -> Result<Option<String>> {
        ApiClient::leave_team(self, team_id).await
    }

    async fn submit_for_team(
        &self,
        team_id: Uuid,
        submission: &NewSubmission,
    ) -> Result<CreatedSubmission> {
        ApiClient::submit_for_team(self, team_id, submission).await
    }

    async fn submit_individual(
        &self,
        competition_id: Uuid,
        submission: &NewSubmission,
    ) -> Result<CreatedSubmission> {
        ApiClient::submit_individual(self, competition_id, submission).await
    }
}

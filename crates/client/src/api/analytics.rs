use domain::models::{AdminKpis, EventEngagement, SurveyResults, UserGrowthPoint};
use uuid::Uuid;

use super::ApiClient;
use crate::error::Result;

impl ApiClient {
    pub async fn admin_kpis(&self) -> Result<AdminKpis> {
        self.data(self.get("/analytics/admin/kpis")).await
    }

    pub async fn user_growth(&self) -> Result<Vec<UserGrowthPoint>> {
        self.list(self.get("/analytics/admin/user-growth")).await
    }

    pub async fn event_engagement(&self) -> Result<Vec<EventEngagement>> {
        self.list(self.get("/analytics/admin/event-engagement")).await
    }

    pub async fn survey_results(&self, event_id: Uuid) -> Result<SurveyResults> {
        self.data(self.get(&format!("/analytics/events/{}/survey-results", event_id)))
            .await
    }
}

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminKpis {
    pub total_active_users: u64,
    pub events_in_progress: u64,
    pub upcoming_events: u64,
    pub total_registrations: u64,
    pub total_submissions: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserGrowthPoint {
    pub month: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventEngagement {
    pub event_id: Uuid,
    pub title: String,
    pub registration_count: u64,
    pub submission_count: u64,
}

impl EventEngagement {
    /// Share of registrants that ended up submitting, in percent.
    pub fn conversion_percent(&self) -> Option<f64> {
        if self.registration_count == 0 {
            return None;
        }
        Some(self.submission_count as f64 * 100.0 / self.registration_count as f64)
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::event::EventStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: Uuid,
    pub event_id: Uuid,
    pub user_id: Uuid,
    pub registered_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrantUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// One row of an event's registration list, as the organizer sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRegistrant {
    pub id: Uuid,
    pub user: RegistrantUser,
    pub registered_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredCompetitionRef {
    pub event_id: Uuid,
    pub is_team_based: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredEvent {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub location: Option<String>,
    pub status: EventStatus,
    #[serde(default)]
    pub competition: Option<RegisteredCompetitionRef>,
}

/// The caller's registration with its event embedded (`GET /registrations/me`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MyRegistration {
    pub id: Uuid,
    pub user_id: Uuid,
    pub event_id: Uuid,
    #[serde(default)]
    pub status: Option<String>,
    pub registered_at: DateTime<Utc>,
    pub event: RegisteredEvent,
}

impl MyRegistration {
    pub fn as_registration(&self) -> Registration {
        Registration {
            id: self.id,
            event_id: self.event_id,
            user_id: self.user_id,
            registered_at: self.registered_at,
        }
    }
}

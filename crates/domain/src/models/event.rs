use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::competition::Competition;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    Draft,
    Published,
    Cancelled,
    InProgress,
    Completed,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Published => "PUBLISHED",
            Self::Cancelled => "CANCELLED",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
        }
    }

    pub fn all() -> &'static [EventStatus] {
        &[
            Self::Draft,
            Self::Published,
            Self::Cancelled,
            Self::InProgress,
            Self::Completed,
        ]
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for EventStatus {
    type Err = crate::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace('-', "_");
        Self::all()
            .iter()
            .copied()
            .find(|status| status.as_str() == normalized)
            .ok_or_else(|| {
                crate::DomainError::InvalidInput(format!(
                    "Unknown event status: '{}'. Available: {}",
                    s,
                    Self::all()
                        .iter()
                        .map(|st| st.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ))
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organizer {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
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
    pub max_participants: Option<u32>,
    #[serde(default)]
    pub organizer: Option<Organizer>,
    #[serde(default)]
    pub competition: Option<Competition>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Event {
    /// An event counts as ended from its end instant onwards.
    pub fn has_ended(&self, now: DateTime<Utc>) -> bool {
        now >= self.end_time
    }

    pub fn is_team_based(&self) -> bool {
        self.competition
            .as_ref()
            .is_some_and(|competition| competition.is_team_based)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_deserializes_from_api_shape() {
        let json = r#"{
            "id": "5f0c7b1e-8f6a-4a55-9d0e-0c1b2d3e4f50",
            "title": "Spring Hackathon",
            "startTime": "2025-03-01T09:00:00.000Z",
            "endTime": "2025-03-02T18:00:00.000Z",
            "status": "IN_PROGRESS",
            "organizer": { "firstName": "Ada", "lastName": "Lovelace" },
            "competition": null
        }"#;

        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.title, "Spring Hackathon");
        assert_eq!(event.status, EventStatus::InProgress);
        assert!(event.competition.is_none());
        assert!(!event.is_team_based());
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!("published".parse::<EventStatus>().unwrap(), EventStatus::Published);
        assert_eq!("in-progress".parse::<EventStatus>().unwrap(), EventStatus::InProgress);
        assert!("archived".parse::<EventStatus>().is_err());
    }
}

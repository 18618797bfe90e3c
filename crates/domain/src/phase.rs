use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{Event, EventStatus};

/// Where an event sits in its lifecycle at a given instant, as shown in listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventPhase {
    Draft,
    Upcoming,
    Live,
    Ended,
    Completed,
    Cancelled,
}

impl EventPhase {
    pub fn at(event: &Event, now: DateTime<Utc>) -> Self {
        match event.status {
            EventStatus::Draft => Self::Draft,
            EventStatus::Cancelled => Self::Cancelled,
            EventStatus::Completed => Self::Completed,
            EventStatus::InProgress => Self::Live,
            EventStatus::Published if now < event.start_time => Self::Upcoming,
            EventStatus::Published if event.has_ended(now) => Self::Ended,
            EventStatus::Published => Self::Live,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Upcoming => "Upcoming",
            Self::Live => "Live",
            Self::Ended => "Ended",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for EventPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

use domain::dto::{CreateEventRequest, EventFilters, UpdateEventRequest};
use domain::models::{Event, EventRegistrant, MyRegistration, Page, Registration};
use tracing::{debug, info};
use uuid::Uuid;
use validator::Validate;

use super::ApiClient;
use crate::error::Result;

impl ApiClient {
    pub async fn list_events(&self, filters: &EventFilters) -> Result<Page<Event>> {
        filters.validate()?;
        self.page(self.get_with("/events", filters)).await
    }

    pub async fn get_event(&self, event_id: Uuid) -> Result<Event> {
        self.data(self.get(&format!("/events/{}", event_id))).await
    }

    pub async fn create_event(&self, request: &CreateEventRequest) -> Result<Event> {
        request.validate()?;
        let event: Event = self.data(self.post("/events").json(request)).await?;
        info!("Created event {} ({})", event.title, event.id);
        Ok(event)
    }

    pub async fn update_event(&self, event_id: Uuid, request: &UpdateEventRequest) -> Result<Event> {
        request.validate()?;
        let event = self
            .data(self.patch(&format!("/events/{}", event_id)).json(request))
            .await?;
        info!("Updated event {}", event_id);
        Ok(event)
    }

    pub async fn delete_event(&self, event_id: Uuid) -> Result<Option<String>> {
        let message = self
            .acknowledge(self.delete(&format!("/events/{}", event_id)))
            .await?;
        info!("Deleted event {}", event_id);
        Ok(message)
    }

    pub async fn register_for_event(&self, event_id: Uuid) -> Result<Registration> {
        let registration = self
            .data(self.post(&format!("/events/{}/register", event_id)))
            .await?;
        info!("Registered for event {}", event_id);
        Ok(registration)
    }

    /// The viewer's registration for one event. A 404 means "not registered".
    pub async fn my_event_registration(&self, event_id: Uuid) -> Result<Option<Registration>> {
        match self
            .data(self.get(&format!("/events/{}/registration/me", event_id)))
            .await
        {
            Ok(registration) => Ok(Some(registration)),
            Err(e) if e.is_not_found() => {
                debug!("No registration for event {}", event_id);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    pub async fn my_registrations(&self) -> Result<Vec<MyRegistration>> {
        self.list(self.get("/registrations/me")).await
    }

    pub async fn event_registrations(&self, event_id: Uuid) -> Result<Vec<EventRegistrant>> {
        self.list(self.get(&format!("/events/{}/registrations", event_id)))
            .await
    }
}

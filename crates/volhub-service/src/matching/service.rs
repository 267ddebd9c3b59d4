//! Volunteer/event matching orchestration.

use std::sync::Arc;

use tracing::info;

use volhub_core::error::AppError;
use volhub_core::result::AppResult;
use volhub_core::types::id::{EventId, VolunteerId};
use volhub_entity::matching::Match;
use volhub_store::{EventStore, MatchStore, VolunteerStore};

use crate::notification::NotificationService;

/// Orchestrates volunteer/event assignments and their notifications.
#[derive(Debug, Clone)]
pub struct MatchingService {
    /// Backing match store.
    match_store: Arc<MatchStore>,
    /// Volunteer registry, consulted before recording a match.
    volunteer_store: Arc<VolunteerStore>,
    /// Event registry, consulted before recording a match.
    event_store: Arc<EventStore>,
    /// Notification fan-out.
    notifications: Arc<NotificationService>,
}

impl MatchingService {
    /// Creates a new matching service.
    pub fn new(
        match_store: Arc<MatchStore>,
        volunteer_store: Arc<VolunteerStore>,
        event_store: Arc<EventStore>,
        notifications: Arc<NotificationService>,
    ) -> Self {
        Self {
            match_store,
            volunteer_store,
            event_store,
            notifications,
        }
    }

    /// Assigns a volunteer to an event, then notifies the volunteer.
    ///
    /// Both the volunteer and the event must exist at the time of the call.
    pub async fn create(&self, volunteer_id: VolunteerId, event_id: EventId) -> AppResult<Match> {
        let volunteer = self
            .volunteer_store
            .find_by_id(volunteer_id)
            .await
            .ok_or_else(|| AppError::not_found(format!("Volunteer {volunteer_id} not found")))?;
        let event = self
            .event_store
            .find_by_id(event_id)
            .await
            .ok_or_else(|| AppError::not_found(format!("Event {event_id} not found")))?;

        let record = self.match_store.create(volunteer_id, event_id).await?;

        self.notifications
            .notify_volunteer(volunteer_id, format!("Assigned to event '{}'", event.name))
            .await;
        info!(
            volunteer = %volunteer.name,
            event = %event.name,
            "Volunteer matched to event"
        );

        Ok(record)
    }

    /// Lists every match in insertion order.
    pub async fn list_all(&self) -> Vec<Match> {
        self.match_store.list_all().await
    }

    /// Lists matches for one volunteer, insertion order preserved.
    pub async fn list_by_volunteer(&self, volunteer_id: VolunteerId) -> Vec<Match> {
        self.match_store.list_by_volunteer(volunteer_id).await
    }

    /// Removes every match between a volunteer and an event, then notifies
    /// the volunteer.
    ///
    /// The event name is included in the notification when the event still
    /// exists; a deleted event falls back to its raw identifier.
    pub async fn delete(&self, volunteer_id: VolunteerId, event_id: EventId) -> AppResult<()> {
        if !self.match_store.delete(volunteer_id, event_id).await {
            return Err(AppError::not_found(format!(
                "No match between volunteer {volunteer_id} and event {event_id}"
            )));
        }

        let label = match self.event_store.find_by_id(event_id).await {
            Some(event) => format!("'{}'", event.name),
            None => format!("{event_id}"),
        };
        self.notifications
            .notify_volunteer(volunteer_id, format!("Removed from event {label}"))
            .await;
        info!(volunteer = %volunteer_id, event = %event_id, "Match removed");

        Ok(())
    }
}

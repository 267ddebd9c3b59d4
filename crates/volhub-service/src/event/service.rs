//! Event registry orchestration and notification fan-out.

use std::sync::Arc;

use tracing::info;

use volhub_core::error::AppError;
use volhub_core::result::AppResult;
use volhub_core::types::id::{EventId, VolunteerId};
use volhub_entity::event::{CreateEvent, Event, UpdateEvent};
use volhub_store::{EventStore, MatchStore};

use crate::notification::NotificationService;

/// Manages the event registry and the notifications its changes trigger.
#[derive(Debug, Clone)]
pub struct EventService {
    /// Backing event store.
    event_store: Arc<EventStore>,
    /// Match records, used to find volunteers affected by a change.
    match_store: Arc<MatchStore>,
    /// Notification fan-out.
    notifications: Arc<NotificationService>,
}

impl EventService {
    /// Creates a new event service.
    pub fn new(
        event_store: Arc<EventStore>,
        match_store: Arc<MatchStore>,
        notifications: Arc<NotificationService>,
    ) -> Self {
        Self {
            event_store,
            match_store,
            notifications,
        }
    }

    /// Creates an event and announces it to every administrator.
    pub async fn create(&self, new: CreateEvent) -> Event {
        let event = self.event_store.create(new).await;
        self.notifications
            .broadcast_admins(format!("Event '{}' created", event.name))
            .await;
        info!(id = %event.id, name = %event.name, "Event created");
        event
    }

    /// Lists every event in creation order.
    pub async fn list(&self) -> Vec<Event> {
        self.event_store.list_all().await
    }

    /// Looks up an event by identifier.
    pub async fn get(&self, id: EventId) -> AppResult<Event> {
        self.event_store
            .find_by_id(id)
            .await
            .ok_or_else(|| AppError::not_found(format!("Event {id} not found")))
    }

    /// Applies a partial update, then notifies every volunteer matched to
    /// the event. Each volunteer is notified once even when the same pair
    /// is matched multiple times.
    pub async fn update(&self, id: EventId, update: UpdateEvent) -> AppResult<Event> {
        let event = self
            .event_store
            .update(id, update)
            .await
            .ok_or_else(|| AppError::not_found(format!("Event {id} not found")))?;

        let mut notified: Vec<VolunteerId> = Vec::new();
        for record in self.match_store.list_by_event(id).await {
            if !notified.contains(&record.volunteer_id) {
                notified.push(record.volunteer_id);
                self.notifications
                    .notify_volunteer(
                        record.volunteer_id,
                        format!("Event '{}' updated", event.name),
                    )
                    .await;
            }
        }
        info!(id = %event.id, notified = notified.len(), "Event updated");

        Ok(event)
    }

    /// Deletes an event. Match records referencing the event are not
    /// removed; listings surface the dangling reference without details.
    pub async fn delete(&self, id: EventId) -> AppResult<()> {
        if self.event_store.delete(id).await {
            Ok(())
        } else {
            Err(AppError::not_found(format!("Event {id} not found")))
        }
    }
}

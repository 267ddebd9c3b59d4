//! In-memory event store.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use tokio::sync::Mutex;
use tracing::debug;

use volhub_core::types::id::EventId;
use volhub_entity::event::{CreateEvent, Event, UpdateEvent};

/// In-memory event registry guarded by a Tokio mutex.
#[derive(Debug)]
pub struct EventStore {
    /// Events in creation order.
    events: Mutex<Vec<Event>>,
    /// Monotonic identifier source.
    next_id: AtomicI64,
}

impl EventStore {
    /// Create an empty event store.
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    fn allocate_id(&self) -> EventId {
        EventId::new(self.next_id.fetch_add(1, Ordering::SeqCst))
    }

    /// Create an event and return the stored record.
    pub async fn create(&self, new: CreateEvent) -> Event {
        let event = Event {
            id: self.allocate_id(),
            name: new.name,
            description: new.description,
            location: new.location,
            required_skills: new.required_skills,
            urgency: new.urgency,
            event_date: new.event_date,
            created_at: Utc::now(),
        };

        let mut events = self.events.lock().await;
        events.push(event.clone());
        debug!(id = %event.id, name = %event.name, "Event stored");

        event
    }

    /// List every event in creation order.
    pub async fn list_all(&self) -> Vec<Event> {
        self.events.lock().await.clone()
    }

    /// Look up an event by identifier.
    pub async fn find_by_id(&self, id: EventId) -> Option<Event> {
        let events = self.events.lock().await;
        events.iter().find(|e| e.id == id).cloned()
    }

    /// Apply a partial update and return the new record.
    ///
    /// Returns `None` when the identifier is unknown.
    pub async fn update(&self, id: EventId, update: UpdateEvent) -> Option<Event> {
        let mut events = self.events.lock().await;
        let event = events.iter_mut().find(|e| e.id == id)?;

        if let Some(name) = update.name {
            event.name = name;
        }
        if let Some(description) = update.description {
            event.description = description;
        }
        if let Some(location) = update.location {
            event.location = location;
        }
        if let Some(required_skills) = update.required_skills {
            event.required_skills = required_skills;
        }
        if let Some(urgency) = update.urgency {
            event.urgency = urgency;
        }
        if let Some(event_date) = update.event_date {
            event.event_date = event_date;
        }

        Some(event.clone())
    }

    /// Remove an event. Returns `false` when the identifier is unknown.
    pub async fn delete(&self, id: EventId) -> bool {
        let mut events = self.events.lock().await;
        let before = events.len();
        events.retain(|e| e.id != id);
        let deleted = events.len() != before;
        if deleted {
            debug!(id = %id, "Event deleted");
        }
        deleted
    }

    /// Number of events currently stored.
    pub async fn len(&self) -> usize {
        self.events.lock().await.len()
    }
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new()
    }
}

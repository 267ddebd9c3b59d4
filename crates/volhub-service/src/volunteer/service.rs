//! Volunteer registry and participation history.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use volhub_core::error::AppError;
use volhub_core::result::AppResult;
use volhub_core::types::id::{EventId, VolunteerId};
use volhub_entity::event::Urgency;
use volhub_entity::volunteer::{CreateVolunteer, UpdateVolunteer, Volunteer};
use volhub_store::{EventStore, MatchStore, VolunteerStore};

/// One row of a volunteer's participation history.
///
/// Event details are `None` when the matched event has since been deleted;
/// the match itself is still listed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// The matched event.
    pub event_id: EventId,
    /// Event name, if the event still exists.
    pub event_name: Option<String>,
    /// Event location, if the event still exists.
    pub location: Option<String>,
    /// Event date, if the event still exists.
    pub event_date: Option<NaiveDate>,
    /// Event urgency, if the event still exists.
    pub urgency: Option<Urgency>,
    /// When the match was recorded.
    pub date_matched: NaiveDate,
}

/// Manages the volunteer registry and derived views of it.
#[derive(Debug, Clone)]
pub struct VolunteerService {
    /// Backing volunteer store.
    volunteer_store: Arc<VolunteerStore>,
    /// Match records, joined into the history view.
    match_store: Arc<MatchStore>,
    /// Event registry, joined into the history view.
    event_store: Arc<EventStore>,
}

impl VolunteerService {
    /// Creates a new volunteer service.
    pub fn new(
        volunteer_store: Arc<VolunteerStore>,
        match_store: Arc<MatchStore>,
        event_store: Arc<EventStore>,
    ) -> Self {
        Self {
            volunteer_store,
            match_store,
            event_store,
        }
    }

    /// Registers a new volunteer.
    pub async fn create(&self, new: CreateVolunteer) -> Volunteer {
        let volunteer = self.volunteer_store.create(new).await;
        info!(id = %volunteer.id, name = %volunteer.name, "Volunteer registered");
        volunteer
    }

    /// Lists every volunteer in registration order.
    pub async fn list(&self) -> Vec<Volunteer> {
        self.volunteer_store.list_all().await
    }

    /// Looks up a volunteer by identifier.
    pub async fn get(&self, id: VolunteerId) -> AppResult<Volunteer> {
        self.volunteer_store
            .find_by_id(id)
            .await
            .ok_or_else(|| AppError::not_found(format!("Volunteer {id} not found")))
    }

    /// Applies a partial update to a volunteer.
    pub async fn update(&self, id: VolunteerId, update: UpdateVolunteer) -> AppResult<Volunteer> {
        self.volunteer_store
            .update(id, update)
            .await
            .ok_or_else(|| AppError::not_found(format!("Volunteer {id} not found")))
    }

    /// Removes a volunteer. Their match records are not removed.
    pub async fn delete(&self, id: VolunteerId) -> AppResult<()> {
        if self.volunteer_store.delete(id).await {
            Ok(())
        } else {
            Err(AppError::not_found(format!("Volunteer {id} not found")))
        }
    }

    /// Builds the participation history for a volunteer, joining match
    /// records with whatever event details still exist.
    pub async fn history(&self, id: VolunteerId) -> AppResult<Vec<HistoryEntry>> {
        if self.volunteer_store.find_by_id(id).await.is_none() {
            return Err(AppError::not_found(format!("Volunteer {id} not found")));
        }

        let mut entries = Vec::new();
        for record in self.match_store.list_by_volunteer(id).await {
            let event = self.event_store.find_by_id(record.event_id).await;
            entries.push(HistoryEntry {
                event_id: record.event_id,
                event_name: event.as_ref().map(|e| e.name.clone()),
                location: event.as_ref().map(|e| e.location.clone()),
                event_date: event.as_ref().map(|e| e.event_date),
                urgency: event.map(|e| e.urgency),
                date_matched: record.date_matched,
            });
        }

        Ok(entries)
    }
}

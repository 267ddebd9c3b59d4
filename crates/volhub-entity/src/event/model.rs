//! Event entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use volhub_core::types::id::EventId;

use super::urgency::Urgency;

/// A volunteer event organized through VolHub.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique event identifier.
    pub id: EventId,
    /// Event name.
    pub name: String,
    /// What the event is about.
    pub description: String,
    /// Where the event takes place.
    pub location: String,
    /// Skills volunteers should bring.
    pub required_skills: Vec<String>,
    /// How urgently volunteers are needed.
    pub urgency: Urgency,
    /// Calendar date the event takes place.
    pub event_date: NaiveDate,
    /// When the event was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEvent {
    /// Event name.
    pub name: String,
    /// What the event is about.
    pub description: String,
    /// Where the event takes place.
    pub location: String,
    /// Skills volunteers should bring.
    pub required_skills: Vec<String>,
    /// How urgently volunteers are needed.
    pub urgency: Urgency,
    /// Calendar date the event takes place.
    pub event_date: NaiveDate,
}

/// Data for updating an existing event. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEvent {
    /// New event name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New location.
    pub location: Option<String>,
    /// New skill list.
    pub required_skills: Option<Vec<String>>,
    /// New urgency.
    pub urgency: Option<Urgency>,
    /// New event date.
    pub event_date: Option<NaiveDate>,
}

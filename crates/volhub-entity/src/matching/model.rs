//! Match entity model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use volhub_core::types::id::{EventId, VolunteerId};

/// A record pairing a volunteer with an event they are assigned to.
///
/// Matches carry no identifier of their own; a record is addressed by its
/// `(volunteer_id, event_id)` combination, and the same pair may appear
/// more than once.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    /// The assigned volunteer.
    pub volunteer_id: VolunteerId,
    /// The event the volunteer is assigned to.
    pub event_id: EventId,
    /// Calendar date the match was recorded.
    pub date_matched: NaiveDate,
}

impl Match {
    /// Check if this record pairs the given volunteer with the given event.
    pub fn is_pair(&self, volunteer_id: VolunteerId, event_id: EventId) -> bool {
        self.volunteer_id == volunteer_id && self.event_id == event_id
    }
}

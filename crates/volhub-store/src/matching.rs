//! In-memory volunteer/event match store.

use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{debug, info};

use volhub_core::config::matching::MatchingConfig;
use volhub_core::error::AppError;
use volhub_core::result::AppResult;
use volhub_core::types::id::{EventId, VolunteerId};
use volhub_entity::matching::Match;

/// In-memory match store guarded by a Tokio mutex.
///
/// Records are kept in insertion order. The same volunteer/event pair may
/// appear more than once unless duplicates are disabled in configuration;
/// the duplicate check runs under the same lock as the insert, so two
/// concurrent creates cannot both slip past it.
#[derive(Debug)]
pub struct MatchStore {
    /// Match records in insertion order.
    matches: Mutex<Vec<Match>>,
    /// Duplicate-pair policy.
    config: MatchingConfig,
}

impl MatchStore {
    /// Create an empty match store with the given policy.
    pub fn new(config: MatchingConfig) -> Self {
        Self {
            matches: Mutex::new(Vec::new()),
            config,
        }
    }

    /// Record a volunteer/event assignment, dated today.
    ///
    /// Fails with a conflict when the pair already exists and duplicates
    /// are disabled.
    pub async fn create(&self, volunteer_id: VolunteerId, event_id: EventId) -> AppResult<Match> {
        let mut matches = self.matches.lock().await;

        if !self.config.allow_duplicates
            && matches.iter().any(|m| m.is_pair(volunteer_id, event_id))
        {
            return Err(AppError::conflict(format!(
                "Volunteer {volunteer_id} is already matched to event {event_id}"
            )));
        }

        let record = Match {
            volunteer_id,
            event_id,
            date_matched: Utc::now().date_naive(),
        };
        matches.push(record.clone());
        info!(
            volunteer = %volunteer_id,
            event = %event_id,
            total = matches.len(),
            "Match recorded"
        );

        Ok(record)
    }

    /// List every match in insertion order.
    pub async fn list_all(&self) -> Vec<Match> {
        self.matches.lock().await.clone()
    }

    /// List matches for one volunteer, insertion order preserved.
    pub async fn list_by_volunteer(&self, volunteer_id: VolunteerId) -> Vec<Match> {
        let matches = self.matches.lock().await;
        matches
            .iter()
            .filter(|m| m.volunteer_id == volunteer_id)
            .cloned()
            .collect()
    }

    /// List matches for one event, insertion order preserved.
    pub async fn list_by_event(&self, event_id: EventId) -> Vec<Match> {
        let matches = self.matches.lock().await;
        matches
            .iter()
            .filter(|m| m.event_id == event_id)
            .cloned()
            .collect()
    }

    /// Remove every record pairing the given volunteer with the given event.
    ///
    /// Returns `false` when no such pair exists.
    pub async fn delete(&self, volunteer_id: VolunteerId, event_id: EventId) -> bool {
        let mut matches = self.matches.lock().await;
        let before = matches.len();
        matches.retain(|m| !m.is_pair(volunteer_id, event_id));
        let removed = before - matches.len();
        if removed > 0 {
            debug!(
                volunteer = %volunteer_id,
                event = %event_id,
                removed,
                "Match records deleted"
            );
        }
        removed > 0
    }

    /// Number of match records currently stored.
    pub async fn len(&self) -> usize {
        self.matches.lock().await.len()
    }
}

//! In-memory volunteer store.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use tokio::sync::Mutex;
use tracing::debug;

use volhub_core::types::id::VolunteerId;
use volhub_entity::volunteer::{CreateVolunteer, UpdateVolunteer, Volunteer};

/// In-memory volunteer registry guarded by a Tokio mutex.
#[derive(Debug)]
pub struct VolunteerStore {
    /// Volunteers in registration order.
    volunteers: Mutex<Vec<Volunteer>>,
    /// Monotonic identifier source.
    next_id: AtomicI64,
}

impl VolunteerStore {
    /// Create an empty volunteer store.
    pub fn new() -> Self {
        Self {
            volunteers: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    fn allocate_id(&self) -> VolunteerId {
        VolunteerId::new(self.next_id.fetch_add(1, Ordering::SeqCst))
    }

    /// Register a volunteer and return the stored record.
    pub async fn create(&self, new: CreateVolunteer) -> Volunteer {
        let volunteer = Volunteer {
            id: self.allocate_id(),
            name: new.name,
            email: new.email,
            city: new.city,
            state: new.state,
            skills: new.skills,
            availability: new.availability,
            created_at: Utc::now(),
        };

        let mut volunteers = self.volunteers.lock().await;
        volunteers.push(volunteer.clone());
        debug!(id = %volunteer.id, name = %volunteer.name, "Volunteer stored");

        volunteer
    }

    /// List every volunteer in registration order.
    pub async fn list_all(&self) -> Vec<Volunteer> {
        self.volunteers.lock().await.clone()
    }

    /// Look up a volunteer by identifier.
    pub async fn find_by_id(&self, id: VolunteerId) -> Option<Volunteer> {
        let volunteers = self.volunteers.lock().await;
        volunteers.iter().find(|v| v.id == id).cloned()
    }

    /// Apply a partial update and return the new record.
    ///
    /// Returns `None` when the identifier is unknown.
    pub async fn update(&self, id: VolunteerId, update: UpdateVolunteer) -> Option<Volunteer> {
        let mut volunteers = self.volunteers.lock().await;
        let volunteer = volunteers.iter_mut().find(|v| v.id == id)?;

        if let Some(name) = update.name {
            volunteer.name = name;
        }
        if let Some(email) = update.email {
            volunteer.email = Some(email);
        }
        if let Some(city) = update.city {
            volunteer.city = city;
        }
        if let Some(state) = update.state {
            volunteer.state = state;
        }
        if let Some(skills) = update.skills {
            volunteer.skills = skills;
        }
        if let Some(availability) = update.availability {
            volunteer.availability = availability;
        }

        Some(volunteer.clone())
    }

    /// Remove a volunteer. Returns `false` when the identifier is unknown.
    pub async fn delete(&self, id: VolunteerId) -> bool {
        let mut volunteers = self.volunteers.lock().await;
        let before = volunteers.len();
        volunteers.retain(|v| v.id != id);
        let deleted = volunteers.len() != before;
        if deleted {
            debug!(id = %id, "Volunteer deleted");
        }
        deleted
    }

    /// Number of volunteers currently stored.
    pub async fn len(&self) -> usize {
        self.volunteers.lock().await.len()
    }
}

impl Default for VolunteerStore {
    fn default() -> Self {
        Self::new()
    }
}

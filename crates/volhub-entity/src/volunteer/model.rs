//! Volunteer entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use volhub_core::types::id::VolunteerId;

/// A registered volunteer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volunteer {
    /// Unique volunteer identifier.
    pub id: VolunteerId,
    /// Full name.
    pub name: String,
    /// Email address (optional).
    pub email: Option<String>,
    /// City of residence.
    pub city: String,
    /// State or region of residence.
    pub state: String,
    /// Skills the volunteer offers.
    pub skills: Vec<String>,
    /// Calendar dates the volunteer is available.
    pub availability: Vec<NaiveDate>,
    /// When the volunteer registered.
    pub created_at: DateTime<Utc>,
}

/// Data required to register a new volunteer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVolunteer {
    /// Full name.
    pub name: String,
    /// Email address (optional).
    pub email: Option<String>,
    /// City of residence.
    pub city: String,
    /// State or region of residence.
    pub state: String,
    /// Skills the volunteer offers.
    pub skills: Vec<String>,
    /// Calendar dates the volunteer is available.
    pub availability: Vec<NaiveDate>,
}

/// Data for updating an existing volunteer. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateVolunteer {
    /// New full name.
    pub name: Option<String>,
    /// New email address.
    pub email: Option<String>,
    /// New city.
    pub city: Option<String>,
    /// New state or region.
    pub state: Option<String>,
    /// New skill list.
    pub skills: Option<Vec<String>>,
    /// New availability dates.
    pub availability: Option<Vec<NaiveDate>>,
}

//! Request DTOs with validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Create notification request body.
///
/// The required fields are declared optional so the handler can report a
/// missing field as a validation error rather than a deserialization
/// failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotificationRequest {
    /// Audience: `"admin"` or `"volunteer"`.
    pub recipient_type: Option<String>,
    /// Specific volunteer recipient; absent or null addresses the audience.
    pub recipient_id: Option<i64>,
    /// Notification body text.
    pub message: Option<String>,
}

/// Create match request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMatchRequest {
    /// The volunteer to assign.
    pub volunteer_id: Option<i64>,
    /// The event to assign them to.
    pub event_id: Option<i64>,
}

/// Delete match request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteMatchRequest {
    /// The assigned volunteer.
    pub volunteer_id: Option<i64>,
    /// The assigned event.
    pub event_id: Option<i64>,
}

/// Register volunteer request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateVolunteerRequest {
    /// Full name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Email address.
    pub email: Option<String>,
    /// City of residence.
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,
    /// State or region of residence.
    #[validate(length(min = 1, message = "State is required"))]
    pub state: String,
    /// Skills offered.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Available dates.
    #[serde(default)]
    pub availability: Vec<NaiveDate>,
}

/// Update volunteer request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVolunteerRequest {
    /// New full name.
    #[validate(length(min = 1))]
    pub name: Option<String>,
    /// New email address.
    pub email: Option<String>,
    /// New city.
    #[validate(length(min = 1))]
    pub city: Option<String>,
    /// New state or region.
    #[validate(length(min = 1))]
    pub state: Option<String>,
    /// New skill list.
    pub skills: Option<Vec<String>>,
    /// New availability dates.
    pub availability: Option<Vec<NaiveDate>>,
}

/// Create event request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    /// Event name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// What the event is about.
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    /// Where the event takes place.
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,
    /// Skills volunteers should bring.
    #[serde(default)]
    pub required_skills: Vec<String>,
    /// Urgency: `"low"`, `"medium"`, or `"high"`.
    pub urgency: String,
    /// Calendar date of the event.
    pub event_date: NaiveDate,
}

/// Update event request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
    /// New event name.
    #[validate(length(min = 1))]
    pub name: Option<String>,
    /// New description.
    #[validate(length(min = 1))]
    pub description: Option<String>,
    /// New location.
    #[validate(length(min = 1))]
    pub location: Option<String>,
    /// New skill list.
    pub required_skills: Option<Vec<String>>,
    /// New urgency.
    pub urgency: Option<String>,
    /// New event date.
    pub event_date: Option<NaiveDate>,
}

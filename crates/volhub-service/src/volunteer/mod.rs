//! Volunteer service.

pub mod service;

pub use service::{HistoryEntry, VolunteerService};

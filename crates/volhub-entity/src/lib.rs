//! # volhub-entity
//!
//! Domain entity models for VolHub. Every struct in this crate represents
//! a stored record or a domain value object. All entities derive `Debug`,
//! `Clone`, `Serialize`, and `Deserialize`; wire-facing entities serialize
//! with camelCase field names to match the documented JSON contract.

pub mod event;
pub mod matching;
pub mod notification;
pub mod role;
pub mod volunteer;

pub use event::{CreateEvent, Event, UpdateEvent, Urgency};
pub use matching::Match;
pub use notification::Notification;
pub use role::Role;
pub use volunteer::{CreateVolunteer, UpdateVolunteer, Volunteer};

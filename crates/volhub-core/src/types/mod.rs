//! Shared type definitions used across VolHub crates.

pub mod id;

pub use id::{EventId, NotificationId, VolunteerId};

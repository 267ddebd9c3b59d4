//! # volhub-store
//!
//! In-memory data stores for VolHub. Each store owns its records behind a
//! Tokio mutex and hands out clones, so callers never hold a lock across
//! await points. State lives for the process lifetime only; a restart
//! starts empty.

pub mod event;
pub mod matching;
pub mod notification;
pub mod volunteer;

pub use event::EventStore;
pub use matching::MatchStore;
pub use notification::NotificationStore;
pub use volunteer::VolunteerStore;

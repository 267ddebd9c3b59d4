//! Event domain entities.

pub mod model;
pub mod urgency;

pub use model::{CreateEvent, Event, UpdateEvent};
pub use urgency::Urgency;

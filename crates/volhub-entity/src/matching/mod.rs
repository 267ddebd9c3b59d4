//! Volunteer/event matching domain entities.

pub mod model;

pub use model::Match;

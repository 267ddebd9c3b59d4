//! Volunteer domain entities.

pub mod model;

pub use model::{CreateVolunteer, UpdateVolunteer, Volunteer};

//! Volunteer/event matching service.

pub mod service;

pub use service::MatchingService;

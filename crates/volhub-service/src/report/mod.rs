//! Report generation services.

pub mod participation;

pub use participation::ParticipationReportService;

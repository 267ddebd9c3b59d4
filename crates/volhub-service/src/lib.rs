//! # volhub-service
//!
//! Business logic service layer for VolHub. Each service orchestrates the
//! in-memory stores to implement application-level use cases, including
//! the notification fan-out that accompanies matching and event changes.
//!
//! Services follow constructor injection; all dependencies are provided
//! at construction time via `Arc` references.

pub mod event;
pub mod matching;
pub mod notification;
pub mod report;
pub mod volunteer;

pub use event::EventService;
pub use matching::MatchingService;
pub use notification::NotificationService;
pub use report::ParticipationReportService;
pub use volunteer::{HistoryEntry, VolunteerService};

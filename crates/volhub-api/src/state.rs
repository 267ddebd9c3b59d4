//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use volhub_core::config::AppConfig;
use volhub_service::event::EventService;
use volhub_service::matching::MatchingService;
use volhub_service::notification::NotificationService;
use volhub_service::report::ParticipationReportService;
use volhub_service::volunteer::VolunteerService;
use volhub_store::{EventStore, MatchStore, NotificationStore, VolunteerStore};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Process start time, used for uptime reporting
    pub started_at: Instant,

    // ── Stores ───────────────────────────────────────────────
    /// Notification store
    pub notification_store: Arc<NotificationStore>,
    /// Match store
    pub match_store: Arc<MatchStore>,
    /// Event store
    pub event_store: Arc<EventStore>,
    /// Volunteer store
    pub volunteer_store: Arc<VolunteerStore>,

    // ── Services ─────────────────────────────────────────────
    /// Notification service
    pub notification_service: Arc<NotificationService>,
    /// Matching service
    pub matching_service: Arc<MatchingService>,
    /// Event service
    pub event_service: Arc<EventService>,
    /// Volunteer service
    pub volunteer_service: Arc<VolunteerService>,
    /// Participation report service
    pub report_service: Arc<ParticipationReportService>,
}

//! Route definitions for the VolHub HTTP API.
//!
//! All routes are organized by domain. The router receives `AppState`
//! and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(notification_routes())
        .merge(matching_routes())
        .merge(volunteer_routes())
        .merge(event_routes())
        .merge(report_routes())
        .merge(health_routes())
        .with_state(state)
}

/// Notification endpoints
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/notifications",
            get(handlers::notification::list_notifications),
        )
        .route(
            "/notifications",
            post(handlers::notification::create_notification),
        )
        .route(
            "/notifications/{id}/read",
            put(handlers::notification::mark_read),
        )
        .route(
            "/notifications/{id}",
            delete(handlers::notification::delete_notification),
        )
}

/// Matching endpoints
fn matching_routes() -> Router<AppState> {
    Router::new()
        .route("/matching", post(handlers::matching::create_match))
        .route("/matching", get(handlers::matching::list_matches))
        .route("/matching", delete(handlers::matching::delete_match))
        .route(
            "/matching/{volunteer_id}",
            get(handlers::matching::list_matches_for_volunteer),
        )
}

/// Volunteer registry endpoints
fn volunteer_routes() -> Router<AppState> {
    Router::new()
        .route("/volunteers", get(handlers::volunteer::list_volunteers))
        .route("/volunteers", post(handlers::volunteer::create_volunteer))
        .route("/volunteers/{id}", get(handlers::volunteer::get_volunteer))
        .route(
            "/volunteers/{id}",
            put(handlers::volunteer::update_volunteer),
        )
        .route(
            "/volunteers/{id}",
            delete(handlers::volunteer::delete_volunteer),
        )
        .route(
            "/volunteers/{id}/history",
            get(handlers::volunteer::volunteer_history),
        )
}

/// Event registry endpoints
fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(handlers::event::list_events))
        .route("/events", post(handlers::event::create_event))
        .route("/events/{id}", get(handlers::event::get_event))
        .route("/events/{id}", put(handlers::event::update_event))
        .route("/events/{id}", delete(handlers::event::delete_event))
}

/// Report endpoints
fn report_routes() -> Router<AppState> {
    Router::new()
        .route("/reports/volunteers", get(handlers::report::volunteer_report))
        .route("/reports/events", get(handlers::report::event_report))
}

/// Health check endpoints
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

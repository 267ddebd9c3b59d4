//! Application builder wiring router, middleware, and state into an Axum app.

use axum::{Router, middleware as axum_middleware};
use tower_http::trace::TraceLayer;

use volhub_core::config::app::CorsConfig;

use crate::middleware::cors::build_cors_layer;
use crate::middleware::logging::request_logging;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState, cors_config: &CorsConfig) -> Router {
    build_router(state)
        .layer(axum_middleware::from_fn(request_logging))
        .layer(build_cors_layer(cors_config))
        .layer(TraceLayer::new_for_http())
}

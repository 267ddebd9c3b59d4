//! VolHub Server: Volunteer Management Platform
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;
use std::time::Instant;

use tracing_subscriber::{EnvFilter, fmt};

use volhub_core::config::AppConfig;
use volhub_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("VOLHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting VolHub v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Initialize stores ────────────────────────────────
    let notification_store = Arc::new(volhub_store::NotificationStore::new());
    let match_store = Arc::new(volhub_store::MatchStore::new(config.matching.clone()));
    let event_store = Arc::new(volhub_store::EventStore::new());
    let volunteer_store = Arc::new(volhub_store::VolunteerStore::new());

    // ── Step 2: Initialize services ──────────────────────────────
    let notification_service = Arc::new(volhub_service::notification::NotificationService::new(
        Arc::clone(&notification_store),
    ));
    let matching_service = Arc::new(volhub_service::matching::MatchingService::new(
        Arc::clone(&match_store),
        Arc::clone(&volunteer_store),
        Arc::clone(&event_store),
        Arc::clone(&notification_service),
    ));
    let event_service = Arc::new(volhub_service::event::EventService::new(
        Arc::clone(&event_store),
        Arc::clone(&match_store),
        Arc::clone(&notification_service),
    ));
    let volunteer_service = Arc::new(volhub_service::volunteer::VolunteerService::new(
        Arc::clone(&volunteer_store),
        Arc::clone(&match_store),
        Arc::clone(&event_store),
    ));
    let report_service = Arc::new(volhub_service::report::ParticipationReportService::new(
        Arc::clone(&volunteer_store),
        Arc::clone(&event_store),
        Arc::clone(&match_store),
    ));
    tracing::info!("Services initialized");

    // ── Step 3: Build and start HTTP server ──────────────────────
    let app_state = volhub_api::AppState {
        // Configuration
        config: Arc::new(config.clone()),
        started_at: Instant::now(),

        // Stores
        notification_store,
        match_store,
        event_store,
        volunteer_store,

        // Services
        notification_service,
        matching_service,
        event_service,
        volunteer_service,
        report_service,
    };

    let app = volhub_api::build_app(app_state, &config.server.cors);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("VolHub server listening on {}", addr);

    // ── Step 4: Graceful shutdown ────────────────────────────────
    let server = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal());

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("VolHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

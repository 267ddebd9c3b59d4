//! Shared test helpers for integration tests.

use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use volhub_core::config::AppConfig;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
}

impl TestApp {
    /// Create a new test application with default configuration
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a new test application with the given configuration
    pub fn with_config(config: AppConfig) -> Self {
        let notification_store = Arc::new(volhub_store::NotificationStore::new());
        let match_store = Arc::new(volhub_store::MatchStore::new(config.matching.clone()));
        let event_store = Arc::new(volhub_store::EventStore::new());
        let volunteer_store = Arc::new(volhub_store::VolunteerStore::new());

        let notification_service = Arc::new(
            volhub_service::notification::NotificationService::new(Arc::clone(
                &notification_store,
            )),
        );
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

        let state = volhub_api::AppState {
            config: Arc::new(config.clone()),
            started_at: Instant::now(),
            notification_store,
            match_store,
            event_store,
            volunteer_store,
            notification_service,
            matching_service,
            event_service,
            volunteer_service,
            report_service,
        };

        let router = volhub_api::build_app(state, &config.server.cors);

        Self { router }
    }

    /// Make an HTTP request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// Make a GET request and return the raw response body as text
    pub async fn request_text(&self, path: &str) -> TextResponse {
        let req = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        TextResponse {
            status,
            content_type,
            body: String::from_utf8_lossy(&body_bytes).into_owned(),
        }
    }

    /// Register a volunteer and return their ID
    pub async fn seed_volunteer(&self, name: &str) -> i64 {
        let body = serde_json::json!({
            "name": name,
            "city": "Houston",
            "state": "TX",
            "skills": ["first aid"],
        });

        let response = self.request("POST", "/volunteers", Some(body)).await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Volunteer seed failed: {:?}",
            response.body
        );

        response.body["data"]["id"]
            .as_i64()
            .expect("No id in volunteer response")
    }

    /// Create an event and return its ID
    pub async fn seed_event(&self, name: &str) -> i64 {
        let body = serde_json::json!({
            "name": name,
            "description": "Test event",
            "location": "Community Center",
            "requiredSkills": ["first aid"],
            "urgency": "medium",
            "eventDate": "2026-09-15",
        });

        let response = self.request("POST", "/events", Some(body)).await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Event seed failed: {:?}",
            response.body
        );

        response.body["data"]["id"]
            .as_i64()
            .expect("No id in event response")
    }

    /// Match a volunteer to an event
    pub async fn seed_match(&self, volunteer_id: i64, event_id: i64) {
        let body = serde_json::json!({
            "volunteerId": volunteer_id,
            "eventId": event_id,
        });

        let response = self.request("POST", "/matching", Some(body)).await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Match seed failed: {:?}",
            response.body
        );
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

/// Raw text response from a test request
#[derive(Debug)]
pub struct TextResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Content-Type header value
    pub content_type: String,
    /// Raw body
    pub body: String,
}

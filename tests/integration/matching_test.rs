//! Integration tests for the matching endpoints.

use axum::http::StatusCode;

use volhub_core::config::AppConfig;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_create_match_and_list() {
    let app = TestApp::new();
    let volunteer_id = app.seed_volunteer("Ada Lovelace").await;
    let event_id = app.seed_event("Beach Cleanup").await;

    let response = app
        .request(
            "POST",
            "/matching",
            Some(serde_json::json!({
                "volunteerId": volunteer_id,
                "eventId": event_id,
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"]["volunteerId"], volunteer_id);
    assert_eq!(response.body["data"]["eventId"], event_id);
    assert!(response.body["data"]["dateMatched"].is_string());

    let response = app.request("GET", "/matching", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"].as_array().map(Vec::len), Some(1));
    assert!(response.body.get("count").is_none());
}

#[tokio::test]
async fn test_match_requires_existing_parties() {
    let app = TestApp::new();
    let volunteer_id = app.seed_volunteer("Grace Hopper").await;
    let event_id = app.seed_event("Park Restoration").await;

    let response = app
        .request(
            "POST",
            "/matching",
            Some(serde_json::json!({
                "volunteerId": 999,
                "eventId": event_id,
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request(
            "POST",
            "/matching",
            Some(serde_json::json!({
                "volunteerId": volunteer_id,
                "eventId": 999,
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request(
            "POST",
            "/matching",
            Some(serde_json::json!({ "eventId": event_id })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_duplicate_pairs_and_bulk_delete() {
    let app = TestApp::new();
    let volunteer_id = app.seed_volunteer("Mary Seacole").await;
    let event_id = app.seed_event("Blood Drive").await;

    // The same pair may be recorded more than once.
    app.seed_match(volunteer_id, event_id).await;
    app.seed_match(volunteer_id, event_id).await;

    let response = app.request("GET", "/matching", None).await;
    assert_eq!(response.body["data"].as_array().map(Vec::len), Some(2));

    // Deleting removes every record of the pair at once.
    let response = app
        .request(
            "DELETE",
            "/matching",
            Some(serde_json::json!({
                "volunteerId": volunteer_id,
                "eventId": event_id,
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);

    let response = app.request("GET", "/matching", None).await;
    assert_eq!(response.body["data"].as_array().map(Vec::len), Some(0));

    let response = app
        .request(
            "DELETE",
            "/matching",
            Some(serde_json::json!({
                "volunteerId": volunteer_id,
                "eventId": event_id,
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_duplicates_rejected_when_configured() {
    let mut config = AppConfig::default();
    config.matching.allow_duplicates = false;
    let app = TestApp::with_config(config);

    let volunteer_id = app.seed_volunteer("Rosa Parks").await;
    let event_id = app.seed_event("Community Kitchen").await;

    app.seed_match(volunteer_id, event_id).await;

    let response = app
        .request(
            "POST",
            "/matching",
            Some(serde_json::json!({
                "volunteerId": volunteer_id,
                "eventId": event_id,
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_list_matches_by_volunteer() {
    let app = TestApp::new();
    let first = app.seed_volunteer("Ada Lovelace").await;
    let second = app.seed_volunteer("Grace Hopper").await;
    let event_id = app.seed_event("Food Bank Shift").await;

    app.seed_match(first, event_id).await;
    app.seed_match(second, event_id).await;

    let response = app
        .request("GET", &format!("/matching/{first}"), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let records = response.body["data"].as_array().expect("data not an array");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["volunteerId"], first);

    // An unmatched volunteer has an empty listing, not an error.
    let third = app.seed_volunteer("Mary Seacole").await;
    let response = app
        .request("GET", &format!("/matching/{third}"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"].as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn test_match_lifecycle_notifies_volunteer() {
    let app = TestApp::new();
    let volunteer_id = app.seed_volunteer("Ada Lovelace").await;
    let event_id = app.seed_event("Beach Cleanup").await;

    app.seed_match(volunteer_id, event_id).await;

    let response = app
        .request(
            "GET",
            &format!("/notifications?role=volunteer&id={volunteer_id}"),
            None,
        )
        .await;
    assert_eq!(response.body["count"], 1);
    assert_eq!(
        response.body["data"][0]["message"],
        "Assigned to event 'Beach Cleanup'"
    );

    app.request(
        "DELETE",
        "/matching",
        Some(serde_json::json!({
            "volunteerId": volunteer_id,
            "eventId": event_id,
        })),
    )
    .await;

    let response = app
        .request(
            "GET",
            &format!("/notifications?role=volunteer&id={volunteer_id}"),
            None,
        )
        .await;
    assert_eq!(response.body["count"], 2);
    assert_eq!(
        response.body["data"][0]["message"],
        "Removed from event 'Beach Cleanup'"
    );
}

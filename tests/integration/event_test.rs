//! Integration tests for the event endpoints.

use axum::http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_event_crud() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/events",
            Some(serde_json::json!({
                "name": "River Cleanup",
                "description": "Clear debris along the north bank",
                "location": "Riverside Park",
                "requiredSkills": ["waders"],
                "urgency": "high",
                "eventDate": "2026-10-03",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["success"], true);
    let event_id = response.body["data"]["id"].as_i64().expect("no event id");
    assert_eq!(response.body["data"]["urgency"], "high");
    assert_eq!(response.body["data"]["eventDate"], "2026-10-03");

    let response = app.request("GET", "/events", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["count"], 1);

    let response = app
        .request("GET", &format!("/events/{event_id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["name"], "River Cleanup");

    let response = app
        .request(
            "PUT",
            &format!("/events/{event_id}"),
            Some(serde_json::json!({ "urgency": "low" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["urgency"], "low");
    // Untouched fields survive a partial update.
    assert_eq!(response.body["data"]["name"], "River Cleanup");

    let response = app
        .request("DELETE", &format!("/events/{event_id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);

    let response = app
        .request("GET", &format!("/events/{event_id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_event_not_found() {
    let app = TestApp::new();

    let response = app.request("GET", "/events/42", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request(
            "PUT",
            "/events/42",
            Some(serde_json::json!({ "name": "Ghost Event" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.request("DELETE", "/events/42", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_event_validation() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/events",
            Some(serde_json::json!({
                "name": "",
                "description": "Missing a name",
                "location": "Anywhere",
                "urgency": "low",
                "eventDate": "2026-10-03",
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");

    let response = app
        .request(
            "POST",
            "/events",
            Some(serde_json::json!({
                "name": "Bad Urgency",
                "description": "Urgency outside the enum",
                "location": "Anywhere",
                "urgency": "critical",
                "eventDate": "2026-10-03",
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_event_broadcasts_to_admins() {
    let app = TestApp::new();

    app.seed_event("Winter Coat Drive").await;

    let response = app.request("GET", "/notifications?role=admin", None).await;
    assert_eq!(response.body["count"], 1);
    assert_eq!(
        response.body["data"][0]["message"],
        "Event 'Winter Coat Drive' created"
    );
    // Announcements address the whole role, not one recipient.
    assert!(response.body["data"][0]["recipientId"].is_null());
}

#[tokio::test]
async fn test_event_update_notifies_matched_volunteers_once() {
    let app = TestApp::new();
    let volunteer_id = app.seed_volunteer("Ada Lovelace").await;
    let event_id = app.seed_event("Tree Planting").await;

    // Two records of the same pair must still produce one update notice.
    app.seed_match(volunteer_id, event_id).await;
    app.seed_match(volunteer_id, event_id).await;

    let response = app
        .request(
            "PUT",
            &format!("/events/{event_id}"),
            Some(serde_json::json!({ "name": "Tree Planting Day" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request(
            "GET",
            &format!("/notifications?role=volunteer&id={volunteer_id}"),
            None,
        )
        .await;

    let messages: Vec<&str> = response.body["data"]
        .as_array()
        .expect("data not an array")
        .iter()
        .filter_map(|n| n["message"].as_str())
        .collect();

    let update_notices = messages
        .iter()
        .filter(|m| **m == "Event 'Tree Planting Day' updated")
        .count();
    assert_eq!(update_notices, 1, "messages: {messages:?}");
}

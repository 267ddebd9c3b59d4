//! Integration tests for the notification endpoints.

use axum::http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_create_and_list_notification() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/notifications",
            Some(serde_json::json!({
                "recipientType": "volunteer",
                "message": "Welcome aboard",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"]["id"], 1);
    assert_eq!(response.body["data"]["recipientType"], "volunteer");
    assert!(response.body["data"]["recipientId"].is_null());
    assert_eq!(response.body["data"]["read"], false);
    assert!(response.body["data"]["timestamp"].is_string());

    let response = app
        .request("GET", "/notifications?role=volunteer", None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["count"], 1);
    assert_eq!(response.body["data"][0]["message"], "Welcome aboard");
}

#[tokio::test]
async fn test_list_newest_first() {
    let app = TestApp::new();

    for message in ["first", "second", "third"] {
        let response = app
            .request(
                "POST",
                "/notifications",
                Some(serde_json::json!({
                    "recipientType": "volunteer",
                    "message": message,
                })),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
    }

    let response = app
        .request("GET", "/notifications?role=volunteer", None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["count"], 3);
    assert_eq!(response.body["data"][0]["message"], "third");
    assert_eq!(response.body["data"][1]["message"], "second");
    assert_eq!(response.body["data"][2]["message"], "first");
    assert_eq!(response.body["data"][0]["id"], 3);
    assert_eq!(response.body["data"][2]["id"], 1);
}

#[tokio::test]
async fn test_role_and_recipient_filtering() {
    let app = TestApp::new();

    app.request(
        "POST",
        "/notifications",
        Some(serde_json::json!({
            "recipientType": "volunteer",
            "message": "for everyone",
        })),
    )
    .await;
    app.request(
        "POST",
        "/notifications",
        Some(serde_json::json!({
            "recipientType": "volunteer",
            "recipientId": 7,
            "message": "just for seven",
        })),
    )
    .await;
    app.request(
        "POST",
        "/notifications",
        Some(serde_json::json!({
            "recipientType": "admin",
            "message": "admins only",
        })),
    )
    .await;

    // Role audience sees broadcasts and targeted records alike.
    let response = app
        .request("GET", "/notifications?role=volunteer", None)
        .await;
    assert_eq!(response.body["count"], 2);

    // A recipient filter matches targeted records only.
    let response = app
        .request("GET", "/notifications?role=volunteer&id=7", None)
        .await;
    assert_eq!(response.body["count"], 1);
    assert_eq!(response.body["data"][0]["message"], "just for seven");

    let response = app
        .request("GET", "/notifications?role=volunteer&id=8", None)
        .await;
    assert_eq!(response.body["count"], 0);

    let response = app.request("GET", "/notifications?role=admin", None).await;
    assert_eq!(response.body["count"], 1);
    assert_eq!(response.body["data"][0]["message"], "admins only");
}

#[tokio::test]
async fn test_mark_read_and_unread_filter() {
    let app = TestApp::new();

    for message in ["one", "two"] {
        app.request(
            "POST",
            "/notifications",
            Some(serde_json::json!({
                "recipientType": "volunteer",
                "message": message,
            })),
        )
        .await;
    }

    let response = app.request("PUT", "/notifications/1/read", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["read"], true);

    let response = app
        .request("GET", "/notifications?role=volunteer&unreadOnly=true", None)
        .await;
    assert_eq!(response.body["count"], 1);
    assert_eq!(response.body["data"][0]["message"], "two");

    // Marking twice leaves the record read.
    let response = app.request("PUT", "/notifications/1/read", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["read"], true);

    let response = app.request("PUT", "/notifications/99/read", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_notification() {
    let app = TestApp::new();

    app.request(
        "POST",
        "/notifications",
        Some(serde_json::json!({
            "recipientType": "admin",
            "message": "short lived",
        })),
    )
    .await;

    let response = app.request("DELETE", "/notifications/1", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);

    let response = app.request("GET", "/notifications?role=admin", None).await;
    assert_eq!(response.body["count"], 0);

    let response = app.request("DELETE", "/notifications/1", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_ids_not_reused_after_delete() {
    let app = TestApp::new();

    app.request(
        "POST",
        "/notifications",
        Some(serde_json::json!({
            "recipientType": "admin",
            "message": "first",
        })),
    )
    .await;
    app.request("DELETE", "/notifications/1", None).await;

    let response = app
        .request(
            "POST",
            "/notifications",
            Some(serde_json::json!({
                "recipientType": "admin",
                "message": "second",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["id"], 2);
}

#[tokio::test]
async fn test_create_validation_errors() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/notifications",
            Some(serde_json::json!({ "message": "no audience" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");

    let response = app
        .request(
            "POST",
            "/notifications",
            Some(serde_json::json!({ "recipientType": "volunteer" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request(
            "POST",
            "/notifications",
            Some(serde_json::json!({
                "recipientType": "stranger",
                "message": "bad role",
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_requires_role() {
    let app = TestApp::new();

    let response = app.request("GET", "/notifications", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");

    let response = app
        .request("GET", "/notifications?role=stranger", None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

//! Notification handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use volhub_core::error::AppError;
use volhub_core::types::id::{NotificationId, VolunteerId};
use volhub_entity::notification::Notification;

use crate::dto::request::CreateNotificationRequest;
use crate::dto::response::{ApiResponse, ListResponse};
use crate::error::ApiError;
use crate::extractors::NotificationQuery;
use crate::state::AppState;

/// GET /notifications
pub async fn list_notifications(
    State(state): State<AppState>,
    Query(params): Query<NotificationQuery>,
) -> Result<Json<ListResponse<Notification>>, ApiError> {
    let (role, recipient, unread_only) = params.into_filter()?;
    let items = state
        .notification_service
        .list(role, recipient, unread_only)
        .await;
    Ok(Json(ListResponse::of(items)))
}

/// POST /notifications
pub async fn create_notification(
    State(state): State<AppState>,
    Json(req): Json<CreateNotificationRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Notification>>), ApiError> {
    let role = req
        .recipient_type
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| AppError::validation("Field 'recipientType' is required"))?
        .parse()?;
    let message = req
        .message
        .filter(|m| !m.trim().is_empty())
        .ok_or_else(|| AppError::validation("Field 'message' is required"))?;

    let created = state
        .notification_service
        .create(role, req.recipient_id.map(VolunteerId::from), message)
        .await;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(created))))
}

/// PUT /notifications/{id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<NotificationId>,
) -> Result<Json<ApiResponse<Notification>>, ApiError> {
    let updated = state.notification_service.mark_read(id).await?;
    Ok(Json(ApiResponse::ok(updated)))
}

/// DELETE /notifications/{id}
pub async fn delete_notification(
    State(state): State<AppState>,
    Path(id): Path<NotificationId>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.notification_service.delete(id).await?;
    Ok(Json(serde_json::json!({ "success": true })))
}

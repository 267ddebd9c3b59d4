//! Matching handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use volhub_core::error::AppError;
use volhub_core::types::id::{EventId, VolunteerId};
use volhub_entity::matching::Match;

use crate::dto::request::{CreateMatchRequest, DeleteMatchRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /matching
pub async fn create_match(
    State(state): State<AppState>,
    Json(req): Json<CreateMatchRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Match>>), ApiError> {
    let volunteer_id = req
        .volunteer_id
        .ok_or_else(|| AppError::validation("Field 'volunteerId' is required"))?;
    let event_id = req
        .event_id
        .ok_or_else(|| AppError::validation("Field 'eventId' is required"))?;

    let record = state
        .matching_service
        .create(VolunteerId::new(volunteer_id), EventId::new(event_id))
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(record))))
}

/// GET /matching
pub async fn list_matches(State(state): State<AppState>) -> Json<ApiResponse<Vec<Match>>> {
    let items = state.matching_service.list_all().await;
    Json(ApiResponse::ok(items))
}

/// GET /matching/{volunteer_id}
pub async fn list_matches_for_volunteer(
    State(state): State<AppState>,
    Path(volunteer_id): Path<VolunteerId>,
) -> Json<ApiResponse<Vec<Match>>> {
    let items = state.matching_service.list_by_volunteer(volunteer_id).await;
    Json(ApiResponse::ok(items))
}

/// DELETE /matching
pub async fn delete_match(
    State(state): State<AppState>,
    Json(req): Json<DeleteMatchRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let volunteer_id = req
        .volunteer_id
        .ok_or_else(|| AppError::validation("Field 'volunteerId' is required"))?;
    let event_id = req
        .event_id
        .ok_or_else(|| AppError::validation("Field 'eventId' is required"))?;

    state
        .matching_service
        .delete(VolunteerId::new(volunteer_id), EventId::new(event_id))
        .await?;

    Ok(Json(serde_json::json!({ "success": true })))
}

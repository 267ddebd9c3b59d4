//! Event handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use validator::Validate;

use volhub_core::error::AppError;
use volhub_core::types::id::EventId;
use volhub_entity::event::{CreateEvent, Event, UpdateEvent, Urgency};

use crate::dto::request::{CreateEventRequest, UpdateEventRequest};
use crate::dto::response::{ApiResponse, ListResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /events
pub async fn create_event(
    State(state): State<AppState>,
    Json(req): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Event>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    let urgency: Urgency = req.urgency.parse()?;

    let event = state
        .event_service
        .create(CreateEvent {
            name: req.name,
            description: req.description,
            location: req.location,
            required_skills: req.required_skills,
            urgency,
            event_date: req.event_date,
        })
        .await;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(event))))
}

/// GET /events
pub async fn list_events(State(state): State<AppState>) -> Json<ListResponse<Event>> {
    let events = state.event_service.list().await;
    Json(ListResponse::of(events))
}

/// GET /events/{id}
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<EventId>,
) -> Result<Json<ApiResponse<Event>>, ApiError> {
    let event = state.event_service.get(id).await?;
    Ok(Json(ApiResponse::ok(event)))
}

/// PUT /events/{id}
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<EventId>,
    Json(req): Json<UpdateEventRequest>,
) -> Result<Json<ApiResponse<Event>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;
    let urgency = match req.urgency {
        Some(raw) => Some(raw.parse::<Urgency>()?),
        None => None,
    };

    let event = state
        .event_service
        .update(
            id,
            UpdateEvent {
                name: req.name,
                description: req.description,
                location: req.location,
                required_skills: req.required_skills,
                urgency,
                event_date: req.event_date,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(event)))
}

/// DELETE /events/{id}
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<EventId>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.event_service.delete(id).await?;
    Ok(Json(serde_json::json!({ "success": true })))
}

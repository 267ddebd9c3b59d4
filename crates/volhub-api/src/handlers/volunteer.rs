//! Volunteer handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use validator::Validate;

use volhub_core::error::AppError;
use volhub_core::types::id::VolunteerId;
use volhub_entity::volunteer::{CreateVolunteer, UpdateVolunteer, Volunteer};
use volhub_service::volunteer::HistoryEntry;

use crate::dto::request::{CreateVolunteerRequest, UpdateVolunteerRequest};
use crate::dto::response::{ApiResponse, ListResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /volunteers
pub async fn create_volunteer(
    State(state): State<AppState>,
    Json(req): Json<CreateVolunteerRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Volunteer>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let volunteer = state
        .volunteer_service
        .create(CreateVolunteer {
            name: req.name,
            email: req.email,
            city: req.city,
            state: req.state,
            skills: req.skills,
            availability: req.availability,
        })
        .await;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(volunteer))))
}

/// GET /volunteers
pub async fn list_volunteers(State(state): State<AppState>) -> Json<ListResponse<Volunteer>> {
    let volunteers = state.volunteer_service.list().await;
    Json(ListResponse::of(volunteers))
}

/// GET /volunteers/{id}
pub async fn get_volunteer(
    State(state): State<AppState>,
    Path(id): Path<VolunteerId>,
) -> Result<Json<ApiResponse<Volunteer>>, ApiError> {
    let volunteer = state.volunteer_service.get(id).await?;
    Ok(Json(ApiResponse::ok(volunteer)))
}

/// PUT /volunteers/{id}
pub async fn update_volunteer(
    State(state): State<AppState>,
    Path(id): Path<VolunteerId>,
    Json(req): Json<UpdateVolunteerRequest>,
) -> Result<Json<ApiResponse<Volunteer>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let volunteer = state
        .volunteer_service
        .update(
            id,
            UpdateVolunteer {
                name: req.name,
                email: req.email,
                city: req.city,
                state: req.state,
                skills: req.skills,
                availability: req.availability,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(volunteer)))
}

/// DELETE /volunteers/{id}
pub async fn delete_volunteer(
    State(state): State<AppState>,
    Path(id): Path<VolunteerId>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.volunteer_service.delete(id).await?;
    Ok(Json(serde_json::json!({ "success": true })))
}

/// GET /volunteers/{id}/history
pub async fn volunteer_history(
    State(state): State<AppState>,
    Path(id): Path<VolunteerId>,
) -> Result<Json<ListResponse<HistoryEntry>>, ApiError> {
    let entries = state.volunteer_service.history(id).await?;
    Ok(Json(ListResponse::of(entries)))
}

//! Participation report handlers.

use axum::Json;
use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use volhub_core::error::AppError;
use volhub_core::result::AppResult;

use crate::error::ApiError;
use crate::extractors::ReportQuery;
use crate::state::AppState;

/// GET /reports/volunteers?format=json|csv
pub async fn volunteer_report(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> Result<Response, ApiError> {
    if query.is_csv() {
        let csv = state.report_service.volunteers_csv().await;
        return Ok(csv_response("volunteer-participation.csv", csv)?);
    }

    let report = state.report_service.volunteers().await;
    Ok(Json(serde_json::json!({ "success": true, "data": report })).into_response())
}

/// GET /reports/events?format=json|csv
pub async fn event_report(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> Result<Response, ApiError> {
    if query.is_csv() {
        let csv = state.report_service.events_csv().await;
        return Ok(csv_response("event-assignments.csv", csv)?);
    }

    let report = state.report_service.events().await;
    Ok(Json(serde_json::json!({ "success": true, "data": report })).into_response())
}

fn csv_response(filename: &str, csv: String) -> AppResult<Response> {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/csv; charset=utf-8")
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        )
        .body(Body::from(csv))
        .map_err(|e| AppError::internal(format!("Response build failed: {e}")))
}

//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for the pipeline logic.

use axum::{extract::State, Json};

use super::dto::{AnalyzeRequest, AnalyzeResponse, HealthResponse, SoilPropertyDto};
use super::error::AppError;
use super::state::AppState;
use crate::models::geo::{Coordinate, TimeWindow};
use crate::models::soil::SOIL_PROPERTIES;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /health
///
/// Health check endpoint to verify the service is running and the raster
/// backend is reachable. The probe lists bands on the first soil layer.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let raster = match state.raster.band_names(SOIL_PROPERTIES[0].image_id).await {
        Ok(_) => "connected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        raster,
    }))
}

/// POST /v1/analyze
///
/// Run one full analysis for a point and time window. Returns 400 for an
/// invalid coordinate, inverted window, or over-long window; otherwise the
/// call always completes with a full result, with individual fields marked
/// absent when their source failed.
pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> HandlerResult<AnalyzeResponse> {
    let coordinate = Coordinate::new(request.lat, request.lon)?;
    let window = TimeWindow::new(request.start_date, request.end_date)?;

    let result =
        services::analyze(state.raster.as_ref(), coordinate, window, &state.config).await?;

    Ok(Json(result.into()))
}

/// GET /v1/soil-properties
///
/// The configured soil property table, for the frontend legend.
pub async fn list_soil_properties() -> HandlerResult<Vec<SoilPropertyDto>> {
    Ok(Json(SOIL_PROPERTIES.iter().map(Into::into).collect()))
}

//! HTTP handlers for the REST API.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use tracing::{error, info, warn};

use super::dto::{CalculateRouteRequest, HealthResponse};
use super::error::AppError;
use super::state::AppState;
use crate::error::PlanError;
use crate::planner::RouteResult;
use crate::traits::{TripDraft, TripPatch, TripRecord};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

type JsonBody<T> = Result<Json<T>, JsonRejection>;
type TripId = Result<Path<u64>, PathRejection>;

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// POST /calculate_route/
///
/// Validates the body, then runs the blocking scheduler on the blocking pool.
pub async fn calculate_route(
    State(state): State<AppState>,
    payload: JsonBody<CalculateRouteRequest>,
) -> HandlerResult<RouteResult> {
    let Json(body) = payload.inspect_err(|rejection| {
        warn!(error = %rejection.body_text(), "rejected route request body");
    })?;
    info!(request = ?body, "received route request");

    let request = body.validate().inspect_err(|err| {
        warn!(error = %err, "invalid route request");
    })?;

    let scheduler = state.scheduler.clone();
    let result = tokio::task::spawn_blocking(move || scheduler.calculate_route(&request))
        .await
        .map_err(|join_err| {
            error!(error = %join_err, "route calculation task failed");
            PlanError::Internal(join_err.to_string())
        })??;

    Ok(Json(result))
}

/// GET /trips/
pub async fn list_trips(State(state): State<AppState>) -> HandlerResult<Vec<TripRecord>> {
    Ok(Json(state.store.list()?))
}

/// POST /trips/
pub async fn create_trip(
    State(state): State<AppState>,
    payload: JsonBody<TripDraft>,
) -> Result<(StatusCode, Json<TripRecord>), AppError> {
    let Json(trip) = payload?;
    let record = state.store.create(trip)?;
    info!(id = record.id, "trip created");
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /trips/{id}/
pub async fn get_trip(State(state): State<AppState>, id: TripId) -> HandlerResult<TripRecord> {
    let Path(id) = id?;
    Ok(Json(state.store.get(id)?))
}

/// PUT /trips/{id}/
pub async fn update_trip(
    State(state): State<AppState>,
    id: TripId,
    payload: JsonBody<TripDraft>,
) -> HandlerResult<TripRecord> {
    let Path(id) = id?;
    let Json(trip) = payload?;
    Ok(Json(state.store.update(id, trip)?))
}

/// PATCH /trips/{id}/
pub async fn patch_trip(
    State(state): State<AppState>,
    id: TripId,
    payload: JsonBody<TripPatch>,
) -> HandlerResult<TripRecord> {
    let Path(id) = id?;
    let Json(patch) = payload?;
    Ok(Json(state.store.patch(id, patch)?))
}

/// DELETE /trips/{id}/
pub async fn delete_trip(State(state): State<AppState>, id: TripId) -> Result<StatusCode, AppError> {
    let Path(id) = id?;
    state.store.delete(id)?;
    info!(id, "trip deleted");
    Ok(StatusCode::NO_CONTENT)
}

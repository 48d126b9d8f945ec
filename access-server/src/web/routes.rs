//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tracing::{debug, warn};

use crate::proximity::accessible_stops_near;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stops", get(nearby_stops))
        .route("/stop/:stop_id", get(stop_by_id))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Accessible stops near `?lat=..&lon=..`.
///
/// The query is taken as raw pairs so a repeated parameter still gets the
/// JSON envelope; the first occurrence wins.
async fn nearby_stops(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<StopsResponse>, AppError> {
    let user = CoordinateQuery::from_pairs(params).validate()?;

    let stops: Vec<StopResult> =
        accessible_stops_near(user, state.stops.all(), state.stop_radius_km)
            .into_iter()
            .map(StopResult::from_stop)
            .collect();

    debug!(%user, found = stops.len(), "nearby stops query");
    Ok(Json(StopsResponse::nearby(stops)))
}

/// Look up a stop by its id, such as `/stop/place-pktrm`.
async fn stop_by_id(
    State(state): State<AppState>,
    Path(stop_id): Path<String>,
) -> Json<StopsResponse> {
    let stops = state
        .stops
        .find_by_id(&stop_id)
        .into_iter()
        .map(StopResult::from_stop)
        .collect();

    Json(StopsResponse::lookup(stops))
}

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    InvalidCoordinates(#[from] QueryError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidCoordinates(_) => StatusCode::BAD_REQUEST,
        };
        let message = self.to_string();

        warn!(%status, "{message}");

        (status, Json(StopsResponse::bad(message))).into_response()
    }
}

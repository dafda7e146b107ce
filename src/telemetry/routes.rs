//! HTTP route handlers for dashboard telemetry.

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};

use crate::error::ApiError;
use crate::AppState;

use super::models::{PumpResponse, SnapshotResponse};

/// Create the telemetry router with all endpoints.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/snapshot", get(snapshot))
        .route("/pump", post(toggle_pump))
}

/// Latest sensor readings with their grades.
async fn snapshot(State(state): State<AppState>) -> Json<SnapshotResponse> {
    let snapshot = state.telemetry.read().await.clone();
    Json(SnapshotResponse {
        grades: snapshot.grades(),
        snapshot,
    })
}

/// Turn the irrigation pump on or off.
async fn toggle_pump(State(state): State<AppState>) -> Result<Json<PumpResponse>, ApiError> {
    let snapshot = {
        let mut current = state.telemetry.write().await;
        let next = current.toggle_pump()?;
        *current = next.clone();
        next
    };

    let message = format!(
        "Irrigation pump has been turned {}",
        if snapshot.pump_on { "ON" } else { "OFF" }
    );
    tracing::info!(pump_on = snapshot.pump_on, "Pump toggled");

    Ok(Json(PumpResponse {
        pump_on: snapshot.pump_on,
        message,
        snapshot,
    }))
}

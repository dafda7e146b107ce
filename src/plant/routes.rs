//! HTTP route handlers for plant health scans.

use axum::{extract::State, response::Json, routing::post, Router};

use crate::AppState;

use super::diagnosis::PLACEHOLDER_IMAGE_URL;
use super::models::{ScanRequest, ScanResponse};

/// Create the plant router with all endpoints.
pub fn router() -> Router<AppState> {
    Router::new().route("/scan", post(scan))
}

/// Diagnose a captured plant image after the simulated inference delay.
async fn scan(
    State(state): State<AppState>,
    Json(request): Json<ScanRequest>,
) -> Json<ScanResponse> {
    tokio::time::sleep(state.config.plant_scan_delay).await;

    let analysis = state.diagnoser.diagnose();
    tracing::info!(
        source = ?request.source,
        health_status = ?analysis.health_status,
        confidence = analysis.confidence,
        "Plant scan complete"
    );

    Json(ScanResponse {
        source: request.source,
        image_url: PLACEHOLDER_IMAGE_URL,
        analysis,
    })
}

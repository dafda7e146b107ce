//! HTTP route handlers for the soil API.

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use sha2::{Digest, Sha256};

use crate::error::ApiError;
use crate::AppState;

use super::analysis::{grade, soil_description, soil_name, soil_types};
use super::calculator::compute_mix;
use super::input::{numbered_instructions, LandDetails};
use super::models::{AnalyzeRequest, AnalyzeResponse, MixRequest, MixResponse, SoilType};

const TOOL: &str = "agrisense-mix-calculator";
const TOOL_VERSION: &str = "0.1.0";

/// Create the soil router with all endpoints.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/types", get(types))
        .route("/mix", post(mix))
        .route("/analyze", post(analyze))
}

/// Health check for the mix calculator.
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "mix-calculator",
        "version": TOOL_VERSION,
    }))
}

/// Known soil types.
async fn types() -> Json<&'static [SoilType]> {
    Json(soil_types())
}

/// Compute SHA256 hash of input string.
fn sha256_hex(s: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(s.as_bytes());
    format!("sha256:{}", hex::encode(hasher.finalize()))
}

/// Run the calculator and build the wire response.
fn mix_response(request: &MixRequest) -> Result<MixResponse, ApiError> {
    let result = compute_mix(request)?;
    // Serialize request for input hash
    let input_json = serde_json::to_string(request).unwrap_or_default();

    Ok(MixResponse {
        tool: TOOL,
        tool_version: TOOL_VERSION,
        soil_type: request.classification,
        area_m2: request.area_square_meters,
        depth_cm: request.depth_centimeters,
        cocopeat_kg: result.bulking_agent_kg,
        hydrogel_kg: result.polymer_kg,
        cocopeat_display: result.bulking_agent_display(),
        hydrogel_display: result.polymer_display(),
        numbered_instructions: numbered_instructions(&result),
        instructions: result.instructions,
        input_hash: sha256_hex(&input_json),
    })
}

/// Compute an amendment mix for a known soil type.
async fn mix(Json(request): Json<MixRequest>) -> Result<Json<MixResponse>, ApiError> {
    tracing::debug!(
        soil_type = %request.classification,
        area_m2 = request.area_square_meters,
        depth_cm = request.depth_centimeters,
        "Computing mix"
    );
    Ok(Json(mix_response(&request)?))
}

/// Analyze the plot's soil, then compute the mix for the detected type.
async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let details = LandDetails::new(request.land_area, request.soil_depth);
    // Reject bad text before waiting on the sensor
    details.parse()?;

    tokio::time::sleep(state.config.analysis_delay).await;

    let analysis = state.classifier.analyze();
    let mix_request = details.into_request(analysis.classification)?;
    let mix = mix_response(&mix_request)?;

    tracing::info!(
        soil_type = %analysis.classification,
        cocopeat_kg = mix.cocopeat_kg,
        hydrogel_kg = mix.hydrogel_kg,
        "Soil analysis complete"
    );

    Ok(Json(AnalyzeResponse {
        soil_name: soil_name(analysis.classification),
        soil_description: soil_description(analysis.classification),
        grades: grade(&analysis),
        analysis,
        mix,
    }))
}

//! AgriSense - Rust/Axum backend
//!
//! Serves the soil mix calculator and dashboard telemetry to the mobile app.

use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use tokio::sync::RwLock;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
pub mod irrigation;
pub mod plant;
pub mod soil;
pub mod telemetry;

use config::Config;
use irrigation::{start_countdown, IrrigationState, SharedIrrigation};
use plant::{MockPlantDiagnoser, PlantDiagnoser};
use soil::{MockSoilClassifier, SoilClassifier};
use telemetry::{start_simulator, SensorSnapshot, SharedSnapshot};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub classifier: Arc<dyn SoilClassifier>,
    pub diagnoser: Arc<dyn PlantDiagnoser>,
    pub telemetry: SharedSnapshot,
    pub irrigation: SharedIrrigation,
}

impl AppState {
    /// State backed by the mock models, a fresh sensor snapshot and the
    /// default irrigation zones.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            classifier: Arc::new(MockSoilClassifier),
            diagnoser: Arc::new(MockPlantDiagnoser),
            telemetry: Arc::new(RwLock::new(SensorSnapshot::default())),
            irrigation: Arc::new(RwLock::new(IrrigationState::default())),
        }
    }
}

fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Soil analysis and mix calculator
        .nest("/api/soil", soil::router())
        // Dashboard sensors and pump control
        .nest("/api/telemetry", telemetry::router())
        // Plant health scans
        .nest("/api/plant", plant::router())
        // Irrigation zones and schedules
        .nest("/api/irrigation", irrigation::router())
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agrisense_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    tracing::info!(?config, "Configuration loaded");

    let state = AppState::new(config.clone());

    // Start background sensor simulator
    let sim_snapshot = state.telemetry.clone();
    let sim_period = config.telemetry_interval;
    tokio::spawn(async move {
        start_simulator(sim_snapshot, sim_period).await;
    });

    // Start irrigation countdown
    let countdown_state = state.irrigation.clone();
    let countdown_period = config.irrigation_tick;
    tokio::spawn(async move {
        start_countdown(countdown_state, countdown_period).await;
    });

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app(state)).await?;

    Ok(())
}

/// Health check endpoint
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let connection = state.telemetry.read().await.connection;
    Json(serde_json::json!({
        "status": "healthy",
        "device": connection,
        "service": "agrisense-api"
    }))
}

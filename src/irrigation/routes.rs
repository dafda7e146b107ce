//! HTTP route handlers for irrigation control.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post},
    Router,
};

use crate::error::ApiError;
use crate::AppState;

use super::controller::recycling_efficiency;
use super::models::{OverviewResponse, Schedule, SystemResponse, SystemStatus, UsageSummary};

/// Create the irrigation router with all endpoints.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(overview))
        .route("/systems/:id/toggle", post(toggle_system))
        .route("/schedules/:id/toggle", post(toggle_schedule))
}

/// Zones, schedules and today's water usage.
async fn overview(State(state): State<AppState>) -> Json<OverviewResponse> {
    let current = state.irrigation.read().await.clone();
    Json(OverviewResponse {
        usage: UsageSummary {
            total_liters: current.usage.total_liters,
            recycled_liters: current.usage.recycled_liters,
            recycling_efficiency: recycling_efficiency(&current.usage),
        },
        systems: current.systems,
        schedules: current.schedules,
    })
}

/// Start or stop an irrigation zone.
async fn toggle_system(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SystemResponse>, ApiError> {
    let system = state.irrigation.write().await.toggle_system(&id)?;

    let action = if system.status == SystemStatus::Running {
        "started"
    } else {
        "stopped"
    };
    tracing::info!(system = %system.id, action, "Irrigation system toggled");

    Ok(Json(SystemResponse {
        message: format!("{} has been {}", system.name, action),
        system,
    }))
}

/// Enable or disable a watering schedule.
async fn toggle_schedule(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Schedule>, ApiError> {
    let schedule = state.irrigation.write().await.toggle_schedule(&id)?;
    tracing::info!(schedule = %schedule.id, enabled = schedule.enabled, "Schedule toggled");
    Ok(Json(schedule))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt; // for oneshot

    async fn send(state: AppState, method: &str, uri: &str) -> (StatusCode, Value) {
        let response = router()
            .with_state(state)
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_overview_endpoint() {
        let (status, body) = send(AppState::new(Config::default()), "GET", "/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["systems"].as_array().unwrap().len(), 3);
        assert_eq!(body["systems"][1]["status"], "running");
        assert_eq!(body["schedules"][0]["days"][1], "Wed");
        assert_eq!(body["usage"]["recycling_efficiency"], 38);
    }

    #[tokio::test]
    async fn test_toggle_system_endpoint() {
        let state = AppState::new(Config::default());

        let (status, body) = send(state.clone(), "POST", "/systems/drip-1/toggle").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Vegetable Drip Zone A has been started");
        assert_eq!(body["system"]["remaining_min"], 20);

        let (_, body) = send(state.clone(), "POST", "/systems/drip-1/toggle").await;
        assert_eq!(body["message"], "Vegetable Drip Zone A has been stopped");
        assert_eq!(state.irrigation.read().await.systems[0].remaining_min, 0);
    }

    #[tokio::test]
    async fn test_toggle_unknown_system() {
        let (status, body) =
            send(AppState::new(Config::default()), "POST", "/systems/pivot-1/toggle").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error_type"], "not_found");
    }

    #[tokio::test]
    async fn test_toggle_schedule_endpoint() {
        let state = AppState::new(Config::default());

        let (status, body) = send(state.clone(), "POST", "/schedules/sch-1/toggle").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["enabled"], false);
        assert!(!state.irrigation.read().await.schedules[0].enabled);
    }
}

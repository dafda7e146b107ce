//! API error type and its HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

use crate::irrigation::IrrigationError;
use crate::soil::{InvalidInputError, LandDetailsError};
use crate::telemetry::TelemetryError;

/// Error body returned to the app, shown to the user as-is.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error_type: &'static str,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),
    #[error(transparent)]
    LandDetails(#[from] LandDetailsError),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error(transparent)]
    Irrigation(#[from] IrrigationError),
}

impl ApiError {
    fn status_and_type(&self) -> (StatusCode, &'static str) {
        match self {
            Self::InvalidInput(_) => (StatusCode::BAD_REQUEST, "invalid_input"),
            Self::LandDetails(LandDetailsError::Missing) => (StatusCode::BAD_REQUEST, "input_required"),
            Self::LandDetails(_) => (StatusCode::BAD_REQUEST, "invalid_input"),
            Self::Telemetry(TelemetryError::Disconnected) => {
                (StatusCode::SERVICE_UNAVAILABLE, "connection_error")
            }
            Self::Irrigation(_) => (StatusCode::NOT_FOUND, "not_found"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = self.status_and_type();
        tracing::warn!(error_type, "Request rejected: {}", self);

        (
            status,
            Json(ErrorResponse {
                error_type,
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let err = ApiError::from(InvalidInputError::UnknownClassification);
        assert_eq!(err.status_and_type(), (StatusCode::BAD_REQUEST, "invalid_input"));

        let err = ApiError::from(LandDetailsError::Missing);
        assert_eq!(err.status_and_type(), (StatusCode::BAD_REQUEST, "input_required"));

        let err = ApiError::from(TelemetryError::Disconnected);
        assert_eq!(
            err.status_and_type(),
            (StatusCode::SERVICE_UNAVAILABLE, "connection_error")
        );
        assert_eq!(err.to_string(), "Unable to connect to ESP32 device");

        let err = ApiError::from(IrrigationError::UnknownSystem("drip-9".to_string()));
        assert_eq!(err.status_and_type(), (StatusCode::NOT_FOUND, "not_found"));
    }
}

//! Data types for device telemetry.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Link state of the field device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    Connected,
    Disconnected,
}

/// One immutable reading of every dashboard sensor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorSnapshot {
    /// Soil moisture (%)
    pub soil_moisture: f64,
    /// Air temperature (°C)
    pub temperature: f64,
    /// Relative humidity (%)
    pub humidity: f64,
    /// Fresh water tank level (%)
    pub water_level: f64,
    /// Recycled water tank level (%)
    pub recycled_water_level: f64,
    pub pump_on: bool,
    pub connection: ConnectionStatus,
    pub captured_at: DateTime<Utc>,
}

/// Traffic-light grade for a sensor reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadingGrade {
    Good,
    Moderate,
    Low,
}

/// Grades for the graded sensors of a snapshot.
#[derive(Debug, Serialize)]
pub struct SnapshotGrades {
    pub soil_moisture: ReadingGrade,
    pub temperature: ReadingGrade,
    pub water_level: ReadingGrade,
    pub recycled_water_level: ReadingGrade,
}

/// Response payload for the snapshot endpoint.
#[derive(Debug, Serialize)]
pub struct SnapshotResponse {
    pub snapshot: SensorSnapshot,
    pub grades: SnapshotGrades,
}

/// Response payload for a pump toggle.
#[derive(Debug, Serialize)]
pub struct PumpResponse {
    pub pump_on: bool,
    pub message: String,
    pub snapshot: SensorSnapshot,
}

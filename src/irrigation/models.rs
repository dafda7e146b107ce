//! Data types for irrigation zones and schedules.

use serde::Serialize;

/// Delivery method of an irrigation zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemKind {
    Drip,
    Sprinkler,
}

/// Run state of an irrigation zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemStatus {
    Running,
    Stopped,
    Scheduled,
}

/// One irrigation zone and its live readings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IrrigationSystem {
    pub id: String,
    pub name: String,
    pub kind: SystemKind,
    pub status: SystemStatus,
    /// Water flow (L/min)
    pub water_flow_lpm: f64,
    /// Minutes left in the current run, 0 when idle
    pub remaining_min: u32,
    /// Supply tank level (%)
    pub tank_level: f64,
    /// Line pressure (PSI)
    pub pressure_psi: f64,
}

/// Recurring watering slot for a zone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schedule {
    pub id: String,
    /// Start time of day, "HH:MM"
    pub time: String,
    pub duration_min: u32,
    pub system_id: String,
    pub enabled: bool,
    pub days: Vec<String>,
}

/// Water drawn today, in liters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WaterUsage {
    pub total_liters: f64,
    pub recycled_liters: f64,
}

/// Everything the irrigation screen shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IrrigationState {
    pub systems: Vec<IrrigationSystem>,
    pub schedules: Vec<Schedule>,
    pub usage: WaterUsage,
}

/// Water usage with the derived recycling share.
#[derive(Debug, Serialize)]
pub struct UsageSummary {
    pub total_liters: f64,
    pub recycled_liters: f64,
    /// Recycled share of total usage, rounded percent
    pub recycling_efficiency: u32,
}

/// Response payload for the overview endpoint.
#[derive(Debug, Serialize)]
pub struct OverviewResponse {
    pub systems: Vec<IrrigationSystem>,
    pub schedules: Vec<Schedule>,
    pub usage: UsageSummary,
}

/// Response payload for a zone start/stop.
#[derive(Debug, Serialize)]
pub struct SystemResponse {
    pub message: String,
    pub system: IrrigationSystem,
}

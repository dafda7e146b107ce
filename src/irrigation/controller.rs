//! Zone control and the run-time countdown.
//!
//! Zones are simulated until the field controller is wired up. A started zone
//! runs for a fixed default time and stops itself when the countdown ends.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use super::models::{
    IrrigationState, IrrigationSystem, Schedule, SystemKind, SystemStatus, WaterUsage,
};

/// Run time given to a zone started by hand, in minutes.
pub const DEFAULT_RUN_MIN: u32 = 20;

/// Irrigation control failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IrrigationError {
    #[error("no irrigation system with id {0:?}")]
    UnknownSystem(String),
    #[error("no irrigation schedule with id {0:?}")]
    UnknownSchedule(String),
}

/// Shared handle to the irrigation state.
pub type SharedIrrigation = Arc<RwLock<IrrigationState>>;

impl Default for IrrigationState {
    fn default() -> Self {
        let system = |id: &str, name: &str, kind, status, flow, remaining, tank, psi| {
            IrrigationSystem {
                id: id.to_string(),
                name: name.to_string(),
                kind,
                status,
                water_flow_lpm: flow,
                remaining_min: remaining,
                tank_level: tank,
                pressure_psi: psi,
            }
        };
        let schedule = |id: &str, time: &str, duration_min, system_id: &str, days: &[&str]| {
            Schedule {
                id: id.to_string(),
                time: time.to_string(),
                duration_min,
                system_id: system_id.to_string(),
                enabled: true,
                days: days.iter().map(|d| d.to_string()).collect(),
            }
        };

        Self {
            systems: vec![
                system("drip-1", "Vegetable Drip Zone A", SystemKind::Drip, SystemStatus::Stopped, 8.5, 0, 78.0, 15.0),
                system("sprinkler-1", "Main Field Sprinkler", SystemKind::Sprinkler, SystemStatus::Running, 25.2, 15, 45.0, 22.0),
                system("drip-2", "Greenhouse Drip System", SystemKind::Drip, SystemStatus::Scheduled, 6.8, 0, 89.0, 18.0),
            ],
            schedules: vec![
                schedule("sch-1", "06:00", 30, "drip-1", &["Mon", "Wed", "Fri"]),
                schedule("sch-2", "18:00", 20, "sprinkler-1", &["Daily"]),
            ],
            usage: WaterUsage {
                total_liters: 2340.0,
                recycled_liters: 890.0,
            },
        }
    }
}

impl IrrigationSystem {
    /// Zone after a start/stop press.
    ///
    /// A running zone stops and clears its countdown; any other zone starts
    /// with the default run time.
    pub fn toggled(&self) -> Self {
        let (status, remaining_min) = match self.status {
            SystemStatus::Running => (SystemStatus::Stopped, 0),
            SystemStatus::Stopped | SystemStatus::Scheduled => (SystemStatus::Running, DEFAULT_RUN_MIN),
        };
        Self {
            status,
            remaining_min,
            ..self.clone()
        }
    }

    /// Zone after one minute of countdown.
    pub fn ticked(&self) -> Self {
        if self.status != SystemStatus::Running || self.remaining_min == 0 {
            return self.clone();
        }
        Self {
            remaining_min: self.remaining_min - 1,
            status: if self.remaining_min <= 1 {
                SystemStatus::Stopped
            } else {
                SystemStatus::Running
            },
            ..self.clone()
        }
    }
}

impl IrrigationState {
    /// Start or stop a zone, returning its new state.
    pub fn toggle_system(&mut self, id: &str) -> Result<IrrigationSystem, IrrigationError> {
        let system = self
            .systems
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| IrrigationError::UnknownSystem(id.to_string()))?;
        *system = system.toggled();
        Ok(system.clone())
    }

    /// Enable or disable a schedule, returning its new state.
    pub fn toggle_schedule(&mut self, id: &str) -> Result<Schedule, IrrigationError> {
        let schedule = self
            .schedules
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| IrrigationError::UnknownSchedule(id.to_string()))?;
        schedule.enabled = !schedule.enabled;
        Ok(schedule.clone())
    }

    /// Advance every running zone by one minute.
    pub fn tick(&mut self) {
        for system in &mut self.systems {
            *system = system.ticked();
        }
    }
}

/// Recycled share of total water usage as a rounded percentage.
///
/// Zero when nothing has been used yet.
pub fn recycling_efficiency(usage: &WaterUsage) -> u32 {
    if usage.total_liters <= 0.0 {
        return 0;
    }
    (usage.recycled_liters / usage.total_liters * 100.0).round() as u32
}

/// Background task that counts down running zones.
pub async fn start_countdown(state: SharedIrrigation, period: Duration) {
    let mut interval = tokio::time::interval(period);
    // First tick completes immediately
    interval.tick().await;

    tracing::info!("Irrigation countdown started ({:?} interval)", period);

    loop {
        interval.tick().await;
        let mut current = state.write().await;
        current.tick();
        tracing::trace!(
            running = current
                .systems
                .iter()
                .filter(|s| s.status == SystemStatus::Running)
                .count(),
            "Irrigation tick"
        );
    }
}

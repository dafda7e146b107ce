//! Simulated sensor feed.
//!
//! Stands in for the ESP32 field device until a real link exists. Readings
//! wander within fixed bounds on every tick.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::RwLock;

use super::models::{ConnectionStatus, ReadingGrade, SensorSnapshot, SnapshotGrades};

/// Telemetry failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TelemetryError {
    #[error("Unable to connect to ESP32 device")]
    Disconnected,
}

/// Shared handle to the latest snapshot.
pub type SharedSnapshot = Arc<RwLock<SensorSnapshot>>;

impl Default for SensorSnapshot {
    fn default() -> Self {
        Self {
            soil_moisture: 65.0,
            temperature: 24.5,
            humidity: 78.0,
            water_level: 85.0,
            recycled_water_level: 45.0,
            pump_on: false,
            connection: ConnectionStatus::Connected,
            captured_at: Utc::now(),
        }
    }
}

fn nudge<R: Rng + ?Sized>(rng: &mut R, value: f64, span: f64, min: f64, max: f64) -> f64 {
    (value + (rng.gen::<f64>() - 0.5) * span).clamp(min, max)
}

impl SensorSnapshot {
    /// Next reading after one tick of drift.
    pub fn drift<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        Self {
            soil_moisture: nudge(rng, self.soil_moisture, 3.0, 0.0, 100.0),
            temperature: nudge(rng, self.temperature, 0.5, 15.0, 35.0),
            humidity: nudge(rng, self.humidity, 2.0, 30.0, 95.0),
            captured_at: Utc::now(),
            ..self.clone()
        }
    }

    /// Snapshot with the pump flipped.
    pub fn toggle_pump(&self) -> Result<Self, TelemetryError> {
        if self.connection == ConnectionStatus::Disconnected {
            return Err(TelemetryError::Disconnected);
        }
        Ok(Self {
            pump_on: !self.pump_on,
            captured_at: Utc::now(),
            ..self.clone()
        })
    }

    /// Grades for moisture, temperature and both tank levels.
    pub fn grades(&self) -> SnapshotGrades {
        SnapshotGrades {
            soil_moisture: grade_moisture(self.soil_moisture),
            temperature: grade_temperature(self.temperature),
            water_level: grade_level(self.water_level),
            recycled_water_level: grade_level(self.recycled_water_level),
        }
    }
}

/// Grade a soil moisture percentage.
pub fn grade_moisture(percent: f64) -> ReadingGrade {
    if percent > 70.0 {
        ReadingGrade::Good
    } else if percent > 40.0 {
        ReadingGrade::Moderate
    } else {
        ReadingGrade::Low
    }
}

/// Grade an air temperature in °C.
pub fn grade_temperature(celsius: f64) -> ReadingGrade {
    if (20.0..=28.0).contains(&celsius) {
        ReadingGrade::Good
    } else if (15.0..=35.0).contains(&celsius) {
        ReadingGrade::Moderate
    } else {
        ReadingGrade::Low
    }
}

/// Grade a tank level.
pub fn grade_level(percent: f64) -> ReadingGrade {
    if percent > 60.0 {
        ReadingGrade::Good
    } else if percent > 20.0 {
        ReadingGrade::Moderate
    } else {
        ReadingGrade::Low
    }
}

/// Background task that drifts the shared snapshot on a fixed interval.
pub async fn start_simulator(snapshot: SharedSnapshot, period: Duration) {
    let mut rng = StdRng::from_entropy();
    let mut interval = tokio::time::interval(period);
    // First tick completes immediately
    interval.tick().await;

    tracing::info!("Telemetry simulator started ({:?} interval)", period);

    loop {
        interval.tick().await;
        // Drift under one write guard so a concurrent pump toggle is never overwritten
        let mut current = snapshot.write().await;
        let next = current.drift(&mut rng);
        tracing::trace!(
            soil_moisture = next.soil_moisture,
            temperature = next.temperature,
            humidity = next.humidity,
            "Telemetry tick"
        );
        *current = next;
    }
}

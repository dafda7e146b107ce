//! Dashboard sensor telemetry.

mod models;
mod routes;
mod simulator;

pub use models::SensorSnapshot;
pub use routes::router;
pub use simulator::{start_simulator, SharedSnapshot, TelemetryError};

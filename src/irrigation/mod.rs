//! Irrigation zones, schedules and water usage.

mod controller;
mod models;
mod routes;

pub use controller::{start_countdown, IrrigationError, SharedIrrigation};
pub use models::IrrigationState;
pub use routes::router;

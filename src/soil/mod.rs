//! Soil analysis and amendment mix module.
//!
//! Turns a plot's soil classification, area and cultivation depth into
//! cocopeat and hydrogel quantities, served as HTTP endpoints.

mod analysis;
mod calculator;
mod input;
mod models;
mod routes;

pub use analysis::{MockSoilClassifier, SoilClassifier};
pub use calculator::InvalidInputError;
pub use input::LandDetailsError;
pub use routes::router;

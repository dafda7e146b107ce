//! Plant health scanning.

mod diagnosis;
mod models;
mod routes;

pub use diagnosis::{MockPlantDiagnoser, PlantDiagnoser};
pub use routes::router;

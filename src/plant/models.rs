//! Data types for plant health scans.

use serde::{Deserialize, Serialize};

/// Where the scanned leaf image came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSource {
    Camera,
    Gallery,
}

/// Overall condition reported for a plant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HealthStatus {
    Healthy,
    PestInfected,
    NutrientDeficient,
    Disease,
}

/// Kind of remedy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TreatmentKind {
    Organic,
    Chemical,
    Cultural,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Treatment {
    pub kind: TreatmentKind,
    pub name: String,
    pub description: String,
    /// How to apply it
    pub application: String,
}

/// Diagnosis of a scanned plant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlantAnalysis {
    pub species: String,
    pub health_status: HealthStatus,
    /// Model confidence (%)
    pub confidence: u8,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
    pub treatments: Vec<Treatment>,
}

/// Request payload for a scan.
#[derive(Debug, Deserialize)]
pub struct ScanRequest {
    pub source: ImageSource,
}

/// Response payload for a scan.
#[derive(Debug, Serialize)]
pub struct ScanResponse {
    pub source: ImageSource,
    pub image_url: &'static str,
    pub analysis: PlantAnalysis,
}

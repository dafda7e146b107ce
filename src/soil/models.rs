//! Data types for soil analysis and amendment mixing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Soil texture classification reported by the analysis step.
///
/// Any label outside the known set deserializes as [`SoilClassification::Unknown`],
/// which the calculator rejects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum SoilClassification {
    Loamy,
    Sandy,
    Clay,
    Silt,
    Unknown,
}

impl SoilClassification {
    /// Parse a wire label. Unrecognized labels map to `Unknown`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "loamy" => Self::Loamy,
            "sandy" => Self::Sandy,
            "clay" => Self::Clay,
            "silt" => Self::Silt,
            _ => Self::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Loamy => "loamy",
            Self::Sandy => "sandy",
            Self::Clay => "clay",
            Self::Silt => "silt",
            Self::Unknown => "unknown",
        }
    }
}

impl From<String> for SoilClassification {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl fmt::Display for SoilClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Input to the amendment calculator.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct MixRequest {
    /// Soil classification driving the coefficients
    #[serde(rename = "soil_type")]
    pub classification: SoilClassification,
    /// Land area in square meters
    #[serde(rename = "area_m2")]
    pub area_square_meters: f64,
    /// Cultivation depth in centimeters
    #[serde(rename = "depth_cm")]
    pub depth_centimeters: f64,
}

/// Amendment quantities and application steps.
///
/// Quantities are unrounded; use the `*_display` helpers for presentation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MixResult {
    /// Cocopeat in kilograms
    pub bulking_agent_kg: f64,
    /// Hydrogel in kilograms
    pub polymer_kg: f64,
    /// Ordered application steps
    pub instructions: Vec<String>,
}

impl MixResult {
    /// Cocopeat rounded to one decimal.
    pub fn bulking_agent_display(&self) -> String {
        format!("{:.1}", self.bulking_agent_kg)
    }

    /// Hydrogel rounded to two decimals.
    pub fn polymer_display(&self) -> String {
        format!("{:.2}", self.polymer_kg)
    }
}

/// Soil properties reported by a classification provider.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SoilAnalysis {
    pub classification: SoilClassification,
    pub ph: f64,
    /// Nitrogen (%)
    pub nitrogen: f64,
    /// Phosphorus (%)
    pub phosphorus: f64,
    /// Potassium (%)
    pub potassium: f64,
    /// Organic matter (%)
    pub organic_matter: f64,
}

/// Grade for a pH reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhGrade {
    Optimal,
    Good,
    NeedsAdjustment,
}

/// Grade for a nutrient percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NutrientGrade {
    High,
    Medium,
    Low,
}

/// Catalog entry describing a soil type.
#[derive(Debug, Clone, Serialize)]
pub struct SoilType {
    pub classification: SoilClassification,
    pub name: &'static str,
    pub description: &'static str,
}

/// Request payload for the analyze endpoint, as typed by the user.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub land_area: String,
    #[serde(default)]
    pub soil_depth: String,
}

/// Response payload for a computed mix.
#[derive(Debug, Serialize)]
pub struct MixResponse {
    /// Tool identifier
    pub tool: &'static str,
    /// Tool version
    pub tool_version: &'static str,
    pub soil_type: SoilClassification,
    pub area_m2: f64,
    pub depth_cm: f64,

    /// Cocopeat in kilograms, unrounded
    pub cocopeat_kg: f64,
    /// Hydrogel in kilograms, unrounded
    pub hydrogel_kg: f64,
    /// Cocopeat rounded for display
    pub cocopeat_display: String,
    /// Hydrogel rounded for display
    pub hydrogel_display: String,
    pub instructions: Vec<String>,
    /// Instructions prefixed with their step number
    pub numbered_instructions: Vec<String>,

    /// SHA256 hash of input
    pub input_hash: String,
}

/// Graded soil parameters.
#[derive(Debug, Serialize)]
pub struct SoilGrades {
    pub ph: PhGrade,
    pub nitrogen: NutrientGrade,
    pub phosphorus: NutrientGrade,
    pub potassium: NutrientGrade,
}

/// Response payload for the analyze endpoint.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: SoilAnalysis,
    pub soil_name: &'static str,
    pub soil_description: &'static str,
    pub grades: SoilGrades,
    pub mix: MixResponse,
}

//! Parsing of user-entered land details.

use super::models::{MixRequest, MixResult, SoilClassification};

/// Rejected land-details text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LandDetailsError {
    #[error("Please enter both land area and soil depth")]
    Missing,
    #[error("{field} must be a number (got {value:?})")]
    NotANumber { field: &'static str, value: String },
}

/// Land area and soil depth as typed into the form.
#[derive(Debug, Clone, Default)]
pub struct LandDetails {
    pub area: String,
    pub depth: String,
}

impl LandDetails {
    pub fn new(area: impl Into<String>, depth: impl Into<String>) -> Self {
        Self {
            area: area.into(),
            depth: depth.into(),
        }
    }

    /// Parse both fields as `(area, depth)`.
    ///
    /// Range checks are left to the calculator.
    pub fn parse(&self) -> Result<(f64, f64), LandDetailsError> {
        let area = self.area.trim();
        let depth = self.depth.trim();
        if area.is_empty() || depth.is_empty() {
            return Err(LandDetailsError::Missing);
        }
        Ok((parse_number("land area", area)?, parse_number("soil depth", depth)?))
    }

    /// Parse both fields into a calculator request.
    pub fn into_request(
        &self,
        classification: SoilClassification,
    ) -> Result<MixRequest, LandDetailsError> {
        let (area_square_meters, depth_centimeters) = self.parse()?;
        Ok(MixRequest {
            classification,
            area_square_meters,
            depth_centimeters,
        })
    }
}

fn parse_number(field: &'static str, text: &str) -> Result<f64, LandDetailsError> {
    text.parse::<f64>().map_err(|_| LandDetailsError::NotANumber {
        field,
        value: text.to_string(),
    })
}

/// Instructions as a numbered list, starting at 1.
pub fn numbered_instructions(result: &MixResult) -> Vec<String> {
    result
        .instructions
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {}", i + 1, step))
        .collect()
}

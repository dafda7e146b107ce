//! Soil classification providers and parameter grading.

use super::models::{NutrientGrade, PhGrade, SoilAnalysis, SoilClassification, SoilGrades, SoilType};

/// Source of soil classification for a plot.
///
/// The calculator only consumes the resulting classification; raw sensor
/// data never leaves the provider.
pub trait SoilClassifier: Send + Sync {
    fn analyze(&self) -> SoilAnalysis;
}

/// Fixed stand-in for the soil-sensing model.
///
/// Reports clay, the most common soil on hill terraces.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockSoilClassifier;

impl SoilClassifier for MockSoilClassifier {
    fn analyze(&self) -> SoilAnalysis {
        SoilAnalysis {
            classification: SoilClassification::Clay,
            ph: 6.2,
            nitrogen: 45.0,
            phosphorus: 32.0,
            potassium: 28.0,
            organic_matter: 3.2,
        }
    }
}

const SOIL_TYPES: [SoilType; 4] = [
    SoilType {
        classification: SoilClassification::Loamy,
        name: "Loamy Soil",
        description: "Well-balanced, ideal for most crops",
    },
    SoilType {
        classification: SoilClassification::Sandy,
        name: "Sandy Soil",
        description: "Good drainage, needs more water retention",
    },
    SoilType {
        classification: SoilClassification::Clay,
        name: "Clay Soil",
        description: "High nutrient retention, drainage issues",
    },
    SoilType {
        classification: SoilClassification::Silt,
        name: "Silt Soil",
        description: "Fine particles, moderate drainage",
    },
];

/// All known soil types.
pub fn soil_types() -> &'static [SoilType] {
    &SOIL_TYPES
}

/// Display name for a classification.
pub fn soil_name(classification: SoilClassification) -> &'static str {
    soil_types()
        .iter()
        .find(|t| t.classification == classification)
        .map_or("Unknown Soil", |t| t.name)
}

/// Description for a classification, empty for unknown soil.
pub fn soil_description(classification: SoilClassification) -> &'static str {
    soil_types()
        .iter()
        .find(|t| t.classification == classification)
        .map_or("", |t| t.description)
}

/// Grade a pH reading.
pub fn grade_ph(ph: f64) -> PhGrade {
    if (6.0..=7.0).contains(&ph) {
        PhGrade::Optimal
    } else if (5.5..=7.5).contains(&ph) {
        PhGrade::Good
    } else {
        PhGrade::NeedsAdjustment
    }
}

/// Grade a nutrient percentage.
pub fn grade_nutrient(percent: f64) -> NutrientGrade {
    if percent >= 40.0 {
        NutrientGrade::High
    } else if percent >= 20.0 {
        NutrientGrade::Medium
    } else {
        NutrientGrade::Low
    }
}

/// Grade every graded parameter of an analysis.
pub fn grade(analysis: &SoilAnalysis) -> SoilGrades {
    SoilGrades {
        ph: grade_ph(analysis.ph),
        nitrogen: grade_nutrient(analysis.nitrogen),
        phosphorus: grade_nutrient(analysis.phosphorus),
        potassium: grade_nutrient(analysis.potassium),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_reports_clay() {
        let analysis = MockSoilClassifier.analyze();

        assert_eq!(analysis.classification, SoilClassification::Clay);
        assert_eq!(analysis.ph, 6.2);
        assert_eq!(analysis.organic_matter, 3.2);
    }

    #[test]
    fn test_ph_grades() {
        assert_eq!(grade_ph(6.0), PhGrade::Optimal);
        assert_eq!(grade_ph(7.0), PhGrade::Optimal);
        assert_eq!(grade_ph(5.5), PhGrade::Good);
        assert_eq!(grade_ph(7.4), PhGrade::Good);
        assert_eq!(grade_ph(5.4), PhGrade::NeedsAdjustment);
        assert_eq!(grade_ph(8.0), PhGrade::NeedsAdjustment);
    }

    #[test]
    fn test_nutrient_grades() {
        assert_eq!(grade_nutrient(40.0), NutrientGrade::High);
        assert_eq!(grade_nutrient(39.9), NutrientGrade::Medium);
        assert_eq!(grade_nutrient(20.0), NutrientGrade::Medium);
        assert_eq!(grade_nutrient(19.9), NutrientGrade::Low);
    }

    #[test]
    fn test_mock_grades() {
        let grades = grade(&MockSoilClassifier.analyze());

        assert_eq!(grades.ph, PhGrade::Optimal);
        assert_eq!(grades.nitrogen, NutrientGrade::High);
        assert_eq!(grades.phosphorus, NutrientGrade::Medium);
        assert_eq!(grades.potassium, NutrientGrade::Medium);
    }

    #[test]
    fn test_catalog_lookup() {
        assert_eq!(soil_name(SoilClassification::Silt), "Silt Soil");
        assert_eq!(soil_name(SoilClassification::Unknown), "Unknown Soil");
        assert_eq!(soil_description(SoilClassification::Unknown), "");
        assert_eq!(soil_types().len(), 4);
    }
}

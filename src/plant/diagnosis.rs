//! Plant health diagnosis providers.

use super::models::{HealthStatus, PlantAnalysis, Treatment, TreatmentKind};

/// Image used until the app uploads real captures.
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://images.pexels.com/photos/1084188/pexels-photo-1084188.jpeg?auto=compress&cs=tinysrgb&w=400";

/// Source of plant health diagnoses.
pub trait PlantDiagnoser: Send + Sync {
    fn diagnose(&self) -> PlantAnalysis;
}

/// Fixed stand-in for the leaf-image model.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockPlantDiagnoser;

fn treatment(kind: TreatmentKind, name: &str, description: &str, application: &str) -> Treatment {
    Treatment {
        kind,
        name: name.to_string(),
        description: description.to_string(),
        application: application.to_string(),
    }
}

impl PlantDiagnoser for MockPlantDiagnoser {
    fn diagnose(&self) -> PlantAnalysis {
        PlantAnalysis {
            species: "Tomato Plant (Solanum lycopersicum)".to_string(),
            health_status: HealthStatus::PestInfected,
            confidence: 87,
            issues: [
                "Early signs of aphid infestation detected",
                "Slight yellowing of lower leaves indicating possible nitrogen deficiency",
                "Leaf curl virus symptoms observed",
            ]
            .map(String::from)
            .into(),
            recommendations: [
                "Apply neem oil spray for aphid control",
                "Increase nitrogen fertilization gradually",
                "Remove affected leaves to prevent virus spread",
                "Improve air circulation around plants",
                "Monitor daily for pest progression",
            ]
            .map(String::from)
            .into(),
            treatments: vec![
                treatment(
                    TreatmentKind::Organic,
                    "Neem Oil Treatment",
                    "Natural pesticide effective against aphids and soft-bodied insects",
                    "Mix 2ml neem oil per liter of water. Spray in early morning or evening",
                ),
                treatment(
                    TreatmentKind::Organic,
                    "Compost Tea",
                    "Organic nitrogen boost for nutrient-deficient plants",
                    "Apply 500ml per plant weekly, water around root zone",
                ),
                treatment(
                    TreatmentKind::Cultural,
                    "Pruning & Sanitation",
                    "Remove infected plant material to prevent disease spread",
                    "Cut affected leaves with sterilized tools, dispose away from garden",
                ),
            ],
        }
    }
}

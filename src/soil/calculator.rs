//! Cocopeat and hydrogel mix calculation.

use super::models::{MixRequest, MixResult, SoilClassification};

/// Depth the per-area coefficients were calibrated against, in centimeters.
pub const REFERENCE_DEPTH_CM: f64 = 30.0;

/// Rejected calculator input. No partial result is ever produced.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidInputError {
    #[error("land area must be greater than zero (got {0})")]
    NonPositiveArea(f64),
    #[error("soil depth must be greater than zero (got {0})")]
    NonPositiveDepth(f64),
    #[error("land area must be a finite number")]
    NonFiniteArea,
    #[error("soil depth must be a finite number")]
    NonFiniteDepth,
    #[error("soil classification is not recognized")]
    UnknownClassification,
    #[error("land area and soil depth are too large to compute a mix")]
    ResultOutOfRange,
}

/// Per-square-meter amendment coefficients (kg/m²) at the reference depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    pub bulking: f64,
    pub polymer: f64,
}

/// Look up the coefficients for a classification.
///
/// Only clay and sandy are distinguished; silt and loamy share the fallback pair.
pub fn coefficients(classification: SoilClassification) -> Result<Coefficients, InvalidInputError> {
    match classification {
        SoilClassification::Clay => Ok(Coefficients { bulking: 2.5, polymer: 0.15 }),
        SoilClassification::Sandy => Ok(Coefficients { bulking: 1.5, polymer: 0.30 }),
        SoilClassification::Loamy | SoilClassification::Silt => {
            Ok(Coefficients { bulking: 2.0, polymer: 0.20 })
        }
        SoilClassification::Unknown => Err(InvalidInputError::UnknownClassification),
    }
}

fn check_positive(
    value: f64,
    non_finite: InvalidInputError,
    non_positive: fn(f64) -> InvalidInputError,
) -> Result<f64, InvalidInputError> {
    if !value.is_finite() {
        return Err(non_finite);
    }
    if value <= 0.0 {
        return Err(non_positive(value));
    }
    Ok(value)
}

/// Compute the amendment mix for a request.
pub fn compute_mix(request: &MixRequest) -> Result<MixResult, InvalidInputError> {
    let area = check_positive(
        request.area_square_meters,
        InvalidInputError::NonFiniteArea,
        InvalidInputError::NonPositiveArea,
    )?;
    let depth = check_positive(
        request.depth_centimeters,
        InvalidInputError::NonFiniteDepth,
        InvalidInputError::NonPositiveDepth,
    )?;
    let coeff = coefficients(request.classification)?;

    let depth_factor = depth / REFERENCE_DEPTH_CM;
    let bulking_agent_kg = area * coeff.bulking * depth_factor;
    let polymer_kg = area * coeff.polymer * depth_factor;
    if !bulking_agent_kg.is_finite() || !polymer_kg.is_finite() {
        return Err(InvalidInputError::ResultOutOfRange);
    }

    // The last step is emitted for every soil type.
    let instructions = vec![
        format!("Mix {bulking_agent_kg:.1}kg cocopeat evenly throughout the soil"),
        format!("Distribute {polymer_kg:.2}kg hydrogel crystals uniformly"),
        "Water thoroughly after mixing to activate hydrogel".to_string(),
        "Allow 24-48 hours before planting".to_string(),
        "Ideal for clay soil improvement in hilly terrain".to_string(),
    ];

    Ok(MixResult {
        bulking_agent_kg,
        polymer_kg,
        instructions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn request(classification: SoilClassification, area: f64, depth: f64) -> MixRequest {
        MixRequest {
            classification,
            area_square_meters: area,
            depth_centimeters: depth,
        }
    }

    #[test]
    fn test_clay_reference_depth() {
        let result = compute_mix(&request(SoilClassification::Clay, 100.0, 30.0)).unwrap();

        assert_eq!(result.bulking_agent_kg, 250.0);
        assert_eq!(result.polymer_kg, 15.0);
    }

    #[test]
    fn test_sandy_half_depth() {
        let result = compute_mix(&request(SoilClassification::Sandy, 50.0, 15.0)).unwrap();

        assert_eq!(result.bulking_agent_kg, 37.5);
        assert_eq!(result.polymer_kg, 7.5);
    }

    #[test]
    fn test_loamy_double_depth() {
        let result = compute_mix(&request(SoilClassification::Loamy, 200.0, 60.0)).unwrap();

        assert_eq!(result.bulking_agent_kg, 800.0);
        assert_eq!(result.polymer_kg, 80.0);
    }

    #[test]
    fn test_silt_matches_loamy() {
        let silt = compute_mix(&request(SoilClassification::Silt, 42.0, 25.0)).unwrap();
        let loamy = compute_mix(&request(SoilClassification::Loamy, 42.0, 25.0)).unwrap();

        assert_eq!(silt, loamy);
    }

    #[test]
    fn test_unknown_classification_error() {
        let result = compute_mix(&request(SoilClassification::Unknown, 10.0, 10.0));
        assert!(matches!(result, Err(InvalidInputError::UnknownClassification)));
    }

    #[test]
    fn test_negative_area_error() {
        let result = compute_mix(&request(SoilClassification::Clay, -5.0, 10.0));
        assert!(matches!(result, Err(InvalidInputError::NonPositiveArea(a)) if a == -5.0));
    }

    #[test]
    fn test_zero_depth_error() {
        let result = compute_mix(&request(SoilClassification::Clay, 10.0, 0.0));
        assert!(matches!(result, Err(InvalidInputError::NonPositiveDepth(_))));
    }

    #[test]
    fn test_non_finite_inputs() {
        let nan_area = compute_mix(&request(SoilClassification::Sandy, f64::NAN, 10.0));
        assert!(matches!(nan_area, Err(InvalidInputError::NonFiniteArea)));

        let inf_depth = compute_mix(&request(SoilClassification::Sandy, 10.0, f64::INFINITY));
        assert!(matches!(inf_depth, Err(InvalidInputError::NonFiniteDepth)));
    }

    #[test]
    fn test_overflowing_inputs_error() {
        let result = compute_mix(&request(SoilClassification::Clay, 1e308, 30.0));
        assert!(matches!(result, Err(InvalidInputError::ResultOutOfRange)));

        let result = compute_mix(&request(SoilClassification::Sandy, 1e300, 1e300));
        assert!(matches!(result, Err(InvalidInputError::ResultOutOfRange)));
    }

    #[test]
    fn test_instructions() {
        let result = compute_mix(&request(SoilClassification::Sandy, 50.0, 15.0)).unwrap();

        assert_eq!(
            result.instructions,
            vec![
                "Mix 37.5kg cocopeat evenly throughout the soil",
                "Distribute 7.50kg hydrogel crystals uniformly",
                "Water thoroughly after mixing to activate hydrogel",
                "Allow 24-48 hours before planting",
                "Ideal for clay soil improvement in hilly terrain",
            ]
        );
    }

    #[test]
    fn test_display_rounding_leaves_values_unrounded() {
        // 7 m² of clay at 10 cm: 7 * 2.5 / 3 = 5.8333...
        let result = compute_mix(&request(SoilClassification::Clay, 7.0, 10.0)).unwrap();

        assert_relative_eq!(result.bulking_agent_kg, 35.0 / 6.0, epsilon = 1e-12);
        assert_eq!(result.bulking_agent_display(), "5.8");
        assert_eq!(result.polymer_display(), "0.35");
        assert!(result.instructions[0].starts_with("Mix 5.8kg"));
    }

    fn known_classification() -> impl Strategy<Value = SoilClassification> {
        prop_oneof![
            Just(SoilClassification::Loamy),
            Just(SoilClassification::Sandy),
            Just(SoilClassification::Clay),
            Just(SoilClassification::Silt),
        ]
    }

    proptest! {
        #[test]
        fn prop_quantities_positive(
            classification in known_classification(),
            area in 0.01f64..1.0e6,
            depth in 0.01f64..500.0,
        ) {
            let result = compute_mix(&request(classification, area, depth)).unwrap();
            prop_assert!(result.bulking_agent_kg > 0.0);
            prop_assert!(result.polymer_kg > 0.0);
        }

        #[test]
        fn prop_deterministic(
            classification in known_classification(),
            area in 0.01f64..1.0e6,
            depth in 0.01f64..500.0,
        ) {
            let first = compute_mix(&request(classification, area, depth)).unwrap();
            let second = compute_mix(&request(classification, area, depth)).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_doubling_area_doubles_output(
            classification in known_classification(),
            area in 0.01f64..1.0e6,
            depth in 0.01f64..500.0,
        ) {
            let single = compute_mix(&request(classification, area, depth)).unwrap();
            let double = compute_mix(&request(classification, area * 2.0, depth)).unwrap();
            prop_assert_eq!(double.bulking_agent_kg, single.bulking_agent_kg * 2.0);
            prop_assert_eq!(double.polymer_kg, single.polymer_kg * 2.0);
        }

        #[test]
        fn prop_linear_in_depth(
            classification in known_classification(),
            area in 0.01f64..1.0e4,
            depth in 0.01f64..500.0,
        ) {
            let coeff = coefficients(classification).unwrap();
            let result = compute_mix(&request(classification, area, depth)).unwrap();
            let doubled = compute_mix(&request(classification, area, depth * 2.0)).unwrap();

            let bulking_slope = area * coeff.bulking / REFERENCE_DEPTH_CM;
            let polymer_slope = area * coeff.polymer / REFERENCE_DEPTH_CM;
            assert_relative_eq!(result.bulking_agent_kg, bulking_slope * depth, max_relative = 1e-12);
            assert_relative_eq!(result.polymer_kg, polymer_slope * depth, max_relative = 1e-12);

            // Zero intercept: doubling depth doubles both quantities
            assert_relative_eq!(doubled.bulking_agent_kg, 2.0 * result.bulking_agent_kg, max_relative = 1e-12);
            assert_relative_eq!(doubled.polymer_kg, 2.0 * result.polymer_kg, max_relative = 1e-12);
        }

        #[test]
        fn prop_reference_depth_is_identity(
            classification in known_classification(),
            area in 0.01f64..1.0e6,
        ) {
            let coeff = coefficients(classification).unwrap();
            let result = compute_mix(&request(classification, area, REFERENCE_DEPTH_CM)).unwrap();
            prop_assert_eq!(result.bulking_agent_kg, area * coeff.bulking);
            prop_assert_eq!(result.polymer_kg, area * coeff.polymer);
        }
    }
}

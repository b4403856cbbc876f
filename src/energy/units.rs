//! Unit conversion constants and normalization helpers
//!
//! The energy formula works in metric; imperial inputs are normalized
//! first.

use crate::models::UnitSystem;

// ============================================================================
// Conversion Constants
// ============================================================================

/// Kilograms per pound
pub const KG_PER_LB: f64 = 0.453592;
/// Centimeters per inch
pub const CM_PER_IN: f64 = 2.54;

// ============================================================================
// Energy Density Constants (kcal per gram)
// ============================================================================

/// Calories per gram of protein
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
/// Calories per gram of carbohydrate
pub const KCAL_PER_G_CARBS: f64 = 4.0;
/// Calories per gram of fat
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Normalize a weight input to kilograms
pub fn to_kilograms(weight: f64, units: UnitSystem) -> f64 {
    match units {
        UnitSystem::Metric => weight,
        UnitSystem::Imperial => weight * KG_PER_LB,
    }
}

/// Normalize a height input to centimeters
pub fn to_centimeters(height: f64, units: UnitSystem) -> f64 {
    match units {
        UnitSystem::Metric => height,
        UnitSystem::Imperial => height * CM_PER_IN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_passthrough() {
        assert_eq!(to_kilograms(60.0, UnitSystem::Metric), 60.0);
        assert_eq!(to_centimeters(165.0, UnitSystem::Metric), 165.0);
    }

    #[test]
    fn test_pounds_to_kilograms() {
        let kg = to_kilograms(154.0, UnitSystem::Imperial);
        assert!((kg - 69.853).abs() < 0.01);
    }

    #[test]
    fn test_inches_to_centimeters() {
        let cm = to_centimeters(65.0, UnitSystem::Imperial);
        assert!((cm - 165.1).abs() < 0.001);
    }
}

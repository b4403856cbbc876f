//! Target computation MCP tools
//!
//! Thin tool-layer wrappers around the energy pipeline; the split comes
//! from the resolved content document unless the caller supplies one.

use serde::Serialize;

use crate::content::ContentDoc;
use crate::energy;
use crate::models::{BiometricInput, MacroSplit};

/// Response for compute_calories
#[derive(Debug, Serialize)]
pub struct ComputeCaloriesResponse {
    /// BMR before activity scaling
    pub bmr: f64,
    /// Total daily calories, unrounded
    pub calories: f64,
}

/// Response for compute_macro_targets
#[derive(Debug, Serialize)]
pub struct ComputeTargetsResponse {
    pub calories: i64,
    pub protein: i64,
    pub carbs: i64,
    pub fat: i64,
    /// The split the gram targets were derived from
    pub split: MacroSplit,
}

/// Unrounded daily energy expenditure for a biometric input
pub fn compute_calories(input: &BiometricInput) -> ComputeCaloriesResponse {
    ComputeCaloriesResponse {
        bmr: energy::basal_metabolic_rate(input),
        calories: energy::compute_calories(input),
    }
}

/// Full rounded breakdown for a biometric input
pub fn compute_targets(
    content: &ContentDoc,
    input: &BiometricInput,
    split: Option<MacroSplit>,
) -> ComputeTargetsResponse {
    let split = split.unwrap_or_else(|| content.split_or_default());
    let breakdown = energy::compute_breakdown(input, &split);
    ComputeTargetsResponse {
        calories: breakdown.calories,
        protein: breakdown.protein,
        carbs: breakdown.carbs,
        fat: breakdown.fat,
        split,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Sex, UnitSystem};

    fn metric_female() -> BiometricInput {
        BiometricInput {
            units: UnitSystem::Metric,
            sex: Sex::Female,
            sex_adjustment: true,
            age: 30.0,
            height: 165.0,
            weight: 60.0,
            activity_level: 1.2,
            adjustment_factor: 1.0,
            delta: 0.0,
        }
    }

    #[test]
    fn test_compute_calories_response() {
        let response = compute_calories(&metric_female());
        assert!((response.bmr - 1320.25).abs() < 1e-9);
        assert!((response.calories - 1584.3).abs() < 1e-6);
    }

    #[test]
    fn test_targets_use_content_split_by_default() {
        let content = ContentDoc::resolve(None);
        let response = compute_targets(&content, &metric_female(), None);
        assert_eq!(response.split.protein, 0.35);
        assert_eq!(response.split.carbs, 0.33);
        assert_eq!(response.split.fat, 0.32);
        assert_eq!(response.calories, 1584);
        assert_eq!(response.protein, 139);
        assert_eq!(response.carbs, 131);
        assert_eq!(response.fat, 56);
    }

    #[test]
    fn test_targets_with_caller_split() {
        let content = ContentDoc::resolve(None);
        let split = MacroSplit {
            protein: 0.35,
            carbs: 0.30,
            fat: 0.35,
        };
        let response = compute_targets(&content, &metric_female(), Some(split));
        assert_eq!(response.split, split);
        // 1584.3 * 0.30 / 4 = 118.8225
        assert_eq!(response.carbs, 119);
    }
}

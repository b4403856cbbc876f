//! Macro split and breakdown types

use serde::{Deserialize, Serialize};

/// Fractional allocation of total calories to each macronutrient
///
/// The three fractions are expected to sum to 1.0; an off-balance split is
/// reported by the content resolver's calorie split check but never
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroSplit {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl MacroSplit {
    pub fn sum(&self) -> f64 {
        self.protein + self.carbs + self.fat
    }
}

impl Default for MacroSplit {
    /// Fallback split when no content document applies
    fn default() -> Self {
        Self {
            protein: 0.35,
            carbs: 0.30,
            fat: 0.35,
        }
    }
}

/// Daily targets, rounded for display
///
/// Each value is rounded independently; grams times kcal-per-gram is not
/// rebalanced to reproduce the calorie total exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroBreakdown {
    pub calories: i64,
    /// grams
    pub protein: i64,
    /// grams
    pub carbs: i64,
    /// grams
    pub fat: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_split_is_balanced() {
        let split = MacroSplit::default();
        assert!((split.sum() - 1.0).abs() < 1e-9);
    }
}

//! Mifflin-St Jeor energy expenditure pipeline
//!
//! Pure numeric functions from biometric input to daily calorie and macro
//! gram targets. No input is rejected; zero or negative biometrics flow
//! through the formula and produce whatever falls out. Validation is the
//! caller's responsibility.

use crate::models::{BiometricInput, MacroBreakdown, MacroSplit, Sex};

use super::units::{
    to_centimeters, to_kilograms, KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN,
};

/// Basal metabolic rate before activity scaling
///
/// `10*kg + 6.25*cm - 5*age`, plus the sexed constant (-161 female, +5
/// male) when the input's `sex_adjustment` flag is on. With the flag off
/// the term is omitted entirely.
pub fn basal_metabolic_rate(input: &BiometricInput) -> f64 {
    let weight_kg = to_kilograms(input.weight, input.units);
    let height_cm = to_centimeters(input.height, input.units);

    let mut bmr = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * input.age;

    if input.sex_adjustment {
        bmr += match input.sex {
            Sex::Female => -161.0,
            Sex::Male => 5.0,
        };
    }

    bmr
}

/// Total daily calories: BMR scaled by the activity multiplier, then the
/// adjustment factor, then the flat goal delta. Not rounded; rounding
/// happens once per displayed value in the breakdown.
pub fn compute_calories(input: &BiometricInput) -> f64 {
    let active_bmr = basal_metabolic_rate(input) * input.activity_level;
    active_bmr * input.adjustment_factor + input.delta
}

/// Daily calorie and macro gram targets for a biometric input
pub fn compute_breakdown(input: &BiometricInput, split: &MacroSplit) -> MacroBreakdown {
    breakdown_from_calories(compute_calories(input), split)
}

/// Split a calorie total into rounded gram targets
///
/// 1g of protein or carbs is 4 calories, 1g of fat is 9. Each value
/// rounds independently.
pub fn breakdown_from_calories(calories: f64, split: &MacroSplit) -> MacroBreakdown {
    MacroBreakdown {
        calories: calories.round() as i64,
        protein: (calories * split.protein / KCAL_PER_G_PROTEIN).round() as i64,
        carbs: (calories * split.carbs / KCAL_PER_G_CARBS).round() as i64,
        fat: (calories * split.fat / KCAL_PER_G_FAT).round() as i64,
    }
}

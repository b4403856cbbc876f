//! Biometric input model
//!
//! Plain numeric/boolean inputs consumed by the energy pipeline. No
//! validation happens here; the calculator is total over whatever the
//! caller supplies.

use serde::{Deserialize, Serialize};

/// Unit system for height and weight inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Height in centimeters, weight in kilograms
    Metric,
    /// Height in inches, weight in pounds
    Imperial,
}

impl UnitSystem {
    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "metric" => Some(UnitSystem::Metric),
            "imperial" => Some(UnitSystem::Imperial),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }
}

/// Biological sex, used only for the sexed BMR constant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "female" | "f" => Some(Sex::Female),
            "male" | "m" => Some(Sex::Male),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Female => "female",
            Sex::Male => "male",
        }
    }
}

/// Biometric input for a target computation
///
/// `sex_adjustment` selects between the sexed formula (-161 female / +5
/// male) and the sex-agnostic one that omits the term entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BiometricInput {
    pub units: UnitSystem,
    pub sex: Sex,
    #[serde(default = "default_sex_adjustment")]
    pub sex_adjustment: bool,
    /// Age in years
    pub age: f64,
    /// Height in cm (metric) or inches (imperial)
    pub height: f64,
    /// Weight in kg (metric) or lbs (imperial)
    pub weight: f64,
    /// Activity multiplier applied to BMR
    pub activity_level: f64,
    /// Cutting/bulking multiplier applied to active calories
    #[serde(default = "default_adjustment_factor")]
    pub adjustment_factor: f64,
    /// Flat caloric surplus or deficit added last
    #[serde(default)]
    pub delta: f64,
}

fn default_sex_adjustment() -> bool {
    true
}

fn default_adjustment_factor() -> f64 {
    1.0
}

//! Energy expenditure module
//!
//! Mifflin-St Jeor BMR, activity scaling, and macro-split arithmetic.

pub mod mifflin;
pub mod units;

pub use mifflin::{
    basal_metabolic_rate, breakdown_from_calories, compute_breakdown, compute_calories,
};
pub use units::{to_centimeters, to_kilograms, CM_PER_IN, KG_PER_LB};

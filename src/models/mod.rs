//! Data models
//!
//! Plain types flowing between the content document, the energy pipeline,
//! and the MCP tools.

mod biometrics;
mod breakdown;

pub use biometrics::{BiometricInput, Sex, UnitSystem};
pub use breakdown::{MacroBreakdown, MacroSplit};

//! Content resolution module
//!
//! Merges the built-in content document with an optional host override and
//! exposes typed accessors over the result.

pub mod defaults;
pub mod doc;
pub mod merge;

pub use defaults::default_content;
pub use doc::{
    load_override, ActivityLevelOption, ContentDoc, ContentError, GoalOption, OptionBounds,
    OptionParameters, ResultField,
};
pub use merge::deep_merge;

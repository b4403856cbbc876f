//! Resolved content document
//!
//! Merges the built-in defaults with an optional host override, caches the
//! result for the life of the process, and provides typed accessors over
//! the merged document.

use std::path::Path;
use std::sync::OnceLock;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::models::MacroSplit;

use super::defaults::default_content;
use super::merge::deep_merge;

/// Content loading error types
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Failed to read content override: {0}")]
    Io(#[from] std::io::Error),

    #[error("Content override is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Tolerance for the calorie split check. The authored defaults are meant
/// to sum to 1.00, which is not bit-exact in f64 arithmetic.
const SPLIT_TOLERANCE: f64 = 1e-6;

/// Process-wide slot for the resolved document. Written once by the first
/// `ContentDoc::init` caller, read-only for the rest of the process.
static RESOLVED: OnceLock<ContentDoc> = OnceLock::new();

/// Read an override document from a JSON file
pub fn load_override<P: AsRef<Path>>(path: P) -> Result<Value, ContentError> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Activity-level option: display strings plus the BMR multiplier
#[derive(Debug, Clone, Serialize)]
pub struct ActivityLevelOption {
    pub label: String,
    pub description: String,
    pub value: f64,
}

/// Goal option: display strings plus the flat caloric delta
#[derive(Debug, Clone, Serialize)]
pub struct GoalOption {
    pub label: String,
    pub description: String,
    pub delta: f64,
}

/// Display metadata for a named result field
#[derive(Debug, Clone, Serialize)]
pub struct ResultField {
    pub label: String,
    pub unit: String,
    pub order: i64,
}

/// Index bounds for one selectable option list
#[derive(Debug, Clone, Copy, Serialize)]
pub struct OptionBounds {
    pub max: usize,
    pub default: usize,
}

/// Index bounds for all selectable option lists
#[derive(Debug, Clone, Serialize)]
pub struct OptionParameters {
    pub activity_level: Option<OptionBounds>,
    pub goal: Option<OptionBounds>,
}

/// The effective content document: defaults merged with any host override
#[derive(Debug, Clone)]
pub struct ContentDoc {
    doc: Value,
    override_applied: bool,
}

impl ContentDoc {
    /// Merge the built-in defaults with an optional override document.
    ///
    /// An absent or non-object override leaves the defaults untouched.
    /// This is the pure resolution path; process-wide caching lives in
    /// `init`.
    pub fn resolve(override_doc: Option<&Value>) -> Self {
        let base = default_content();
        let (doc, override_applied) = match override_doc {
            Some(v @ Value::Object(_)) => (deep_merge(base, v.clone()), true),
            _ => (base, false),
        };

        let resolved = Self {
            doc,
            override_applied,
        };
        resolved.check_split();
        resolved
    }

    /// Resolve once and cache for the remainder of the process.
    ///
    /// Later calls return the cached document regardless of argument, so
    /// near-simultaneous first callers race benignly: one merge wins and
    /// every caller sees the same document.
    pub fn init(override_doc: Option<&Value>) -> &'static ContentDoc {
        RESOLVED.get_or_init(|| Self::resolve(override_doc))
    }

    /// The cached document, if `init` has run
    pub fn get() -> Option<&'static ContentDoc> {
        RESOLVED.get()
    }

    /// The full merged document
    pub fn as_value(&self) -> &Value {
        &self.doc
    }

    /// Whether an override document was merged in
    pub fn override_applied(&self) -> bool {
        self.override_applied
    }

    /// Calorie split check: advisory only, never blocks usage
    fn check_split(&self) {
        if let Some((protein, carbs, fat)) = self.split_imbalance() {
            tracing::warn!(
                protein,
                carbs,
                fat,
                "calorie split check: splits sum to {}, expected 1.0",
                protein + carbs + fat
            );
        }
    }

    /// The three split values when they fail to sum to 1.0, None when they
    /// do (or when the document carries no usable split section)
    pub fn split_imbalance(&self) -> Option<(f64, f64, f64)> {
        let split = self.macro_split()?;
        if (split.sum() - 1.0).abs() > SPLIT_TOLERANCE {
            Some((split.protein, split.carbs, split.fat))
        } else {
            None
        }
    }

    /// Page title
    pub fn title(&self) -> Option<&str> {
        self.doc.get("title")?.as_str()
    }

    /// A form section by key
    pub fn form(&self, key: &str) -> Option<&Value> {
        self.doc.get("form")?.get(key)
    }

    /// Activity-level option N. Range checking is the caller's job; out of
    /// range or malformed entries come back as None.
    pub fn activity_level_option(&self, n: usize) -> Option<ActivityLevelOption> {
        let opt = self.form("activity_level")?.get("options")?.get(n)?;
        Some(ActivityLevelOption {
            label: opt.get("label")?.as_str()?.to_string(),
            description: opt.get("description")?.as_str()?.to_string(),
            value: opt.get("value")?.as_f64()?,
        })
    }

    /// Goal option N
    pub fn goal_option(&self, n: usize) -> Option<GoalOption> {
        let opt = self.form("goal")?.get("options")?.get(n)?;
        Some(GoalOption {
            label: opt.get("label")?.as_str()?.to_string(),
            description: opt.get("description")?.as_str()?.to_string(),
            delta: opt.get("delta")?.as_f64()?,
        })
    }

    /// Display metadata for a named result field
    pub fn result_field(&self, name: &str) -> Option<ResultField> {
        let field = self.doc.get("results")?.get(name)?;
        Some(ResultField {
            label: field.get("label")?.as_str()?.to_string(),
            unit: field.get("unit")?.as_str()?.to_string(),
            order: field.get("order")?.as_i64()?,
        })
    }

    /// Max and default indices for the selectable form lists
    pub fn option_parameters(&self) -> OptionParameters {
        OptionParameters {
            activity_level: self.option_bounds("activity_level"),
            goal: self.option_bounds("goal"),
        }
    }

    fn option_bounds(&self, key: &str) -> Option<OptionBounds> {
        let section = self.form(key)?;
        let options = section.get("options")?.as_array()?;
        if options.is_empty() {
            return None;
        }
        let default = section
            .get("default_index")
            .and_then(Value::as_u64)
            .unwrap_or(0) as usize;
        Some(OptionBounds {
            max: options.len() - 1,
            default,
        })
    }

    /// Macro split from the document, if present and well-formed
    pub fn macro_split(&self) -> Option<MacroSplit> {
        let split = self.doc.get("split")?;
        Some(MacroSplit {
            protein: split.get("protein")?.as_f64()?,
            carbs: split.get("carbs")?.as_f64()?,
            fat: split.get("fat")?.as_f64()?,
        })
    }

    /// The split to use for a breakdown: the document's when well-formed,
    /// otherwise the built-in fallback
    pub fn split_or_default(&self) -> MacroSplit {
        self.macro_split().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_no_override_returns_defaults() {
        let resolved = ContentDoc::resolve(None);
        assert_eq!(resolved.as_value(), &default_content());
        assert!(!resolved.override_applied());
    }

    #[test]
    fn test_non_object_overrides_are_ignored() {
        for bad in [
            json!(null),
            json!("content"),
            json!(42),
            json!([{"title": "x"}]),
        ] {
            let resolved = ContentDoc::resolve(Some(&bad));
            assert_eq!(resolved.as_value(), &default_content());
            assert!(!resolved.override_applied());
        }
    }

    #[test]
    fn test_resolve_does_not_mutate_override() {
        let override_doc = json!({"form": {"button": {"label": "Go"}}});
        let before = override_doc.clone();
        let _ = ContentDoc::resolve(Some(&override_doc));
        assert_eq!(override_doc, before);
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let override_doc = json!({"title": "Planner", "split": {"protein": 0.4, "carbs": 0.3, "fat": 0.3}});
        let once = ContentDoc::resolve(Some(&override_doc));
        // Re-merging the resolved document with an empty override changes nothing
        let again = deep_merge(once.as_value().clone(), json!({}));
        assert_eq!(&again, once.as_value());
    }

    #[test]
    fn test_override_reaches_nested_label() {
        let override_doc = json!({"form": {"button": {"label": "Go"}}});
        let resolved = ContentDoc::resolve(Some(&override_doc));
        assert_eq!(resolved.as_value()["form"]["button"]["label"], "Go");
        // Siblings keep their defaults
        assert_eq!(resolved.as_value()["form"]["age"]["unit"], "years");
        assert!(resolved.override_applied());
    }

    #[test]
    fn test_default_split_passes_check() {
        // 0.35 + 0.33 + 0.32 is the intended 1.00
        let resolved = ContentDoc::resolve(None);
        assert!(resolved.split_imbalance().is_none());
    }

    #[test]
    fn test_imbalanced_split_is_reported() {
        let override_doc = json!({"split": {"protein": 0.35, "carbs": 0.33, "fat": 0.33}});
        let resolved = ContentDoc::resolve(Some(&override_doc));
        let (protein, carbs, fat) = resolved.split_imbalance().expect("imbalance");
        assert_eq!((protein, carbs, fat), (0.35, 0.33, 0.33));
    }

    #[test]
    fn test_missing_split_section_is_not_reported() {
        let override_doc = json!({"split": "n/a"});
        let resolved = ContentDoc::resolve(Some(&override_doc));
        assert!(resolved.macro_split().is_none());
        assert!(resolved.split_imbalance().is_none());
        // The fallback split still applies
        assert_eq!(resolved.split_or_default(), MacroSplit::default());
    }

    #[test]
    fn test_activity_level_option_lookup() {
        let resolved = ContentDoc::resolve(None);
        let opt = resolved.activity_level_option(0).expect("option 0");
        assert_eq!(opt.label, "sedentary");
        assert_eq!(opt.value, 1.2);

        let opt = resolved.activity_level_option(4).expect("option 4");
        assert_eq!(opt.label, "very active");
        assert_eq!(opt.value, 1.9);

        // Out of range propagates as None, not an error
        assert!(resolved.activity_level_option(5).is_none());
    }

    #[test]
    fn test_goal_option_lookup() {
        let resolved = ContentDoc::resolve(None);
        let opt = resolved.goal_option(0).expect("option 0");
        assert_eq!(opt.delta, -500.0);
        assert!(resolved.goal_option(99).is_none());
    }

    #[test]
    fn test_result_field_lookup() {
        let resolved = ContentDoc::resolve(None);
        let field = resolved.result_field("protein").expect("protein field");
        assert_eq!(field.label, "Protein");
        assert_eq!(field.unit, "grams per day");
        assert_eq!(field.order, 1);
        assert!(resolved.result_field("fiber").is_none());
    }

    #[test]
    fn test_option_parameters() {
        let resolved = ContentDoc::resolve(None);
        let params = resolved.option_parameters();
        let activity = params.activity_level.expect("activity bounds");
        assert_eq!(activity.max, 4);
        assert_eq!(activity.default, 0);
        let goal = params.goal.expect("goal bounds");
        assert_eq!(goal.max, 4);
        assert_eq!(goal.default, 2);
    }

    #[test]
    fn test_replaced_option_list_shifts_bounds() {
        let override_doc = json!({
            "form": {"activity_level": {"options": [
                {"label": "custom", "description": "host supplied", "value": 1.5}
            ]}}
        });
        let resolved = ContentDoc::resolve(Some(&override_doc));
        let bounds = resolved.option_parameters().activity_level.expect("bounds");
        assert_eq!(bounds.max, 0);
        assert!(resolved.activity_level_option(1).is_none());
    }

    #[test]
    fn test_content_sourced_split() {
        let resolved = ContentDoc::resolve(None);
        let split = resolved.split_or_default();
        assert_eq!(split.protein, 0.35);
        assert_eq!(split.carbs, 0.33);
        assert_eq!(split.fat, 0.32);
    }
}

//! Structural deep merge for content documents
//!
//! Merge semantics:
//! - Objects: deep-merge by key (recursive)
//! - Arrays: REPLACE (override wins entirely, never element-wise)
//! - Scalars and type mismatches: override wins

use serde_json::Value;

/// Deep merge an override document into a base document.
///
/// A key absent from the override keeps the base value; a key present with
/// any value, including `false`, `0`, `""`, and `null`, overrides it. An
/// override value whose shape mismatches the base (e.g. a string where the
/// base has an object) replaces the base value outright.
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        // Both objects: deep merge
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                let merged = if let Some(base_value) = base_map.remove(&key) {
                    deep_merge(base_value, overlay_value)
                } else {
                    overlay_value
                };
                base_map.insert(key, merged);
            }
            Value::Object(base_map)
        }

        // Arrays: REPLACE (option lists are swapped wholesale)
        (Value::Array(_), overlay @ Value::Array(_)) => overlay,

        // Scalars and any other case: overlay wins
        (_, overlay) => overlay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_override() {
        let base = json!({"title": "Macro Calculator"});
        let overlay = json!({"title": "Nutrition Planner"});
        let result = deep_merge(base, overlay);
        assert_eq!(result["title"], "Nutrition Planner");
    }

    #[test]
    fn test_falsy_values_still_override() {
        let base = json!({"count": 5, "enabled": true, "label": "Calculate"});
        let overlay = json!({"count": 0, "enabled": false, "label": ""});
        let result = deep_merge(base, overlay);
        assert_eq!(result["count"], 0);
        assert_eq!(result["enabled"], false);
        assert_eq!(result["label"], "");
    }

    #[test]
    fn test_nested_merge_preserves_siblings() {
        let base = json!({
            "form": {
                "age": {"placeholder": "Your age", "unit": "years"},
                "button": {"label": "Calculate"}
            }
        });
        let overlay = json!({
            "form": {
                "button": {"label": "Go"}
            }
        });
        let result = deep_merge(base, overlay);

        assert_eq!(result["form"]["button"]["label"], "Go");
        // Unspecified sibling keys retain the base's values
        assert_eq!(result["form"]["age"]["placeholder"], "Your age");
        assert_eq!(result["form"]["age"]["unit"], "years");
    }

    #[test]
    fn test_array_replace_not_elementwise() {
        let base = json!({
            "options": [
                {"label": "sedentary", "value": 1.2},
                {"label": "light", "value": 1.375}
            ]
        });
        let overlay = json!({
            "options": [
                {"label": "custom", "value": 1.5}
            ]
        });
        let result = deep_merge(base, overlay);

        let options = result["options"].as_array().unwrap();
        assert_eq!(options.len(), 1);
        assert_eq!(options[0]["label"], "custom");
    }

    #[test]
    fn test_type_mismatch_replaces_outright() {
        let base = json!({"height": {"placeholder": "Your height"}});
        let overlay = json!({"height": "unavailable"});
        let result = deep_merge(base, overlay);
        assert_eq!(result["height"], "unavailable");
    }

    #[test]
    fn test_add_new_key() {
        let base = json!({"title": "Macro Calculator"});
        let overlay = json!({"subtitle": "Daily targets"});
        let result = deep_merge(base, overlay);
        assert_eq!(result["title"], "Macro Calculator");
        assert_eq!(result["subtitle"], "Daily targets");
    }

    #[test]
    fn test_empty_override_is_identity() {
        let base = json!({"form": {"age": {"unit": "years"}}, "split": {"protein": 0.35}});
        let result = deep_merge(base.clone(), json!({}));
        assert_eq!(result, base);
    }
}

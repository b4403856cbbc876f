//! Built-in content document
//!
//! The default labels, option lists, and macro-split percentages used when
//! the host supplies no override. Keys are fixed strings; hosts override
//! any subset of them.

use serde_json::{json, Value};

/// Build the default content document
///
/// The `split` section carries the authored percentages as-is, including
/// the separate `calories` weight of 0.95. The calorie split check only
/// looks at the protein/carbs/fat triple.
pub fn default_content() -> Value {
    json!({
        "title": "Macro Calculator",
        "form": {
            "sex": {
                "label": "Your biological Sex",
                "default_index": 0,
                "options": [
                    { "label": "Female", "value": true },
                    { "label": "Male", "value": false }
                ]
            },
            "age": {
                "placeholder": "Your age",
                "unit": "years"
            },
            "height": {
                "placeholder": "Your height",
                "units": {
                    "cm": "cm",
                    "ft": "ft",
                    "in": "in"
                }
            },
            "weight": {
                "placeholder": "Your weight",
                "units": {
                    "metric": "kg",
                    "imperial": "lbs"
                }
            },
            "activity_level": {
                "label": "Your activity Level: ",
                "default_index": 0,
                "options": [
                    {
                        "label": "sedentary",
                        "description": "little to no exercise",
                        "value": 1.2
                    },
                    {
                        "label": "light",
                        "description": "exercise 1-3 times per week",
                        "value": 1.375
                    },
                    {
                        "label": "moderate",
                        "description": "exercise 4-5 times per week",
                        "value": 1.55
                    },
                    {
                        "label": "active",
                        "description": "exercise daily or intensely 3-4 times per week",
                        "value": 1.725
                    },
                    {
                        "label": "very active",
                        "description": "intense daily exercise",
                        "value": 1.9
                    }
                ]
            },
            "goal": {
                "label": "Your goal: ",
                "default_index": 2,
                "options": [
                    {
                        "label": "lose weight",
                        "description": "500 calorie daily deficit",
                        "delta": -500.0
                    },
                    {
                        "label": "lose weight slowly",
                        "description": "250 calorie daily deficit",
                        "delta": -250.0
                    },
                    {
                        "label": "maintain",
                        "description": "no adjustment",
                        "delta": 0.0
                    },
                    {
                        "label": "gain weight slowly",
                        "description": "250 calorie daily surplus",
                        "delta": 250.0
                    },
                    {
                        "label": "gain weight",
                        "description": "500 calorie daily surplus",
                        "delta": 500.0
                    }
                ]
            },
            "use_metric": {
                "label": "Use metric"
            },
            "button": {
                "label": "Calculate"
            }
        },
        "results": {
            "title": "Your Results",
            "calories": {
                "label": "Calories",
                "unit": "per day",
                "order": 0
            },
            "protein": {
                "label": "Protein",
                "unit": "grams per day",
                "order": 1
            },
            "carbs": {
                "label": "Carbs",
                "unit": "grams per day",
                "order": 2
            },
            "fat": {
                "label": "Fat",
                "unit": "grams per day",
                "order": 3
            }
        },
        "split": {
            "protein": 0.35,
            "carbs": 0.33,
            "fat": 0.32,
            "calories": 0.95
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_content_shape() {
        let content = default_content();
        assert_eq!(content["title"], "Macro Calculator");
        assert_eq!(content["form"]["weight"]["units"]["imperial"], "lbs");
        assert_eq!(content["results"]["fat"]["order"], 3);
        assert_eq!(content["split"]["protein"], 0.35);
    }

    #[test]
    fn test_default_activity_options() {
        let content = default_content();
        let options = content["form"]["activity_level"]["options"]
            .as_array()
            .unwrap();
        assert_eq!(options.len(), 5);
        assert_eq!(options[0]["value"], 1.2);
        assert_eq!(options[4]["value"], 1.9);
    }
}

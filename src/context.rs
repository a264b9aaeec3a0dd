//! Rendering context handed to a template under test

use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

pub const GRAINS_KEY: &str = "grains";

/// Top-level template variables, seeded with an empty `grains` object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RenderContext(Map<String, JsonValue>);

impl Default for RenderContext {
    fn default() -> Self {
        let mut vars = Map::new();
        vars.insert(GRAINS_KEY.to_string(), JsonValue::Object(Map::new()));
        Self(vars)
    }
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.0.get(key)
    }

    pub fn grain(&self, name: &str) -> Option<&JsonValue> {
        self.0.get(GRAINS_KEY).and_then(|grains| grains.get(name))
    }

    /// Set one grain, recreating `grains` if an earlier update replaced it.
    pub fn set_grain(&mut self, name: &str, value: JsonValue) {
        let slot = self.0.entry(GRAINS_KEY).or_insert(JsonValue::Null);
        if !slot.is_object() {
            *slot = JsonValue::Object(Map::new());
        }
        if let JsonValue::Object(grains) = slot {
            grains.insert(name.to_string(), value);
        }
    }

    /// Shallow update: top-level keys in `data` replace existing ones.
    pub fn merge(&mut self, data: &Map<String, JsonValue>) {
        for (key, value) in data {
            self.0.insert(key.clone(), value.clone());
        }
    }

    pub fn into_value(self) -> JsonValue {
        JsonValue::Object(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_has_empty_grains() {
        let ctx = RenderContext::new();
        assert_eq!(ctx.into_value(), json!({"grains": {}}));
    }

    #[test]
    fn test_merge_is_shallow() {
        let mut ctx = RenderContext::new();
        ctx.set_grain("os", json!("RedHat"));

        let data = json!({"pillar": {"a": 1}, "grains": {"id": "bootstrap"}});
        ctx.merge(data.as_object().expect("object"));

        assert_eq!(ctx.get("pillar"), Some(&json!({"a": 1})));
        // Replaced wholesale, not deep-merged.
        assert_eq!(ctx.grain("os"), None);
        assert_eq!(ctx.grain("id"), Some(&json!("bootstrap")));
    }

    #[test]
    fn test_set_grain_recovers_from_non_object() {
        let mut ctx = RenderContext::new();
        ctx.merge(json!({"grains": null}).as_object().expect("object"));
        ctx.set_grain("os_family", json!("Debian"));
        assert_eq!(ctx.grain("os_family"), Some(&json!("Debian")));
    }
}

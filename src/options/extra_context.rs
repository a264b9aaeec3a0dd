//! Additional template variables
//!
//! Each raw value is a single-key mapping: the key identifies the value in test
//! ids, the nested mapping is merged into the rendering context.

use crate::context::RenderContext;
use crate::error::{display_value, CaseError, Result};
use serde_json::{Map, Value as JsonValue};
use serde_yaml::Value;

const OPTION: &str = "extra_context";

#[derive(Debug, Clone, PartialEq)]
pub struct ExtraContext {
    id: String,
    data: Map<String, JsonValue>,
}

impl ExtraContext {
    pub fn from_value(raw: &Value) -> Result<Self> {
        let Some(mapping) = raw.as_mapping() else {
            return Err(CaseError::MalformedPayload { option: OPTION, keys: 0 });
        };
        if mapping.len() != 1 {
            return Err(CaseError::MalformedPayload { option: OPTION, keys: mapping.len() });
        }
        let Some((key, data)) = mapping.iter().next() else {
            return Err(CaseError::MalformedPayload { option: OPTION, keys: 0 });
        };
        let id = display_value(key);

        let invalid = |reason: String| CaseError::InvalidContextData {
            option: OPTION,
            id: id.clone(),
            reason,
        };
        let data = match data {
            Value::Null => Map::new(),
            other => match to_json(other).map_err(invalid)? {
                JsonValue::Object(map) => map,
                _ => return Err(invalid("expected a mapping of context variables".to_string())),
            },
        };

        Ok(Self { id, data })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn data(&self) -> &Map<String, JsonValue> {
        &self.data
    }

    pub fn apply(&self, context: &mut RenderContext) {
        context.merge(&self.data);
    }
}

/// Convert payload data without coercing keys or dropping non-finite floats.
fn to_json(value: &Value) -> std::result::Result<JsonValue, String> {
    match value {
        Value::Null => Ok(JsonValue::Null),
        Value::Bool(b) => Ok(JsonValue::Bool(*b)),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(JsonValue::from(i))
            } else if let Some(u) = n.as_u64() {
                Ok(JsonValue::from(u))
            } else {
                n.as_f64()
                    .and_then(serde_json::Number::from_f64)
                    .map(JsonValue::Number)
                    .ok_or_else(|| format!("non-finite number {}", n))
            }
        }
        Value::String(s) => Ok(JsonValue::String(s.clone())),
        Value::Sequence(items) => {
            items.iter().map(to_json).collect::<std::result::Result<_, _>>().map(JsonValue::Array)
        }
        Value::Mapping(mapping) => {
            let mut map = Map::new();
            for (key, value) in mapping {
                let Value::String(key) = key else {
                    return Err(format!(
                        "mapping keys must be strings, found '{}'",
                        display_value(key)
                    ));
                };
                map.insert(key.clone(), to_json(value)?);
            }
            Ok(JsonValue::Object(map))
        }
        Value::Tagged(tagged) => to_json(&tagged.value),
    }
}

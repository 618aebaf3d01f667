use crate::fuzzy::{FuzzyElement, FuzzySet};
use crate::{Environment, MicrolispError, Value};
use serde_json::{Map, Value as Json};

/// Build an environment from a decoded JSON object.
///
/// Mapping per top-level entry:
/// - string, bool → the same scalar
/// - integer that fits in `i32` → `Int`; any other number → `Float`
/// - object → fuzzy set of `(subkey, weight)` for every numeric member;
///   non-numeric members are skipped
/// - null, arrays → skipped
///
/// Example:
/// ```json
/// {
///   "name": "pump-3",
///   "active": true,
///   "retries": 2,
///   "load": 0.75,
///   "colour": { "red": 0.1, "amber": 0.9 }
/// }
/// ```
pub fn to_environment(map: &Map<String, Json>) -> Environment {
    let mut env = Environment::new();
    for (key, json) in map {
        match to_value(json) {
            Some(value) => env.insert(key.as_str(), value),
            None => tracing::debug!(key = key.as_str(), "skipping unsupported JSON value"),
        }
    }
    env
}

/// Decode `json` as an object and convert it with [`to_environment`].
pub fn from_json(json: &[u8]) -> Result<Environment, MicrolispError> {
    match serde_json::from_slice::<Json>(json)? {
        Json::Object(map) => Ok(to_environment(&map)),
        other => Err(MicrolispError::Json(format!(
            "expected a JSON object at the top level, got {}",
            json_type_name(&other)
        ))),
    }
}

fn to_value(json: &Json) -> Option<Value> {
    match json {
        Json::String(s) => Some(Value::String(s.clone())),
        Json::Bool(b) => Some(Value::Bool(*b)),
        Json::Number(n) => match n.as_i64().and_then(|i| i32::try_from(i).ok()) {
            Some(i) => Some(Value::Int(i)),
            None => n.as_f64().map(|f| Value::Float(f as f32)),
        },
        Json::Object(members) => Some(Value::Fuzzy(to_fuzzy_set(members))),
        Json::Null | Json::Array(_) => None,
    }
}

fn to_fuzzy_set(members: &Map<String, Json>) -> FuzzySet {
    members
        .iter()
        .filter_map(|(name, weight)| {
            weight
                .as_f64()
                .map(|w| FuzzyElement::new(name.as_str(), w as f32))
        })
        .collect()
}

fn json_type_name(json: &Json) -> &'static str {
    match json {
        Json::Null => "null",
        Json::Bool(_) => "a boolean",
        Json::Number(_) => "a number",
        Json::String(_) => "a string",
        Json::Array(_) => "an array",
        Json::Object(_) => "an object",
    }
}

//! Best-effort schema info derivation.
//!
//! Pulls `required`, per-property `type` and per-property `default` out of an
//! input schema. This is not validation: anything unrecognized is skipped, and
//! when nothing useful is found the result is `None` rather than an error.

use crate::docs::SchemaInfo;
use crate::tools::SchemaSource;
use serde_json::{Map, Value};

/// Derive [`SchemaInfo`] from a tool's input schema.
pub fn derive_schema_info(schema: &SchemaSource) -> Option<SchemaInfo> {
    match schema {
        SchemaSource::Json(Value::Object(map)) => derive_from_map(map),
        SchemaSource::Json(_) => None,
        SchemaSource::Raw(bytes) => {
            let map: Map<String, Value> = serde_json::from_slice(bytes).ok()?;
            derive_from_map(&map)
        }
    }
}

fn derive_from_map(schema: &Map<String, Value>) -> Option<SchemaInfo> {
    let mut info = SchemaInfo::default();

    if let Some(required) = schema.get("required") {
        info.required = string_items(required);
    }

    if let Some(Value::Object(properties)) = schema.get("properties") {
        for (name, prop) in properties {
            let Value::Object(prop) = prop else {
                continue;
            };

            match prop.get("type") {
                Some(Value::String(t)) => {
                    info.types.insert(name.clone(), vec![t.clone()]);
                }
                Some(types) => {
                    let types = string_items(types);
                    if !types.is_empty() {
                        info.types.insert(name.clone(), types);
                    }
                }
                None => {}
            }

            if let Some(default) = prop.get("default") {
                info.defaults.insert(name.clone(), normalize_numeric(default));
            }
        }
    }

    if info.required.is_empty() && info.types.is_empty() && info.defaults.is_empty() {
        return None;
    }
    Some(info)
}

/// String items of a sequence; non-strings are dropped. Not a sequence → empty.
fn string_items(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

/// Integers become floats so defaults compare equal however the schema was
/// produced (`0` and `0.0` both yield `0.0`).
fn normalize_numeric(value: &Value) -> Value {
    match value {
        Value::Number(n) if !n.is_f64() => n
            .as_f64()
            .and_then(serde_json::Number::from_f64)
            .map_or_else(|| value.clone(), Value::Number),
        other => other.clone(),
    }
}

//! Deep copy and shape normalization for example args.
//!
//! Stored args are rebuilt from scratch on the way in and again on the way
//! out, so the caller's original, the stored copy and every returned snapshot
//! are independent trees. Every payload is reduced to two container shapes,
//! an ordered keyed mapping and an ordered sequence; scalars copy by value.

use crate::docs::ToolExample;
use crate::types::{Error, Result};
use serde::Serialize;
use serde_json::{Map, Value};

/// Rebuild `value` as a fresh tree of canonical shapes.
pub fn deep_normalize(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(normalize_args(map)),
        Value::Array(items) => Value::Array(items.iter().map(deep_normalize).collect()),
        scalar => scalar.clone(),
    }
}

/// Rebuild a top-level args mapping, preserving key order.
pub fn normalize_args(args: &Map<String, Value>) -> Map<String, Value> {
    let mut out = Map::with_capacity(args.len());
    for (key, value) in args {
        out.insert(key.clone(), deep_normalize(value));
    }
    out
}

/// Collapse any serializable Rust value (typed maps, vectors, tuples,
/// structs) into a canonical args mapping.
///
/// Fails instead of dropping data: values serde cannot express as JSON (for
/// instance maps with non-string keys) are a serialization error, and a
/// payload that is not a keyed mapping at the top is a validation error.
pub fn args_from<T: Serialize + ?Sized>(value: &T) -> Result<Map<String, Value>> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        other => Err(Error::validation(format!(
            "example args must be a keyed mapping, got {}",
            value_type_name(&other)
        ))),
    }
}

/// Copy examples for a caller, rebuilding every args tree.
pub fn copy_examples(examples: &[ToolExample]) -> Vec<ToolExample> {
    examples
        .iter()
        .map(|ex| ToolExample {
            id: ex.id.clone(),
            title: ex.title.clone(),
            description: ex.description.clone(),
            args: normalize_args(&ex.args),
            result_hint: ex.result_hint.clone(),
        })
        .collect()
}

fn value_type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

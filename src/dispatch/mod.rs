//! Method router - maps a verb and a JSON body onto registry operations.
//!
//! Transport-agnostic: callers own framing and sessions and hand over
//! `(method, body)` pairs. Failures render through [`error_body`].

pub mod docs;

use crate::docs::DocStore;
use crate::types::{Error, Result};
use crate::validation::validate_non_empty;
use serde_json::Value;

/// Route a request to the matching handler.
pub async fn route_request(store: &dyn DocStore, method: &str, body: Value) -> Result<Value> {
    tracing::debug!(method, "Dispatching request");
    match method {
        "describe_tool" | "list_tool_examples" => docs::handle(store, method, body).await,
        _ => Err(Error::validation(format!("Unknown method: {}", method))),
    }
}

/// Render an error the way responses carry it.
pub fn error_body(err: &Error) -> Value {
    serde_json::json!({
        "error": {
            "code": err.code(),
            "message": err.to_string(),
        }
    })
}

// =============================================================================
// Shared helpers - used by handler modules
// =============================================================================

pub fn str_field(body: &Value, key: &str) -> Result<String> {
    let value = body
        .get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| Error::validation(format!("Missing required field: {}", key)))?;
    validate_non_empty(value, key)?;
    Ok(value.to_string())
}

pub fn opt_str_field(body: &Value, key: &str) -> Result<Option<String>> {
    match body.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(Error::validation(format!("Field {} must be a string", key))),
    }
}

/// Optional non-negative count; absent or null reads as 0.
pub fn count_field(body: &Value, key: &str) -> Result<usize> {
    match body.get(key) {
        None | Some(Value::Null) => Ok(0),
        Some(v) => v
            .as_u64()
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| {
                Error::validation(format!("Field {} must be a non-negative integer", key))
            }),
    }
}

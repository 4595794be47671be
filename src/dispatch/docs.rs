//! Documentation handler - tiered tool descriptions and example listings.

use crate::dispatch::{count_field, opt_str_field, str_field};
use crate::docs::{DetailLevel, DocStore};
use crate::types::{Error, Result};
use serde_json::Value;

pub async fn handle(store: &dyn DocStore, method: &str, body: Value) -> Result<Value> {
    match method {
        "describe_tool" => {
            let tool_id = str_field(&body, "tool_id")?;
            let level = match opt_str_field(&body, "detail_level")? {
                Some(level) => level.parse::<DetailLevel>()?,
                None => DetailLevel::Summary,
            };
            let max_examples = count_field(&body, "max_examples")?;

            let doc = store
                .describe_tool_with_limit(&tool_id, level, max_examples)
                .await?;

            Ok(serde_json::to_value(doc)?)
        }

        "list_tool_examples" => {
            let tool_id = str_field(&body, "tool_id")?;
            let max = count_field(&body, "max")?;

            let examples = store.list_examples(&tool_id, max).await?;

            Ok(serde_json::json!({
                "tool_id": tool_id,
                "count": examples.len(),
                "examples": examples,
            }))
        }

        _ => Err(Error::validation(format!("Unknown method: {}", method))),
    }
}

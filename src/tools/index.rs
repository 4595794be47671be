//! Tool index - in-memory tool metadata keyed by canonical id.
//!
//! Owns tool *metadata* only. Documentation lives in the doc registry, which
//! consults the index (or a custom resolver) when schema/full detail is asked.

use crate::tools::{Tool, ToolResolver};
use crate::types::{Result, ToolId};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;

/// In-memory tool index. Safe to share behind an `Arc`.
#[derive(Debug, Default)]
pub struct ToolIndex {
    tools: RwLock<HashMap<String, Tool>>,
}

impl ToolIndex {
    pub fn new() -> Self {
        Self {
            tools: RwLock::new(HashMap::new()),
        }
    }

    /// Register a tool under its canonical id, replacing any previous entry.
    pub fn register_tool(&self, tool: Tool) -> Result<ToolId> {
        let id = tool.id()?;
        tracing::debug!(tool_id = %id, "Registered tool");
        self.tools.write().insert(id.as_str().to_string(), tool);
        Ok(id)
    }

    /// Get a copy of a tool by id.
    pub fn get_tool(&self, tool_id: &str) -> Option<Tool> {
        self.tools.read().get(tool_id).cloned()
    }

    /// Check if a tool exists.
    pub fn has_tool(&self, tool_id: &str) -> bool {
        self.tools.read().contains_key(tool_id)
    }

    /// List all tool ids.
    pub fn list_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.tools.read().keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.read().is_empty()
    }
}

#[async_trait]
impl ToolResolver for ToolIndex {
    async fn resolve(&self, tool_id: &str) -> Result<Option<Tool>> {
        Ok(self.get_tool(tool_id))
    }
}

// =============================================================================
// Tests
// =============================================================================

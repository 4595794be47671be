//! Read-side store seam for transports.
//!
//! Dispatch only needs the two read verbs, so it depends on this trait rather
//! than on [`DocRegistry`]. Any backing store can sit behind a transport.

use crate::docs::{DetailLevel, DocRegistry, ToolDoc, ToolExample};
use crate::types::Result;
use async_trait::async_trait;

/// Describe tools and list their examples.
#[async_trait]
pub trait DocStore: Send + Sync {
    /// Describe a tool at `level`; `max_examples` of 0 defers to the store's
    /// configured default.
    async fn describe_tool_with_limit(
        &self,
        tool_id: &str,
        level: DetailLevel,
        max_examples: usize,
    ) -> Result<ToolDoc>;

    /// List up to `max_examples` examples (0 = store default).
    async fn list_examples(&self, tool_id: &str, max_examples: usize) -> Result<Vec<ToolExample>>;
}

#[async_trait]
impl DocStore for DocRegistry {
    async fn describe_tool_with_limit(
        &self,
        tool_id: &str,
        level: DetailLevel,
        max_examples: usize,
    ) -> Result<ToolDoc> {
        DocRegistry::describe_tool_with_limit(self, tool_id, level, max_examples).await
    }

    async fn list_examples(&self, tool_id: &str, max_examples: usize) -> Result<Vec<ToolExample>> {
        DocRegistry::list_examples(self, tool_id, max_examples).await
    }
}

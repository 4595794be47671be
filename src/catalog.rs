//! Catalog seed files.
//!
//! A catalog is a JSON document listing tool metadata and the documentation
//! to register for it:
//!
//! ```json
//! {
//!   "tools": [{"namespace": "api", "name": "search", "description": "..."}],
//!   "docs": {"api:search": {"summary": "...", "examples": []}}
//! }
//! ```
//!
//! Loading builds a fresh index and registry; nothing is written back.

use crate::docs::{DocEntry, DocRegistry};
use crate::tools::{Tool, ToolIndex};
use crate::types::{RegistryConfig, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub tools: Vec<Tool>,
    #[serde(default)]
    pub docs: BTreeMap<String, DocEntry>,
}

impl Catalog {
    pub async fn load(path: &Path) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let catalog = Self::from_slice(&bytes)?;
        tracing::info!(
            path = %path.display(),
            tools = catalog.tools.len(),
            docs = catalog.docs.len(),
            "Loaded catalog"
        );
        Ok(catalog)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Register every tool and doc entry into a new registry.
    ///
    /// Fails on the first invalid tool id or over-cap example.
    pub fn into_registry(self, config: &RegistryConfig) -> Result<DocRegistry> {
        let index = Arc::new(ToolIndex::new());
        for tool in self.tools {
            index.register_tool(tool)?;
        }

        let registry = DocRegistry::new(config).with_index(index);
        for (tool_id, entry) in &self.docs {
            registry.register_doc(tool_id, entry)?;
        }
        Ok(registry)
    }
}

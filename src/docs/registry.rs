//! Documentation registry - validated doc records merged with tool metadata.
//!
//! One reader/writer lock guards the id → record map. Registrations validate
//! and normalize everything before taking the write lock, then swap the record
//! in a single insert, so a failed registration leaves no trace. Reads copy the
//! fields they need under the read lock and release it before any tool
//! resolution, which may be slow or remote.

use crate::docs::{
    copy_examples, derive_schema_info, normalize_args, truncate_chars, validate_args,
    DetailLevel, DocEntry, ToolDoc, ToolExample, MAX_ARGS_DEPTH, MAX_ARGS_SIZE, MAX_NOTES_LEN,
    MAX_SUMMARY_LEN,
};
use crate::tools::{Tool, ToolIndex, ToolResolver};
use crate::types::{Error, RegistryConfig, Result};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

// =============================================================================
// Records
// =============================================================================

/// Stored documentation for one id. Owned exclusively by the registry.
#[derive(Debug, Clone, Default)]
struct DocRecord {
    summary: String,
    notes: String,
    examples: Vec<ToolExample>,
    external_refs: Vec<String>,
}

/// Combine a per-call example limit with the configured default.
///
/// Zero means "no limit" on either side; when both are set the smaller wins.
/// A zero result means unlimited.
pub fn effective_limit(requested: usize, configured: usize) -> usize {
    match (requested, configured) {
        (0, configured) => configured,
        (requested, 0) => requested,
        (requested, configured) => requested.min(configured),
    }
}

fn apply_limit(mut examples: Vec<ToolExample>, limit: usize) -> Vec<ToolExample> {
    if limit > 0 {
        examples.truncate(limit);
    }
    examples
}

/// Normalize, cap-check and truncate a batch. Any failure rejects the batch.
fn prepare_examples(examples: &[ToolExample]) -> Result<Vec<ToolExample>> {
    examples
        .iter()
        .enumerate()
        .map(|(index, example)| {
            let args = normalize_args(&example.args);
            let (stats, valid) = validate_args(&args);
            if !valid {
                tracing::warn!(
                    example = index,
                    title = %example.title,
                    depth = stats.depth,
                    size = stats.size,
                    "Rejected example args over caps"
                );
                return Err(Error::ArgsTooLarge {
                    index,
                    title: example.title.clone(),
                    depth: stats.depth,
                    max_depth: MAX_ARGS_DEPTH,
                    size: stats.size,
                    max_size: MAX_ARGS_SIZE,
                });
            }
            Ok(example.truncated(args))
        })
        .collect()
}

// =============================================================================
// Registry
// =============================================================================

/// In-memory documentation registry. Safe for concurrent use behind an `Arc`.
pub struct DocRegistry {
    docs: RwLock<HashMap<String, DocRecord>>,
    index: Option<Arc<ToolIndex>>,
    resolver: Option<Arc<dyn ToolResolver>>,
    max_examples: usize,
}

impl fmt::Debug for DocRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocRegistry")
            .field("records", &self.docs.read().len())
            .field("index", &self.index)
            .field("has_resolver", &self.resolver.is_some())
            .field("max_examples", &self.max_examples)
            .finish()
    }
}

impl DocRegistry {
    pub fn new(config: &RegistryConfig) -> Self {
        Self {
            docs: RwLock::new(HashMap::new()),
            index: None,
            resolver: None,
            max_examples: config.max_examples,
        }
    }

    /// Attach a tool index, consulted first on every resolution.
    pub fn with_index(mut self, index: Arc<ToolIndex>) -> Self {
        self.index = Some(index);
        self
    }

    /// Attach a custom resolver, consulted when the index has no match.
    pub fn with_resolver(mut self, resolver: Arc<dyn ToolResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Configured default example cap (0 = unlimited).
    pub fn max_examples(&self) -> usize {
        self.max_examples
    }

    /// Whether documentation is registered for `tool_id`.
    pub fn has_doc(&self, tool_id: &str) -> bool {
        self.docs.read().contains_key(tool_id)
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Replace the whole record for `tool_id`, creating it if absent.
    ///
    /// Text fields are truncated to their caps. Fails with
    /// [`Error::ArgsTooLarge`] if any example's args exceed the caps, in which
    /// case nothing is committed.
    pub fn register_doc(&self, tool_id: &str, entry: &DocEntry) -> Result<()> {
        let record = DocRecord {
            summary: truncate_chars(&entry.summary, MAX_SUMMARY_LEN),
            notes: truncate_chars(&entry.notes, MAX_NOTES_LEN),
            examples: prepare_examples(&entry.examples)?,
            external_refs: entry.external_refs.clone(),
        };
        let example_count = record.examples.len();

        self.docs.write().insert(tool_id.to_string(), record);

        tracing::debug!(tool_id, examples = example_count, "Registered tool documentation");
        Ok(())
    }

    /// Replace only the examples for `tool_id`, creating an empty record if
    /// absent. Same validation and all-or-nothing rule as [`register_doc`].
    ///
    /// [`register_doc`]: DocRegistry::register_doc
    pub fn register_examples(&self, tool_id: &str, examples: &[ToolExample]) -> Result<()> {
        let examples = prepare_examples(examples)?;
        let example_count = examples.len();

        self.docs
            .write()
            .entry(tool_id.to_string())
            .or_default()
            .examples = examples;

        tracing::debug!(tool_id, examples = example_count, "Registered tool examples");
        Ok(())
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Describe a tool, capping full-level examples at the configured default.
    pub async fn describe_tool(&self, tool_id: &str, level: DetailLevel) -> Result<ToolDoc> {
        self.describe_tool_with_limit(tool_id, level, 0).await
    }

    /// Describe a tool with a per-call example limit (0 = defer to the
    /// configured default).
    ///
    /// Summary works from docs alone. Schema and full need the tool itself:
    /// [`Error::NoTool`] when docs exist but nothing resolves,
    /// [`Error::NotFound`] when neither exists. Resolver failures propagate
    /// as returned.
    pub async fn describe_tool_with_limit(
        &self,
        tool_id: &str,
        level: DetailLevel,
        max_examples: usize,
    ) -> Result<ToolDoc> {
        if level.requires_tool() {
            self.describe_detailed(tool_id, level, max_examples).await
        } else {
            self.describe_summary(tool_id).await
        }
    }

    /// List copies of the stored examples for `tool_id`.
    ///
    /// Needs a record or a resolvable tool. The count is limited by
    /// [`effective_limit`] of `max_examples` and the configured default.
    pub async fn list_examples(
        &self,
        tool_id: &str,
        max_examples: usize,
    ) -> Result<Vec<ToolExample>> {
        let examples = self.read_record(tool_id, |record| copy_examples(&record.examples));
        let tool_exists = self.resolve_tool(tool_id).await?.is_some();

        let examples = match examples {
            Some(examples) => examples,
            None if tool_exists => Vec::new(),
            None => return Err(Error::not_found(tool_id)),
        };

        Ok(apply_limit(
            examples,
            effective_limit(max_examples, self.max_examples),
        ))
    }

    async fn describe_summary(&self, tool_id: &str) -> Result<ToolDoc> {
        let summary = self.read_record(tool_id, |record| record.summary.clone());
        if let Some(summary) = &summary {
            if !summary.is_empty() {
                return Ok(ToolDoc::summary_only(summary.clone()));
            }
        }

        match (self.resolve_tool(tool_id).await, summary) {
            (Ok(Some(tool)), _) => Ok(ToolDoc::summary_only(truncate_chars(
                &tool.description,
                MAX_SUMMARY_LEN,
            ))),
            (Ok(None), Some(summary)) => Ok(ToolDoc::summary_only(summary)),
            (Ok(None), None) => Err(Error::not_found(tool_id)),
            (Err(err), Some(summary)) => {
                tracing::warn!(
                    tool_id,
                    error = %err,
                    "Tool resolution failed; answering summary from docs"
                );
                Ok(ToolDoc::summary_only(summary))
            }
            (Err(err), None) => Err(err),
        }
    }

    async fn describe_detailed(
        &self,
        tool_id: &str,
        level: DetailLevel,
        max_examples: usize,
    ) -> Result<ToolDoc> {
        let include_extras = level == DetailLevel::Full;
        let record = self.read_record(tool_id, |record| DocRecord {
            summary: record.summary.clone(),
            notes: if include_extras { record.notes.clone() } else { String::new() },
            examples: if include_extras {
                copy_examples(&record.examples)
            } else {
                Vec::new()
            },
            external_refs: if include_extras {
                record.external_refs.clone()
            } else {
                Vec::new()
            },
        });

        let tool = match self.resolve_tool(tool_id).await? {
            Some(tool) => tool,
            None if record.is_some() => return Err(Error::no_tool(tool_id)),
            None => return Err(Error::not_found(tool_id)),
        };

        let record = record.unwrap_or_default();
        let summary = if record.summary.is_empty() {
            truncate_chars(&tool.description, MAX_SUMMARY_LEN)
        } else {
            record.summary
        };

        let mut doc = ToolDoc {
            schema_info: derive_schema_info(&tool.input_schema),
            tool: Some(tool),
            summary,
            ..ToolDoc::default()
        };

        if include_extras {
            doc.notes = record.notes;
            doc.external_refs = record.external_refs;
            doc.examples = apply_limit(
                record.examples,
                effective_limit(max_examples, self.max_examples),
            );
        }

        Ok(doc)
    }

    /// Copy what `f` extracts from the record under the read lock.
    fn read_record<T>(&self, tool_id: &str, f: impl FnOnce(&DocRecord) -> T) -> Option<T> {
        self.docs.read().get(tool_id).map(f)
    }

    /// Index first; a miss falls through to the custom resolver.
    async fn resolve_tool(&self, tool_id: &str) -> Result<Option<Tool>> {
        if let Some(tool) = self.index.as_ref().and_then(|index| index.get_tool(tool_id)) {
            return Ok(Some(tool));
        }
        match &self.resolver {
            Some(resolver) => resolver.resolve(tool_id).await,
            None => Ok(None),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

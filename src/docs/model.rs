//! Documentation types: detail levels, examples, entries, response snapshots.

use crate::tools::Tool;
use crate::types::Error;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Truncation caps
// =============================================================================

/// Maximum length of [`ToolExample::description`], in characters.
pub const MAX_DESCRIPTION_LEN: usize = 300;
/// Maximum length of [`ToolExample::result_hint`], in characters.
pub const MAX_RESULT_HINT_LEN: usize = 200;
/// Maximum length of a summary, in characters.
pub const MAX_SUMMARY_LEN: usize = 200;
/// Maximum length of notes, in characters.
pub const MAX_NOTES_LEN: usize = 2000;

/// Truncate `s` to at most `max_chars` characters without splitting one.
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((cut, _)) => s[..cut].to_string(),
        None => s.to_string(),
    }
}

// =============================================================================
// Detail level
// =============================================================================

/// How much documentation to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailLevel {
    /// Short description only. Works with docs alone, no tool needed.
    Summary,
    /// Tool metadata plus derived schema info. Requires a resolvable tool.
    Schema,
    /// Schema plus notes, examples and external refs. Requires a resolvable tool.
    Full,
}

impl DetailLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            DetailLevel::Summary => "summary",
            DetailLevel::Schema => "schema",
            DetailLevel::Full => "full",
        }
    }

    pub fn requires_tool(self) -> bool {
        !matches!(self, DetailLevel::Summary)
    }
}

impl FromStr for DetailLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "summary" => Ok(DetailLevel::Summary),
            "schema" => Ok(DetailLevel::Schema),
            "full" => Ok(DetailLevel::Full),
            other => Err(Error::invalid_detail(other)),
        }
    }
}

impl fmt::Display for DetailLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Examples and entries
// =============================================================================

/// A sample invocation of a tool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolExample {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Invocation arguments. Capped in depth and size at registration.
    #[serde(default)]
    pub args: Map<String, Value>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub result_hint: String,
}

impl ToolExample {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_args(mut self, args: Map<String, Value>) -> Self {
        self.args = args;
        self
    }

    pub fn with_result_hint(mut self, hint: impl Into<String>) -> Self {
        self.result_hint = hint.into();
        self
    }

    /// Copy with description and result hint cut to their caps.
    pub(crate) fn truncated(&self, args: Map<String, Value>) -> Self {
        Self {
            id: self.id.clone(),
            title: self.title.clone(),
            description: truncate_chars(&self.description, MAX_DESCRIPTION_LEN),
            args,
            result_hint: truncate_chars(&self.result_hint, MAX_RESULT_HINT_LEN),
        }
    }
}

/// Human-authored documentation registered for a tool id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocEntry {
    /// Overrides the tool's own description at every level when non-empty.
    pub summary: String,
    /// Usage guidance, constraints, pagination/auth hints, error semantics.
    pub notes: String,
    pub examples: Vec<ToolExample>,
    /// URLs or resource ids with further documentation.
    pub external_refs: Vec<String>,
}

// =============================================================================
// Derived schema info
// =============================================================================

/// Best-effort facts extracted from a tool's input schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaInfo {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    /// Numeric defaults are normalized to floating point.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub defaults: BTreeMap<String, Value>,
    /// e.g. `{"limit": ["integer"], "query": ["string"]}`
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub types: BTreeMap<String, Vec<String>>,
}

// =============================================================================
// Response snapshot
// =============================================================================

/// Documentation for one tool at one detail level.
///
/// Assembled per request from copies; the registry keeps no reference to it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDoc {
    /// Present at schema/full only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool: Option<Tool>,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_info: Option<SchemaInfo>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<ToolExample>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub external_refs: Vec<String>,
}

impl ToolDoc {
    pub fn summary_only(summary: String) -> Self {
        Self {
            summary,
            ..Self::default()
        }
    }
}

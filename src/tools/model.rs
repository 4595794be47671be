//! Tool metadata as served at schema/full detail.

use crate::types::{Error, Result, ToolId};
use bytes::Bytes;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

// =============================================================================
// Input schema
// =============================================================================

/// Opaque input schema: either already-structured JSON or serialized bytes.
///
/// Raw bytes are kept as supplied; they are only parsed when schema info is
/// derived or when the tool is serialized.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaSource {
    Json(Value),
    Raw(Bytes),
}

impl SchemaSource {
    pub fn raw(bytes: impl Into<Bytes>) -> Self {
        SchemaSource::Raw(bytes.into())
    }
}

impl Default for SchemaSource {
    fn default() -> Self {
        SchemaSource::Json(Value::Null)
    }
}

impl From<Value> for SchemaSource {
    fn from(value: Value) -> Self {
        SchemaSource::Json(value)
    }
}

impl Serialize for SchemaSource {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            SchemaSource::Json(value) => value.serialize(serializer),
            SchemaSource::Raw(bytes) => match serde_json::from_slice::<Value>(bytes) {
                Ok(value) => value.serialize(serializer),
                Err(_) => serializer.serialize_str(&String::from_utf8_lossy(bytes)),
            },
        }
    }
}

impl<'de> Deserialize<'de> for SchemaSource {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        Value::deserialize(deserializer).map(SchemaSource::Json)
    }
}

// =============================================================================
// Tool
// =============================================================================

/// Tool metadata resolved from an index or a custom resolver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tool {
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub namespace: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub input_schema: SchemaSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_schema: Option<Value>,
}

impl Tool {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            description: String::new(),
            input_schema: SchemaSource::default(),
            output_schema: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_input_schema(mut self, schema: impl Into<SchemaSource>) -> Self {
        self.input_schema = schema.into();
        self
    }

    pub fn with_output_schema(mut self, schema: Value) -> Self {
        self.output_schema = Some(schema);
        self
    }

    /// Canonical `namespace:name` id.
    pub fn id(&self) -> Result<ToolId> {
        ToolId::new(&self.namespace, &self.name)
            .map_err(|e| Error::validation(format!("Invalid tool '{}': {}", self.name, e)))
    }
}

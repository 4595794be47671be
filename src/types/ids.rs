//! Strongly-typed identifiers.
//!
//! Tool ids are canonical `namespace:name` strings (or a bare `name` when the
//! tool has no namespace). They are validated at construction time.

use serde::{Deserialize, Serialize};
use std::fmt;

const SEPARATOR: char = ':';

/// Canonical tool identifier used to key the tool index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ToolId(String);

impl ToolId {
    /// Build the canonical id for a tool. An empty namespace yields the bare name.
    pub fn new(namespace: &str, name: &str) -> Result<Self, &'static str> {
        if name.is_empty() {
            return Err("ToolId name cannot be empty");
        }
        if name.contains(SEPARATOR) || namespace.contains(SEPARATOR) {
            return Err("ToolId parts cannot contain ':'");
        }
        if namespace.is_empty() {
            Ok(Self(name.to_string()))
        } else {
            Ok(Self(format!("{}{}{}", namespace, SEPARATOR, name)))
        }
    }

    pub fn from_string(s: String) -> Result<Self, &'static str> {
        match s.split_once(SEPARATOR) {
            Some((namespace, name)) => {
                if namespace.is_empty() {
                    return Err("ToolId namespace cannot be empty when ':' is present");
                }
                Self::new(namespace, name)
            }
            None => Self::new("", &s),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Namespace part, if any.
    pub fn namespace(&self) -> Option<&str> {
        self.0.split_once(SEPARATOR).map(|(namespace, _)| namespace)
    }

    /// Name part.
    pub fn name(&self) -> &str {
        self.0
            .split_once(SEPARATOR)
            .map_or(self.0.as_str(), |(_, name)| name)
    }
}

impl TryFrom<String> for ToolId {
    type Error = &'static str;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_string(s)
    }
}

impl From<ToolId> for String {
    fn from(id: ToolId) -> Self {
        id.0
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

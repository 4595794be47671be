//! Configuration structures.
//!
//! Configuration is loaded from a JSON file and overlaid with environment
//! variables (`TOOLDOCS_*`).

use crate::types::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Global configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Documentation registry configuration.
    #[serde(default)]
    pub registry: RegistryConfig,

    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Documentation registry configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Default cap on examples returned by full-level describes and
    /// example listings. Zero means no limit.
    #[serde(default)]
    pub max_examples: usize,
}

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Tracing log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable JSON log formatting.
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file. Missing sections take defaults.
    pub async fn load(path: &Path) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Overlay `TOOLDOCS_*` variables from the process environment.
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Overlay variables resolved through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup("TOOLDOCS_MAX_EXAMPLES") {
            self.registry.max_examples = raw.trim().parse().map_err(|_| {
                Error::validation(format!(
                    "TOOLDOCS_MAX_EXAMPLES must be a non-negative integer, got '{}'",
                    raw
                ))
            })?;
        }
        if let Some(level) = lookup("TOOLDOCS_LOG_LEVEL") {
            self.observability.log_level = level;
        }
        if let Some(format) = lookup("TOOLDOCS_LOG_FORMAT") {
            self.observability.json_logs = format.eq_ignore_ascii_case("json");
        }
        Ok(())
    }
}

//! Core types for the documentation registry.
//!
//! This module provides foundational types used throughout the system:
//! - **IDs**: Canonical `namespace:name` tool identifiers
//! - **Errors**: Application error types with thiserror derives
//! - **Config**: Configuration structures for the registry and observability

mod config;
mod errors;
mod ids;

pub use config::{Config, ObservabilityConfig, RegistryConfig};
pub use errors::{Error, Result};
pub use ids::ToolId;

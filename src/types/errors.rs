//! Application error types.
//!
//! All errors use `thiserror` for automatic Error trait derivation and provide
//! clear error messages with context.

use thiserror::Error;

/// Application result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error enum for the documentation registry.
#[derive(Error, Debug)]
pub enum Error {
    /// Neither documentation nor a resolvable tool exists for the id.
    #[error("tool not found: {0}")]
    NotFound(String),

    /// Documentation exists but schema/full needs tool metadata that
    /// could not be resolved.
    #[error("tool required for schema/full level: {0}")]
    NoTool(String),

    /// Detail level outside summary/schema/full.
    #[error("invalid detail level: {0}")]
    InvalidDetail(String),

    /// An example payload exceeds the depth or size caps.
    #[error(
        "args exceeds caps: example {index} ({title}) has depth={depth} (max {max_depth}), \
         size={size} (max {max_size})"
    )]
    ArgsTooLarge {
        index: usize,
        title: String,
        depth: usize,
        max_depth: usize,
        size: usize,
        max_size: usize,
    },

    /// Malformed input (map to INVALID_ARGUMENT).
    #[error("validation error: {0}")]
    Validation(String),

    /// Tool lookup failed in a resolver (map to UNAVAILABLE).
    #[error("tool resolution failed: {0}")]
    Resolver(String),

    /// Serialization/deserialization errors.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O errors.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Stable code for transports, mirroring gRPC status names.
    pub fn code(&self) -> &'static str {
        match self {
            Error::NotFound(_) => "NOT_FOUND",
            Error::NoTool(_) => "FAILED_PRECONDITION",
            Error::InvalidDetail(_) | Error::Validation(_) => "INVALID_ARGUMENT",
            Error::ArgsTooLarge { .. } => "RESOURCE_EXHAUSTED",
            Error::Resolver(_) => "UNAVAILABLE",
            Error::Serialization(_) | Error::Io(_) => "INTERNAL",
        }
    }
}

// Convenience constructors
impl Error {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    pub fn no_tool(id: impl Into<String>) -> Self {
        Self::NoTool(id.into())
    }

    pub fn invalid_detail(level: impl Into<String>) -> Self {
        Self::InvalidDetail(level.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn resolver(msg: impl Into<String>) -> Self {
        Self::Resolver(msg.into())
    }
}

//! Tool metadata - model, in-memory index, resolution seam.
//!
//! The doc registry merges its own records with metadata obtained here. Any
//! custom lookup (remote registry, generated catalog) plugs in through
//! [`ToolResolver`].

pub mod index;
pub mod model;
pub mod resolver;

pub use index::ToolIndex;
pub use model::{SchemaSource, Tool};
pub use resolver::{FnResolver, ToolResolver};

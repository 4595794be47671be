//! Tool documentation - tiered detail for agent tool discovery.
//!
//! Callers register human-authored docs (summary, notes, examples, refs) per
//! tool id. Reads merge those records with tool metadata from an index or a
//! resolver and return owned snapshots at summary, schema or full detail, so
//! agents only pull schemas and examples into context when they ask.

pub mod args;
pub mod model;
pub mod normalize;
pub mod registry;
pub mod schema;
pub mod store;

pub use args::{measure_value, validate_args, ArgsStats, MAX_ARGS_DEPTH, MAX_ARGS_SIZE};
pub use model::{
    truncate_chars, DetailLevel, DocEntry, SchemaInfo, ToolDoc, ToolExample, MAX_DESCRIPTION_LEN,
    MAX_NOTES_LEN, MAX_RESULT_HINT_LEN, MAX_SUMMARY_LEN,
};
pub use normalize::{args_from, copy_examples, deep_normalize, normalize_args};
pub use registry::{effective_limit, DocRegistry};
pub use schema::derive_schema_info;
pub use store::DocStore;

//! # tooldocs - Tiered Tool Documentation Registry
//!
//! In-memory registry that lets agents discover tools progressively:
//! - Summary: a one-line description, cheap enough to list for every tool
//! - Schema: tool metadata plus required fields, types and defaults
//! - Full: everything above plus notes, worked examples and external refs
//!
//! ## Architecture
//!
//! ```text
//!                  ┌──────────────────────────────────────┐
//!   route_request →│             DocRegistry              │
//!                  │  ┌───────────┐   ┌────────────────┐  │
//!                  │  │ DocRecord │   │ ToolIndex      │  │
//!                  │  │   map     │   │  → ToolResolver│  │
//!                  │  └───────────┘   └────────────────┘  │
//!                  └──────────────────────────────────────┘
//! ```
//!
//! Records are validated (args caps) and normalized on registration, and every
//! read returns an owned snapshot.

// Enforce strict safety at compile time
#![deny(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

pub mod catalog;
pub mod dispatch;
pub mod docs;
pub mod tools;
pub mod types;

// Internal utilities
pub mod observability;
pub mod validation;

pub use catalog::Catalog;
pub use docs::{DetailLevel, DocEntry, DocRegistry, ToolDoc, ToolExample};
pub use tools::{Tool, ToolIndex, ToolResolver};
pub use types::{Config, Error, Result};

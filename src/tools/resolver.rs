//! Tool resolution seam.
//!
//! The registry never stores tool metadata itself; it asks a resolver. Lookups
//! may be slow or remote, so the trait is async and the registry never holds
//! its own lock across a call.

use crate::tools::Tool;
use crate::types::Result;
use async_trait::async_trait;
use std::fmt;

/// Look up tool metadata by id.
///
/// `Ok(None)` means the tool is not resolvable. `Err` means the lookup itself
/// failed; the registry propagates it unchanged.
#[async_trait]
pub trait ToolResolver: Send + Sync {
    async fn resolve(&self, tool_id: &str) -> Result<Option<Tool>>;
}

/// Adapter turning a synchronous closure into a [`ToolResolver`].
pub struct FnResolver<F>(F);

impl<F> FnResolver<F>
where
    F: Fn(&str) -> Result<Option<Tool>> + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> fmt::Debug for FnResolver<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnResolver").finish_non_exhaustive()
    }
}

#[async_trait]
impl<F> ToolResolver for FnResolver<F>
where
    F: Fn(&str) -> Result<Option<Tool>> + Send + Sync,
{
    async fn resolve(&self, tool_id: &str) -> Result<Option<Tool>> {
        (self.0)(tool_id)
    }
}

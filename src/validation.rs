//! Request validation utilities.

use crate::types::{Error, Result};

/// Validate that a string is not empty (after trimming whitespace).
pub fn validate_non_empty(s: &str, field: &str) -> Result<()> {
    if s.trim().is_empty() {
        return Err(Error::validation(format!("{} cannot be empty", field)));
    }
    Ok(())
}

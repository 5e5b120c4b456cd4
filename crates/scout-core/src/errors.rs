//! Cross-cutting error types for scout.
//!
//! Domain-specific errors (e.g., `DatabaseError`, `FetchUnavailable`) are
//! defined in their respective crates. The binary converges them through
//! `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any scout crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Operator input failed validation (empty URL, etc.).
    #[error("Validation error: {0}")]
    Validation(String),
}

impl CoreError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

//! Unified error types for the domain layer
//!
//! Provides a common error type that can be used across all domain operations,
//! enabling consistent error handling without forcing adapters to use String or anyhow.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., required field missing or blank)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for enumerated values such as lore categories)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error.
    ///
    /// Use this when a request aggregate is incomplete:
    /// - Required fields are empty or missing
    /// - A collection that must be non-empty is empty
    ///
    /// # Example
    /// ```ignore
    /// if messages.is_empty() {
    ///     return Err(DomainError::validation("chat history cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

//! Error types for port operations.

use std::time::Duration;

#[derive(Debug, Clone, thiserror::Error)]
pub enum LlmError {
    #[error("LLM request failed: {0}")]
    RequestFailed(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    #[error("LLM request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TraitSourceError {
    /// Token id is not a number in the collection's range.
    #[error("Invalid token id: {0}")]
    InvalidTokenId(String),
    #[error("Trait request failed: {0}")]
    RequestFailed(String),
    #[error("Invalid trait response: {0}")]
    InvalidResponse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_message_reports_millis() {
        let err = LlmError::Timeout(Duration::from_secs(10));
        assert_eq!(err.to_string(), "LLM request timed out after 10000ms");
    }
}

use std::time::Duration;

use soulgen_domain::DomainError;

use crate::infrastructure::ports::LlmError;

/// Why a generation request ended in fallback content.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GenerationError {
    #[error("generation backend not configured")]
    NotConfigured,
    #[error("invalid request: {0}")]
    Validation(#[from] DomainError),
    #[error("generation timed out after {}ms", .0.as_millis())]
    Timeout(Duration),
    #[error("generation backend error: {0}")]
    Backend(LlmError),
    #[error("generation returned no content")]
    EmptyContent,
}

impl GenerationError {
    /// Short machine-readable label for logs.
    pub fn reason(&self) -> &'static str {
        match self {
            GenerationError::NotConfigured => "not_configured",
            GenerationError::Validation(_) => "validation",
            GenerationError::Timeout(_) => "timeout",
            GenerationError::Backend(_) => "backend",
            GenerationError::EmptyContent => "empty_content",
        }
    }
}

impl From<LlmError> for GenerationError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Timeout(after) => GenerationError::Timeout(after),
            other => GenerationError::Backend(other),
        }
    }
}

//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - LLM calls (could swap OpenAI -> any OpenAI-compatible server)
//! - NFT trait lookup (could swap OpenSea -> another indexer)

mod error;
mod external;

// =============================================================================
// External Service Ports
// =============================================================================
pub use external::{
    FinishReason, LlmMessage, LlmPort, LlmRequest, LlmResponse, MessageRole,
    TraitLookup, TraitSource,
};

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use external::{MockLlmPort, MockTraitSource};

// =============================================================================
// Error Types
// =============================================================================
pub use error::{LlmError, TraitSourceError};

//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod openai;
pub mod opensea;
pub mod ports;
pub mod settings;
pub mod timeout_llm;

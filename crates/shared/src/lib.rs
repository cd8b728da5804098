//! 0N1 Soul Generator Shared - wire types for the assistant HTTP API
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde and the domain vocabulary
//! 2. **No business logic** - Pure data types and serialization
//! 3. **camelCase on the wire** - matches the form client's field names

pub mod requests;
pub mod responses;

pub use requests::{ArchetypeQuery, ChatRequest, StepMetadataQuery, SuggestionRequest};
pub use responses::{
    ArchetypeGroup, ChatResponse, ErrorResponse, LoreDocumentResponse, LoreSummary,
    PowerLookupResponse, StepMetadataResponse, SuggestionResponse, TraitLookupResponse,
};

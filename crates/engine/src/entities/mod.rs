//! Entity modules - Domain capability encapsulation.
//!
//! Each module wraps read operations over a domain entity type and provides
//! the building blocks for use cases.

pub mod archetypes;
pub mod lore;
mod lore_documents;
pub mod powers;

pub use archetypes::ArchetypeCatalog;
pub use lore::LoreCorpus;
pub use powers::PowerCatalog;

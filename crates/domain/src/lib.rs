//! Data model for the 0N1 soul generator: the character being built, the
//! questionnaire steps, lore documents, archetype and power catalogs, and chat
//! messages.

pub mod entities;
pub mod error;
pub mod step;

// Re-export all entities (explicit list in entities/mod.rs)
pub use entities::{
    validate_history, AdditionalPower, Archetype, ArchetypeCategory, CharacterState,
    CharacterTrait, ChatMessage, ChatRole, HopesFears, LoreCategory, LoreDocument, Motivations,
    PersonalityProfile, Power, PowerType, PowersAbilities, Relationships, Symbolism, Voice,
    WorldPosition,
};

pub use error::DomainError;
pub use step::{Step, StepKey, SubStep};

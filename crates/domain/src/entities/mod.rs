//! Domain entities

mod archetype;
mod character;
mod chat;
mod lore;
mod power;

pub use archetype::{Archetype, ArchetypeCategory};
pub use character::{
    CharacterState, CharacterTrait, HopesFears, Motivations, PersonalityProfile,
    PowersAbilities, Relationships, Symbolism, Voice, WorldPosition,
};
pub use chat::{validate_history, ChatMessage, ChatRole};
pub use lore::{LoreCategory, LoreDocument};
pub use power::{AdditionalPower, Power, PowerType};

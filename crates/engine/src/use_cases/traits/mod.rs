//! Token trait lookup.
//!
//! Traits only feed the character context, so a lookup never fails once the
//! token id is valid: a live result with traits wins, anything else yields a
//! deterministic generated set.

use std::sync::Arc;

use soulgen_domain::CharacterTrait;

use crate::infrastructure::ports::{TraitLookup, TraitSource, TraitSourceError};

/// Highest token id in the 0N1 Force collection.
pub const MAX_TOKEN_ID: u32 = 7777;

const BACKGROUNDS: [&str; 5] = [
    "Blazing Temple",
    "Neon City",
    "Digital Void",
    "Cyber District",
    "Ancient Shrine",
];
const BODIES: [&str; 10] = [
    "Citrine",
    "Jasper",
    "Azurite",
    "Type-01",
    "Obsidian",
    "Ash",
    "Water",
    "Pearlescent",
    "Kabuki",
    "Tiger Skin",
];
const HEADPHONES: [&str; 5] = ["Black", "White", "Blue", "Red", "Purple"];
const CLOTHING: [&str; 5] = [
    "Battle Armor",
    "Cyber Jacket",
    "Neon Suit",
    "Tech Robes",
    "Street Gear",
];
const ACCESSORIES: [&str; 5] = [
    "Digital Amulet",
    "Tech Visor",
    "Energy Blade",
    "Spirit Charm",
    "None",
];

/// Parse a token id as typed by a user: ASCII digits only, leading zeros
/// allowed, 1..=7777.
pub fn normalize_token_id(raw: &str) -> Result<u32, TraitSourceError> {
    let digits = raw.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TraitSourceError::InvalidTokenId(raw.to_string()));
    }

    digits
        .trim_start_matches('0')
        .parse::<u32>()
        .ok()
        .filter(|id| (1..=MAX_TOKEN_ID).contains(id))
        .ok_or_else(|| TraitSourceError::InvalidTokenId(raw.to_string()))
}

fn pick(values: &[&str], token_id: u32) -> String {
    values[token_id as usize % values.len()].to_string()
}

/// Stand-in traits derived from the token id alone.
pub fn generated_traits(token_id: u32) -> TraitLookup {
    TraitLookup {
        traits: vec![
            CharacterTrait::new("Background", pick(&BACKGROUNDS, token_id)),
            CharacterTrait::new("Body", pick(&BODIES, token_id)),
            CharacterTrait::new("Headphones", pick(&HEADPHONES, token_id)),
            CharacterTrait::new("Clothing", pick(&CLOTHING, token_id)),
            CharacterTrait::new("Accessory", pick(&ACCESSORIES, token_id)),
        ],
        image_url: Some(format!(
            "https://placehold.co/300x300/3a1c71/ffffff?text=0N1+%23{token_id}"
        )),
        is_from_live_source: false,
    }
}

pub struct TraitUseCases {
    source: Option<Arc<dyn TraitSource>>,
}

impl TraitUseCases {
    /// `source` is `None` when no live trait source is configured.
    pub fn new(source: Option<Arc<dyn TraitSource>>) -> Self {
        Self { source }
    }

    /// Traits for a token. Only an invalid token id is an error.
    pub async fn lookup(&self, raw_token_id: &str) -> Result<(u32, TraitLookup), TraitSourceError> {
        let token_id = normalize_token_id(raw_token_id)?;

        let Some(source) = &self.source else {
            tracing::debug!(token_id, "No trait source configured, using generated traits");
            return Ok((token_id, generated_traits(token_id)));
        };

        match source.fetch_traits(token_id).await {
            Ok(lookup) if !lookup.traits.is_empty() => {
                tracing::debug!(token_id, count = lookup.traits.len(), "Fetched live traits");
                Ok((token_id, lookup))
            }
            Ok(_) => {
                tracing::info!(token_id, "Live source returned no traits, using generated traits");
                Ok((token_id, generated_traits(token_id)))
            }
            Err(e) => {
                tracing::warn!(token_id, error = %e, "Trait lookup failed, using generated traits");
                Ok((token_id, generated_traits(token_id)))
            }
        }
    }
}

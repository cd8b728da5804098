//! Character entity - the soul being built for one 0N1 Force token
//!
//! The questionnaire fills a `CharacterState` progressively. Every text group is
//! always present; an unanswered field is the empty string. Deserialization
//! defaults every missing group so partially-filled payloads are accepted.

use serde::{Deserialize, Serialize};

/// One NFT attribute, e.g. `Body: Tiger Skin`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterTrait {
    #[serde(rename = "trait_type", alias = "traitType")]
    pub trait_type: String,
    pub value: String,
}

impl CharacterTrait {
    pub fn new(trait_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            trait_type: trait_type.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HopesFears {
    pub hopes: String,
    pub fears: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalityProfile {
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Motivations {
    pub drives: String,
    pub goals: String,
    pub values: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Relationships {
    pub friends: String,
    pub rivals: String,
    pub family: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorldPosition {
    pub societal_role: String,
    pub class_status: String,
    pub perception: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Voice {
    pub speech_style: String,
    pub inner_dialogue: String,
    pub unique_phrases: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Symbolism {
    pub colors: String,
    pub items: String,
    pub motifs: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PowersAbilities {
    pub powers: Vec<String>,
    pub description: String,
}

/// The in-progress soul for a single token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CharacterState {
    /// Token number as a string, e.g. "1234"
    pub pfp_id: String,
    pub traits: Vec<CharacterTrait>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub archetype: String,
    pub background: String,
    pub hopes_fears: HopesFears,
    pub personality_profile: PersonalityProfile,
    pub motivations: Motivations,
    pub relationships: Relationships,
    pub world_position: WorldPosition,
    pub voice: Voice,
    pub symbolism: Symbolism,
    pub powers_abilities: PowersAbilities,
    pub soul_name: String,
}

impl CharacterState {
    pub fn new(pfp_id: impl Into<String>) -> Self {
        Self {
            pfp_id: pfp_id.into(),
            ..Default::default()
        }
    }

    // Builder methods

    pub fn with_traits(mut self, traits: Vec<CharacterTrait>) -> Self {
        self.traits = traits;
        self
    }

    pub fn with_archetype(mut self, archetype: impl Into<String>) -> Self {
        self.archetype = archetype.into();
        self
    }

    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = background.into();
        self
    }

    pub fn with_soul_name(mut self, soul_name: impl Into<String>) -> Self {
        self.soul_name = soul_name.into();
        self
    }

    /// Values of every trait whose type matches, ignoring case, in trait order.
    pub fn trait_values<'a>(
        &'a self,
        trait_type: &'a str,
    ) -> impl Iterator<Item = &'a str> + 'a {
        self.traits
            .iter()
            .filter(move |t| t.trait_type.eq_ignore_ascii_case(trait_type))
            .map(|t| t.value.as_str())
    }
}

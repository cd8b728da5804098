//! Power types - what a character's Body trait lets them do
//!
//! Each 0N1 body type maps to one power foundation, a core power and three
//! evolution paths. A few body types also carry an additional power.

use serde::{Deserialize, Serialize};

/// A named ability with flavour text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Power {
    pub name: String,
    pub description: String,
}

impl Power {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// An extra power with its key aspects listed separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalPower {
    pub name: String,
    pub description: String,
    pub key_aspects: Vec<String>,
}

/// Powers granted by one body type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerType {
    /// Body trait value, e.g. "Tiger Skin"
    pub body_type: String,
    pub foundation: String,
    pub core_power: Power,
    pub evolution_options: Vec<Power>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_power: Option<AdditionalPower>,
}

impl PowerType {
    pub fn new(
        body_type: impl Into<String>,
        foundation: impl Into<String>,
        core_power: Power,
    ) -> Self {
        Self {
            body_type: body_type.into(),
            foundation: foundation.into(),
            core_power,
            evolution_options: Vec::new(),
            additional_power: None,
        }
    }

    // Builder methods

    pub fn with_evolutions(mut self, evolutions: Vec<Power>) -> Self {
        self.evolution_options = evolutions;
        self
    }

    pub fn with_additional_power(mut self, power: AdditionalPower) -> Self {
        self.additional_power = Some(power);
        self
    }

    /// Body type comparison ignores case and surrounding whitespace.
    pub fn matches_body(&self, body: &str) -> bool {
        self.body_type.trim().eq_ignore_ascii_case(body.trim())
    }
}

//! Archetypes offered at the first questionnaire step.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Narrative role family an archetype belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArchetypeCategory {
    #[serde(rename = "Core Protagonist")]
    CoreProtagonist,
    Support,
    Antagonist,
    Neutral,
    Social,
    Circumstantial,
}

impl ArchetypeCategory {
    /// Display order of the selection screen.
    pub const ALL: [ArchetypeCategory; 6] = [
        ArchetypeCategory::CoreProtagonist,
        ArchetypeCategory::Support,
        ArchetypeCategory::Antagonist,
        ArchetypeCategory::Neutral,
        ArchetypeCategory::Social,
        ArchetypeCategory::Circumstantial,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArchetypeCategory::CoreProtagonist => "Core Protagonist",
            ArchetypeCategory::Support => "Support",
            ArchetypeCategory::Antagonist => "Antagonist",
            ArchetypeCategory::Neutral => "Neutral",
            ArchetypeCategory::Social => "Social",
            ArchetypeCategory::Circumstantial => "Circumstantial",
        }
    }
}

impl fmt::Display for ArchetypeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts the display name in any case, plus kebab/snake forms
/// (`core-protagonist`, `core_protagonist`).
impl FromStr for ArchetypeCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace(['-', '_'], " ");
        ArchetypeCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| DomainError::parse(format!("unknown archetype category: {s}")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Archetype {
    /// e.g. "The Ronin"
    pub name: String,
    pub category: ArchetypeCategory,
    pub description: String,
    pub example: String,
}

impl Archetype {
    pub fn new(
        name: impl Into<String>,
        category: ArchetypeCategory,
        description: impl Into<String>,
        example: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            description: description.into(),
            example: example.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_loosely() {
        assert_eq!(
            "core-protagonist".parse::<ArchetypeCategory>().unwrap(),
            ArchetypeCategory::CoreProtagonist
        );
        assert_eq!(
            "Core Protagonist".parse::<ArchetypeCategory>().unwrap(),
            ArchetypeCategory::CoreProtagonist
        );
        assert_eq!(
            "support".parse::<ArchetypeCategory>().unwrap(),
            ArchetypeCategory::Support
        );
        assert!("villain".parse::<ArchetypeCategory>().is_err());
    }

    #[test]
    fn category_serializes_display_name() {
        let json = serde_json::to_string(&ArchetypeCategory::CoreProtagonist).unwrap();
        assert_eq!(json, "\"Core Protagonist\"");
        for category in ArchetypeCategory::ALL {
            assert_eq!(category.to_string().parse::<ArchetypeCategory>().unwrap(), category);
        }
    }
}

//! Lore entity - static reference knowledge about the 0N1 universe
//!
//! Documents are immutable and loaded once; the prompt assembler pulls them
//! into model context by category, tag, or explicit id.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// A single lore document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoreDocument {
    /// Stable kebab-case identifier (e.g., "powers-system")
    pub id: String,
    pub title: String,
    pub category: LoreCategory,
    pub content: String,
    /// Tags for filtering/searching
    pub tags: Vec<String>,
    /// Ids of documents worth reading alongside this one
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_documents: Vec<String>,
    pub last_updated: NaiveDate,
}

/// Category of lore
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoreCategory {
    WorldBuilding,
    CharacterArchetypes,
    History,
    Technology,
    Spirituality,
    Factions,
    Locations,
    Powers,
    Terminology,
    NarrativeStyle,
}

impl LoreCategory {
    pub const ALL: [LoreCategory; 10] = [
        LoreCategory::WorldBuilding,
        LoreCategory::CharacterArchetypes,
        LoreCategory::History,
        LoreCategory::Technology,
        LoreCategory::Spirituality,
        LoreCategory::Factions,
        LoreCategory::Locations,
        LoreCategory::Powers,
        LoreCategory::Terminology,
        LoreCategory::NarrativeStyle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LoreCategory::WorldBuilding => "world-building",
            LoreCategory::CharacterArchetypes => "character-archetypes",
            LoreCategory::History => "history",
            LoreCategory::Technology => "technology",
            LoreCategory::Spirituality => "spirituality",
            LoreCategory::Factions => "factions",
            LoreCategory::Locations => "locations",
            LoreCategory::Powers => "powers",
            LoreCategory::Terminology => "terminology",
            LoreCategory::NarrativeStyle => "narrative-style",
        }
    }
}

impl fmt::Display for LoreCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoreCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LoreCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DomainError::parse(format!("unknown lore category: {s}")))
    }
}

impl LoreDocument {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: LoreCategory,
        content: impl Into<String>,
        last_updated: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category,
            content: content.into(),
            tags: Vec::new(),
            related_documents: Vec::new(),
            last_updated,
        }
    }

    // Builder methods

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_related<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.related_documents = ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn has_any_tag(&self, tags: &[String]) -> bool {
        tags.iter().any(|t| self.has_tag(t))
    }
}

//! Response bodies produced by the assistant HTTP API.

use serde::{Deserialize, Serialize};
use soulgen_domain::{
    Archetype, ArchetypeCategory, CharacterTrait, LoreCategory, LoreDocument, PowerType,
};

/// Body of `POST /api/ai-assistant`. Always sent with status 200.
///
/// `suggestions` is always present. When `fallback` is true the list came from
/// the preset tables and `error` says why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionResponse {
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub fallback: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Body of `POST /api/ai-chat`. Always sent with status 200.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub response: String,
    #[serde(default)]
    pub fallback: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Panel title and opening chat line for one step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepMetadataResponse {
    pub step: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_step: Option<String>,
    pub title: String,
    pub greeting: String,
}

/// Corpus listing entry (content omitted).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoreSummary {
    pub id: String,
    pub title: String,
    pub category: LoreCategory,
    pub tags: Vec<String>,
}

impl From<&LoreDocument> for LoreSummary {
    fn from(doc: &LoreDocument) -> Self {
        Self {
            id: doc.id.clone(),
            title: doc.title.clone(),
            category: doc.category,
            tags: doc.tags.clone(),
        }
    }
}

/// A full document with its related documents summarised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoreDocumentResponse {
    pub document: LoreDocument,
    pub related: Vec<LoreSummary>,
}

/// Result of a trait lookup for one token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraitLookupResponse {
    pub token_id: u32,
    pub traits: Vec<CharacterTrait>,
    pub image_url: Option<String>,
    pub is_from_live_source: bool,
}

/// Powers for one body type. `is_default` marks the stand-in returned for an
/// unknown body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerLookupResponse {
    pub power_type: PowerType,
    pub is_default: bool,
}

/// One category of the archetype selection screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchetypeGroup {
    pub category: ArchetypeCategory,
    pub archetypes: Vec<Archetype>,
}

/// Error body for the non-AI endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

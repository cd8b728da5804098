//! Request bodies accepted by the assistant HTTP API.
//!
//! Required fields are `Option` on the wire so a missing field is reported as
//! a validation failure by the engine rather than a deserialization error.

use serde::{Deserialize, Serialize};
use soulgen_domain::{CharacterState, ChatMessage};

/// `POST /api/ai-assistant`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionRequest {
    #[serde(default)]
    pub character_data: Option<CharacterState>,
    #[serde(default)]
    pub current_step: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_step: Option<String>,
}

/// `POST /api/ai-chat`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    #[serde(default)]
    pub character_data: Option<CharacterState>,
    #[serde(default)]
    pub current_step: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_step: Option<String>,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

/// Query string of `GET /api/steps/{step}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepMetadataQuery {
    #[serde(default)]
    pub sub_step: Option<String>,
}

/// Query string of `GET /api/archetypes`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArchetypeQuery {
    /// Display name or kebab form, e.g. `core-protagonist`
    #[serde(default)]
    pub category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestion_request_tolerates_missing_fields() {
        let req: SuggestionRequest = serde_json::from_str("{}").unwrap();
        assert!(req.character_data.is_none());
        assert!(req.current_step.is_none());
        assert!(req.sub_step.is_none());
    }

    #[test]
    fn suggestion_request_reads_camel_case() {
        let req: SuggestionRequest = serde_json::from_str(
            r#"{"characterData": {"pfpId": "12"}, "currentStep": "motivations", "subStep": "goals"}"#,
        )
        .unwrap();
        assert_eq!(req.character_data.unwrap().pfp_id, "12");
        assert_eq!(req.current_step.as_deref(), Some("motivations"));
        assert_eq!(req.sub_step.as_deref(), Some("goals"));
    }

    #[test]
    fn chat_request_defaults_messages() {
        let req: ChatRequest =
            serde_json::from_str(r#"{"characterData": {}, "currentStep": "voice"}"#).unwrap();
        assert!(req.messages.is_empty());
    }
}

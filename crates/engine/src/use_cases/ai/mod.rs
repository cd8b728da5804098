//! AI-assisted character writing.
//!
//! Each request runs `assembling -> requesting -> (parsing | fallback) -> done`.
//! Every failure ends in preset content; nothing here returns an error to the
//! caller.

mod chat;
mod context;
mod error;
mod fallback;
mod parser;
mod step_tables;
mod suggestions;

use std::fmt;
use std::sync::Arc;

use soulgen_domain::{CharacterState, DomainError, Step, StepKey, SubStep};

pub use chat::{ChatOps, ChatOutcome};
pub use context::{
    character_context, estimate_tokens, ContextAssembler, LoreSelection, PromptContext,
};
pub use error::GenerationError;
pub use fallback::{default_suggestions, fallback_chat_response, fallback_suggestions};
pub use parser::{parse_suggestions, MAX_SUGGESTIONS};
pub use step_tables::{greeting, instruction, relevant_categories, title, user_prompt};
pub use suggestions::{SuggestionOps, SuggestionOutcome};

pub struct AiUseCases {
    pub suggestions: Arc<SuggestionOps>,
    pub chat: Arc<ChatOps>,
}

impl AiUseCases {
    pub fn new(suggestions: Arc<SuggestionOps>, chat: Arc<ChatOps>) -> Self {
        Self { suggestions, chat }
    }

    /// Panel title and opening chat message for a step.
    pub fn step_metadata(&self, step: &str, sub_step: Option<&str>) -> StepMetadata {
        let key = StepKey::new(Step::from(step), SubStep::parse_optional(sub_step));
        StepMetadata {
            title: title(&key).to_string(),
            greeting: greeting(&key).to_string(),
            key,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StepMetadata {
    pub key: StepKey,
    pub title: String,
    pub greeting: String,
}

/// Caller input shared by suggestions and chat, as it arrived on the wire.
#[derive(Debug, Clone, Default)]
pub struct GenerationRequest {
    pub character: Option<CharacterState>,
    pub step: Option<String>,
    pub sub_step: Option<String>,
}

impl GenerationRequest {
    pub fn new(character: CharacterState, step: impl Into<String>) -> Self {
        Self {
            character: Some(character),
            step: Some(step.into()),
            sub_step: None,
        }
    }

    pub fn with_sub_step(mut self, sub_step: impl Into<String>) -> Self {
        self.sub_step = Some(sub_step.into());
        self
    }

    fn step_label(&self) -> &str {
        self.step.as_deref().unwrap_or("")
    }

    fn sub_step_label(&self) -> &str {
        self.sub_step.as_deref().unwrap_or("")
    }

    /// Character and step are required; the step must not be blank.
    fn into_target(self) -> Result<GenerationTarget, DomainError> {
        let character = self
            .character
            .ok_or_else(|| DomainError::validation("missing characterData"))?;
        let step = self
            .step
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| DomainError::validation("missing currentStep"))?;

        Ok(GenerationTarget {
            character,
            key: StepKey::new(
                Step::from(step.trim()),
                SubStep::parse_optional(self.sub_step.as_deref()),
            ),
        })
    }
}

/// A validated request.
#[derive(Debug, Clone)]
struct GenerationTarget {
    character: CharacterState,
    key: StepKey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RequestPhase {
    Assembling,
    Requesting,
    Parsing,
    Fallback,
    Done,
}

impl fmt::Display for RequestPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RequestPhase::Assembling => "assembling",
            RequestPhase::Requesting => "requesting",
            RequestPhase::Parsing => "parsing",
            RequestPhase::Fallback => "fallback",
            RequestPhase::Done => "done",
        };
        f.write_str(name)
    }
}

fn enter(phase: RequestPhase, kind: &'static str, step: &str, sub_step: &str) {
    tracing::debug!(%phase, kind, step, sub_step, "Generation phase");
}

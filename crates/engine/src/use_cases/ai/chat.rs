//! Multi-turn chat about the current step.
//!
//! The system prompt is rebuilt from the character on every call and is never
//! part of the stored history.

use std::sync::Arc;

use soulgen_domain::{validate_history, ChatMessage};

use crate::infrastructure::ports::{LlmMessage, LlmPort, LlmRequest};
use crate::prompt_templates::{
    CHAT_INVALID_REQUEST_RESPONSE, CHAT_LORE_BUDGET, CHAT_TEMPERATURE, ERROR_CHAT_FAILED,
    ERROR_INVALID_REQUEST, ERROR_NOT_CONFIGURED, MAX_OUTPUT_TOKENS,
};

use super::{
    enter, fallback_chat_response, ContextAssembler, GenerationError, GenerationRequest,
    GenerationTarget, PromptContext, RequestPhase,
};

const KIND: &str = "chat";

/// Result of a chat turn. Always renderable.
#[derive(Debug, Clone)]
pub struct ChatOutcome {
    pub response: String,
    /// Set when `response` is a preset reply.
    pub error: Option<GenerationError>,
}

impl ChatOutcome {
    fn fallback(error: GenerationError) -> Self {
        let response = match &error {
            GenerationError::Validation(_) => CHAT_INVALID_REQUEST_RESPONSE,
            _ => fallback_chat_response(),
        };
        Self {
            response: response.to_string(),
            error: Some(error),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.error.is_some()
    }

    pub fn error_message(&self) -> Option<&'static str> {
        self.error.as_ref().map(|err| match err {
            GenerationError::NotConfigured => ERROR_NOT_CONFIGURED,
            GenerationError::Validation(_) => ERROR_INVALID_REQUEST,
            _ => ERROR_CHAT_FAILED,
        })
    }
}

pub struct ChatOps {
    llm: Option<Arc<dyn LlmPort>>,
    assembler: Arc<ContextAssembler>,
}

impl ChatOps {
    pub fn new(llm: Option<Arc<dyn LlmPort>>, assembler: Arc<ContextAssembler>) -> Self {
        Self { llm, assembler }
    }

    pub async fn respond(
        &self,
        request: GenerationRequest,
        messages: Vec<ChatMessage>,
    ) -> ChatOutcome {
        let step = request.step_label().to_string();
        let sub_step = request.sub_step_label().to_string();

        let result = match validate_history(&messages).and_then(|()| request.into_target()) {
            Ok(target) => self.request(&target, &messages).await,
            Err(e) => Err(GenerationError::from(e)),
        };

        let outcome = match result {
            Ok(response) => ChatOutcome {
                response,
                error: None,
            },
            Err(error) => {
                enter(RequestPhase::Fallback, KIND, &step, &sub_step);
                tracing::warn!(
                    step = %step,
                    sub_step = %sub_step,
                    reason = error.reason(),
                    error = %error,
                    "Chat generation failed, using fallback response"
                );
                ChatOutcome::fallback(error)
            }
        };

        enter(RequestPhase::Done, KIND, &step, &sub_step);
        outcome
    }

    async fn request(
        &self,
        target: &GenerationTarget,
        messages: &[ChatMessage],
    ) -> Result<String, GenerationError> {
        let step = target.key.step.as_str();
        let sub_step = target.key.sub_step.as_ref().map_or("", |s| s.as_str());

        let llm = self.llm.as_ref().ok_or(GenerationError::NotConfigured)?;

        enter(RequestPhase::Assembling, KIND, step, sub_step);
        let context = PromptContext::new(&target.character, target.key.clone())
            .with_max_tokens(CHAT_LORE_BUDGET);
        let system_prompt = self.assembler.assemble(&context);

        enter(RequestPhase::Requesting, KIND, step, sub_step);
        let request = LlmRequest::new(messages.iter().map(LlmMessage::from).collect())
            .with_system_prompt(system_prompt)
            .with_temperature(CHAT_TEMPERATURE)
            .with_max_tokens(Some(MAX_OUTPUT_TOKENS));

        let response = llm.generate(request).await?;
        if response.is_truncated() {
            tracing::warn!(step, sub_step, "Chat output hit the token limit");
        }
        if response.content.trim().is_empty() {
            return Err(GenerationError::EmptyContent);
        }
        Ok(response.content)
    }
}

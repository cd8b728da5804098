//! Single-shot suggestion generation.

use std::sync::Arc;

use crate::infrastructure::ports::{LlmMessage, LlmPort, LlmRequest};
use crate::prompt_templates::{
    ERROR_INVALID_REQUEST, ERROR_NOT_CONFIGURED, ERROR_SUGGESTIONS_FAILED, MAX_OUTPUT_TOKENS,
    SUGGESTION_LORE_BUDGET, SUGGESTION_TEMPERATURE,
};

use super::{
    default_suggestions, enter, fallback_suggestions, parse_suggestions, user_prompt,
    ContextAssembler, GenerationError, GenerationRequest, GenerationTarget, PromptContext,
    RequestPhase, MAX_SUGGESTIONS,
};

const KIND: &str = "suggestions";

/// Result of a suggestion request. Always renderable.
#[derive(Debug, Clone)]
pub struct SuggestionOutcome {
    pub suggestions: Vec<String>,
    /// Set when `suggestions` are preset content.
    pub error: Option<GenerationError>,
}

impl SuggestionOutcome {
    fn generated(suggestions: Vec<String>) -> Self {
        Self {
            suggestions,
            error: None,
        }
    }

    fn fallback(suggestions: Vec<String>, error: GenerationError) -> Self {
        Self {
            suggestions,
            error: Some(error),
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.error.is_some()
    }

    /// Message shown to the caller alongside fallback content.
    pub fn error_message(&self) -> Option<&'static str> {
        self.error.as_ref().map(|err| match err {
            GenerationError::NotConfigured => ERROR_NOT_CONFIGURED,
            GenerationError::Validation(_) => ERROR_INVALID_REQUEST,
            _ => ERROR_SUGGESTIONS_FAILED,
        })
    }
}

pub struct SuggestionOps {
    llm: Option<Arc<dyn LlmPort>>,
    assembler: Arc<ContextAssembler>,
}

impl SuggestionOps {
    /// `llm` is `None` when no backend is configured.
    pub fn new(llm: Option<Arc<dyn LlmPort>>, assembler: Arc<ContextAssembler>) -> Self {
        Self { llm, assembler }
    }

    pub fn is_configured(&self) -> bool {
        self.llm.is_some()
    }

    pub async fn generate(&self, request: GenerationRequest) -> SuggestionOutcome {
        let step = request.step_label().to_string();
        let sub_step = request.sub_step_label().to_string();

        let target = match request.into_target() {
            Ok(target) => target,
            Err(e) => {
                let error = GenerationError::from(e);
                enter(RequestPhase::Fallback, KIND, &step, &sub_step);
                tracing::warn!(
                    step = %step,
                    sub_step = %sub_step,
                    reason = error.reason(),
                    error = %error,
                    "Invalid suggestion request, using default suggestions"
                );
                return SuggestionOutcome::fallback(default_suggestions(), error);
            }
        };

        let outcome = match self.request(&target).await {
            Ok(content) => {
                enter(RequestPhase::Parsing, KIND, &step, &sub_step);
                let suggestions = parse_suggestions(&content);
                if suggestions.len() < MAX_SUGGESTIONS {
                    tracing::debug!(
                        step = %step,
                        count = suggestions.len(),
                        "Model returned fewer suggestions than requested"
                    );
                }
                SuggestionOutcome::generated(suggestions)
            }
            Err(error) => {
                enter(RequestPhase::Fallback, KIND, &step, &sub_step);
                tracing::warn!(
                    step = %step,
                    sub_step = %sub_step,
                    reason = error.reason(),
                    error = %error,
                    "Suggestion generation failed, using fallback suggestions"
                );
                SuggestionOutcome::fallback(fallback_suggestions(&target.key), error)
            }
        };

        enter(RequestPhase::Done, KIND, &step, &sub_step);
        outcome
    }

    async fn request(&self, target: &GenerationTarget) -> Result<String, GenerationError> {
        let step = target.key.step.as_str();
        let sub_step = target.key.sub_step.as_ref().map_or("", |s| s.as_str());

        let llm = self.llm.as_ref().ok_or(GenerationError::NotConfigured)?;

        enter(RequestPhase::Assembling, KIND, step, sub_step);
        let context = PromptContext::new(&target.character, target.key.clone())
            .with_max_tokens(SUGGESTION_LORE_BUDGET);
        let system_prompt = self.assembler.assemble(&context);
        tracing::trace!(%system_prompt, "Suggestion system prompt");

        enter(RequestPhase::Requesting, KIND, step, sub_step);
        let request = LlmRequest::new(vec![LlmMessage::user(user_prompt(&target.key))])
            .with_system_prompt(system_prompt)
            .with_temperature(SUGGESTION_TEMPERATURE)
            .with_max_tokens(Some(MAX_OUTPUT_TOKENS));

        let response = llm.generate(request).await?;
        if response.is_truncated() {
            tracing::warn!(step, sub_step, "Suggestion output hit the token limit");
        }
        if response.content.trim().is_empty() {
            return Err(GenerationError::EmptyContent);
        }
        Ok(response.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use async_trait::async_trait;
    use soulgen_domain::{CharacterState, CharacterTrait, Step, StepKey};

    use crate::entities::LoreCorpus;
    use crate::infrastructure::ports::{
        FinishReason, LlmError, LlmResponse, MessageRole, MockLlmPort,
    };
    use crate::infrastructure::timeout_llm::TimeoutLlmClient;

    struct SlowMockLlm {
        delay: Duration,
    }

    #[async_trait]
    impl LlmPort for SlowMockLlm {
        async fn generate(&self, _request: LlmRequest) -> Result<LlmResponse, LlmError> {
            tokio::time::sleep(self.delay).await;
            Ok(LlmResponse::text("1. Too late\n2. Far too late\n3. Never seen"))
        }
    }

    fn assembler() -> Arc<ContextAssembler> {
        Arc::new(ContextAssembler::new(LoreCorpus::builtin()))
    }

    fn ops(llm: impl LlmPort + 'static) -> SuggestionOps {
        SuggestionOps::new(Some(Arc::new(llm)), assembler())
    }

    fn request(step: &str) -> GenerationRequest {
        let character = CharacterState::new("7")
            .with_traits(vec![CharacterTrait::new("Body", "Spirit")]);
        GenerationRequest::new(character, step)
    }

    #[tokio::test]
    async fn parses_generated_suggestions() {
        let mut llm = MockLlmPort::new();
        llm.expect_generate().times(1).returning(|_| {
            Ok(LlmResponse::text(
                "1. Born beneath the temple.\n2. Raised in District 7.\n3. Woke in a vat.\n4. Extra.",
            ))
        });

        let outcome = ops(llm).generate(request("background")).await;

        assert!(!outcome.is_fallback());
        assert_eq!(outcome.error_message(), None);
        assert_eq!(
            outcome.suggestions,
            vec![
                "Born beneath the temple.",
                "Raised in District 7.",
                "Woke in a vat."
            ]
        );
    }

    #[tokio::test]
    async fn truncated_output_is_still_parsed() {
        let mut llm = MockLlmPort::new();
        llm.expect_generate().times(1).returning(|_| {
            Ok(LlmResponse::text("1. Sigil of ash\n2. Sigil of sm")
                .with_finish_reason(FinishReason::Length))
        });

        let outcome = ops(llm).generate(request("powersAbilities")).await;

        assert!(!outcome.is_fallback());
        assert_eq!(outcome.suggestions, vec!["Sigil of ash", "Sigil of sm"]);
    }

    #[tokio::test]
    async fn powers_prompt_names_body_foundation() {
        let mut llm = MockLlmPort::new();
        llm.expect_generate()
            .withf(|req| {
                req.system_prompt.as_deref().is_some_and(|prompt| {
                    prompt.contains("- Azurite: Energy Manipulation foundation.")
                })
            })
            .times(1)
            .returning(|_| Ok(LlmResponse::text("1. One\n2. Two\n3. Three")));

        let character = CharacterState::new("7")
            .with_traits(vec![CharacterTrait::new("Body", "Azurite")]);
        let outcome = ops(llm)
            .generate(GenerationRequest::new(character, "powersAbilities"))
            .await;

        assert!(!outcome.is_fallback());
    }

    #[tokio::test]
    async fn sends_assembled_prompt_with_suggestion_settings() {
        let mut llm = MockLlmPort::new();
        llm.expect_generate()
            .withf(|req| {
                req.temperature == Some(SUGGESTION_TEMPERATURE)
                    && req.max_tokens == Some(MAX_OUTPUT_TOKENS)
                    && req.messages.len() == 1
                    && req.messages[0].role == MessageRole::User
                    && req.messages[0].content.contains("Suggest 3 creative inner drives")
                    && req.system_prompt.as_deref().is_some_and(|p| {
                        p.contains("(specifically the \"drives\" section)")
                            && p.contains("## 0N1 UNIVERSE LORE")
                    })
            })
            .times(1)
            .returning(|_| Ok(LlmResponse::text("- One\n- Two\n- Three")));

        let outcome = ops(llm)
            .generate(request("motivations").with_sub_step("drives"))
            .await;

        assert_eq!(outcome.suggestions, vec!["One", "Two", "Three"]);
    }

    #[tokio::test]
    async fn backend_error_uses_step_fallback() {
        let mut llm = MockLlmPort::new();
        llm.expect_generate()
            .returning(|_| Err(LlmError::RequestFailed("rate limited".into())));

        let outcome = ops(llm).generate(request("fears")).await;

        assert!(outcome.is_fallback());
        assert!(matches!(outcome.error, Some(GenerationError::Backend(_))));
        assert_eq!(outcome.error_message(), Some(ERROR_SUGGESTIONS_FAILED));
        assert_eq!(
            outcome.suggestions,
            fallback_suggestions(&StepKey::step(Step::Fears))
        );
    }

    #[tokio::test]
    async fn empty_content_uses_fallback() {
        let mut llm = MockLlmPort::new();
        llm.expect_generate().returning(|_| Ok(LlmResponse::text("   ")));

        let outcome = ops(llm).generate(request("hopes")).await;

        assert!(matches!(outcome.error, Some(GenerationError::EmptyContent)));
        assert_eq!(outcome.suggestions.len(), 3);
    }

    #[tokio::test]
    async fn invalid_request_skips_backend() {
        let mut llm = MockLlmPort::new();
        llm.expect_generate().times(0);

        let outcome = ops(llm).generate(GenerationRequest::default()).await;

        assert!(matches!(outcome.error, Some(GenerationError::Validation(_))));
        assert_eq!(outcome.error_message(), Some(ERROR_INVALID_REQUEST));
        assert_eq!(outcome.suggestions, default_suggestions());
    }

    #[tokio::test]
    async fn unconfigured_backend_uses_step_fallback() {
        let ops = SuggestionOps::new(None, assembler());

        let outcome = ops
            .generate(request("voice").with_sub_step("uniquePhrases"))
            .await;

        assert!(!ops.is_configured());
        assert!(matches!(outcome.error, Some(GenerationError::NotConfigured)));
        assert_eq!(outcome.error_message(), Some(ERROR_NOT_CONFIGURED));
        assert!(outcome.suggestions[0].starts_with("\"The code never lies"));
    }

    #[tokio::test]
    async fn late_success_after_timeout_is_discarded() {
        let slow = SlowMockLlm {
            delay: Duration::from_millis(500),
        };
        let llm = TimeoutLlmClient::new(Arc::new(slow), Duration::from_millis(20));

        let outcome = ops(llm).generate(request("archetype")).await;

        assert!(matches!(outcome.error, Some(GenerationError::Timeout(_))));
        assert_eq!(
            outcome.suggestions,
            fallback_suggestions(&StepKey::step(Step::Archetype))
        );
    }

    #[tokio::test]
    async fn fewer_than_three_is_not_a_failure() {
        let mut llm = MockLlmPort::new();
        llm.expect_generate()
            .returning(|_| Ok(LlmResponse::text("Only one long idea.")));

        let outcome = ops(llm).generate(request("soulName")).await;

        assert!(!outcome.is_fallback());
        assert_eq!(outcome.suggestions, vec!["Only one long idea."]);
    }
}

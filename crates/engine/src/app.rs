//! Application state and composition.

use std::sync::Arc;

use crate::entities::{ArchetypeCatalog, LoreCorpus, PowerCatalog};
use crate::infrastructure::{
    openai::OpenAiClient,
    opensea::OpenSeaClient,
    ports::{LlmPort, TraitSource},
    settings::EngineSettings,
    timeout_llm::TimeoutLlmClient,
};
use crate::use_cases;
use crate::use_cases::ai::{ChatOps, ContextAssembler, SuggestionOps};

/// Main application state.
///
/// Passed to HTTP handlers via Axum state. Nothing in it is mutated after
/// construction.
pub struct App {
    pub use_cases: UseCases,
    pub lore: LoreCorpus,
    pub powers: PowerCatalog,
    pub archetypes: ArchetypeCatalog,
}

/// Container for all use cases.
pub struct UseCases {
    pub ai: use_cases::AiUseCases,
    pub traits: use_cases::TraitUseCases,
}

impl App {
    /// Wire the app from already-built ports. `None` marks an absent backend.
    /// Power and archetype catalogs are the built-in ones.
    pub fn new(
        llm: Option<Arc<dyn LlmPort>>,
        trait_source: Option<Arc<dyn TraitSource>>,
        lore: LoreCorpus,
    ) -> Self {
        let powers = PowerCatalog::builtin();
        let assembler =
            Arc::new(ContextAssembler::new(lore.clone()).with_powers(powers.clone()));

        let use_cases = UseCases {
            ai: use_cases::AiUseCases::new(
                Arc::new(SuggestionOps::new(llm.clone(), assembler.clone())),
                Arc::new(ChatOps::new(llm, assembler)),
            ),
            traits: use_cases::TraitUseCases::new(trait_source),
        };

        Self {
            use_cases,
            lore,
            powers,
            archetypes: ArchetypeCatalog::builtin(),
        }
    }

    /// Build the real adapters described by `settings` over the built-in corpus.
    pub fn from_settings(settings: &EngineSettings) -> Self {
        let llm: Option<Arc<dyn LlmPort>> = match OpenAiClient::from_settings(settings) {
            Some(client) => {
                tracing::info!(
                    model = client.model(),
                    timeout_ms = settings.llm_timeout.as_millis() as u64,
                    "Generation backend configured"
                );
                Some(Arc::new(TimeoutLlmClient::new(
                    Arc::new(client),
                    settings.llm_timeout,
                )))
            }
            None => {
                tracing::warn!("OPENAI_API_KEY not set, every AI request will use fallback content");
                None
            }
        };

        let trait_source: Option<Arc<dyn TraitSource>> = match OpenSeaClient::from_settings(settings)
        {
            Some(client) => Some(Arc::new(client)),
            None => {
                tracing::info!("OPENSEA_API_KEY not set, trait lookups will use generated traits");
                None
            }
        };

        Self::new(llm, trait_source, LoreCorpus::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_settings_without_keys_has_no_backend() {
        let app = App::from_settings(&EngineSettings::default());
        assert!(!app.use_cases.ai.suggestions.is_configured());
        assert_eq!(app.lore.len(), 8);
        assert_eq!(app.powers.all().len(), 10);
        assert_eq!(app.archetypes.all().len(), 20);
    }

    #[test]
    fn from_settings_with_key_configures_backend() {
        let settings = EngineSettings::default().with_openai_api_key("sk-test");
        let app = App::from_settings(&settings);
        assert!(app.use_cases.ai.suggestions.is_configured());
    }
}

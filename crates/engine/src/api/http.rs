//! HTTP routes.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

use soulgen_domain::{Archetype, ArchetypeCategory, PowerType};
use soulgen_shared::{
    ArchetypeGroup, ArchetypeQuery, ChatRequest, ChatResponse, ErrorResponse,
    LoreDocumentResponse, LoreSummary, PowerLookupResponse, StepMetadataQuery,
    StepMetadataResponse, SuggestionRequest, SuggestionResponse, TraitLookupResponse,
};

use crate::app::App;
use crate::infrastructure::ports::TraitSourceError;
use crate::use_cases::ai::GenerationRequest;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/api/ai-assistant", post(generate_suggestions))
        .route("/api/ai-chat", post(chat))
        .route("/api/steps/{step}", get(step_metadata))
        .route("/api/lore", get(list_lore))
        .route("/api/lore/{id}", get(get_lore))
        .route("/api/traits/{token_id}", get(get_traits))
        .route("/api/powers", get(list_powers))
        .route("/api/powers/{body_type}", get(get_power))
        .route("/api/archetypes", get(list_archetypes))
        .route("/api/archetypes/{name}", get(get_archetype))
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// AI assistant
// =============================================================================

/// Always answers 200, including for bodies that fail to deserialize.
async fn generate_suggestions(
    State(app): State<Arc<App>>,
    payload: Result<Json<SuggestionRequest>, JsonRejection>,
) -> Json<SuggestionResponse> {
    let request = match payload {
        Ok(Json(body)) => GenerationRequest {
            character: body.character_data,
            step: body.current_step,
            sub_step: body.sub_step,
        },
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Unreadable suggestion request body");
            GenerationRequest::default()
        }
    };

    let outcome = app.use_cases.ai.suggestions.generate(request).await;
    Json(SuggestionResponse {
        fallback: outcome.is_fallback(),
        error: outcome.error_message().map(str::to_string),
        suggestions: outcome.suggestions,
    })
}

async fn chat(
    State(app): State<Arc<App>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Json<ChatResponse> {
    let (request, messages) = match payload {
        Ok(Json(body)) => (
            GenerationRequest {
                character: body.character_data,
                step: body.current_step,
                sub_step: body.sub_step,
            },
            body.messages,
        ),
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Unreadable chat request body");
            (GenerationRequest::default(), Vec::new())
        }
    };

    let outcome = app.use_cases.ai.chat.respond(request, messages).await;
    Json(ChatResponse {
        fallback: outcome.is_fallback(),
        error: outcome.error_message().map(str::to_string),
        response: outcome.response,
    })
}

async fn step_metadata(
    State(app): State<Arc<App>>,
    Path(step): Path<String>,
    Query(query): Query<StepMetadataQuery>,
) -> Json<StepMetadataResponse> {
    let metadata = app
        .use_cases
        .ai
        .step_metadata(&step, query.sub_step.as_deref());

    Json(StepMetadataResponse {
        step: metadata.key.step.to_string(),
        sub_step: metadata.key.sub_step.map(String::from),
        title: metadata.title,
        greeting: metadata.greeting,
    })
}

// =============================================================================
// Lore
// =============================================================================

async fn list_lore(State(app): State<Arc<App>>) -> Json<Vec<LoreSummary>> {
    Json(app.lore.all().iter().map(LoreSummary::from).collect())
}

async fn get_lore(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<LoreDocumentResponse>, ApiError> {
    let document = app.lore.by_id(&id).ok_or(ApiError::NotFound)?;
    let related = app
        .lore
        .related(&id)
        .into_iter()
        .map(LoreSummary::from)
        .collect();

    Ok(Json(LoreDocumentResponse {
        document: document.clone(),
        related,
    }))
}

// =============================================================================
// Traits
// =============================================================================

async fn get_traits(
    State(app): State<Arc<App>>,
    Path(token_id): Path<String>,
) -> Result<Json<TraitLookupResponse>, ApiError> {
    let (token_id, lookup) = app.use_cases.traits.lookup(&token_id).await?;

    Ok(Json(TraitLookupResponse {
        token_id,
        traits: lookup.traits,
        image_url: lookup.image_url,
        is_from_live_source: lookup.is_from_live_source,
    }))
}

// =============================================================================
// Powers & archetypes
// =============================================================================

async fn list_powers(State(app): State<Arc<App>>) -> Json<Vec<PowerType>> {
    Json(app.powers.all().to_vec())
}

/// Unknown body types get the default power type, flagged as such.
async fn get_power(
    State(app): State<Arc<App>>,
    Path(body_type): Path<String>,
) -> Result<Json<PowerLookupResponse>, ApiError> {
    if let Some(power_type) = app.powers.by_body_type(&body_type) {
        return Ok(Json(PowerLookupResponse {
            power_type: power_type.clone(),
            is_default: false,
        }));
    }

    let power_type = app.powers.default_power_type().ok_or(ApiError::NotFound)?;
    tracing::debug!(body_type = %body_type, "Unknown body type, using default powers");
    Ok(Json(PowerLookupResponse {
        power_type: power_type.clone(),
        is_default: true,
    }))
}

async fn list_archetypes(
    State(app): State<Arc<App>>,
    Query(query): Query<ArchetypeQuery>,
) -> Result<Json<Vec<ArchetypeGroup>>, ApiError> {
    let groups = match query.category.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => {
            let category = raw
                .parse::<ArchetypeCategory>()
                .map_err(|e| ApiError::BadRequest(e.to_string()))?;
            vec![(category, app.archetypes.by_category(category))]
        }
        _ => app.archetypes.grouped(),
    };

    Ok(Json(
        groups
            .into_iter()
            .map(|(category, archetypes)| ArchetypeGroup {
                category,
                archetypes: archetypes.into_iter().cloned().collect(),
            })
            .collect(),
    ))
}

async fn get_archetype(
    State(app): State<Arc<App>>,
    Path(name): Path<String>,
) -> Result<Json<Archetype>, ApiError> {
    let archetype = app.archetypes.by_name(&name).ok_or(ApiError::NotFound)?;
    Ok(Json(archetype.clone()))
}

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    BadRequest(String),
    Internal(String),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error".to_string())
            }
        };
        (status, Json(ErrorResponse { error })).into_response()
    }
}

impl From<TraitSourceError> for ApiError {
    fn from(e: TraitSourceError) -> Self {
        match e {
            TraitSourceError::InvalidTokenId(_) => ApiError::BadRequest(
                "Please enter a correct 0N1 Force Token ID (1-7777)".to_string(),
            ),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use axum::body::Body;
    use axum::http::Request;
    use serde::de::DeserializeOwned;
    use tower::ServiceExt;

    use crate::entities::LoreCorpus;
    use crate::infrastructure::ports::{LlmError, LlmPort, LlmResponse, MockLlmPort};
    use crate::infrastructure::timeout_llm::TimeoutLlmClient;
    use crate::prompt_templates::{
        CHAT_FALLBACK_RESPONSE, ERROR_INVALID_REQUEST, ERROR_NOT_CONFIGURED,
        ERROR_SUGGESTIONS_FAILED,
    };

    fn router(llm: Option<Arc<dyn LlmPort>>) -> Router {
        let app = App::new(llm, None, LoreCorpus::builtin());
        routes().with_state(Arc::new(app))
    }

    fn replying(text: &'static str) -> Option<Arc<dyn LlmPort>> {
        let mut llm = MockLlmPort::new();
        llm.expect_generate()
            .returning(move |_| Ok(LlmResponse::text(text)));
        Some(Arc::new(llm))
    }

    fn failing() -> Option<Arc<dyn LlmPort>> {
        let mut llm = MockLlmPort::new();
        llm.expect_generate()
            .returning(|_| Err(LlmError::RequestFailed("connection reset".into())));
        Some(Arc::new(llm))
    }

    async fn send<T: DeserializeOwned>(router: Router, request: Request<Body>) -> (StatusCode, T) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    const SUGGESTION_BODY: &str =
        r#"{"characterData": {"pfpId": "922", "traits": [{"trait_type": "Body", "value": "Tiger Skin"}]}, "currentStep": "symbolism", "subStep": "colors"}"#;

    #[tokio::test]
    async fn health_is_ok() {
        let response = router(None).oneshot(get("/api/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn suggestions_success() {
        let router = router(replying("1. Crimson\n2. Teal\n3. Gold"));
        let (status, body): (_, SuggestionResponse) =
            send(router, post_json("/api/ai-assistant", SUGGESTION_BODY)).await;

        assert_eq!(status, StatusCode::OK);
        assert!(!body.fallback);
        assert_eq!(body.error, None);
        assert_eq!(body.suggestions, vec!["Crimson", "Teal", "Gold"]);
    }

    #[tokio::test]
    async fn suggestions_backend_error_is_200_with_fallback() {
        let (status, body): (_, SuggestionResponse) =
            send(router(failing()), post_json("/api/ai-assistant", SUGGESTION_BODY)).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.fallback);
        assert_eq!(body.error.as_deref(), Some(ERROR_SUGGESTIONS_FAILED));
        assert_eq!(body.suggestions.len(), 3);
        assert!(body.suggestions[0].starts_with("Electric blue and deep crimson"));
    }

    #[tokio::test]
    async fn suggestions_timeout_is_200_with_fallback() {
        struct StalledLlm;

        #[async_trait::async_trait]
        impl LlmPort for StalledLlm {
            async fn generate(
                &self,
                _request: crate::infrastructure::ports::LlmRequest,
            ) -> Result<LlmResponse, LlmError> {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Ok(LlmResponse::text("1. late"))
            }
        }

        let llm = TimeoutLlmClient::new(Arc::new(StalledLlm), Duration::from_millis(20));
        let (status, body): (_, SuggestionResponse) = send(
            router(Some(Arc::new(llm))),
            post_json("/api/ai-assistant", SUGGESTION_BODY),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.fallback);
        assert_eq!(body.suggestions.len(), 3);
        assert!(!body.suggestions.contains(&"late".to_string()));
    }

    #[tokio::test]
    async fn malformed_body_is_200_with_default_suggestions() {
        let (status, body): (_, SuggestionResponse) =
            send(router(failing()), post_json("/api/ai-assistant", "{not json")).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.fallback);
        assert_eq!(body.error.as_deref(), Some(ERROR_INVALID_REQUEST));
        assert_eq!(
            body.suggestions[0],
            "The path of the 0N1 is never straight, but always meaningful."
        );
    }

    #[tokio::test]
    async fn missing_step_is_200_with_default_suggestions() {
        let (status, body): (_, SuggestionResponse) = send(
            router(failing()),
            post_json("/api/ai-assistant", r#"{"characterData": {"pfpId": "1"}}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.error.as_deref(), Some(ERROR_INVALID_REQUEST));
    }

    #[tokio::test]
    async fn unconfigured_backend_reports_it() {
        let (status, body): (_, SuggestionResponse) =
            send(router(None), post_json("/api/ai-assistant", SUGGESTION_BODY)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.error.as_deref(), Some(ERROR_NOT_CONFIGURED));
        assert_eq!(body.suggestions.len(), 3);
    }

    #[tokio::test]
    async fn chat_success_and_failure() {
        let body = r#"{"characterData": {"pfpId": "5"}, "currentStep": "fears", "messages": [{"role": "user", "content": "Help"}]}"#;

        let (status, ok): (_, ChatResponse) =
            send(router(replying("Fear the void.")), post_json("/api/ai-chat", body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ok.response, "Fear the void.");
        assert!(!ok.fallback);

        let (status, failed): (_, ChatResponse) =
            send(router(failing()), post_json("/api/ai-chat", body)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(failed.fallback);
        assert_eq!(failed.response, CHAT_FALLBACK_RESPONSE);
    }

    #[tokio::test]
    async fn chat_without_messages_is_200() {
        let body = r#"{"characterData": {"pfpId": "5"}, "currentStep": "fears", "messages": []}"#;
        let (status, response): (_, ChatResponse) =
            send(router(failing()), post_json("/api/ai-chat", body)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(response.error.as_deref(), Some(ERROR_INVALID_REQUEST));
        assert!(!response.response.is_empty());
    }

    #[tokio::test]
    async fn step_metadata_reads_sub_step_query() {
        let (status, body): (_, StepMetadataResponse) = send(
            router(None),
            get("/api/steps/relationships?subStep=rivals"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.step, "relationships");
        assert_eq!(body.sub_step.as_deref(), Some("rivals"));
        assert_eq!(body.title, "AI ASSISTANT - RIVALS & ENEMIES");
    }

    #[tokio::test]
    async fn lore_listing_and_lookup() {
        let (status, listing): (_, Vec<LoreSummary>) = send(router(None), get("/api/lore")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listing.len(), 8);

        let (status, doc): (_, LoreDocumentResponse) = send(
            router(None),
            get("/api/lore/character-voice-examples"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(doc.related.len(), 1);
        assert_eq!(doc.related[0].id, "narrative-voice");

        let (status, error): (_, ErrorResponse) =
            send(router(None), get("/api/lore/unknown")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(error.error, "Not found");
    }

    #[tokio::test]
    async fn traits_lookup() {
        let (status, body): (_, TraitLookupResponse) =
            send(router(None), get("/api/traits/0042")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.token_id, 42);
        assert!(!body.is_from_live_source);

        let (status, _): (_, ErrorResponse) = send(router(None), get("/api/traits/9000")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn power_lookup_by_body_type() {
        let (status, body): (_, PowerLookupResponse) =
            send(router(None), get("/api/powers/tiger%20skin")).await;

        assert_eq!(status, StatusCode::OK);
        assert!(!body.is_default);
        assert_eq!(body.power_type.body_type, "Tiger Skin");
        assert_eq!(body.power_type.foundation, "Physical Enhancements and Abilities");
        assert_eq!(body.power_type.evolution_options.len(), 3);
        assert!(body.power_type.additional_power.is_some());
    }

    #[tokio::test]
    async fn unknown_body_type_gets_default_powers() {
        let (status, body): (_, PowerLookupResponse) =
            send(router(None), get("/api/powers/Chrome")).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.is_default);
        assert_eq!(body.power_type.body_type, "Citrine");
    }

    #[tokio::test]
    async fn power_listing_has_every_body_type() {
        let (status, body): (_, Vec<PowerType>) = send(router(None), get("/api/powers")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.len(), 10);
    }

    #[tokio::test]
    async fn archetypes_grouped_in_display_order() {
        let (status, groups): (_, Vec<ArchetypeGroup>) =
            send(router(None), get("/api/archetypes")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(groups[0].category, ArchetypeCategory::CoreProtagonist);
        assert_eq!(groups[0].archetypes[0].name, "The Hero");
        assert_eq!(groups.iter().map(|g| g.archetypes.len()).sum::<usize>(), 20);
    }

    #[tokio::test]
    async fn archetypes_filtered_by_category() {
        let (status, groups): (_, Vec<ArchetypeGroup>) =
            send(router(None), get("/api/archetypes?category=support")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].category, ArchetypeCategory::Support);
        assert!(groups[0]
            .archetypes
            .iter()
            .all(|a| a.category == ArchetypeCategory::Support));

        let (status, _): (_, ErrorResponse) =
            send(router(None), get("/api/archetypes?category=villain")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn archetype_lookup_by_name() {
        let (status, archetype): (_, Archetype) =
            send(router(None), get("/api/archetypes/the%20mentor")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(archetype.name, "The Mentor");
        assert_eq!(archetype.category, ArchetypeCategory::Support);

        let (status, _): (_, ErrorResponse) =
            send(router(None), get("/api/archetypes/The%20Ronin")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

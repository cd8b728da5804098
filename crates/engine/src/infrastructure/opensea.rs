//! OpenSea v2 client for 0N1 Force token traits

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use soulgen_domain::CharacterTrait;
use std::time::Duration;

use crate::infrastructure::ports::{TraitLookup, TraitSource, TraitSourceError};
use crate::infrastructure::settings::EngineSettings;

pub const DEFAULT_OPENSEA_BASE_URL: &str = "https://api.opensea.io";

/// 0N1 Force contract on Ethereum mainnet.
pub const ONI_FORCE_CONTRACT: &str = "0x3bf2922f4520a8ba0c2efc3d2a1539678dad5e9d";

const REQUEST_TIMEOUT_SECS: u64 = 8;

#[derive(Clone)]
pub struct OpenSeaClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OpenSeaClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Returns `None` without an `OPENSEA_API_KEY`.
    pub fn from_settings(settings: &EngineSettings) -> Option<Self> {
        settings
            .opensea_api_key
            .as_deref()
            .map(|key| Self::new(DEFAULT_OPENSEA_BASE_URL, key))
    }

    fn nft_url(&self, token_id: u32) -> String {
        format!(
            "{}/api/v2/chain/ethereum/contract/{}/nfts/{}",
            self.base_url, ONI_FORCE_CONTRACT, token_id
        )
    }
}

#[async_trait]
impl TraitSource for OpenSeaClient {
    async fn fetch_traits(&self, token_id: u32) -> Result<TraitLookup, TraitSourceError> {
        tracing::debug!(token_id, "Fetching traits from OpenSea");

        let response = self
            .client
            .get(self.nft_url(token_id))
            .header("Accept", "application/json")
            .header("X-API-KEY", &self.api_key)
            .send()
            .await
            .map_err(|e| TraitSourceError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TraitSourceError::RequestFailed(format!(
                "OpenSea API error: {status}"
            )));
        }

        let body: OpenSeaNftResponse = response
            .json()
            .await
            .map_err(|e| TraitSourceError::InvalidResponse(e.to_string()))?;

        Ok(convert_nft(body))
    }
}

fn convert_nft(body: OpenSeaNftResponse) -> TraitLookup {
    let traits = body
        .nft
        .traits
        .into_iter()
        .map(|t| CharacterTrait::new(t.trait_type, value_to_string(t.value)))
        .collect();

    TraitLookup {
        traits,
        image_url: body.nft.image_url.filter(|url| !url.is_empty()),
        is_from_live_source: true,
    }
}

// Trait values are strings for most collections but numbers for some.
fn value_to_string(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    }
}

// =============================================================================
// OpenSea API types
// =============================================================================

#[derive(Debug, Deserialize)]
struct OpenSeaNftResponse {
    nft: OpenSeaNft,
}

#[derive(Debug, Deserialize)]
struct OpenSeaNft {
    #[serde(default)]
    traits: Vec<OpenSeaTrait>,
    #[serde(default)]
    image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenSeaTrait {
    trait_type: String,
    value: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_contract_url() {
        let client = OpenSeaClient::new("https://api.opensea.io/", "key");
        assert_eq!(
            client.nft_url(922),
            "https://api.opensea.io/api/v2/chain/ethereum/contract/0x3bf2922f4520a8ba0c2efc3d2a1539678dad5e9d/nfts/922"
        );
    }

    #[test]
    fn converts_traits_and_image() {
        let raw = r#"{
            "nft": {
                "identifier": "922",
                "image_url": "https://i.seadn.io/922.png",
                "traits": [
                    {"trait_type": "Body", "value": "Tiger Skin", "display_type": null},
                    {"trait_type": "Level", "value": 3}
                ]
            }
        }"#;
        let body: OpenSeaNftResponse = serde_json::from_str(raw).unwrap();
        let lookup = convert_nft(body);

        assert!(lookup.is_from_live_source);
        assert_eq!(lookup.image_url.as_deref(), Some("https://i.seadn.io/922.png"));
        assert_eq!(lookup.traits[0], CharacterTrait::new("Body", "Tiger Skin"));
        assert_eq!(lookup.traits[1], CharacterTrait::new("Level", "3"));
    }

    #[test]
    fn missing_traits_yield_empty_list() {
        let body: OpenSeaNftResponse = serde_json::from_str(r#"{"nft": {}}"#).unwrap();
        let lookup = convert_nft(body);
        assert!(lookup.traits.is_empty());
        assert!(lookup.image_url.is_none());
    }

    #[test]
    fn from_settings_requires_key() {
        assert!(OpenSeaClient::from_settings(&EngineSettings::default()).is_none());
    }
}

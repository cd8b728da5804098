//! Engine configuration loaded from the environment.
//!
//! | Variable | Default |
//! |---|---|
//! | `OPENAI_API_KEY` | unset (backend absent) |
//! | `OPENAI_BASE_URL` | `https://api.openai.com` |
//! | `OPENAI_MODEL` | `gpt-4o` |
//! | `LLM_TIMEOUT_SECS` | `10` |
//! | `OPENSEA_API_KEY` | unset (generated traits only) |
//! | `SERVER_HOST` | `0.0.0.0` |
//! | `SERVER_PORT` / `PORT` | `3000` |
//! | `CORS_ALLOWED_ORIGINS` | unset (any origin) |

use std::fmt;
use std::time::Duration;

/// Default base URL of the generation backend.
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";

/// Default model for suggestion and chat requests.
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o";

/// Hard timeout of a single generation request.
pub const DEFAULT_LLM_TIMEOUT_SECS: u64 = 10;

pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
pub const DEFAULT_SERVER_PORT: u16 = 3000;

#[derive(Clone, PartialEq, Eq)]
pub struct EngineSettings {
    /// `None` means the generation backend is absent.
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub openai_model: String,
    pub llm_timeout: Duration,
    pub opensea_api_key: Option<String>,
    pub server_host: String,
    pub server_port: u16,
    pub cors_allowed_origins: Option<String>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            openai_model: DEFAULT_OPENAI_MODEL.to_string(),
            llm_timeout: Duration::from_secs(DEFAULT_LLM_TIMEOUT_SECS),
            opensea_api_key: None,
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            cors_allowed_origins: None,
        }
    }
}

impl EngineSettings {
    /// Load settings from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values count as unset
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let defaults = Self::default();

        let llm_timeout = match get("LLM_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    tracing::warn!(value = %raw, "Invalid LLM_TIMEOUT_SECS, using default");
                    defaults.llm_timeout
                }
            },
            None => defaults.llm_timeout,
        };

        let server_port = match get("SERVER_PORT").or_else(|| get("PORT")) {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "Invalid server port, using default");
                defaults.server_port
            }),
            None => defaults.server_port,
        };

        Self {
            openai_api_key: get("OPENAI_API_KEY"),
            openai_base_url: get("OPENAI_BASE_URL").unwrap_or(defaults.openai_base_url),
            openai_model: get("OPENAI_MODEL").unwrap_or(defaults.openai_model),
            llm_timeout,
            opensea_api_key: get("OPENSEA_API_KEY"),
            server_host: get("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port,
            cors_allowed_origins: get("CORS_ALLOWED_ORIGINS"),
        }
    }

    pub fn with_openai_api_key(mut self, key: impl Into<String>) -> Self {
        self.openai_api_key = Some(key.into());
        self
    }

    pub fn with_llm_timeout(mut self, timeout: Duration) -> Self {
        self.llm_timeout = timeout;
        self
    }
}

// Keys stay out of logs.
impl fmt::Debug for EngineSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineSettings")
            .field("openai_api_key", &self.openai_api_key.as_ref().map(|_| "<redacted>"))
            .field("openai_base_url", &self.openai_base_url)
            .field("openai_model", &self.openai_model)
            .field("llm_timeout", &self.llm_timeout)
            .field("opensea_api_key", &self.opensea_api_key.as_ref().map(|_| "<redacted>"))
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .finish()
    }
}

//! CORS layer built from `CORS_ALLOWED_ORIGINS`.

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Which origins the browser may call from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginPolicy {
    Any,
    List(Vec<HeaderValue>),
}

/// Comma-separated origins. Unset, blank, or any `*` entry allows every
/// origin. Entries that are not valid header values are skipped with a
/// warning; if none survive, every origin is allowed.
pub fn origin_policy(allowed_origins: Option<&str>) -> OriginPolicy {
    let entries: Vec<&str> = allowed_origins
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if entries.contains(&"*") {
        if entries.len() > 1 {
            tracing::warn!(
                origins = ?entries,
                "CORS_ALLOWED_ORIGINS mixes '*' with specific origins, allowing any origin"
            );
        }
        return OriginPolicy::Any;
    }

    let origins: Vec<HeaderValue> = entries
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin = %origin, error = %e, "Skipping invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        OriginPolicy::Any
    } else {
        OriginPolicy::List(origins)
    }
}

pub fn cors_layer(allowed_origins: Option<&str>) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    match origin_policy(allowed_origins) {
        OriginPolicy::Any => {
            tracing::info!("CORS allows any origin");
            cors.allow_origin(Any)
        }
        OriginPolicy::List(origins) => {
            tracing::info!(?origins, "CORS configured for origins");
            cors.allow_origin(AllowOrigin::list(origins))
        }
    }
}

//! 0N1 Soul Generator Engine - Main entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use soulgen_engine::api;
use soulgen_engine::infrastructure::settings::EngineSettings;
use soulgen_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the binary may be run from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "soulgen_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting 0N1 Soul Generator Engine");

    let settings = EngineSettings::from_env();
    tracing::debug!(?settings, "Loaded settings");

    let app = Arc::new(App::from_settings(&settings));

    let router = api::http::routes()
        .with_state(app)
        .layer(api::cors::cors_layer(settings.cors_allowed_origins.as_deref()))
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", settings.server_host, settings.server_port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

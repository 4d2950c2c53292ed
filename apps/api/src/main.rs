mod assessments;
mod config;
mod db;
mod errors;
mod llm;
mod models;
mod profile;
mod report;
mod routes;
mod scoring;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::{Config, NarrativeBackend};
use crate::db::create_pool;
use crate::llm::GeminiClient;
use crate::report::narrative::{GeminiNarrator, Narrator, TemplateNarrator};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Exposure API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;

    // Initialize narrative backend (TemplateNarrator unless NARRATIVE_BACKEND=gemini)
    let narrator: Arc<dyn Narrator> = match config.narrative_backend {
        NarrativeBackend::Template => {
            info!("Narrative backend: template");
            Arc::new(TemplateNarrator)
        }
        NarrativeBackend::Gemini => {
            let api_key = config
                .gemini_api_key
                .clone()
                .context("GEMINI_API_KEY is required when NARRATIVE_BACKEND=gemini")?;
            info!("Narrative backend: gemini (model: {})", llm::MODEL);
            Arc::new(GeminiNarrator(GeminiClient::new(api_key)))
        }
    };

    // Build app state
    let state = AppState { db, narrator };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

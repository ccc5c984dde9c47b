mod config;
mod errors;
mod llm_client;
mod routes;
mod scoring;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::scoring::quality::{LlmQualityAnalyzer, SectionQualityScorer};
use crate::scoring::vocab::ExtractorVocab;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (panics on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Vantage API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = LlmClient::new(config.anthropic_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Initialize the section quality orchestrator around the LLM-backed analyzer
    let analyzer = Arc::new(LlmQualityAnalyzer::new(llm));
    let quality = Arc::new(SectionQualityScorer::with_ttl(
        analyzer,
        chrono::Duration::seconds(config.quality_cache_ttl_secs as i64),
    ));
    info!(
        "Section quality scorer initialized (cache TTL: {}s)",
        config.quality_cache_ttl_secs
    );

    // Extraction vocabularies, shared across all scoring calls
    let vocab = Arc::new(ExtractorVocab::default());

    // Build app state
    let state = AppState { vocab, quality };

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

mod config;
mod errors;
mod extraction;
mod llm_client;
mod models;
mod render;
mod routes;
mod sections;
mod state;
mod tailoring;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::render::{LatexEngine, LatexRenderer};
use crate::routes::build_router;
use crate::sections::SectionClassifier;
use crate::state::AppState;
use crate::tailoring::GeminiRewriter;

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

    info!("Starting Tailor API v{}", env!("CARGO_PKG_VERSION"));

    let llm = LlmClient::new(config.gemini_api_key.clone(), config.gemini_model.clone())?;
    info!("LLM client initialized (model: {})", llm.model());

    let engine = LatexEngine::new(config.latex_engine.clone());
    info!("PDF renderer initialized (engine: {})", engine.program());

    let classifier = SectionClassifier::new(config.header_policy);
    info!(
        "Section classifier: {:?} headers, uploads up to {} bytes",
        classifier.policy(),
        config.max_upload_bytes
    );

    let state = AppState {
        config: config.clone(),
        classifier,
        rewriter: Arc::new(GeminiRewriter(llm)),
        renderer: Arc::new(LatexRenderer::new(engine)),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

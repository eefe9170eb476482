mod config;
mod errors;
mod listings;
mod llm_client;
mod models;
mod ranking;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::listings::jsearch::JSearchClient;
use crate::llm_client::LlmClient;
use crate::ranking::scorer::LlmMatchScorer;
use crate::routes::build_app;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Job Hunter API v{}", env!("CARGO_PKG_VERSION"));

    let credentials = config.credentials();
    let missing = credentials.missing();
    if !missing.is_empty() {
        warn!(
            "Credential(s) not configured: {}. Ranking requests will fail until set.",
            missing.join(", ")
        );
    }

    let listings = Arc::new(JSearchClient::new(config.jsearch_host.clone()));
    info!("Listing source initialized (host: {})", config.jsearch_host);

    let scorer = Arc::new(LlmMatchScorer::new(LlmClient::new()));
    info!("Match scorer initialized (model: {})", llm_client::MODEL);

    let limits = config.limits();
    info!(
        "Pipeline limits: {} term(s), {} scored listing(s)",
        limits.max_terms, limits.max_scored_listings
    );

    let state = AppState {
        credentials,
        limits,
        listings,
        scorer,
    };

    let app = build_app(state);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

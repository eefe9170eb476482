pub mod health;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::ranking::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/process-jobs",
            get(handlers::handle_liveness).post(handlers::handle_process_jobs),
        )
        .with_state(state)
}

/// The router with request tracing and wildcard-origin CORS applied.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

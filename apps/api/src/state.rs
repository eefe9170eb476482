use std::sync::Arc;

use crate::config::Credentials;
use crate::listings::ListingSource;
use crate::ranking::pipeline::PipelineLimits;
use crate::ranking::scorer::MatchScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Upstream keys, handed to the pipeline explicitly on every request.
    pub credentials: Credentials,
    pub limits: PipelineLimits,
    /// Listing source. Default: JSearchClient.
    pub listings: Arc<dyn ListingSource>,
    /// Pluggable match scorer. Default: LlmMatchScorer.
    pub scorer: Arc<dyn MatchScorer>,
}

//! Axum route handlers for the job ranking endpoint.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    Json,
};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::search::{SearchRequest, SearchResponse, StatusMessage};
use crate::ranking::pipeline::run;
use crate::state::AppState;

/// GET /api/process-jobs
///
/// Liveness check for the ranking function.
pub async fn handle_liveness() -> Json<StatusMessage> {
    Json(StatusMessage::success("Job Hunter function is running!"))
}

/// POST /api/process-jobs
///
/// Ranks recent listings against the candidate in the body and returns those
/// meeting `score_threshold`. The body is parsed by hand so malformed JSON, and
/// bodies the extractor refuses (e.g. over the size limit), get the same error
/// envelope as every other failure.
pub async fn handle_process_jobs(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<SearchResponse>, AppError> {
    let request_id = Uuid::new_v4();

    async move {
        let body = body.map_err(|rejection| AppError::MalformedRequest(rejection.body_text()))?;
        let request = SearchRequest::from_json(&body)?;

        let result_set = run(
            &request,
            &state.credentials,
            state.limits,
            state.listings.as_ref(),
            state.scorer.as_ref(),
        )
        .await?;

        info!("Returning {} ranked listing(s)", result_set.count());
        Ok::<_, AppError>(Json(SearchResponse::from(result_set)))
    }
    .instrument(info_span!("process_jobs", request_id = %request_id))
    .await
}

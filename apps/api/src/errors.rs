use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::search::StatusMessage;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Only `MissingCredential` and `MalformedRequest` abort a whole request; the
/// upstream variants are recovered per term or per listing inside the pipeline.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required credential(s): {}", .0.join(", "))]
    MissingCredential(Vec<&'static str>),

    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error("Listing source unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Scoring source unavailable: {0}")]
    ScoringUnavailable(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            // The upstream variants are normally recovered by the pipeline and
            // only render here if a caller propagates them directly.
            AppError::MissingCredential(_)
            | AppError::MalformedRequest(_)
            | AppError::UpstreamUnavailable(_)
            | AppError::ScoringUnavailable(_) => self.to_string(),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "An internal server error occurred".to_string()
            }
        };

        let body = Json(StatusMessage::error(message));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_message_names_keys() {
        let err = AppError::MissingCredential(vec!["RAPIDAPI_KEY", "ANTHROPIC_API_KEY"]);
        assert_eq!(
            err.to_string(),
            "Missing required credential(s): RAPIDAPI_KEY, ANTHROPIC_API_KEY"
        );
    }

    #[test]
    fn test_every_variant_renders_as_500() {
        let errors = vec![
            AppError::MissingCredential(vec!["RAPIDAPI_KEY"]),
            AppError::MalformedRequest("expected value".to_string()),
            AppError::UpstreamUnavailable("timeout".to_string()),
            AppError::ScoringUnavailable("timeout".to_string()),
            AppError::Internal(anyhow::anyhow!("boom")),
        ];
        for err in errors {
            assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}

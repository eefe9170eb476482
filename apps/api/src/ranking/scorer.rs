//! Match scoring — pluggable, trait-based scorer rating a listing against the candidate.
//!
//! Default: `LlmMatchScorer`, which asks the scoring source for a 0–100 score.
//! Upstream and parse failures degrade to `NEUTRAL_SCORE` instead of erroring,
//! so one bad listing never aborts the pipeline.

use async_trait::async_trait;
use serde_json::Value;
use tracing::warn;

use crate::config::{Credentials, SCORING_KEY_VAR};
use crate::errors::AppError;
use crate::listings::Listing;
use crate::llm_client::{extract_first_json_object, GenerationSettings, LlmClient};
use crate::ranking::prompts::{build_match_prompt, match_system};

/// Score returned when the scoring source fails or its answer cannot be parsed.
pub const NEUTRAL_SCORE: i64 = 50;

const SCORING_SETTINGS: GenerationSettings = GenerationSettings {
    max_tokens: 200,
    temperature: 0.1,
};

/// The match scorer trait. Carried in `AppState` as `Arc<dyn MatchScorer>`.
///
/// The returned score is raw: range enforcement belongs to the pipeline.
#[async_trait]
pub trait MatchScorer: Send + Sync {
    async fn score(
        &self,
        listing: &Listing,
        resume_text: &str,
        preferences: &str,
        credentials: &Credentials,
    ) -> Result<i64, AppError>;
}

pub struct LlmMatchScorer {
    llm: LlmClient,
}

impl LlmMatchScorer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl MatchScorer for LlmMatchScorer {
    async fn score(
        &self,
        listing: &Listing,
        resume_text: &str,
        preferences: &str,
        credentials: &Credentials,
    ) -> Result<i64, AppError> {
        let api_key = credentials
            .scoring_api_key
            .as_deref()
            .ok_or_else(|| AppError::MissingCredential(vec![SCORING_KEY_VAR]))?;

        let prompt = build_match_prompt(listing, resume_text, preferences);

        let text = match self
            .llm
            .complete(api_key, &prompt, &match_system(), SCORING_SETTINGS)
            .await
        {
            Ok(text) => text,
            Err(e) => {
                warn!(
                    "Scoring '{}' failed, using neutral score: {e}",
                    listing.title()
                );
                return Ok(NEUTRAL_SCORE);
            }
        };

        Ok(parse_match_score(&text).unwrap_or_else(|| {
            warn!(
                "Unparseable score for '{}', using neutral score",
                listing.title()
            );
            NEUTRAL_SCORE
        }))
    }
}

/// Reads the `score` field of the first JSON object embedded in a scoring response.
///
/// Accepts integers, floats (truncated) and numeric strings.
pub fn parse_match_score(text: &str) -> Option<i64> {
    let verdict = extract_first_json_object(text)?;

    match verdict.get("score")? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|f| f as i64))
        }
        _ => None,
    }
}

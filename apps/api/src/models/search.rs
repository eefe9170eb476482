use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::listings::Listing;

pub const DEFAULT_SEARCH_TERM: &str = "UX Designer";
pub const DEFAULT_LOCATION: &str = "United States";
pub const DEFAULT_SCORE_THRESHOLD: i64 = 70;

/// Label carried on every result to name the listing source.
pub const LISTING_SOURCE_LABEL: &str = "jsearch";

/// Raw POST body. Every field is optional and `null` counts as absent.
#[derive(Debug, Default, Deserialize)]
struct SearchRequestBody {
    search_terms: Option<Vec<String>>,
    location: Option<String>,
    resume_text: Option<String>,
    preferences: Option<String>,
    score_threshold: Option<i64>,
}

/// A candidate's search parameters with defaults applied. Built once per request.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub search_terms: Vec<String>,
    pub location: String,
    pub resume_text: String,
    pub preferences: String,
    pub score_threshold: i64,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            search_terms: vec![DEFAULT_SEARCH_TERM.to_string()],
            location: DEFAULT_LOCATION.to_string(),
            resume_text: String::new(),
            preferences: String::new(),
            score_threshold: DEFAULT_SCORE_THRESHOLD,
        }
    }
}

impl SearchRequest {
    /// Parses a JSON request body, applying defaults for absent fields.
    pub fn from_json(body: &[u8]) -> Result<Self, AppError> {
        let raw: SearchRequestBody = serde_json::from_slice(body)
            .map_err(|e| AppError::MalformedRequest(e.to_string()))?;

        let defaults = SearchRequest::default();
        let score_threshold = raw.score_threshold.unwrap_or(defaults.score_threshold);
        if !(0..=100).contains(&score_threshold) {
            return Err(AppError::MalformedRequest(format!(
                "score_threshold must be between 0 and 100, got {score_threshold}"
            )));
        }

        Ok(SearchRequest {
            search_terms: raw.search_terms.unwrap_or(defaults.search_terms),
            location: raw.location.unwrap_or(defaults.location),
            resume_text: raw.resume_text.unwrap_or_default(),
            preferences: raw.preferences.unwrap_or_default(),
            score_threshold,
        })
    }
}

/// A listing that passed scoring, shaped for transport.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredListing {
    pub job_id: String,
    pub job_title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub apply_link: String,
    pub is_remote: bool,
    pub posted_at: String,
    pub match_score: i64,
    pub source: &'static str,
}

impl ScoredListing {
    /// Assembles a result row, truncating the description to `description_chars` characters.
    pub fn from_listing(listing: &Listing, match_score: i64, description_chars: usize) -> Self {
        Self {
            job_id: listing.job_id().to_string(),
            job_title: listing.title().to_string(),
            company: listing.employer().to_string(),
            location: listing.location(),
            description: listing.description().chars().take(description_chars).collect(),
            apply_link: listing.apply_link().to_string(),
            is_remote: listing.is_remote(),
            posted_at: listing.posted_at().to_string(),
            match_score,
            source: LISTING_SOURCE_LABEL,
        }
    }
}

/// Listings meeting the threshold, in pipeline order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    pub results: Vec<ScoredListing>,
}

impl ResultSet {
    pub fn count(&self) -> usize {
        self.results.len()
    }
}

/// `{"status": "success", "results": [...], "total_processed": n}`
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub status: &'static str,
    pub results: Vec<ScoredListing>,
    pub total_processed: usize,
}

impl From<ResultSet> for SearchResponse {
    fn from(set: ResultSet) -> Self {
        let total_processed = set.count();
        Self {
            status: "success",
            results: set.results,
            total_processed,
        }
    }
}

/// `{"status": "...", "message": "..."}` for liveness and error replies.
#[derive(Debug, Serialize, PartialEq)]
pub struct StatusMessage {
    pub status: &'static str,
    pub message: String,
}

impl StatusMessage {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success",
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_object_gets_defaults() {
        let req = SearchRequest::from_json(b"{}").unwrap();
        assert_eq!(req, SearchRequest::default());
        assert_eq!(req.search_terms, vec!["UX Designer"]);
        assert_eq!(req.location, "United States");
        assert_eq!(req.score_threshold, 70);
    }

    #[test]
    fn test_null_fields_count_as_absent() {
        let req =
            SearchRequest::from_json(br#"{"location": null, "score_threshold": null}"#).unwrap();
        assert_eq!(req.location, DEFAULT_LOCATION);
        assert_eq!(req.score_threshold, DEFAULT_SCORE_THRESHOLD);
    }

    #[test]
    fn test_full_body_is_parsed() {
        let body = json!({
            "search_terms": ["UX Designer"],
            "location": "Canada",
            "resume_text": "UX Designer with 10 years",
            "preferences": "Remote preferred",
            "score_threshold": 60
        });
        let req = SearchRequest::from_json(body.to_string().as_bytes()).unwrap();
        assert_eq!(req.location, "Canada");
        assert_eq!(req.resume_text, "UX Designer with 10 years");
        assert_eq!(req.score_threshold, 60);
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let err = SearchRequest::from_json(b"not json").unwrap_err();
        assert!(matches!(err, AppError::MalformedRequest(_)));

        let err = SearchRequest::from_json(b"").unwrap_err();
        assert!(matches!(err, AppError::MalformedRequest(_)));
    }

    #[test]
    fn test_wrong_field_type_is_malformed() {
        let err = SearchRequest::from_json(br#"{"search_terms": "UX"}"#).unwrap_err();
        assert!(matches!(err, AppError::MalformedRequest(_)));
    }

    #[test]
    fn test_out_of_range_threshold_is_malformed() {
        let err = SearchRequest::from_json(br#"{"score_threshold": 101}"#).unwrap_err();
        assert!(matches!(err, AppError::MalformedRequest(_)));
        assert!(SearchRequest::from_json(br#"{"score_threshold": 0}"#).is_ok());
    }

    #[test]
    fn test_scored_listing_truncates_description() {
        let listing = Listing {
            job_id: Some("j1".to_string()),
            job_title: Some("UX Designer".to_string()),
            employer_name: Some("Acme".to_string()),
            job_city: Some("Boston".to_string()),
            job_state: Some("MA".to_string()),
            job_description: Some("é".repeat(600)),
            ..Listing::default()
        };
        let scored = ScoredListing::from_listing(&listing, 88, 500);
        assert_eq!(scored.description.chars().count(), 500);
        assert_eq!(scored.location, "Boston, MA");
        assert_eq!(scored.company, "Acme");
        assert_eq!(scored.match_score, 88);
        assert_eq!(scored.source, LISTING_SOURCE_LABEL);
    }

    #[test]
    fn test_response_envelope_shape() {
        let response = SearchResponse::from(ResultSet::default());
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value, json!({"status": "success", "results": [], "total_processed": 0}));
    }

    #[test]
    fn test_error_envelope_shape() {
        let value = serde_json::to_value(StatusMessage::error("boom")).unwrap();
        assert_eq!(value, json!({"status": "error", "message": "boom"}));
    }
}

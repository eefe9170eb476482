//! Ranking pipeline — orchestrates term extraction, listing fetch, dedup, scoring and filtering.
//!
//! Flow: check credentials → extract_terms → fetch (first N terms) → dedup_listings →
//!       score (first M listings) → clamp → threshold filter → ResultSet.
//!
//! Best effort: a failed term or listing is logged and skipped. Only a missing
//! credential aborts the run, and it does so before any upstream call.

use tracing::{info, warn};

use crate::config::Credentials;
use crate::errors::AppError;
use crate::listings::dedup::dedup_listings;
use crate::listings::{Listing, ListingSource};
use crate::models::search::{ResultSet, ScoredListing, SearchRequest, DEFAULT_SEARCH_TERM};
use crate::ranking::scorer::MatchScorer;
use crate::ranking::terms::{extract_terms, DEFAULT_TERM_LIMIT};

/// Bounds on upstream work per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineLimits {
    /// Terms sent to the listing source.
    pub max_terms: usize,
    /// Deduplicated listings sent to the scorer.
    pub max_scored_listings: usize,
    /// Terms requested from the extractor.
    pub term_limit: usize,
    /// Description characters kept per result.
    pub description_chars: usize,
}

impl Default for PipelineLimits {
    fn default() -> Self {
        Self {
            max_terms: 3,
            max_scored_listings: 3,
            term_limit: DEFAULT_TERM_LIMIT,
            description_chars: 500,
        }
    }
}

/// Runs one ranking request end to end.
pub async fn run(
    request: &SearchRequest,
    credentials: &Credentials,
    limits: PipelineLimits,
    source: &dyn ListingSource,
    scorer: &dyn MatchScorer,
) -> Result<ResultSet, AppError> {
    let missing = credentials.missing();
    if !missing.is_empty() {
        return Err(AppError::MissingCredential(missing));
    }

    let terms = search_terms(request, limits.term_limit);
    info!("Searching {} term(s): {:?}", terms.len().min(limits.max_terms), terms);

    let mut listings: Vec<Listing> = Vec::new();
    for term in terms.iter().take(limits.max_terms) {
        match source.fetch(term, &request.location, credentials).await {
            Ok(found) => {
                info!("Fetched {} listing(s) for '{term}'", found.len());
                listings.extend(found);
            }
            Err(e) => warn!("Skipping term '{term}': {e}"),
        }
    }

    let listings = dedup_listings(listings);
    info!("{} unique listing(s) after dedup", listings.len());

    let mut results = Vec::new();
    for listing in listings.iter().take(limits.max_scored_listings) {
        let score = match scorer
            .score(listing, &request.resume_text, &request.preferences, credentials)
            .await
        {
            Ok(score) => score.clamp(0, 100),
            Err(e) => {
                warn!("Skipping listing '{}': {e}", listing.title());
                continue;
            }
        };

        if score >= request.score_threshold {
            results.push(ScoredListing::from_listing(
                listing,
                score,
                limits.description_chars,
            ));
        }
    }

    info!(
        "{} listing(s) met threshold {}",
        results.len(),
        request.score_threshold
    );
    Ok(ResultSet { results })
}

/// Extracted terms, or the request's first term, or the default term.
fn search_terms(request: &SearchRequest, term_limit: usize) -> Vec<String> {
    let terms = extract_terms(&request.resume_text, &request.preferences, term_limit);
    if !terms.is_empty() {
        return terms;
    }

    let fallback = request
        .search_terms
        .first()
        .filter(|t| !t.trim().is_empty())
        .map(String::as_str)
        .unwrap_or(DEFAULT_SEARCH_TERM);
    vec![fallback.to_string()]
}

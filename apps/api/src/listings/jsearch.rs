//! JSearch (RapidAPI) listing source.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::{Credentials, LISTING_KEY_VAR};
use crate::errors::AppError;
use crate::listings::{Listing, ListingSource};

/// Recency window accepted by JSearch's `date_posted` filter.
const DATE_POSTED_WINDOW: &str = "week";
const PAGE: &str = "1";
const NUM_PAGES: &str = "1";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Records are kept as raw values so one odd record cannot fail the page.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Option<Vec<Value>>,
}

#[derive(Clone)]
pub struct JSearchClient {
    client: Client,
    host: String,
    base_url: String,
}

impl JSearchClient {
    pub fn new(host: String) -> Self {
        let base_url = format!("https://{host}");
        Self::with_base_url(host, base_url)
    }

    /// Sends requests to `base_url` while still announcing `host` in the RapidAPI header.
    pub fn with_base_url(host: String, base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            host,
            base_url,
        }
    }

    fn search_url(&self) -> String {
        format!("{}/search", self.base_url.trim_end_matches('/'))
    }
}

/// Query parameters for a single-page search of the last week's postings.
fn search_params(term: &str, location: &str) -> Vec<(&'static str, String)> {
    vec![
        ("query", format!("{term} in {location}")),
        ("page", PAGE.to_string()),
        ("num_pages", NUM_PAGES.to_string()),
        ("date_posted", DATE_POSTED_WINDOW.to_string()),
    ]
}

/// Converts each raw record independently, dropping the ones that are not objects.
fn decode_listings(records: Vec<Value>, term: &str) -> Vec<Listing> {
    let total = records.len();
    let listings: Vec<Listing> = records
        .into_iter()
        .filter_map(|record| match serde_json::from_value::<Listing>(record) {
            Ok(listing) => Some(listing),
            Err(e) => {
                warn!("Skipping undecodable listing for '{term}': {e}");
                None
            }
        })
        .collect();

    if listings.len() < total {
        debug!("Kept {} of {total} records for '{term}'", listings.len());
    }
    listings
}

#[async_trait]
impl ListingSource for JSearchClient {
    async fn fetch(
        &self,
        term: &str,
        location: &str,
        credentials: &Credentials,
    ) -> Result<Vec<Listing>, AppError> {
        let api_key = credentials
            .listing_api_key
            .as_deref()
            .ok_or_else(|| AppError::MissingCredential(vec![LISTING_KEY_VAR]))?;

        let response = self
            .client
            .get(self.search_url())
            .header("X-RapidAPI-Key", api_key)
            .header("X-RapidAPI-Host", &self.host)
            .query(&search_params(term, location))
            .send()
            .await
            .map_err(|e| AppError::UpstreamUnavailable(format!("request for '{term}' failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::UpstreamUnavailable(format!(
                "search for '{term}' returned {status}"
            )));
        }

        let body: SearchResponse = response.json().await.map_err(|e| {
            AppError::UpstreamUnavailable(format!("undecodable response for '{term}': {e}"))
        })?;

        let listings = decode_listings(body.data.unwrap_or_default(), term);
        debug!("JSearch returned {} listings for '{term}'", listings.len());
        Ok(listings)
    }
}

//! Job listings — the raw record returned by the listing source, the trait the
//! ranking pipeline fetches through, and identity-based deduplication.

use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::config::Credentials;
use crate::errors::AppError;

pub mod dedup;
pub mod jsearch;

/// A single job posting as returned by the listing source.
///
/// Every attribute is optional upstream. Accessors default missing strings to
/// `""` and a missing remote flag to `false`. A field of unexpected type decodes
/// as absent (numbers are kept as their decimal text) instead of failing the record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Listing {
    #[serde(default, deserialize_with = "lenient_string")]
    pub job_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub job_title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub employer_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub job_city: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub job_state: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub job_description: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub job_apply_link: Option<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub job_is_remote: Option<bool>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub job_posted_at: Option<String>,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => Some(b),
        Value::String(s) => s.trim().to_ascii_lowercase().parse::<bool>().ok(),
        Value::Number(n) => n.as_i64().map(|i| i != 0),
        _ => None,
    })
}

impl Listing {
    pub fn job_id(&self) -> &str {
        self.job_id.as_deref().unwrap_or_default()
    }

    pub fn title(&self) -> &str {
        self.job_title.as_deref().unwrap_or_default()
    }

    pub fn employer(&self) -> &str {
        self.employer_name.as_deref().unwrap_or_default()
    }

    pub fn city(&self) -> &str {
        self.job_city.as_deref().unwrap_or_default()
    }

    pub fn state(&self) -> &str {
        self.job_state.as_deref().unwrap_or_default()
    }

    pub fn description(&self) -> &str {
        self.job_description.as_deref().unwrap_or_default()
    }

    pub fn apply_link(&self) -> &str {
        self.job_apply_link.as_deref().unwrap_or_default()
    }

    pub fn is_remote(&self) -> bool {
        self.job_is_remote.unwrap_or(false)
    }

    pub fn posted_at(&self) -> &str {
        self.job_posted_at.as_deref().unwrap_or_default()
    }

    /// "city, state", dropping whichever side is empty.
    pub fn location(&self) -> String {
        match (self.city(), self.state()) {
            ("", state) => state.to_string(),
            (city, "") => city.to_string(),
            (city, state) => format!("{city}, {state}"),
        }
    }
}

/// The listing source seam. `JSearchClient` is the production backend;
/// tests substitute stubs.
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Issues one bounded query for `term` within `location`, restricted to recent postings.
    ///
    /// Fails with `MissingCredential` before any network call when the listing key is
    /// absent, and with `UpstreamUnavailable` when the call fails or returns non-success.
    async fn fetch(
        &self,
        term: &str,
        location: &str,
        credentials: &Credentials,
    ) -> Result<Vec<Listing>, AppError>;
}

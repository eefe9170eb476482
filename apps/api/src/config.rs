use anyhow::{Context, Result};

use crate::ranking::pipeline::PipelineLimits;

/// Environment variable holding the RapidAPI key for the JSearch listing source.
pub const LISTING_KEY_VAR: &str = "RAPIDAPI_KEY";
/// Environment variable holding the Anthropic key for the scoring source.
pub const SCORING_KEY_VAR: &str = "ANTHROPIC_API_KEY";

const DEFAULT_JSEARCH_HOST: &str = "jsearch.p.rapidapi.com";

/// Application configuration loaded from environment variables.
///
/// Credentials are optional here: their absence is reported per request as
/// `AppError::MissingCredential`, not at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub rapidapi_key: Option<String>,
    pub anthropic_api_key: Option<String>,
    pub jsearch_host: String,
    pub max_search_terms: usize,
    pub max_scored_listings: usize,
    pub port: u16,
    pub rust_log: String,
}

/// Upstream credentials, passed explicitly into the ranking pipeline.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub listing_api_key: Option<String>,
    pub scoring_api_key: Option<String>,
}

impl Credentials {
    /// Names of the environment variables whose values are absent, listing key first.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.listing_api_key.is_none() {
            missing.push(LISTING_KEY_VAR);
        }
        if self.scoring_api_key.is_none() {
            missing.push(SCORING_KEY_VAR);
        }
        missing
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = PipelineLimits::default();

        Ok(Config {
            rapidapi_key: optional_env(LISTING_KEY_VAR),
            anthropic_api_key: optional_env(SCORING_KEY_VAR),
            jsearch_host: optional_env("JSEARCH_HOST")
                .unwrap_or_else(|| DEFAULT_JSEARCH_HOST.to_string()),
            max_search_terms: positive_env("MAX_SEARCH_TERMS", defaults.max_terms)?,
            max_scored_listings: positive_env("MAX_SCORED_LISTINGS", defaults.max_scored_listings)?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            listing_api_key: self.rapidapi_key.clone(),
            scoring_api_key: self.anthropic_api_key.clone(),
        }
    }

    pub fn limits(&self) -> PipelineLimits {
        PipelineLimits {
            max_terms: self.max_search_terms,
            max_scored_listings: self.max_scored_listings,
            ..PipelineLimits::default()
        }
    }
}

/// Reads an environment variable, treating unset, empty and whitespace-only values as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn positive_env(key: &str, default: usize) -> Result<usize> {
    let Some(raw) = optional_env(key) else {
        return Ok(default);
    };
    let value = raw
        .parse::<usize>()
        .with_context(|| format!("{key} must be a positive integer"))?;
    if value == 0 {
        anyhow::bail!("{key} must be a positive integer");
    }
    Ok(value)
}

/// LLM Client — the single point of entry for all scoring-source calls.
///
/// No other module may call the Anthropic API directly.
/// Calls are single-shot: a failed call is terminal for its unit of work, never retried.
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
/// The model used for all match-scoring calls. Hardcoded to keep scores comparable.
pub const MODEL: &str = "claude-3-5-haiku-latest";
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// Output bounds for a single call.
#[derive(Debug, Clone, Copy)]
pub struct GenerationSettings {
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    system: &'a str,
    messages: Vec<AnthropicMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LlmResponse {
    pub content: Vec<ContentBlock>,
    pub usage: Usage,
}

#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl LlmResponse {
    /// Extracts the text content from the first text block.
    pub fn text(&self) -> Option<&str> {
        self.content
            .iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

/// Wraps the Anthropic Messages API. The API key is supplied per call so the
/// client carries no credentials of its own.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    endpoint: String,
}

impl LlmClient {
    pub fn new() -> Self {
        Self::with_endpoint(ANTHROPIC_API_URL.to_string())
    }

    /// A client posting to `endpoint` instead of the public Messages API.
    pub fn with_endpoint(endpoint: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            endpoint,
        }
    }

    /// Makes a single call to the Messages API and returns the text of the first text block.
    pub async fn complete(
        &self,
        api_key: &str,
        prompt: &str,
        system: &str,
        settings: GenerationSettings,
    ) -> Result<String, LlmError> {
        let request_body = AnthropicRequest {
            model: MODEL,
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
            system,
            messages: vec![AnthropicMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<AnthropicError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let llm_response: LlmResponse = response.json().await?;

        debug!(
            "LLM call succeeded: input_tokens={}, output_tokens={}",
            llm_response.usage.input_tokens, llm_response.usage.output_tokens
        );

        llm_response
            .text()
            .map(str::to_string)
            .ok_or(LlmError::EmptyContent)
    }
}

impl Default for LlmClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Finds the first well-formed JSON object embedded in free text.
///
/// Tolerates prose and markdown fences around the object. Each `{` is tried as a
/// candidate start; the first balanced span that parses as an object wins.
pub fn extract_first_json_object(text: &str) -> Option<serde_json::Value> {
    let bytes = text.as_bytes();

    for (start, _) in text.match_indices('{') {
        let Some(end) = balanced_object_end(bytes, start) else {
            continue;
        };
        if let Ok(value @ serde_json::Value::Object(_)) =
            serde_json::from_str::<serde_json::Value>(&text[start..=end])
        {
            return Some(value);
        }
    }

    None
}

/// Byte index of the `}` closing the object opened at `start`, honouring string literals.
fn balanced_object_end(bytes: &[u8], start: usize) -> Option<usize> {
    let (mut depth, mut in_str, mut escape) = (0usize, false, false);

    for (i, &b) in bytes.iter().enumerate().skip(start) {
        if in_str {
            if escape {
                escape = false;
            } else if b == b'\\' {
                escape = true;
            } else if b == b'"' {
                in_str = false;
            }
            continue;
        }
        match b {
            b'"' => in_str = true,
            b'{' => depth += 1,
            b'}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }

    None
}

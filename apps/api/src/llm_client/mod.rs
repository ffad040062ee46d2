/// LLM Client — the single point of entry for all provider calls.
///
/// Both supported providers speak the OpenAI chat completions protocol, so one
/// HTTP client covers them; only the base URL, key, and model differ.
/// Handlers depend on the `CompletionProvider` trait, never on `LlmClient` directly.
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::Config;

/// Sampling temperature used for every completion.
pub const TEMPERATURE: f32 = 0.7;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Provider failure, classified so callers can decide on a retry policy.
/// No retry is performed inside this module.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("authentication failed (status {status}): {message}")]
    Authentication { status: u16, message: String },

    #[error("rate limited: {0}")]
    RateLimited(String),

    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(reqwest::Error),
}

impl LlmError {
    /// Whether a caller could reasonably try the same request again.
    pub fn is_retryable(&self) -> bool {
        match self {
            LlmError::RateLimited(_) | LlmError::Timeout(_) | LlmError::Http(_) => true,
            LlmError::Api { status, .. } => *status >= 500,
            LlmError::Authentication { .. } | LlmError::MalformedResponse(_) => false,
        }
    }
}

impl From<reqwest::Error> for LlmError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            LlmError::Timeout(e.to_string())
        } else if e.is_decode() {
            LlmError::MalformedResponse(e.to_string())
        } else {
            LlmError::Http(e)
        }
    }
}

/// Something that turns a system + human prompt pair into a single text completion.
///
/// Carried in `AppState` as `Arc<dyn CompletionProvider>`.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, system: &str, human: &str) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

// Only logged; providers are free to omit either count.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Gemini's OpenAI-compatible endpoint sometimes wraps the envelope in a list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ApiErrorPayload {
    Single(ApiErrorEnvelope),
    List(Vec<ApiErrorEnvelope>),
}

impl ApiErrorPayload {
    fn into_message(self) -> Option<String> {
        match self {
            ApiErrorPayload::Single(e) => Some(e.error.message),
            ApiErrorPayload::List(list) => list.into_iter().next().map(|e| e.error.message),
        }
    }
}

/// Gemini rejects bad keys with 400 rather than 401.
const INVALID_KEY_MARKERS: &[&str] = &["API key not valid", "API_KEY_INVALID"];

/// HTTP client for the configured chat completions provider.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl LlmClient {
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_endpoint(
            format!("{}/chat/completions", config.provider.base_url()),
            config.provider.api_key(),
            config.model(),
        )
    }

    fn with_endpoint(endpoint: String, api_key: &str, model: &str) -> Result<Self> {
        Ok(Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .context("Failed to build HTTP client")?,
            endpoint,
            api_key: api_key.to_string(),
            model: model.to_string(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl CompletionProvider for LlmClient {
    async fn complete(&self, system: &str, human: &str) -> Result<String, LlmError> {
        let request_body = ChatRequest {
            model: &self.model,
            temperature: TEMPERATURE,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: human,
                },
            ],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            debug!("LLM API returned {}: {}", status, body);
            return Err(classify_failure(status, &body));
        }

        extract_completion(&body)
    }
}

/// Maps a non-success status and its body to an error variant.
fn classify_failure(status: StatusCode, body: &str) -> LlmError {
    let message = serde_json::from_str::<ApiErrorPayload>(body)
        .ok()
        .and_then(ApiErrorPayload::into_message)
        .unwrap_or_else(|| body.to_string());

    let invalid_key = status == StatusCode::BAD_REQUEST
        && INVALID_KEY_MARKERS.iter().any(|m| message.contains(m));

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => LlmError::Authentication {
            status: status.as_u16(),
            message,
        },
        _ if invalid_key => LlmError::Authentication {
            status: status.as_u16(),
            message,
        },
        StatusCode::TOO_MANY_REQUESTS => LlmError::RateLimited(message),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => LlmError::Timeout(message),
        _ => LlmError::Api {
            status: status.as_u16(),
            message,
        },
    }
}

/// Pulls the first choice's text out of a chat completions response body.
fn extract_completion(body: &str) -> Result<String, LlmError> {
    let parsed: ChatResponse =
        serde_json::from_str(body).map_err(|e| LlmError::MalformedResponse(e.to_string()))?;

    if let Some(usage) = &parsed.usage {
        debug!(
            "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
            usage.prompt_tokens, usage.completion_tokens
        );
    }

    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .ok_or_else(|| LlmError::MalformedResponse("no text content in completion".to_string()))
}

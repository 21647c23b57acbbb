//! OpenAI-compatible chat-completions client.
//!
//! Speaks `POST {base_url}/chat/completions` with bearer auth. Any
//! service exposing the OpenAI wire format (proxies, local servers)
//! works by pointing `base_url` at it.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::config::ProviderConfig;
use crate::constants::DEFAULT_BASE_URL;
use crate::models::ChatMessage;

use super::{CompletionProvider, ProviderError};

/// Maximum length of response body text quoted in error messages.
const ERROR_BODY_PREVIEW_LEN: usize = 400;

/// Wire format of a chat-completions request.
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
}

/// Wire format of a chat-completions response (only the fields we read).
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Chat-completions backed provider.
pub struct OpenAiProvider {
    client: reqwest::Client,
    config: ProviderConfig,
}

impl OpenAiProvider {
    /// Create a provider from config.
    ///
    /// Fails with [`ProviderError::NotConfigured`] when no API key is
    /// present, so a misconfigured run stops before any request goes
    /// out.
    pub fn new(config: ProviderConfig) -> Result<Self, ProviderError> {
        if config.api_key.is_none() {
            return Err(ProviderError::NotConfigured(format!(
                "no API key found. Set {} (or {}).",
                crate::constants::ENV_API_KEY,
                crate::constants::ENV_OPENAI_API_KEY
            )));
        }
        Ok(Self {
            client: reqwest::Client::new(),
            config,
        })
    }

    fn endpoint(&self) -> String {
        let base = self.config.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        format!("{}/chat/completions", base.trim_end_matches('/'))
    }

    fn api_key(&self) -> Result<&str, ProviderError> {
        self.config
            .api_key
            .as_deref()
            .ok_or_else(|| ProviderError::NotConfigured("missing API key".to_string()))
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, ProviderError> {
        let request = ChatRequest {
            model: &self.config.model,
            messages,
            temperature: self.config.temperature,
        };

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(self.api_key()?)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::ApiError(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::ApiError(describe_failure(status, &body)));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        extract_content(parsed)
    }
}

/// Pull the first choice's content out of a parsed response.
///
/// A response with no choices, null content, or an empty string counts
/// as no result — the orchestrator treats it like any other failed
/// exchange.
fn extract_content(response: ChatResponse) -> Result<String, ProviderError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.is_empty())
        .ok_or(ProviderError::EmptyResponse)
}

/// Render a non-success HTTP status as a short, user-facing message.
fn describe_failure(status: StatusCode, body: &str) -> String {
    let reason = match status.as_u16() {
        401 | 403 => "authentication failed (check your API key)",
        404 => "endpoint not found (check base_url)",
        429 => "rate limited by the API",
        500..=599 => "service error",
        _ => "unexpected status",
    };
    let excerpt: String = body.chars().take(ERROR_BODY_PREVIEW_LEN).collect();
    if excerpt.trim().is_empty() {
        format!("{reason} (HTTP {status})")
    } else {
        format!("{reason} (HTTP {status}): {}", excerpt.trim())
    }
}

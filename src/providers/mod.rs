//! CompletionProvider trait and chat API integration.
//!
//! Abstracts the single request/response exchange with the completion
//! service so the orchestrator can be driven by fakes in tests.

pub mod openai;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::ChatMessage;

/// Errors from the completion provider.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("completion API error: {0}")]
    ApiError(String),

    #[error("failed to parse completion response: {0}")]
    ParseError(String),

    #[error("provider not configured: {0}")]
    NotConfigured(String),

    #[error("completion response contained no content")]
    EmptyResponse,
}

/// Trait for one chat-completion exchange.
///
/// Implementations send the ordered messages and return the first
/// choice's reply text. Every failure is an error value; the caller
/// decides whether a failed exchange is fatal.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send `messages` and return the model's reply.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, ProviderError>;
}

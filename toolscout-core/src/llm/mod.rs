//! Completion-provider abstraction for the recommendation pipeline.
//!
//! This module provides a trait-based abstraction over text-completion
//! services (Gemini in production, a fake for tests). Providers take a
//! prompt and return the model's raw reply text; everything downstream of
//! that is the extractor's job.

mod fake;
mod gemini;

pub use fake::FakeProvider;
pub use gemini::GeminiProvider;

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

use crate::config::RecommenderConfig;

/// Error type for completion calls.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API returned error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse response body: {0}")]
    ParseError(String),

    #[error("Completion response contained no candidate text")]
    MissingContent,

    #[error("Rate limited, retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Provider not configured: {0}")]
    NotConfigured(String),
}

/// Trait for completion providers.
///
/// Implementations should be stateless and thread-safe. One call to
/// [`complete`](LlmProvider::complete) makes at most one external request;
/// retries are left to callers that want them.
#[async_trait]
pub trait LlmProvider: Send + Sync + fmt::Debug {
    /// Send a prompt to the completion service and get the raw reply text.
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;

    /// Get the provider name (e.g., "gemini", "fake").
    fn provider_name(&self) -> &'static str;

    /// Get the model name (e.g., "gemini-2.0-flash").
    fn model_name(&self) -> &str;
}

/// Create a provider from environment configuration.
///
/// `TOOLSCOUT_PROVIDER` selects the implementation:
/// - "gemini" (default): requires `GEMINI_API_KEY`, see [`RecommenderConfig`]
/// - "fake": deterministic canned responses, no network
pub fn create_provider_from_env() -> Result<Box<dyn LlmProvider>, LlmError> {
    let provider = std::env::var("TOOLSCOUT_PROVIDER").unwrap_or_else(|_| "gemini".to_string());

    match provider.as_str() {
        "fake" => Ok(Box::new(FakeProvider::with_recommendation_responses())),
        "gemini" => {
            let config = RecommenderConfig::from_env()
                .map_err(|e| LlmError::NotConfigured(e.to_string()))?;
            Ok(Box::new(GeminiProvider::new(
                config.api_key,
                config.model,
                config.base_url,
            )))
        }
        other => Err(LlmError::NotConfigured(format!(
            "Unknown provider: {}",
            other
        ))),
    }
}

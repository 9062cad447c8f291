//! Pipeline configuration from environment variables.

use std::env;
use thiserror::Error;

use crate::currency::DEFAULT_EXCHANGE_RATE;

/// Default base URL for the Google generative language API.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model to use.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}

/// Recommendation pipeline configuration.
#[derive(Debug, Clone)]
pub struct RecommenderConfig {
    /// API key for the completion service.
    pub api_key: String,
    /// Model name (e.g., "gemini-2.0-flash").
    pub model: String,
    /// Base URL for the completion API.
    pub base_url: String,
    /// USD to LKR exchange rate applied to extracted price strings.
    pub exchange_rate: f64,
}

impl RecommenderConfig {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `GEMINI_API_KEY`: API key for the completion service
    ///
    /// Optional:
    /// - `TOOLSCOUT_MODEL`: Model name (default: "gemini-2.0-flash")
    /// - `TOOLSCOUT_BASE_URL`: API base URL (default: Google generative language endpoint)
    /// - `TOOLSCOUT_EXCHANGE_RATE`: USD to LKR rate (default: 325)
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| ConfigError::MissingEnvVar("GEMINI_API_KEY".to_string()))?;

        let model = env::var("TOOLSCOUT_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let base_url =
            env::var("TOOLSCOUT_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let exchange_rate = exchange_rate_from_env();

        Ok(Self {
            api_key,
            model,
            base_url,
            exchange_rate,
        })
    }
}

/// Read the exchange rate on its own, falling back to the default.
///
/// Split out from [`RecommenderConfig::from_env`] so callers running against
/// the fake provider can configure conversion without an API key.
pub fn exchange_rate_from_env() -> f64 {
    env::var("TOOLSCOUT_EXCHANGE_RATE")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_EXCHANGE_RATE)
}

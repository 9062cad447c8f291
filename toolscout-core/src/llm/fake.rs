//! Fake completion provider for testing.
//!
//! This provider returns deterministic responses based on prompt matching,
//! allowing pipeline tests to run without network access or API costs.

use super::{LlmError, LlmProvider};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

/// A fake completion provider for testing.
///
/// Responses are matched by checking if the prompt contains a registered
/// substring. If no match is found, returns a default response or error.
/// Calls are counted so tests can assert how often the network would have
/// been hit.
#[derive(Debug)]
pub struct FakeProvider {
    /// Map of prompt substring -> response
    responses: RwLock<HashMap<String, String>>,
    /// Default response if no match found
    default_response: Option<String>,
    /// Number of complete() invocations
    calls: AtomicUsize,
}

impl Default for FakeProvider {
    fn default() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            default_response: Some("[]".to_string()),
            calls: AtomicUsize::new(0),
        }
    }
}

impl FakeProvider {
    /// Create a new FakeProvider with no registered responses.
    pub fn new() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            default_response: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Create a FakeProvider that returns a specific response for prompts containing a substring.
    pub fn with_response(prompt_contains: &str, response: &str) -> Self {
        let mut provider = Self::new();
        provider.add_response(prompt_contains, response);
        provider
    }

    /// Add a response for prompts containing a specific substring.
    pub fn add_response(&mut self, prompt_contains: &str, response: &str) {
        self.responses
            .write()
            .unwrap()
            .insert(prompt_contains.to_string(), response.to_string());
    }

    /// Set the default response when no pattern matches.
    pub fn with_default_response(mut self, response: &str) -> Self {
        self.default_response = Some(response.to_string());
        self
    }

    /// Number of completion calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Create a FakeProvider with standard responses for pipeline testing.
    ///
    /// The recommendation response is wrapped in a fenced code block with
    /// surrounding prose, matching what the real model tends to send back.
    pub fn with_recommendation_responses() -> Self {
        let mut provider = Self::new();

        provider.add_response(
            "software recommendations",
            r#"Here are some options for you:

```json
[
  {
    "id": 1,
    "name": "DaVinci Resolve",
    "category": "Multimedia",
    "description": "Professional video editing and color grading suite.",
    "officialWebsite": "https://www.blackmagicdesign.com/products/davinciresolve",
    "pricing": "Freemium",
    "priceRange": "$295",
    "platforms": ["Windows", "macOS", "Linux"],
    "features": ["Video Editing", "Color Correction"],
    "bestFor": ["Content Creators", "Professional Editing"],
    "alternatives": ["Adobe Premiere Pro", "Final Cut Pro"]
  },
  {
    "id": 2,
    "name": "OBS Studio",
    "category": "Multimedia",
    "description": "Open-source screen recording and live streaming.",
    "officialWebsite": "https://obsproject.com",
    "pricing": "Free",
    "priceRange": "Free",
    "platforms": ["Windows", "macOS", "Linux"],
    "features": ["Screen Recording", "Live Streaming"],
    "bestFor": ["Streamers"],
    "alternatives": ["Streamlabs"]
  }
]
```"#,
        );

        provider.add_response(
            "text completion",
            r#"{"completed_text": "edit videos for youtube", "suggestions": ["edit videos for youtube", "edit videos with color grading", "edit videos on a budget"]}"#,
        );

        provider
    }
}

#[async_trait]
impl LlmProvider for FakeProvider {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let responses = self.responses.read().unwrap();

        // Find first matching pattern (case-insensitive)
        let prompt_lower = prompt.to_lowercase();
        for (pattern, response) in responses.iter() {
            if prompt_lower.contains(&pattern.to_lowercase()) {
                return Ok(response.clone());
            }
        }

        // Return default or error
        match &self.default_response {
            Some(response) => Ok(response.clone()),
            None => Err(LlmError::RequestFailed(format!(
                "FakeProvider: No response configured for prompt (first 100 chars): {}",
                &prompt[..prompt.len().min(100)]
            ))),
        }
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fake_provider_matching() {
        let provider = FakeProvider::with_response("hello", "world");
        let result = provider.complete("Say hello to the user").await.unwrap();
        assert_eq!(result, "world");
    }

    #[tokio::test]
    async fn test_fake_provider_case_insensitive() {
        let provider = FakeProvider::with_response("HELLO", "world");
        let result = provider.complete("hello there").await.unwrap();
        assert_eq!(result, "world");
    }

    #[tokio::test]
    async fn test_fake_provider_no_match() {
        let provider = FakeProvider::new();
        let result = provider.complete("random prompt").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_fake_provider_counts_calls() {
        let provider = FakeProvider::new().with_default_response("[]");
        assert_eq!(provider.call_count(), 0);
        provider.complete("one").await.unwrap();
        provider.complete("two").await.unwrap();
        assert_eq!(provider.call_count(), 2);
    }

    #[tokio::test]
    async fn test_recommendation_responses() {
        let provider = FakeProvider::with_recommendation_responses();

        let result = provider
            .complete("Generate a structured JSON output for software recommendations")
            .await
            .unwrap();
        assert!(result.contains("DaVinci Resolve"));

        let result = provider
            .complete("You are an assistant specializing in software-related text completion")
            .await
            .unwrap();
        assert!(result.contains("suggestions"));
    }
}

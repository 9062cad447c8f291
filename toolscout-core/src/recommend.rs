//! Pipeline entry points: task description in, recommendation records out.
//!
//! Flow is strictly linear: prompt build, one completion call, extraction.
//! The typed functions return tagged failures; the `get_*` variants are the
//! fail-soft surface the UI consumes, degrading every failure to an empty
//! list with the cause reported through the log.

use crate::error::RecommendError;
use crate::extract::{extract_recommendations, extract_suggestions};
use crate::llm::LlmProvider;
use crate::prompts::{render_recommendation_prompt, render_suggestion_prompt};
use crate::types::Recommendation;

/// Get software recommendations for a task description.
///
/// Blank input is rejected before any completion call.
pub async fn recommend(
    provider: &dyn LlmProvider,
    task: &str,
    exchange_rate: f64,
) -> Result<Vec<Recommendation>, RecommendError> {
    if task.trim().is_empty() {
        return Err(RecommendError::EmptyTask);
    }

    let prompt = render_recommendation_prompt(task);
    let raw = provider.complete(&prompt).await?;

    Ok(extract_recommendations(&raw, exchange_rate)?)
}

/// Get completion suggestions for a partial task description.
///
/// Blank input short-circuits to an empty list without a completion call.
pub async fn suggest(
    provider: &dyn LlmProvider,
    partial: &str,
) -> Result<Vec<String>, RecommendError> {
    if partial.trim().is_empty() {
        return Ok(Vec::new());
    }

    let prompt = render_suggestion_prompt(partial);
    let raw = provider.complete(&prompt).await?;

    Ok(extract_suggestions(&raw)?)
}

/// Fail-soft variant of [`recommend`]: failures degrade to an empty list and
/// are reported through the log only.
pub async fn get_recommendations(
    provider: &dyn LlmProvider,
    task: &str,
    exchange_rate: f64,
) -> Vec<Recommendation> {
    match recommend(provider, task, exchange_rate).await {
        Ok(recommendations) => recommendations,
        Err(e) => {
            tracing::error!("Failed to get recommendations: {}", e);
            Vec::new()
        }
    }
}

/// Fail-soft variant of [`suggest`].
pub async fn get_suggestions(provider: &dyn LlmProvider, partial: &str) -> Vec<String> {
    match suggest(provider, partial).await {
        Ok(suggestions) => suggestions,
        Err(e) => {
            tracing::error!("Failed to get suggestions: {}", e);
            Vec::new()
        }
    }
}

//! Debounced scheduling for live-typing suggestion requests.
//!
//! Successive keystrokes must not each trigger a completion call: a request
//! is scheduled only after a quiet period with no further input, newer input
//! supersedes any pending schedule, and results from a stale in-flight
//! request are discarded (last-issued-wins).

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::llm::LlmProvider;
use crate::recommend::get_suggestions;

/// Default quiet period between the last keystroke and the completion call.
pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(400);

/// Debounces suggestion requests for a single input field.
///
/// At most one request is scheduled or in flight at a time; every call to
/// [`input_changed`](SuggestionDebouncer::input_changed) supersedes the
/// previous one. The debouncer holds no other state, so dropping it (or the
/// handles it returns) abandons pending work safely.
#[derive(Debug, Clone)]
pub struct SuggestionDebouncer {
    provider: Arc<dyn LlmProvider>,
    quiet_period: Duration,
    generation: Arc<AtomicU64>,
}

impl SuggestionDebouncer {
    pub fn new(provider: Arc<dyn LlmProvider>, quiet_period: Duration) -> Self {
        Self {
            provider,
            quiet_period,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record an input change and schedule a suggestion request for it.
    ///
    /// The returned handle resolves to `Some(suggestions)` if this input was
    /// still the latest when the quiet period elapsed and the request
    /// finished, or `None` if it was superseded at either point. Blank input
    /// cancels any pending schedule and resolves immediately to an empty
    /// list, with no completion call.
    pub fn input_changed(&self, partial: impl Into<String>) -> JoinHandle<Option<Vec<String>>> {
        let partial = partial.into();
        let scheduled = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let generation = Arc::clone(&self.generation);
        let provider = Arc::clone(&self.provider);
        let quiet_period = self.quiet_period;

        tokio::spawn(async move {
            if partial.trim().is_empty() {
                return Some(Vec::new());
            }

            tokio::time::sleep(quiet_period).await;
            if generation.load(Ordering::SeqCst) != scheduled {
                // Superseded before the quiet period elapsed.
                return None;
            }

            let suggestions = get_suggestions(provider.as_ref(), &partial).await;

            if generation.load(Ordering::SeqCst) != scheduled {
                // A newer request was issued while this one was in flight.
                return None;
            }

            Some(suggestions)
        })
    }
}

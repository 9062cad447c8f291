//! Prompt templates for the completion service.

pub mod recommend;
pub mod suggest;

pub use recommend::render_recommendation_prompt;
pub use suggest::render_suggestion_prompt;

use thiserror::Error;

use crate::llm::LlmError;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("No JSON array found in completion text")]
    NoJsonFound,

    #[error("Invalid JSON in completion text: {0}")]
    InvalidJson(String),
}

#[derive(Error, Debug)]
pub enum RecommendError {
    #[error("Task description is required")]
    EmptyTask,

    #[error("Completion request failed: {0}")]
    Completion(#[from] LlmError),

    #[error("Failed to extract records from completion: {0}")]
    Extraction(#[from] ExtractError),
}

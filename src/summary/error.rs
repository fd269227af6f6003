//! Error types for the AI summary module

use crate::error::Error as CrateError;
use thiserror::Error;

/// Error type for summary operations
#[derive(Debug, Error)]
pub enum SummaryError {
    /// API key missing from the environment
    #[error("Authentication error: {0}")]
    MissingApiKey(String),

    /// The model call failed
    #[error("LLM error: {0}")]
    Llm(String),
}

impl From<SummaryError> for CrateError {
    fn from(err: SummaryError) -> Self {
        CrateError::Summary(err.to_string())
    }
}

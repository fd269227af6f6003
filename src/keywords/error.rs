//! Error types for the keyword matching module

use crate::error::Error as CrateError;
use thiserror::Error;

/// Error type for keyword matching operations
#[derive(Debug, Error)]
pub enum KeywordError {
    /// CSS selector compilation error
    #[error("Selector error: {0}")]
    Selector(String),

    /// No usable keywords left after normalization
    #[error("keyword set is empty after normalization")]
    EmptyKeywordSet,
}

impl From<KeywordError> for CrateError {
    fn from(err: KeywordError) -> Self {
        CrateError::Keyword(err.to_string())
    }
}

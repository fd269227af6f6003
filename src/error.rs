//! Error types for the bibscout crate

use thiserror::Error;

/// Result type for bibscout operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for bibscout operations
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Markdown rendering error
    #[error("Markdown error: {0}")]
    Markdown(#[from] std::io::Error),

    /// Page fetching error
    #[error("Crawl error: {0}")]
    Crawl(String),

    /// Wikipedia stage error
    #[error("Wikipedia error: {0}")]
    Wikipedia(String),

    /// Keyword matching error
    #[error("Keyword error: {0}")]
    Keyword(String),

    /// JSON sink error
    #[error("Store error: {0}")]
    Store(String),

    /// AI summary error
    #[error("Summary error: {0}")]
    Summary(String),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

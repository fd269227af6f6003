//! Error types for the Wikipedia stage

use crate::crawler::CrawlError;
use crate::error::Error as CrateError;
use thiserror::Error;

/// Error type for Wikipedia crawl operations
#[derive(Debug, Error)]
pub enum WikipediaError {
    /// Listing page could not be fetched
    #[error("Crawl error: {0}")]
    Crawl(#[from] CrawlError),

    /// CSS selector compilation error
    #[error("Selector error: {0}")]
    Selector(String),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl From<WikipediaError> for CrateError {
    fn from(err: WikipediaError) -> Self {
        match err {
            WikipediaError::Crawl(e) => e.into(),
            WikipediaError::UrlParse(e) => CrateError::Url(e),
            _ => CrateError::Wikipedia(err.to_string()),
        }
    }
}

//! Page fetch driver for the crawl stages
//!
//! This module provides the HTTP side of both crawl stages: a configured
//! reqwest client with request pacing, handing raw HTML to the pure
//! extractors in the `wikipedia` and `keywords` modules.

mod config;
mod error;
mod fetch;

pub use config::{CrawlerConfig, CrawlerConfigBuilder, DEFAULT_USER_AGENT};
pub use error::CrawlError;
pub use fetch::Fetcher;

use url::Url;

/// A fetched page: the final URL after redirects and the raw HTML body
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL the content was served from; relative links resolve against this
    pub url: Url,

    /// Raw HTML body
    pub html: String,
}

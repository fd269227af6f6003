//! # bibscout - Registration Scout for German Public Libraries
//!
//! This crate collects metadata about German public libraries in three
//! stages: it crawls the Wikipedia list of city libraries for each
//! library's official website, scans those websites for links whose text
//! points at registration and usage information, and asks an AI chat
//! service for a per-library assessment of how a card can be obtained.
//! Results flow between stages as JSON files and come out as Markdown
//! reports.
//!
//! ## Features
//!
//! - Keyword link harvesting with deterministic, order-preserving matching
//! - Wikipedia infobox extraction for official website URLs
//! - Polite fetching with request pacing and bounded concurrency
//! - Rate-limited AI summaries with per-library failure isolation
//! - Markdown report rendering with a colored terminal view
//! - Async API with Tokio
//!
//! ## Example
//!
//! ```rust,no_run
//! use bibscout::crawler::{CrawlerConfig, Fetcher};
//! use bibscout::keywords::{scan_websites, KeywordSet};
//! use url::Url;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let fetcher = Fetcher::new(CrawlerConfig::default())?;
//!     let start_urls = vec![Url::parse("https://stadtbibliothek.example/")?];
//!
//!     let results = scan_websites(&fetcher, &start_urls, &KeywordSet::default()).await;
//!     for record in results {
//!         println!("{}: {} matches", record.source_url, record.urls().len());
//!     }
//!     Ok(())
//! }
//! ```

mod error;

pub mod crawler;
pub mod keywords;
pub mod report;
pub mod store;
pub mod summary;
pub mod wikipedia;

pub use error::Error;

/// Re-export of error types for public use
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::error::Result;
}

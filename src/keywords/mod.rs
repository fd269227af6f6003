//! # Keyword Link Harvesting Module
//!
//! This module scans library websites for links whose text points at
//! registration and usage information. It provides the keyword matching
//! core, the per-site record type, and the driver that walks a list of
//! start pages.
//!
//! ## Key Components
//!
//! - `KeywordSet`: normalized, validated keyword substrings
//! - `KeywordMatchResult`: one record per scanned site
//! - `match_links`: the anchor-matching core
//! - `scan_websites`: fetch-and-match driver over the configured sites
//!
//! ## Matching policy
//!
//! Anchor text is trimmed and lowercased, then tested for any keyword as
//! a substring. Matches are reported in document order, duplicates kept.
//! A site on which nothing matched still produces a record, holding the
//! sentinel entry instead of an empty list.

mod error;
mod matcher;

pub use error::KeywordError;
pub use matcher::match_links;

use futures::stream::{self, StreamExt};
use scraper::Html;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};
use url::Url;

use crate::crawler::{FetchedPage, Fetcher};

/// Placeholder stored when a site yielded no matching link
pub const NO_MATCHES_SENTINEL: &str = "keine gefunden";

/// Link texts that point at registration and usage information
pub const DEFAULT_KEYWORDS: [&str; 7] = [
    "faq",
    "nutzung",
    "ausleihe",
    "anmeldung",
    "mitglied",
    "benutzung",
    "ausweis",
];

/// A set of lowercase keyword substrings, validated at construction
#[derive(Debug, Clone)]
pub struct KeywordSet {
    keywords: Vec<String>,
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self {
            keywords: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

impl KeywordSet {
    /// Build a keyword set from arbitrary strings
    ///
    /// Each keyword is trimmed and lowercased; empty entries are dropped.
    /// An empty set after normalization is rejected, since it could never
    /// match anything.
    pub fn new<I, S>(keywords: I) -> Result<Self, KeywordError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords: Vec<String> = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();

        if keywords.is_empty() {
            return Err(KeywordError::EmptyKeywordSet);
        }

        Ok(Self { keywords })
    }

    /// Test whether any keyword occurs in the given anchor text
    ///
    /// The text is trimmed and lowercased before the substring test, so
    /// "Anmeldungen" matches the keyword `anmeldung`.
    pub fn matches(&self, text: &str) -> bool {
        let text = text.trim().to_lowercase();
        self.keywords.iter().any(|k| text.contains(k.as_str()))
    }

    /// The normalized keywords
    pub fn as_slice(&self) -> &[String] {
        &self.keywords
    }
}

/// One record per scanned library website
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordMatchResult {
    /// The scanned site, after redirects
    pub source_url: String,

    /// Matching link targets in document order, or the sentinel entry
    pub matched_urls: Vec<String>,
}

impl KeywordMatchResult {
    /// Emit a record for a scanned page
    ///
    /// Zero matches become the one-element sentinel list; the sentinel
    /// never co-occurs with real URLs.
    pub fn from_matches(source_url: impl Into<String>, matched_urls: Vec<String>) -> Self {
        let matched_urls = if matched_urls.is_empty() {
            vec![NO_MATCHES_SENTINEL.to_string()]
        } else {
            matched_urls
        };

        Self {
            source_url: source_url.into(),
            matched_urls,
        }
    }

    /// The real matched URLs; empty when the record holds the sentinel
    pub fn urls(&self) -> &[String] {
        if self.matched_urls.len() == 1 && self.matched_urls[0] == NO_MATCHES_SENTINEL {
            &[]
        } else {
            &self.matched_urls
        }
    }
}

/// Scan every start page for keyword-matching links
///
/// Pages are fetched with the fetcher's configured concurrency, results
/// come back in start-URL order. Sites that fail to fetch are logged and
/// skipped; a fetched site always produces exactly one record.
#[instrument(skip_all, fields(sites = start_urls.len()))]
pub async fn scan_websites(
    fetcher: &Fetcher,
    start_urls: &[Url],
    keywords: &KeywordSet,
) -> Vec<KeywordMatchResult> {
    let concurrency = fetcher.config().max_concurrency;

    let results: Vec<Option<KeywordMatchResult>> = stream::iter(start_urls)
        .map(|url| scan_website(fetcher, url, keywords))
        .buffered(concurrency)
        .collect()
        .await;

    let results: Vec<KeywordMatchResult> = results.into_iter().flatten().collect();
    info!("Scanned {} of {} sites", results.len(), start_urls.len());
    results
}

async fn scan_website(
    fetcher: &Fetcher,
    url: &Url,
    keywords: &KeywordSet,
) -> Option<KeywordMatchResult> {
    let page = match fetcher.fetch_page(url).await {
        Ok(page) => page,
        Err(e) => {
            warn!("Failed to fetch {}: {}", url, e);
            return None;
        }
    };

    Some(emit_result(&page, keywords))
}

fn emit_result(page: &FetchedPage, keywords: &KeywordSet) -> KeywordMatchResult {
    let document = Html::parse_document(&page.html);
    let matched = match match_links(&document, &page.url, keywords) {
        Ok(matched) => matched,
        Err(e) => {
            warn!("Matching failed on {}: {}", page.url, e);
            Vec::new()
        }
    };

    KeywordMatchResult::from_matches(page.url.as_str(), matched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawler::CrawlerConfig;
    use mockito::Server;

    #[test]
    fn test_sentinel_substitution_on_empty_matches() {
        let record = KeywordMatchResult::from_matches("https://lib.example/", Vec::new());
        assert_eq!(record.matched_urls, vec![NO_MATCHES_SENTINEL.to_string()]);
        assert!(record.urls().is_empty());
    }

    #[test]
    fn test_real_matches_pass_through() {
        let matches = vec!["https://lib.example/anmeldung".to_string()];
        let record = KeywordMatchResult::from_matches("https://lib.example/", matches.clone());
        assert_eq!(record.matched_urls, matches);
        assert_eq!(record.urls(), matches.as_slice());
    }

    #[test]
    fn test_page_without_anchors_yields_sentinel_record() {
        let page = FetchedPage {
            url: Url::parse("https://lib.example/").unwrap(),
            html: "<html><body><p>Willkommen</p></body></html>".to_string(),
        };

        let record = emit_result(&page, &KeywordSet::default());
        assert_eq!(record.source_url, "https://lib.example/");
        assert_eq!(record.matched_urls, vec![NO_MATCHES_SENTINEL.to_string()]);
    }

    #[test]
    fn test_keyword_set_normalizes_at_construction() {
        let set = KeywordSet::new(["  FAQ ", "Anmeldung", ""]).unwrap();
        assert_eq!(set.as_slice(), ["faq", "anmeldung"]);
        assert!(set.matches("Häufige FAQ Fragen"));
    }

    #[test]
    fn test_empty_keyword_set_is_rejected() {
        let result = KeywordSet::new(["  ", ""]);
        assert!(matches!(result, Err(KeywordError::EmptyKeywordSet)));
    }

    #[test]
    fn test_default_keywords() {
        let set = KeywordSet::default();
        assert_eq!(set.as_slice().len(), 7);
        assert!(set.matches("Bibliotheksausweis"));
        assert!(!set.matches("Öffnungszeiten"));
    }

    #[tokio::test]
    async fn test_scan_websites_end_to_end() {
        let mut server = Server::new_async().await;
        let _with_links = server
            .mock("GET", "/lib-a")
            .with_status(200)
            .with_body(
                r#"<html><body>
                    <a href="/anmeldung">Anmeldung</a>
                    <a href="/news">Aktuelles</a>
                </body></html>"#,
            )
            .create_async()
            .await;
        let _without_links = server
            .mock("GET", "/lib-b")
            .with_status(200)
            .with_body("<html><body><a href=\"/impressum\">Impressum</a></body></html>")
            .create_async()
            .await;
        let _broken = server
            .mock("GET", "/lib-c")
            .with_status(500)
            .create_async()
            .await;

        let config = CrawlerConfig::builder().rate_limit_ms(0).build();
        let fetcher = Fetcher::new(config).unwrap();
        let start_urls: Vec<Url> = ["/lib-a", "/lib-b", "/lib-c"]
            .iter()
            .map(|p| Url::parse(&format!("{}{}", server.url(), p)).unwrap())
            .collect();

        let results = scan_websites(&fetcher, &start_urls, &KeywordSet::default()).await;

        // the failing site produces no record, the others one each
        assert_eq!(results.len(), 2);
        assert_eq!(
            results[0].matched_urls,
            vec![format!("{}/anmeldung", server.url())]
        );
        assert_eq!(
            results[1].matched_urls,
            vec![NO_MATCHES_SENTINEL.to_string()]
        );
    }
}

//! # Wikipedia Crawl Module
//!
//! This module turns the Wikipedia list of German city libraries into
//! library candidate records. It extracts article links from the listing
//! page, visits each article, and pulls the official website out of the
//! library infobox.
//!
//! ## Key Components
//!
//! - `LibraryCandidate`: one record per visited article
//! - `extract_article_links`: listing-page link extraction
//! - `extract_website`: infobox Website-field extraction
//! - `crawl_listing`: the stage driver

mod error;
mod infobox;
mod listing;

pub use error::WikipediaError;
pub use infobox::extract_website;
pub use listing::extract_article_links;

use futures::stream::{self, StreamExt};
use scraper::Html;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};
use url::Url;

use crate::crawler::{FetchedPage, Fetcher};

/// One library per visited Wikipedia article
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryCandidate {
    /// Library name as titled on Wikipedia
    pub name: String,

    /// URL of the Wikipedia article
    pub wikipedia_url: String,

    /// Official website from the infobox, absolute when present
    pub website: Option<String>,
}

impl LibraryCandidate {
    /// Build a candidate record for a visited article
    pub fn new(name: impl Into<String>, wikipedia_url: &Url, website: Option<String>) -> Self {
        Self {
            name: name.into(),
            wikipedia_url: wikipedia_url.to_string(),
            website,
        }
    }
}

/// A link from the listing page to one library article
#[derive(Debug, Clone)]
pub struct ArticleLink {
    /// Article title
    pub name: String,

    /// Absolute article URL
    pub url: Url,
}

/// Crawl the listing page and every linked library article
///
/// The listing fetch is fatal on failure; article-level failures are
/// logged and the candidate is emitted with `website: None`. Articles
/// are fetched with the fetcher's configured concurrency and candidates
/// come back in listing order.
#[instrument(skip(fetcher))]
pub async fn crawl_listing(
    fetcher: &Fetcher,
    listing_url: &Url,
) -> Result<Vec<LibraryCandidate>, WikipediaError> {
    let page = fetcher.fetch_page(listing_url).await?;
    let links = {
        let document = Html::parse_document(&page.html);
        extract_article_links(&document, &page.url)?
    };
    info!("Found {} article links on {}", links.len(), listing_url);

    let concurrency = fetcher.config().max_concurrency;
    let candidates: Vec<LibraryCandidate> = stream::iter(links)
        .map(|link| visit_article(fetcher, link))
        .buffered(concurrency)
        .collect()
        .await;

    info!("Collected {} library candidates", candidates.len());
    Ok(candidates)
}

async fn visit_article(fetcher: &Fetcher, link: ArticleLink) -> LibraryCandidate {
    let website = match fetcher.fetch_page(&link.url).await {
        Ok(page) => website_from_page(&page),
        Err(e) => {
            warn!("Failed to fetch article {}: {}", link.url, e);
            None
        }
    };

    LibraryCandidate::new(link.name, &link.url, website)
}

fn website_from_page(page: &FetchedPage) -> Option<String> {
    let document = Html::parse_document(&page.html);
    match extract_website(&document, &page.url) {
        Ok(website) => website,
        Err(e) => {
            warn!("Infobox extraction failed on {}: {}", page.url, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawler::CrawlerConfig;
    use mockito::Server;

    #[test]
    fn test_candidate_construction() {
        let url = Url::parse("https://de.wikipedia.org/wiki/Stadtbibliothek_Essen").unwrap();
        let candidate = LibraryCandidate::new("Stadtbibliothek Essen", &url, None);

        assert_eq!(candidate.name, "Stadtbibliothek Essen");
        assert_eq!(candidate.wikipedia_url, url.as_str());
        assert!(candidate.website.is_none());
    }

    #[tokio::test]
    async fn test_crawl_listing_end_to_end() {
        let mut server = Server::new_async().await;
        let listing_body = r#"<html><body><div id="mw-content-text">
            <div class="mw-content-ltr mw-parser-output"><ul>
                <li><a href="/wiki/Stadtbibliothek_A" title="Stadtbibliothek A">A</a></li>
                <li><a href="/wiki/Liste_anderer_Bibliotheken" title="Liste">andere</a></li>
                <li><a href="/wiki/Stadtbibliothek_B" title="Stadtbibliothek B">B</a></li>
            </ul></div>
        </div></body></html>"#;
        let _listing = server
            .mock("GET", "/wiki/Liste_deutscher_Stadtbibliotheken")
            .with_status(200)
            .with_body(listing_body)
            .create_async()
            .await;
        let _article_a = server
            .mock("GET", "/wiki/Stadtbibliothek_A")
            .with_status(200)
            .with_body(
                r#"<table id="Vorlage_Infobox_Bibliothek"><tbody>
                    <tr><th>Website</th><td><a href="https://bib-a.example">Homepage</a></td></tr>
                </tbody></table>"#,
            )
            .create_async()
            .await;
        let _article_b = server
            .mock("GET", "/wiki/Stadtbibliothek_B")
            .with_status(404)
            .create_async()
            .await;

        let config = CrawlerConfig::builder().rate_limit_ms(0).build();
        let fetcher = Fetcher::new(config).unwrap();
        let listing_url =
            Url::parse(&format!("{}/wiki/Liste_deutscher_Stadtbibliotheken", server.url())).unwrap();

        let candidates = crawl_listing(&fetcher, &listing_url).await.unwrap();

        // the "Liste" link is filtered, the unreachable article keeps its slot
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].name, "Stadtbibliothek A");
        assert_eq!(
            candidates[0].website.as_deref(),
            Some("https://bib-a.example")
        );
        assert_eq!(candidates[1].name, "Stadtbibliothek B");
        assert!(candidates[1].website.is_none());
    }
}

//! Article-link extraction from the Wikipedia listing page

use scraper::{Html, Selector};
use tracing::{debug, warn};
use url::Url;

use crate::wikipedia::error::WikipediaError;
use crate::wikipedia::ArticleLink;

/// Collect links to individual library articles from the listing page
///
/// Scans the list items of the main content container and keeps every
/// anchor that points at a proper article: edit links, red links to
/// missing pages, and sibling list articles are dropped. The article
/// name comes from the anchor's `title` attribute, falling back to the
/// anchor text; anchors with no usable name are skipped.
pub fn extract_article_links(
    document: &Html,
    base_url: &Url,
) -> Result<Vec<ArticleLink>, WikipediaError> {
    let container_selector = Selector::parse("#mw-content-text > div.mw-content-ltr.mw-parser-output")
        .map_err(|e| WikipediaError::Selector(format!("Failed to parse container selector: {}", e)))?;
    let anchor_selector = Selector::parse("ul li a")
        .map_err(|e| WikipediaError::Selector(format!("Failed to parse anchor selector: {}", e)))?;

    let Some(container) = document.select(&container_selector).next() else {
        warn!("Listing page has no content container");
        return Ok(Vec::new());
    };

    let mut links = Vec::new();

    for anchor in container.select(&anchor_selector) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };

        let url = match base_url.join(href) {
            Ok(url) => url,
            Err(e) => {
                debug!("Skipping unparsable listing href '{}': {}", href, e);
                continue;
            }
        };

        // Edit links, red links, and other list articles are not libraries.
        let url_str = url.as_str();
        if url_str.contains("action=edit") || url_str.contains("redlink=1") || url_str.contains("Liste")
        {
            continue;
        }

        let name = anchor
            .value()
            .attr("title")
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| anchor.text().collect::<String>().trim().to_string());
        if name.is_empty() {
            continue;
        }

        links.push(ArticleLink { name, url });
    }

    Ok(links)
}

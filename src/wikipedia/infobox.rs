//! Website extraction from the library infobox
//!
//! German library articles carry an infobox rendered from the
//! `Vorlage_Infobox_Bibliothek` template. Its rows pair a label cell
//! with a value cell; the official homepage sits in the row whose label
//! contains "Website".

use scraper::{Html, Selector};
use tracing::warn;
use url::Url;

use crate::wikipedia::error::WikipediaError;

/// Extract the library's official website from an article's infobox
///
/// Rows are scanned top to bottom and the first row whose label contains
/// the literal `Website` decides the result, even when its value cell
/// holds no link. Root-relative hrefs resolve against the article URL;
/// everything else passes through unchanged. An absent infobox, label
/// row, or anchor yields `None`.
pub fn extract_website(
    document: &Html,
    article_url: &Url,
) -> Result<Option<String>, WikipediaError> {
    let row_selector = Selector::parse("#Vorlage_Infobox_Bibliothek > tbody > tr")
        .map_err(|e| WikipediaError::Selector(format!("Failed to parse row selector: {}", e)))?;
    let label_selector = Selector::parse("th")
        .map_err(|e| WikipediaError::Selector(format!("Failed to parse label selector: {}", e)))?;
    let anchor_selector = Selector::parse("td a")
        .map_err(|e| WikipediaError::Selector(format!("Failed to parse anchor selector: {}", e)))?;

    for row in document.select(&row_selector) {
        let Some(label) = row.select(&label_selector).next() else {
            continue;
        };
        if !label.text().collect::<String>().contains("Website") {
            continue;
        }

        // First "Website" row decides; scanning stops here either way.
        let href = row
            .select(&anchor_selector)
            .next()
            .and_then(|a| a.value().attr("href"));

        let website = match href {
            None => None,
            Some(href) if href.starts_with('/') => match article_url.join(href) {
                Ok(resolved) => Some(resolved.to_string()),
                Err(e) => {
                    warn!("Failed to resolve infobox href '{}': {}", href, e);
                    None
                }
            },
            Some(href) => Some(href.to_string()),
        };

        return Ok(website);
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article_url() -> Url {
        Url::parse("https://de.wikipedia.org/x").unwrap()
    }

    fn infobox(rows: &str) -> String {
        format!(
            r#"<html><body>
                <table id="Vorlage_Infobox_Bibliothek"><tbody>{}</tbody></table>
            </body></html>"#,
            rows
        )
    }

    fn extract(html: &str) -> Option<String> {
        let document = Html::parse_document(html);
        extract_website(&document, &article_url()).unwrap()
    }

    #[test]
    fn test_extracts_absolute_website() {
        let html = infobox(
            r#"<tr><th>Gründung</th><td>1905</td></tr>
               <tr><th>Website</th><td><a href="https://stadtbibliothek.example">Homepage</a></td></tr>"#,
        );
        assert_eq!(
            extract(&html),
            Some("https://stadtbibliothek.example".to_string())
        );
    }

    #[test]
    fn test_label_substring_and_root_relative_resolution() {
        let html = infobox(
            r#"<tr><th>Ausgeliehene Website</th><td><a href="/foo">foo</a></td></tr>"#,
        );
        assert_eq!(
            extract(&html),
            Some("https://de.wikipedia.org/foo".to_string())
        );
    }

    #[test]
    fn test_label_match_is_case_sensitive() {
        let html = infobox(r#"<tr><th>website</th><td><a href="/foo">foo</a></td></tr>"#);
        assert_eq!(extract(&html), None);
    }

    #[test]
    fn test_first_website_row_wins() {
        let html = infobox(
            r#"<tr><th>Website</th><td><a href="https://first.example">erste</a></td></tr>
               <tr><th>Website</th><td><a href="https://second.example">zweite</a></td></tr>"#,
        );
        assert_eq!(extract(&html), Some("https://first.example".to_string()));
    }

    #[test]
    fn test_website_row_without_anchor_stops_scanning() {
        let html = infobox(
            r#"<tr><th>Website</th><td>siehe unten</td></tr>
               <tr><th>Website</th><td><a href="https://late.example">zu spät</a></td></tr>"#,
        );
        assert_eq!(extract(&html), None);
    }

    #[test]
    fn test_missing_infobox_yields_none() {
        let html = "<html><body><p>Kein Kasten</p></body></html>";
        assert_eq!(extract(html), None);
    }

    #[test]
    fn test_non_relative_href_passes_through_unchanged() {
        let html = infobox(r#"<tr><th>Website</th><td><a href="stadtbibliothek.example">x</a></td></tr>"#);
        assert_eq!(extract(&html), Some("stadtbibliothek.example".to_string()));
    }

    #[test]
    fn test_row_without_label_is_skipped() {
        let html = infobox(
            r#"<tr><td>nur Wert</td></tr>
               <tr><th>Website</th><td><a href="/ok">ok</a></td></tr>"#,
        );
        assert_eq!(extract(&html), Some("https://de.wikipedia.org/ok".to_string()));
    }
}

//! Link relevance matching
//!
//! The matcher decides, for every anchor on a fetched page, whether its
//! visible text marks it as registration-related. Matching is a
//! case-insensitive substring test ("Anmeldungen" matches `anmeldung`),
//! hrefs resolve against the page's own URL, and document order is kept.

use scraper::{Html, Selector};
use tracing::debug;
use url::Url;

use crate::keywords::error::KeywordError;
use crate::keywords::KeywordSet;

/// Collect the resolved targets of all keyword-matching anchors
///
/// # Arguments
///
/// * `document` - The parsed page
/// * `base_url` - The page's own URL, used to resolve relative hrefs
/// * `keywords` - The keyword set to test anchor text against
///
/// # Returns
///
/// Absolute URLs of matching anchors in document order. Duplicates are
/// kept: a link appearing under two anchor elements is reported twice.
/// An empty result means no anchor matched; the caller decides what to
/// emit in that case.
pub fn match_links(
    document: &Html,
    base_url: &Url,
    keywords: &KeywordSet,
) -> Result<Vec<String>, KeywordError> {
    let anchor_selector = Selector::parse("a[href]")
        .map_err(|e| KeywordError::Selector(format!("Failed to parse anchor selector: {}", e)))?;

    let mut matched = Vec::new();

    for anchor in document.select(&anchor_selector) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };

        // Anchors without text collect to an empty string and simply never match.
        let text = anchor.text().collect::<String>();
        if !keywords.matches(&text) {
            continue;
        }

        match base_url.join(href) {
            Ok(resolved) => matched.push(resolved.to_string()),
            Err(e) => {
                // Unparsable target, treated as a non-match.
                debug!("Skipping anchor with unparsable href '{}': {}", href, e);
            }
        }
    }

    Ok(matched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::KeywordSet;

    fn base() -> Url {
        Url::parse("https://lib.example/").unwrap()
    }

    fn match_html(html: &str) -> Vec<String> {
        let document = Html::parse_document(html);
        match_links(&document, &base(), &KeywordSet::default()).unwrap()
    }

    #[test]
    fn test_matches_and_resolves_in_document_order() {
        let html = r#"<html><body>
            <a href="/anmeldung">Anmeldung hier</a>
            <a href="/kontakt">Kontakt</a>
            <a href="https://ext.example/faq">FAQ</a>
        </body></html>"#;

        assert_eq!(
            match_html(html),
            vec![
                "https://lib.example/anmeldung".to_string(),
                "https://ext.example/faq".to_string(),
            ]
        );
    }

    #[test]
    fn test_substring_match_is_case_insensitive() {
        let html = r#"<a href="/a">ANMELDUNGEN und mehr</a>"#;
        assert_eq!(match_html(html), vec!["https://lib.example/a".to_string()]);
    }

    #[test]
    fn test_text_in_nested_markup_matches() {
        let html = r#"<a href="/ausweis"><span>Aus</span>weis beantragen</a>"#;
        assert_eq!(
            match_html(html),
            vec!["https://lib.example/ausweis".to_string()]
        );
    }

    #[test]
    fn test_anchor_without_text_never_matches() {
        let html = r#"<a href="/empty"></a><a href="/img"><img src="x.png"></a>"#;
        assert!(match_html(html).is_empty());
    }

    #[test]
    fn test_non_matching_text_is_excluded() {
        let html = r#"<a href="/veranstaltungen">Veranstaltungen</a>"#;
        assert!(match_html(html).is_empty());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let html = r#"
            <a href="/ausleihe">Ausleihe</a>
            <a href="/ausleihe">Ausleihe und Nutzung</a>
        "#;
        assert_eq!(
            match_html(html),
            vec![
                "https://lib.example/ausleihe".to_string(),
                "https://lib.example/ausleihe".to_string(),
            ]
        );
    }

    #[test]
    fn test_unparsable_href_is_skipped() {
        let html = r#"
            <a href="https://[invalid">Anmeldung kaputt</a>
            <a href="/ok">Anmeldung</a>
        "#;
        assert_eq!(match_html(html), vec!["https://lib.example/ok".to_string()]);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let resolved = base().join("/anmeldung").unwrap();
        let other_base = Url::parse("https://somewhere-else.example/deep/path").unwrap();

        assert_eq!(other_base.join(resolved.as_str()).unwrap(), resolved);
        assert_eq!(base().join(resolved.as_str()).unwrap(), resolved);
    }

    #[test]
    fn test_scheme_relative_href_resolves() {
        let html = r##"<a href="//cdn.example/faq">FAQ</a>"##;
        assert_eq!(match_html(html), vec!["https://cdn.example/faq".to_string()]);
    }
}

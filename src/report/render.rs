//! Markdown rendering of the crawl and summary results

use crate::summary::LibrarySummary;
use crate::wikipedia::LibraryCandidate;

/// Render `bibliotheken.md`: one section per candidate
///
/// The heading links the library name to its Wikipedia article; the
/// website bullet only appears when the infobox had one.
pub fn render_candidates(candidates: &[LibraryCandidate]) -> String {
    let mut md = String::from("# Liste deutscher Stadtbibliotheken\n\n");

    for candidate in candidates {
        md.push_str(&format!(
            "## [{}]({})\n",
            candidate.name, candidate.wikipedia_url
        ));
        if let Some(website) = &candidate.website {
            md.push_str(&format!("- 🌐 Website: [{}]({})\n", website, website));
        }
        md.push('\n');
    }

    md
}

/// Render `libraries.md`: one section per summarized library
pub fn render_summaries(summaries: &[LibrarySummary]) -> String {
    let mut md = String::new();

    for entry in summaries {
        md.push_str(&format!(
            "## [{}]({})\n\n",
            entry.source_url, entry.source_url
        ));
        if let Some(text) = &entry.summary {
            md.push_str(text.trim_end());
            md.push('\n');
        }
        md.push('\n');
    }

    md
}

//! AI summary stage
//!
//! Consumes the keyword stage's records and asks the chat service for a
//! per-library assessment of registration modality, card cost, and other
//! conditions. Service failures are caught per library; the batch never
//! aborts on a single bad answer.

mod client;
mod error;
mod prompt;

pub use client::SummaryClient;
pub use error::SummaryError;
pub use prompt::{SUMMARY_INSTRUCTIONS, join_urls};

use serde::{Deserialize, Serialize};

/// The AI answer for one library, if the service produced one
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibrarySummary {
    /// The scanned library website
    pub source_url: String,

    /// Free-text answer, `None` on service failure or when there was nothing to scan
    pub summary: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_serialization_shape() {
        let summary = LibrarySummary {
            source_url: "https://bib.example/".to_string(),
            summary: None,
        };

        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"source_url\""));
        assert!(json.contains("\"summary\":null"));
    }
}

//! JSON sinks connecting the pipeline stages
//!
//! The Wikipedia stage writes `bibliotheken.json`, the keyword stage
//! reads it as its configuration and writes `urls.json`, and the summary
//! stage reads that in turn. Each sink is a pretty-printed JSON array
//! written once per run. A missing input file aborts the run, as does a
//! candidate list that leaves no start URL after filtering.

use std::io;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio::fs;
use tracing::warn;
use url::Url;

use crate::error::Error as CrateError;
use crate::keywords::KeywordMatchResult;
use crate::wikipedia::LibraryCandidate;

/// Error type for sink operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Input file does not exist
    #[error("Config file '{0}' not found")]
    NotFound(String),

    /// No usable website URL in the candidate list
    #[error("No start URLs found in config file")]
    NoStartUrls,
}

impl From<StoreError> for CrateError {
    fn from(err: StoreError) -> Self {
        CrateError::Store(err.to_string())
    }
}

type Result<T> = std::result::Result<T, StoreError>;

/// Write a record sequence as a pretty-printed JSON array
pub async fn write_records<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json).await?;
    Ok(())
}

async fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let content = match fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(StoreError::NotFound(path.display().to_string()));
        }
        Err(e) => return Err(e.into()),
    };

    Ok(serde_json::from_str(&content)?)
}

/// Load the candidate records written by the Wikipedia stage
pub async fn load_candidates(path: &Path) -> Result<Vec<LibraryCandidate>> {
    load_records(path).await
}

/// Load the match records written by the keyword stage
pub async fn load_matches(path: &Path) -> Result<Vec<KeywordMatchResult>> {
    load_records(path).await
}

/// Derive the keyword stage's start URLs from the candidate list
///
/// Candidates without a website are filtered out; unparsable website
/// values are logged and skipped. An empty result is a precondition
/// failure and aborts the run.
pub fn start_urls(candidates: &[LibraryCandidate]) -> Result<Vec<Url>> {
    let mut urls = Vec::new();

    for candidate in candidates {
        let Some(website) = &candidate.website else {
            continue;
        };
        match Url::parse(website) {
            Ok(url) => urls.push(url),
            Err(e) => warn!(
                "Skipping unparsable website '{}' of {}: {}",
                website, candidate.name, e
            ),
        }
    }

    if urls.is_empty() {
        return Err(StoreError::NoStartUrls);
    }

    Ok(urls)
}

//! Rate-limited client for the AI summary service

use std::num::NonZeroU32;
use std::sync::Arc;

use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use rig::agent::{Agent, AgentBuilder};
use rig::completion::Prompt;
use rig::providers::gemini;
use tracing::{debug, instrument};

use crate::summary::error::SummaryError;
use crate::summary::prompt::{SUMMARY_INSTRUCTIONS, join_urls};

/// Free-tier friendly request budget
const REQUESTS_PER_MINUTE: u32 = 30;

/// Client for per-library registration summaries
pub struct SummaryClient {
    agent: Agent<gemini::completion::CompletionModel>,
    limiter: Arc<DefaultDirectRateLimiter>,
}

impl SummaryClient {
    /// Create a client from the `GEMINI_API_KEY` environment variable
    pub fn new_from_env(model: &str) -> Result<Self, SummaryError> {
        let api_key = std::env::var("GEMINI_API_KEY").map_err(|_| {
            SummaryError::MissingApiKey(
                "GEMINI_API_KEY environment variable must be set".to_string(),
            )
        })?;

        let client = gemini::Client::new(&api_key);
        let agent = AgentBuilder::new(client.completion_model(model))
            .preamble(SUMMARY_INSTRUCTIONS)
            .build();
        let limiter = RateLimiter::direct(Quota::per_minute(
            NonZeroU32::new(REQUESTS_PER_MINUTE).expect("must create rate limit"),
        ));

        Ok(Self {
            agent,
            limiter: Arc::new(limiter),
        })
    }

    /// Request one summary covering all matched URLs of a single library
    #[instrument(skip_all, fields(urls = urls.len()))]
    pub async fn summarize(&self, urls: &[String]) -> Result<String, SummaryError> {
        self.limiter.until_ready().await;

        let prompt = join_urls(urls);
        debug!("Requesting summary for {} URLs", urls.len());

        self.agent
            .prompt(prompt.as_str())
            .await
            .map_err(|e| SummaryError::Llm(format!("Failed to generate summary: {}", e)))
    }
}

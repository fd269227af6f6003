//! Page fetching for the crawl stages
//!
//! A thin reqwest wrapper that paces requests through a governor rate
//! limiter and hands back raw HTML together with the final URL, so that
//! relative links on redirected pages resolve against the address the
//! content was actually served from.

use std::sync::Arc;

use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use reqwest::Client as ReqwestClient;
use tracing::{debug, instrument};
use url::Url;

use crate::crawler::config::CrawlerConfig;
use crate::crawler::error::CrawlError;
use crate::crawler::FetchedPage;

/// HTTP fetcher shared by the Wikipedia and keyword stages
#[derive(Clone)]
pub struct Fetcher {
    client: ReqwestClient,
    limiter: Option<Arc<DefaultDirectRateLimiter>>,
    config: CrawlerConfig,
}

impl Fetcher {
    /// Create a fetcher from an immutable configuration value
    pub fn new(config: CrawlerConfig) -> Result<Self, CrawlError> {
        let client = ReqwestClient::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout())
            .build()?;

        let limiter = if config.rate_limit_ms == 0 {
            None
        } else {
            let quota = Quota::with_period(config.rate_limit())
                .ok_or_else(|| CrawlError::Config("rate limit period must be non-zero".to_string()))?;
            Some(Arc::new(RateLimiter::direct(quota)))
        };

        Ok(Self {
            client,
            limiter,
            config,
        })
    }

    /// The configuration this fetcher was built with
    pub fn config(&self) -> &CrawlerConfig {
        &self.config
    }

    /// Fetch a single page
    ///
    /// Waits for the rate limiter, follows redirects, and fails on
    /// non-success statuses. The returned page carries the final URL.
    #[instrument(skip(self))]
    pub async fn fetch_page(&self, url: &Url) -> Result<FetchedPage, CrawlError> {
        if let Some(limiter) = &self.limiter {
            limiter.until_ready().await;
        }

        debug!("Fetching {}", url);
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CrawlError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let final_url = response.url().clone();
        let html = response.text().await?;

        Ok(FetchedPage {
            url: final_url,
            html,
        })
    }
}

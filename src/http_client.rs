//! Blocking HTTP client for the log pages.
//!
//! One client per scrape, reused across pages so the connection pool and
//! TLS session carry over. Each request blocks the calling thread until the
//! body arrives or the configured timeout elapses. Nothing is retried here;
//! the fetch loop decides what a failure means.

use std::time::Duration;

use reqwest::blocking::{Client, Response};
use tracing::{debug, instrument};

use crate::config::ScraperConfig;
use crate::error::{Result, ScrapeError};
use crate::fetcher::PageSource;

/// HTTP client preconfigured with the scraper's timeout and User-Agent.
#[derive(Debug, Clone)]
pub struct ScraperClient {
    client: Client,
    user_agent: String,
    timeout: Duration,
}

impl ScraperClient {
    /// Create a client with the default upstream settings.
    pub fn new() -> Result<Self> {
        Self::from_config(&ScraperConfig::default())
    }

    /// Create a client from a loaded config.
    pub fn from_config(config: &ScraperConfig) -> Result<Self> {
        Self::with_settings(&config.user_agent, config.timeout())
    }

    pub fn with_settings(user_agent: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .use_rustls_tls()
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .user_agent(user_agent)
            .timeout(timeout)
            .connect_timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;

        Ok(Self {
            client,
            user_agent: user_agent.to_string(),
            timeout,
        })
    }

    /// GET a URL. Non-2xx statuses are turned into [`ScrapeError::Status`].
    #[instrument(skip(self), fields(url = %url))]
    pub fn fetch(&self, url: &str) -> Result<Response> {
        debug!("requesting page");
        let response = self.client.get(url).send()?;
        let status = response.status();

        debug!(status = %status, version = ?response.version(), "response received");

        if !status.is_success() {
            return Err(ScrapeError::Status {
                status,
                url: url.to_string(),
            });
        }
        Ok(response)
    }

    /// GET a URL and return the body as text.
    pub fn fetch_text(&self, url: &str) -> Result<String> {
        let response = self.fetch(url)?;
        let text = response.text()?;
        Ok(text)
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl PageSource for ScraperClient {
    fn fetch_page(&self, url: &str) -> Result<String> {
        self.fetch_text(url)
    }
}

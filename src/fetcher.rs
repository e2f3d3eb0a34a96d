//! Paginated fetch-and-extract loop.
//!
//! Pages are requested one after another, `1..=pages`. A page that fails
//! (connection error, timeout, non-2xx) is reported and skipped; it is never
//! retried and never aborts the scrape. Links accumulate in page order, then
//! document order, into a [`FetchReport`] owned by the caller.
//!
//! # Example
//!
//! ```rust,no_run
//! use iptv_scraper::{LinkFetcher, ScraperClient};
//!
//! # fn example() -> iptv_scraper::Result<()> {
//! let fetcher = LinkFetcher::new(ScraperClient::new()?);
//! let report = fetcher.fetch(3, "sports", &mut std::io::stdout());
//! for link in &report.links {
//!     println!("{link}");
//! }
//! # Ok(())
//! # }
//! ```

use std::io::Write;

use tracing::{debug, error, info, warn};

use crate::config::{ScraperConfig, DEFAULT_BASE_URL};
use crate::error::Result;
use crate::extract::{Link, LinkExtractor};
use crate::http_client::ScraperClient;

/// Anything that can turn a page URL into an HTML body.
///
/// [`ScraperClient`] is the network implementation; tests plug in fakes.
pub trait PageSource {
    fn fetch_page(&self, url: &str) -> Result<String>;
}

impl<T: PageSource + ?Sized> PageSource for &T {
    fn fetch_page(&self, url: &str) -> Result<String> {
        (**self).fetch_page(url)
    }
}

/// Build the log page URL for a 1-based page index and a (possibly empty)
/// channel filter.
pub fn page_url(base_url: &str, page: u32, filter: &str) -> String {
    format!(
        "{}/logs/page/{page}?filter={}&is_public=true",
        base_url.trim_end_matches('/'),
        urlencoding::encode(filter)
    )
}

/// A page that contributed nothing because its request failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFailure {
    pub page: u32,
    pub url: String,
    pub message: String,
}

/// How an empty or non-empty scrape should be reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// At least one link was collected.
    Links(usize),
    /// Every requested page answered but none had matching nodes
    /// (or no pages were requested).
    NoMatches,
    /// Every requested page failed.
    AllFailed,
}

/// Result of one scrape. Created empty per call, filled page by page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchReport {
    /// Links in page order, then document order. Duplicates kept.
    pub links: Vec<Link>,
    pub pages_requested: u32,
    pub failures: Vec<PageFailure>,
    /// Pages that answered successfully but matched no link nodes.
    pub empty_pages: Vec<u32>,
}

impl FetchReport {
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn all_failed(&self) -> bool {
        self.pages_requested > 0 && self.failures.len() == self.pages_requested as usize
    }

    pub fn outcome(&self) -> FetchOutcome {
        if !self.links.is_empty() {
            FetchOutcome::Links(self.links.len())
        } else if self.all_failed() {
            FetchOutcome::AllFailed
        } else {
            FetchOutcome::NoMatches
        }
    }

    pub fn into_links(self) -> Vec<Link> {
        self.links
    }
}

/// Drives a [`PageSource`] over consecutive log pages.
#[derive(Debug, Clone)]
pub struct LinkFetcher<S> {
    source: S,
    extractor: LinkExtractor,
    base_url: String,
}

impl<S: PageSource> LinkFetcher<S> {
    /// Fetcher against the public site with the default selector.
    pub fn new(source: S) -> Self {
        Self {
            source,
            extractor: LinkExtractor::default(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_extractor(mut self, extractor: LinkExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    /// Scrape `pages` pages with `filter`, writing `"{page}/{pages}"` progress
    /// lines and failure diagnostics to `out`.
    ///
    /// Never fails as a whole: write errors on `out` are ignored and page
    /// errors are recorded in the returned report.
    pub fn fetch<W: Write + ?Sized>(&self, pages: u32, filter: &str, out: &mut W) -> FetchReport {
        let mut report = FetchReport {
            pages_requested: pages,
            ..FetchReport::default()
        };

        for page in 1..=pages {
            let _ = writeln!(out, "{page}/{pages}");
            let url = page_url(&self.base_url, page, filter);

            let body = match self.source.fetch_page(&url) {
                Ok(body) => body,
                Err(e) => {
                    if e.is_upstream() {
                        warn!(page, url = %url, error = %e, "page request failed, skipping");
                    } else {
                        error!(page, url = %url, error = %e, "page source failed locally, skipping");
                    }
                    let _ = writeln!(out, "Request failed: {e}");
                    report.failures.push(PageFailure {
                        page,
                        url,
                        message: e.to_string(),
                    });
                    continue;
                }
            };

            let links = self.extractor.extract(&body);
            debug!(page, matched = links.len(), "page extracted");
            if links.is_empty() {
                report.empty_pages.push(page);
            }
            report.links.extend(links);
        }

        let answered = pages as usize - report.failures.len();
        if answered > 0 && report.empty_pages.len() == answered {
            info!(
                selector = self.extractor.selector(),
                pages = answered,
                "selector matched nothing on any page; markup may have changed"
            );
        }

        report
    }
}

impl LinkFetcher<ScraperClient> {
    /// Network fetcher built from a loaded config.
    pub fn from_config(config: &ScraperConfig) -> Result<Self> {
        let client = ScraperClient::from_config(config)?;
        let extractor = LinkExtractor::new(&config.selector)?;
        Ok(Self::new(client)
            .with_base_url(config.base_url.clone())
            .with_extractor(extractor))
    }
}

/// Scrape with the user's config (or the built-in defaults when there is no
/// config file), printing progress to stdout.
pub fn fetch_links(pages: u32, filter: &str) -> Result<Vec<Link>> {
    let fetcher = LinkFetcher::from_config(&ScraperConfig::load()?)?;
    let report = fetcher.fetch(pages, filter, &mut std::io::stdout());
    Ok(report.into_links())
}

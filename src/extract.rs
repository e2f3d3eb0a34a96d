//! Link extraction from log pages.
//!
//! The upstream site renders each posted link inside
//! `<p class="line-clamp-3 hover:line-clamp-10">`. That selector is the
//! whole contract with the site: if the markup changes, extraction yields
//! nothing and [`LINK_SELECTOR`] (or the `selector` config key) is the
//! only thing to update.

use scraper::{Html, Selector};

use crate::error::{Result, ScrapeError};

/// A scraped link. Expected to be a stream URL but never validated.
pub type Link = String;

/// Paragraphs carrying both clamp classes. The colon in the second class
/// name has to be escaped for the CSS parser.
pub const LINK_SELECTOR: &str = r"p.line-clamp-3.hover\:line-clamp-10";

/// Pulls link text out of a page with a pre-parsed selector.
#[derive(Debug, Clone)]
pub struct LinkExtractor {
    selector: Selector,
    source: String,
}

impl LinkExtractor {
    /// Build an extractor for a custom CSS selector.
    pub fn new(selector: &str) -> Result<Self> {
        let parsed = Selector::parse(selector).map_err(|e| ScrapeError::Selector {
            selector: selector.to_string(),
            message: format!("{e:?}"),
        })?;
        Ok(Self {
            selector: parsed,
            source: selector.to_string(),
        })
    }

    /// The selector string this extractor was built from.
    pub fn selector(&self) -> &str {
        &self.source
    }

    /// Trimmed text of every matching node, in document order.
    ///
    /// Duplicates and empty strings are kept; only the leading and
    /// trailing whitespace of each node is stripped.
    pub fn extract(&self, html: &str) -> Vec<Link> {
        let document = Html::parse_document(html);
        document
            .select(&self.selector)
            .map(|element| element.text().collect::<String>().trim().to_string())
            .collect()
    }
}

impl Default for LinkExtractor {
    fn default() -> Self {
        // LINK_SELECTOR is a compile-time constant covered by tests.
        Self::new(LINK_SELECTOR).unwrap_or_else(|e| unreachable!("{e}"))
    }
}

/// Extract links with the default selector.
pub fn extract_links(html: &str) -> Vec<Link> {
    LinkExtractor::default().extract(html)
}

//! Scraper configuration loaded from `~/.config/iptv-scraper/config.toml`.
//!
//! Every field is optional. A missing file yields the built-in defaults,
//! which reproduce the upstream contract exactly:
//!
//! ```toml
//! base_url = "https://streamtest.in"
//! user_agent = "Mozilla/5.0"
//! timeout_secs = 10
//! selector = "p.line-clamp-3.hover\\:line-clamp-10"
//! output_dir = "."
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Result, ScrapeError};
use crate::extract::LINK_SELECTOR;

/// Upstream host serving the public logs.
pub const DEFAULT_BASE_URL: &str = "https://streamtest.in";
/// Identifying header sent with every page request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";
/// Per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Runtime configuration for fetching and writing.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ScraperConfig {
    /// Scheme + host of the log site, without the `/logs/page` path.
    pub base_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    /// CSS selector for link nodes. Markup drift upstream is a one-line change here.
    pub selector: String,
    /// Directory playlists are written into.
    pub output_dir: PathBuf,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            selector: LINK_SELECTOR.to_string(),
            output_dir: PathBuf::from("."),
        }
    }
}

impl ScraperConfig {
    /// Load from the default location, falling back to defaults when the
    /// file does not exist.
    pub fn load() -> Result<Self> {
        let path = config_path();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::from_file(&path)
    }

    /// Load from an explicit path. The file must exist.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ScrapeError::io(path, e))?;
        let config = Self::from_toml(&content).map_err(|e| match e {
            ScrapeError::Config(msg) => ScrapeError::Config(format!("{}: {msg}", path.display())),
            other => other,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse a TOML document and validate it.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| ScrapeError::Config(e.message().to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(ScrapeError::Config("timeout_secs must be at least 1".into()));
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ScrapeError::Config(format!(
                "base_url must start with http:// or https://, got {:?}",
                self.base_url
            )));
        }
        if self.selector.trim().is_empty() {
            return Err(ScrapeError::Config("selector must not be empty".into()));
        }
        Ok(())
    }
}

/// Return the path to the config file.
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("iptv-scraper")
        .join("config.toml")
}

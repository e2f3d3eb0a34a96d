//! `iptv-scraper` - collect public IPTV links from streamtest.in logs
//!
//! # Features
//!
//! - **Paginated scraping**: one blocking request per log page, failed pages skipped
//! - **Channel filter**: passed through to the site's own `filter` query
//! - **Playlists**: timestamped `.m3u` link dumps
//! - **Interactive menu**: or single-shot from the command line
//!
//! # Example
//!
//! ```rust,no_run
//! use iptv_scraper::{LinkFetcher, PlaylistWriter, ScraperClient};
//!
//! fn main() -> anyhow::Result<()> {
//!     let fetcher = LinkFetcher::new(ScraperClient::new()?);
//!     let report = fetcher.fetch(2, "sports", &mut std::io::stdout());
//!     let path = PlaylistWriter::new(".").write(report.into_links(), "sports")?;
//!     println!("Saved {}", path.display());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod fetcher;
pub mod http_client;
pub mod playlist;
pub mod session;

pub use config::ScraperConfig;
pub use error::{Result, ScrapeError};
pub use extract::{extract_links, Link, LinkExtractor, LINK_SELECTOR};
pub use fetcher::{fetch_links, page_url, FetchOutcome, FetchReport, LinkFetcher, PageFailure, PageSource};
pub use http_client::ScraperClient;
pub use playlist::{create_m3u, playlist_file_name, PlaylistWriter, WriteMode};
pub use session::{run_menu, run_session, Input, Prompt, PromptInput, SessionResult, SuppliedInput};

/// Version of iptv-scraper
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod banner;
mod menu;
mod scrape;

use anyhow::{Context, Result};

use iptv_scraper::{LinkFetcher, PlaylistWriter, ScraperClient, ScraperConfig, WriteMode};

use crate::Cli;

pub use banner::print_banner;
pub use menu::cmd_menu;
pub use scrape::cmd_scrape;

/// Config file (explicit or default location) with command-line overrides on top.
pub fn resolve_config(cli: &Cli) -> Result<ScraperConfig> {
    let mut config = match &cli.config {
        Some(path) => ScraperConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ScraperConfig::load().context("failed to load config")?,
    };

    if let Some(base_url) = &cli.base_url {
        config.base_url.clone_from(base_url);
    }
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
    }
    if let Some(dir) = &cli.output_dir {
        config.output_dir.clone_from(dir);
    }

    tracing::debug!(?config, "resolved config");
    Ok(config)
}

fn build_fetcher(config: &ScraperConfig) -> Result<LinkFetcher<ScraperClient>> {
    LinkFetcher::from_config(config).context("failed to set up HTTP client")
}

fn build_writer(config: &ScraperConfig, append: bool) -> PlaylistWriter {
    let mode = if append {
        WriteMode::Append
    } else {
        WriteMode::Create
    };
    PlaylistWriter::new(&config.output_dir).with_mode(mode)
}

use std::io;

use anyhow::{Context, Result};

use iptv_scraper::{run_session, FetchOutcome, Prompt, ScraperConfig, SuppliedInput};

use super::{build_fetcher, build_writer};

/// Single-shot mode: channel and page count come from the command line.
pub fn cmd_scrape(
    config: &ScraperConfig,
    channel: &str,
    pages: u32,
    assume_yes: bool,
    append: bool,
) -> Result<()> {
    let fetcher = build_fetcher(config)?;
    let writer = build_writer(config, append);

    println!("🔎 Scraping {pages} page(s) for '{channel}'");

    let mut prompt = Prompt::new(io::stdin().lock(), io::stdout());
    let mut input = SuppliedInput::new(channel, pages, &mut prompt).assume_yes(assume_yes);
    let mut out = io::stdout();

    let result = run_session(&fetcher, &writer, &mut input, &mut out)
        .context("failed to write playlist")?;

    if let Some(result) = result {
        if result.failed_pages > 0 && !matches!(result.outcome, FetchOutcome::AllFailed) {
            println!("⚠️  {} of {pages} page(s) failed", result.failed_pages);
        }
    }

    Ok(())
}

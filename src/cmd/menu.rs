use std::io;

use anyhow::{Context, Result};

use iptv_scraper::{run_menu, Prompt, ScraperConfig};

use super::{build_fetcher, build_writer};

/// Interactive mode: repeat scrape cycles until the user quits.
pub fn cmd_menu(config: &ScraperConfig, append: bool) -> Result<()> {
    let fetcher = build_fetcher(config)?;
    let writer = build_writer(config, append);

    let mut prompt = Prompt::new(io::stdin().lock(), io::stdout());
    let results = run_menu(&fetcher, &writer, &mut prompt, &mut io::stdout())
        .context("failed to write playlist")?;

    let saved = results.iter().filter(|r| r.saved.is_some()).count();
    if saved > 0 {
        println!("💾 Saved {saved} playlist(s) this session");
    }
    println!("👋 Bye!");

    Ok(())
}

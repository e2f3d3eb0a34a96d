//! `iptv-scraper` CLI - scrape public IPTV logs into m3u playlists

mod cmd;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "iptv-scraper")]
#[command(about = "Scrape IPTV links from streamtest.in logs into m3u playlists")]
#[command(version)]
pub struct Cli {
    /// Channel to search for (omit to open the interactive menu)
    pub channel: Option<String>,

    /// Number of pages to scrape
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub pages: u32,

    /// Save results without asking
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Directory to write playlists into
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Append to an existing playlist with the same name instead of replacing it
    #[arg(long)]
    pub append: bool,

    /// Override the log site (scheme + host)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Config file (default: ~/.config/iptv-scraper/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Show debug logs on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cmd::resolve_config(&cli)?;
    cmd::print_banner();

    // An empty channel argument opens the menu, same as no argument.
    match cli.channel.as_deref().filter(|c| !c.is_empty()) {
        Some(channel) => cmd::cmd_scrape(&config, channel, cli.pages, cli.yes, cli.append),
        None => cmd::cmd_menu(&config, cli.append),
    }
}

/// Logs go to stderr so stdout stays the user-facing channel.
/// `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

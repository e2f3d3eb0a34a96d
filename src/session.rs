//! Fetch, show, confirm, write.
//!
//! Single-shot and menu mode share [`run_session`]; they differ only in
//! where the channel, page count, and save answer come from ([`Input`]).

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::error::Result;
use crate::fetcher::{FetchOutcome, FetchReport, LinkFetcher, PageSource};
use crate::playlist::PlaylistWriter;

/// Label used for the playlist file when no channel filter is given.
pub const UNFILTERED_LABEL: &str = "logs";

/// Line-oriented prompts over any reader/writer pair.
pub struct Prompt<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Print `question` and read one line. `None` on end of input.
    pub fn ask(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.writer, "{question}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Ask until a page count of at least 1 is entered.
    pub fn ask_pages(&mut self) -> Result<Option<u32>> {
        loop {
            let Some(answer) = self.ask("Pages to scrape: ")? else {
                return Ok(None);
            };
            match answer.trim().parse::<u32>() {
                Ok(n) if n >= 1 => return Ok(Some(n)),
                _ => writeln!(self.writer, "Invalid number of pages!")?,
            }
        }
    }

    /// `y`/`yes` (any case) confirms; everything else, including EOF, declines.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer = self.ask(question)?.unwrap_or_default();
        Ok(answer.trim().to_lowercase().starts_with('y'))
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.writer
    }
}

/// Where one scrape cycle gets its parameters from.
pub trait Input {
    /// Channel filter. `Ok(None)` means the input ended and the cycle is abandoned.
    fn channel(&mut self) -> Result<Option<String>>;
    fn pages(&mut self) -> Result<Option<u32>>;
    fn confirm_save(&mut self) -> Result<bool>;
}

const SAVE_QUESTION: &str = "Save results to an m3u file? [y/N]: ";

/// Parameters given up front (command line); only the save question may prompt.
pub struct SuppliedInput<'p, R, W> {
    channel: String,
    pages: u32,
    assume_yes: bool,
    prompt: &'p mut Prompt<R, W>,
}

impl<'p, R, W> SuppliedInput<'p, R, W> {
    pub fn new(channel: impl Into<String>, pages: u32, prompt: &'p mut Prompt<R, W>) -> Self {
        Self {
            channel: channel.into(),
            pages,
            assume_yes: false,
            prompt,
        }
    }

    /// Skip the save question and always write.
    #[must_use]
    pub fn assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = yes;
        self
    }
}

impl<R: BufRead, W: Write> Input for SuppliedInput<'_, R, W> {
    fn channel(&mut self) -> Result<Option<String>> {
        Ok(Some(self.channel.clone()))
    }

    fn pages(&mut self) -> Result<Option<u32>> {
        Ok(Some(self.pages))
    }

    fn confirm_save(&mut self) -> Result<bool> {
        if self.assume_yes {
            return Ok(true);
        }
        self.prompt.confirm(SAVE_QUESTION)
    }
}

/// Everything asked interactively. `filtered` decides whether a channel
/// name is asked for at all.
pub struct PromptInput<'p, R, W> {
    filtered: bool,
    prompt: &'p mut Prompt<R, W>,
}

impl<'p, R, W> PromptInput<'p, R, W> {
    pub fn new(filtered: bool, prompt: &'p mut Prompt<R, W>) -> Self {
        Self { filtered, prompt }
    }
}

impl<R: BufRead, W: Write> Input for PromptInput<'_, R, W> {
    fn channel(&mut self) -> Result<Option<String>> {
        if !self.filtered {
            return Ok(Some(String::new()));
        }
        self.prompt.ask("Channel name: ")
    }

    fn pages(&mut self) -> Result<Option<u32>> {
        self.prompt.ask_pages()
    }

    fn confirm_save(&mut self) -> Result<bool> {
        self.prompt.confirm(SAVE_QUESTION)
    }
}

/// What one cycle did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionResult {
    pub outcome: FetchOutcome,
    pub failed_pages: usize,
    /// Path of the written playlist, if the user chose to save.
    pub saved: Option<PathBuf>,
}

/// Numbered link listing, or a message saying why there is nothing to list.
pub fn print_report<W: Write + ?Sized>(report: &FetchReport, out: &mut W) -> Result<()> {
    match report.outcome() {
        FetchOutcome::Links(_) => {
            for (idx, link) in report.links.iter().enumerate() {
                writeln!(out, "{:3}: {link}", idx + 1)?;
            }
        }
        FetchOutcome::AllFailed => {
            writeln!(
                out,
                "[!] No links found (all {} page requests failed)",
                report.pages_requested
            )?;
        }
        FetchOutcome::NoMatches => writeln!(out, "[!] No links found")?,
    }
    Ok(())
}

/// Playlist label for a channel filter.
pub fn label_for(channel: &str) -> &str {
    let channel = channel.trim();
    if channel.is_empty() {
        UNFILTERED_LABEL
    } else {
        channel
    }
}

/// One fetch → print → confirm → write cycle.
///
/// Returns `Ok(None)` when the input ran out before a scrape started.
/// Playlist write failures are returned as errors.
pub fn run_session<S, I, W>(
    fetcher: &LinkFetcher<S>,
    writer: &PlaylistWriter,
    input: &mut I,
    out: &mut W,
) -> Result<Option<SessionResult>>
where
    S: PageSource,
    I: Input + ?Sized,
    W: Write + ?Sized,
{
    let Some(channel) = input.channel()? else {
        return Ok(None);
    };
    let Some(pages) = input.pages()? else {
        return Ok(None);
    };

    tracing::debug!(filter = %channel, pages, "starting scrape");
    let report = fetcher.fetch(pages, &channel, out);
    print_report(&report, out)?;

    let outcome = report.outcome();
    let failed_pages = report.failures.len();
    let mut saved = None;

    if !report.is_empty() && input.confirm_save()? {
        writeln!(out, "[*]Creating m3u file..........")?;
        let path = writer.write(report.into_links(), label_for(&channel))?;
        writeln!(out, "[*]Created m3u File! {}", path.display())?;
        saved = Some(path);
    }

    Ok(Some(SessionResult {
        outcome,
        failed_pages,
        saved,
    }))
}

/// Menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Scrape,
    ScrapeFiltered,
    Quit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Scrape),
            "2" => Some(Self::ScrapeFiltered),
            "3" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Repeat scrape cycles until the user quits or input ends.
///
/// Returns the results of every completed cycle.
pub fn run_menu<S, R, P, W>(
    fetcher: &LinkFetcher<S>,
    writer: &PlaylistWriter,
    prompt: &mut Prompt<R, P>,
    out: &mut W,
) -> Result<Vec<SessionResult>>
where
    S: PageSource,
    R: BufRead,
    P: Write,
    W: Write + ?Sized,
{
    let mut results = Vec::new();
    loop {
        writeln!(out, "\n1) Scrape logs")?;
        writeln!(out, "2) Scrape logs with channel filter")?;
        writeln!(out, "3) Quit")?;
        out.flush()?;

        let Some(answer) = prompt.ask("Select an option: ")? else {
            break;
        };
        let filtered = match MenuChoice::parse(&answer) {
            Some(MenuChoice::Scrape) => false,
            Some(MenuChoice::ScrapeFiltered) => true,
            Some(MenuChoice::Quit) => break,
            None => {
                writeln!(out, "Invalid choice!")?;
                continue;
            }
        };

        let mut input = PromptInput::new(filtered, prompt);
        match run_session(fetcher, writer, &mut input, out)? {
            Some(result) => results.push(result),
            None => break,
        }
    }
    Ok(results)
}

//! Playlist file writer.
//!
//! Output is a bare link dump: one link per line, `\n` terminated, no
//! `#EXTM3U` header or `#EXTINF` directives. The file name carries a
//! local timestamp and the upper-cased label, e.g.
//! `17-10-2026 03-04-05-PM SPORTS.m3u`.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use tracing::info;

use crate::error::{Result, ScrapeError};

/// Day-month-year, 12-hour clock with AM/PM, down to the second.
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %I-%M-%S-%p";

/// Whether an existing file with the same name is replaced or extended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    #[default]
    Create,
    Append,
}

/// `"{timestamp} {LABEL}.m3u"`
pub fn playlist_file_name(now: &NaiveDateTime, label: &str) -> String {
    format!("{} {}.m3u", now.format(TIMESTAMP_FORMAT), label.to_uppercase())
}

/// Writes link collections into timestamped playlist files.
#[derive(Debug, Clone)]
pub struct PlaylistWriter {
    dir: PathBuf,
    mode: WriteMode,
}

impl PlaylistWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            mode: WriteMode::Create,
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: WriteMode) -> Self {
        self.mode = mode;
        self
    }

    /// Write `links` to a file named after the current local time and `label`.
    pub fn write<I>(&self, links: I, label: &str) -> Result<PathBuf>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.write_at(links, label, &Local::now().naive_local())
    }

    /// Same as [`write`](Self::write) with an explicit timestamp.
    pub fn write_at<I>(&self, links: I, label: &str, now: &NaiveDateTime) -> Result<PathBuf>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        fs::create_dir_all(&self.dir).map_err(|e| ScrapeError::io(&self.dir, e))?;
        let path = self.dir.join(playlist_file_name(now, label));

        let file = self.open(&path)?;
        let mut out = BufWriter::new(file);
        let mut count = 0usize;
        for link in links {
            writeln!(out, "{}", link.as_ref()).map_err(|e| ScrapeError::io(&path, e))?;
            count += 1;
        }
        out.flush().map_err(|e| ScrapeError::io(&path, e))?;

        info!(path = %path.display(), links = count, mode = ?self.mode, "playlist written");
        Ok(path)
    }

    fn open(&self, path: &Path) -> Result<File> {
        let opened = match self.mode {
            WriteMode::Create => File::create(path),
            WriteMode::Append => OpenOptions::new().create(true).append(true).open(path),
        };
        opened.map_err(|e| ScrapeError::io(path, e))
    }
}

impl Default for PlaylistWriter {
    fn default() -> Self {
        Self::new(".")
    }
}

/// Write `links` into the current directory and return the file path.
pub fn create_m3u(links: Vec<String>, label: &str) -> Result<PathBuf> {
    PlaylistWriter::default().write(links, label)
}

//! Error taxonomy for the scraper library.
//!
//! Upstream failures (`Http`, `Status`) are reported per page by the
//! fetcher and never abort a scrape. `Io` is fatal for the playlist
//! writer. The rest surface configuration and console mistakes.

use std::path::PathBuf;

use thiserror::Error;

/// Scraper errors
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("console I/O error: {0}")]
    Console(#[from] std::io::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("invalid CSS selector {selector:?}: {message}")]
    Selector { selector: String, message: String },
}

impl ScrapeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` for errors that came from the upstream site or the
    /// network, as opposed to local problems.
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Status { .. })
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_names_the_path() {
        let err = ScrapeError::io(
            "/nope/out.m3u",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/nope/out.m3u"));
        assert!(msg.contains("denied"));
        assert!(!err.is_upstream());
    }

    #[test]
    fn status_error_is_upstream() {
        let err = ScrapeError::Status {
            status: reqwest::StatusCode::BAD_GATEWAY,
            url: "https://streamtest.in/logs/page/1".to_string(),
        };
        assert!(err.is_upstream());
        assert!(err.to_string().contains("502"));
    }
}

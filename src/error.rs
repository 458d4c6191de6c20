// src/error.rs
use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("path exists but is not a directory: {0}")]
    NotADirectory(String),

    /// Used by non-network `Fetch` impls (fixtures, fakes).
    #[error("fetch failed for {url}: {reason}")]
    Fetch { url: String, reason: String },
}

pub type Result<T, E = ScrapeError> = std::result::Result<T, E>;

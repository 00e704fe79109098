//! Error types for set_decklist

use thiserror::Error;

/// Unified error type for set_decklist operations
#[derive(Debug, Error)]
pub enum Error {
    /// Bad user input (format, colors, copy count, set code)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// Search endpoint answered with a non-success status
    #[error("HTTP error {status} from {url}{}", detail_suffix(.details))]
    HttpStatus {
        status: u16,
        url: String,
        details: Option<String>,
    },
    /// HTTP request failed (network error, timeout, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Failed to parse JSON response
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// Output file could not be created or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Export interrupted before it finished
    #[error("Export cancelled before it finished")]
    Cancelled,
}

impl Error {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// True for every failure that leaves the search incomplete.
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            Error::HttpStatus { .. } | Error::Network(_) | Error::Parse(_)
        )
    }
}

fn detail_suffix(details: &Option<String>) -> String {
    details
        .as_deref()
        .map(|d| format!(": {d}"))
        .unwrap_or_default()
}

/// Result alias for set_decklist operations
pub type Result<T> = std::result::Result<T, Error>;

//! Error types for the opengraph crate

use thiserror::Error;

/// Result type for opengraph operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for opengraph operations
///
/// The `parse` and `fetch` entry points never return these; they report
/// every failure as "no data". Errors surface only from fallible setup such
/// as building an [`HttpFetcher`](crate::HttpFetcher).
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Document retrieval error
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Reading a local document failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

//! Error types for the fetch module

use crate::error::Error as CrateError;
use thiserror::Error;

/// Error type for document retrieval
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport failure: connection, DNS, TLS, timeout or body decoding
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Unexpected status {status_code} from {url}")]
    Status {
        /// HTTP status code
        status_code: u16,
        /// Requested URL
        url: String,
    },

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// The HTTP client could not be constructed
    #[error("HTTP client error: {0}")]
    Client(String),
}

impl From<FetchError> for CrateError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Http(e) => CrateError::Http(e),
            FetchError::UrlParse(e) => CrateError::UrlParse(e),
            _ => CrateError::Fetch(err.to_string()),
        }
    }
}

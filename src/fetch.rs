//! # Document Fetch Module
//!
//! Retrieval of HTML documents for Open Graph extraction. The [`Fetcher`]
//! trait is the seam between extraction and transport; [`HttpFetcher`] is
//! the reqwest-backed implementation used by [`crate::fetch`].
//!
//! Every failure is reported as a [`FetchError`]: connection and DNS
//! errors, timeouts, invalid URLs and non-success statuses alike.

mod config;
mod error;

pub use config::{FetcherConfig, FetcherConfigBuilder};
pub use error::FetchError;

use std::future::Future;

use reqwest::Client as ReqwestClient;
use reqwest::redirect::Policy;
use tracing::{debug, instrument};
use url::Url;

/// A provider of HTML documents
pub trait Fetcher {
    /// Retrieve the document at `uri` and return its body
    fn fetch(&self, uri: &str) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// HTTP fetcher performing a GET request per document
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    /// The underlying reqwest client
    client: ReqwestClient,

    config: FetcherConfig,
}

impl HttpFetcher {
    /// Create a fetcher with the given configuration
    pub fn new(config: FetcherConfig) -> Result<Self, FetchError> {
        let client = ReqwestClient::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout())
            .redirect(Policy::limited(config.max_redirects))
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a fetcher with the default configuration
    pub fn with_defaults() -> Result<Self, FetchError> {
        Self::new(FetcherConfig::default())
    }

    pub fn config(&self) -> &FetcherConfig {
        &self.config
    }
}

impl Fetcher for HttpFetcher {
    #[instrument(skip(self), level = "debug")]
    async fn fetch(&self, uri: &str) -> Result<String, FetchError> {
        let url = Url::parse(uri)?;

        debug!("Sending GET request to {}", url);
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status_code: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        debug!("Received {} bytes from {}", body.len(), url);
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn test_fetch_success() {
        let mut server = Server::new_async().await;
        let mock_server = server
            .mock("GET", "/page")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body("<html><head><title>Page</title></head></html>")
            .expect(1)
            .create_async()
            .await;

        let fetcher = HttpFetcher::with_defaults().unwrap();
        let body = fetcher
            .fetch(&format!("{}/page", server.url()))
            .await
            .unwrap();
        assert!(body.contains("<title>Page</title>"));

        mock_server.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_sends_user_agent() {
        let mut server = Server::new_async().await;
        let mock_server = server
            .mock("GET", "/")
            .match_header("user-agent", "test-agent/1.0")
            .with_status(200)
            .with_body("ok")
            .create_async()
            .await;

        let config = FetcherConfig::builder().user_agent("test-agent/1.0").build();
        let fetcher = HttpFetcher::new(config).unwrap();
        let body = fetcher.fetch(&format!("{}/", server.url())).await.unwrap();
        assert_eq!(body, "ok");

        mock_server.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_error_status() {
        let mut server = Server::new_async().await;
        let mock_server = server
            .mock("GET", "/missing")
            .with_status(404)
            .with_body("Not Found")
            .create_async()
            .await;

        let fetcher = HttpFetcher::with_defaults().unwrap();
        let result = fetcher.fetch(&format!("{}/missing", server.url())).await;
        assert!(matches!(
            result,
            Err(FetchError::Status {
                status_code: 404,
                ..
            })
        ));

        mock_server.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_invalid_url() {
        let fetcher = HttpFetcher::with_defaults().unwrap();
        let result = fetcher.fetch("not a url").await;
        assert!(matches!(result, Err(FetchError::UrlParse(_))));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        let fetcher = HttpFetcher::with_defaults().unwrap();
        let result = fetcher.fetch("http://127.0.0.1:1/").await;
        assert!(matches!(result, Err(FetchError::Http(_))));
    }
}

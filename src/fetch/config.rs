//! # Fetcher Configuration Module
//!
//! Configuration for the HTTP fetch provider, built with the usual builder
//! pattern.
//!
//! ## Key Components
//!
//! - `FetcherConfig`: user agent, request timeout and redirect limit
//! - `FetcherConfigBuilder`: fluent construction of a `FetcherConfig`

use std::time::Duration;

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default number of redirects to follow
const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Configuration for the HTTP fetcher
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// User agent to send with requests
    pub user_agent: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Maximum number of redirects to follow
    pub max_redirects: usize,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("opengraph/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }
}

/// Builder for FetcherConfig
#[derive(Debug, Default)]
pub struct FetcherConfigBuilder {
    config: FetcherConfig,
}

impl FetcherConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: FetcherConfig::default(),
        }
    }

    /// Set the user agent to use for requests
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout in seconds
    pub fn timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.config.timeout_secs = timeout_secs;
        self
    }

    /// Set the maximum number of redirects to follow
    pub fn max_redirects(mut self, max_redirects: usize) -> Self {
        self.config.max_redirects = max_redirects;
        self
    }

    /// Build the configuration
    pub fn build(self) -> FetcherConfig {
        self.config
    }
}

impl FetcherConfig {
    /// Create a new builder
    pub fn builder() -> FetcherConfigBuilder {
        FetcherConfigBuilder::new()
    }

    /// Get the timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FetcherConfig::default();
        assert!(config.user_agent.starts_with("opengraph/"));
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.max_redirects, 10);
    }

    #[test]
    fn test_builder() {
        let config = FetcherConfig::builder()
            .user_agent("test-agent/1.0")
            .timeout_secs(5)
            .max_redirects(0)
            .build();

        assert_eq!(config.user_agent, "test-agent/1.0");
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.max_redirects, 0);
    }
}

//! HTTP client for the Torrentz2 index
//!
//! One GET per results page, strictly sequential, no retries and no
//! rate limiting — each search call owns a single in-flight request at
//! a time and any transport failure aborts the whole call.

use std::time::Duration;

use tracing::debug;

use crate::error::{Result, Torrentz2Error};
use crate::url::{BASE_URL, build_search_url};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base endpoint (default: `https://torrentz2.nz`); overridable so
    /// tests can point the client at a local mock server
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

/// HTTP client wrapper for fetching search-results pages
pub struct Torrentz2Client {
    client: reqwest::Client,
    base_url: String,
}

impl Torrentz2Client {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(Torrentz2Error::HttpError)?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    /// Fetch one search-results page
    ///
    /// # Arguments
    /// * `query` - Search query string (URL-encoded by the URL builder)
    /// * `page` - 1-based result page index
    ///
    /// # Returns
    /// The page's HTML as a string
    ///
    /// # Errors
    /// `HttpError` on transport failure or a non-2xx status
    pub async fn fetch_results_page(&self, query: &str, page: u32) -> Result<String> {
        let url = build_search_url(&self.base_url, query, page);
        debug!(%url, "fetching results page");

        let response = self.client.get(&url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://torrentz2.nz");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_client_creation() {
        let client = Torrentz2Client::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_with_custom_config() {
        let config = ClientConfig {
            base_url: "http://127.0.0.1:9000".to_string(),
            timeout_secs: 5,
        };
        let client = Torrentz2Client::with_config(config);
        assert!(client.is_ok());
    }
}

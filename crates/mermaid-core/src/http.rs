//! `reqwest`-backed [`DiagramFetcher`].

use crate::traits::{DiagramFetcher, FetchResponse};
use crate::{ConverterConfig, Error, Result};
use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::debug;

/// Fetches diagrams over HTTP with a bounded timeout.
///
/// The timeout covers the whole request, body included. Cloning is cheap;
/// clones share the connection pool.
///
/// # Examples
///
/// ```
/// use mermaid_ink_core::{ConverterConfig, HttpFetcher};
///
/// let fetcher = HttpFetcher::new(&ConverterConfig::default()).unwrap();
/// assert_eq!(fetcher.timeout().as_secs(), 30);
/// ```
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    /// Creates a fetcher from converter configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the HTTP client cannot be built,
    /// for example when the user agent is not a valid header value.
    pub fn new(config: &ConverterConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| Error::ConfigError {
                message: format!("Failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            timeout: config.timeout,
        })
    }

    /// Returns the configured request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    fn classify(&self, url: &Url, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::Timeout {
                timeout: self.timeout,
            }
        } else if err.is_connect() {
            Error::ConnectionFailure {
                endpoint: url.host_str().unwrap_or_default().to_string(),
                source: Box::new(err),
            }
        } else {
            Error::RequestError {
                message: err.without_url().to_string(),
            }
        }
    }
}

#[async_trait]
impl DiagramFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchResponse> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| self.classify(url, e))?;

        let status = response.status().as_u16();
        debug!(status, "Rendering service responded");

        let body = response
            .bytes()
            .await
            .map_err(|e| self.classify(url, e))?;

        Ok(FetchResponse::new(status, body.to_vec()))
    }
}

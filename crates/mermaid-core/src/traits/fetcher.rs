//! Rendering service fetch trait.

use crate::Result;
use async_trait::async_trait;
use reqwest::Url;
use std::sync::Arc;

/// Raw response from the rendering service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body
    pub body: Vec<u8>,
}

impl FetchResponse {
    /// Creates a response from a status code and body.
    ///
    /// # Examples
    ///
    /// ```
    /// use mermaid_ink_core::traits::FetchResponse;
    ///
    /// let response = FetchResponse::new(200, b"<svg/>".to_vec());
    /// assert!(response.is_ok());
    /// ```
    #[must_use]
    pub const fn new(status: u16, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Returns `true` for HTTP 200.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.status == 200
    }

    /// Returns the body as text, replacing invalid UTF-8.
    #[must_use]
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Fetches a rendered diagram from the rendering service.
///
/// Implementations issue exactly one GET per call and never retry. Transport
/// failures are returned as [`Error::Timeout`], [`Error::ConnectionFailure`]
/// or [`Error::RequestError`]; any HTTP response, whatever its status, is
/// returned as a [`FetchResponse`].
///
/// [`Error::Timeout`]: crate::Error::Timeout
/// [`Error::ConnectionFailure`]: crate::Error::ConnectionFailure
/// [`Error::RequestError`]: crate::Error::RequestError
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use mermaid_ink_core::traits::{DiagramFetcher, FetchResponse};
/// use mermaid_ink_core::Result;
/// use reqwest::Url;
///
/// struct CannedFetcher;
///
/// #[async_trait]
/// impl DiagramFetcher for CannedFetcher {
///     async fn fetch(&self, _url: &Url) -> Result<FetchResponse> {
///         Ok(FetchResponse::new(200, b"<svg/>".to_vec()))
///     }
/// }
/// ```
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DiagramFetcher: Send + Sync {
    /// Performs a GET request to `url`.
    ///
    /// # Errors
    ///
    /// Returns an error only when no HTTP response was received.
    async fn fetch(&self, url: &Url) -> Result<FetchResponse>;
}

#[async_trait]
impl<T: DiagramFetcher + ?Sized> DiagramFetcher for Arc<T> {
    async fn fetch(&self, url: &Url) -> Result<FetchResponse> {
        (**self).fetch(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_response_helpers() {
        let ok = FetchResponse::new(200, b"<svg/>".to_vec());
        assert!(ok.is_ok());
        assert_eq!(ok.body_text(), "<svg/>");

        let bad = FetchResponse::new(400, vec![0xFF, b'x']);
        assert!(!bad.is_ok());
        assert_eq!(bad.body_text(), "\u{FFFD}x");
    }

    #[tokio::test]
    async fn test_arc_dyn_fetcher_delegates() {
        let mut mock = MockDiagramFetcher::new();
        mock.expect_fetch()
            .times(1)
            .returning(|_| Ok(FetchResponse::new(204, Vec::new())));

        let shared: Arc<dyn DiagramFetcher> = Arc::new(mock);
        let url = Url::parse("https://mermaid.ink/svg/abc").unwrap();
        let response = shared.fetch(&url).await.unwrap();
        assert_eq!(response.status, 204);
    }
}

//! Error types for Mermaid diagram conversion.
//!
//! Every failure a conversion can hit maps onto one variant of [`Error`].
//! The `Display` text of each variant is the message shown to the user, so
//! callers that must never fail (see [`DiagramConverter::convert`]) can turn
//! any error into a text result with `to_string()`.
//!
//! [`DiagramConverter::convert`]: crate::DiagramConverter::convert
//!
//! # Examples
//!
//! ```
//! use mermaid_ink_core::{Error, Result};
//!
//! fn require_source(source: &str) -> Result<&str> {
//!     if source.trim().is_empty() {
//!         return Err(Error::EmptyInput);
//!     }
//!     Ok(source)
//! }
//!
//! let err = require_source("   ").unwrap_err();
//! assert!(err.is_input_error());
//! ```

use std::time::Duration;
use thiserror::Error;

/// Output formats accepted by the rendering service, as shown in messages.
pub const SUPPORTED_FORMATS: &str = "png, jpg, jpeg, svg, pdf";

/// Themes accepted by the rendering service, as shown in messages.
pub const SUPPORTED_THEMES: &str = "default, dark, neutral, forest";

/// Main error type for diagram conversion.
#[derive(Error, Debug)]
pub enum Error {
    /// Diagram source was empty after trimming and fence stripping.
    #[error("Mermaid code is required and cannot be empty")]
    EmptyInput,

    /// Requested output format is not one the service can produce.
    #[error("Invalid output format '{format}'. Supported formats: {supported}", supported = SUPPORTED_FORMATS)]
    UnsupportedFormat {
        /// The rejected value, as received
        format: String,
    },

    /// Requested theme is not one the service knows.
    #[error("Invalid theme '{theme}'. Supported themes: {supported}", supported = SUPPORTED_THEMES)]
    UnsupportedTheme {
        /// The rejected value, as received
        theme: String,
    },

    /// The diagram could not be encoded into a request URL.
    #[error("Failed to encode diagram: {message}")]
    EncodingFailure {
        /// Description of the encoding failure
        message: String,
    },

    /// The service rejected the diagram source (HTTP 400).
    #[error("Invalid Mermaid syntax: {detail}")]
    InvalidSyntax {
        /// Response body returned by the service
        detail: String,
    },

    /// The encoded diagram exceeds what the service accepts (HTTP 413).
    #[error("Diagram too large for the rendering service")]
    PayloadTooLarge,

    /// The service answered with any other non-200 status.
    #[error("Conversion failed: HTTP {status}")]
    UpstreamError {
        /// HTTP status code returned by the service
        status: u16,
    },

    /// The request did not complete within the configured timeout.
    #[error("Conversion timeout - rendering service took longer than {timeout:?} to respond")]
    Timeout {
        /// Configured request timeout
        timeout: Duration,
    },

    /// The rendering service could not be reached.
    #[error("Connection error: unable to reach rendering service at {endpoint}")]
    ConnectionFailure {
        /// Host of the rendering service
        endpoint: String,
        /// Underlying transport error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Any other transport or runtime fault while talking to the service.
    #[error("Request error: {message}")]
    RequestError {
        /// Description of the fault
        message: String,
    },

    /// Converter configuration is invalid.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },
}

impl Error {
    /// Returns `true` if the request was rejected before any network call.
    ///
    /// # Examples
    ///
    /// ```
    /// use mermaid_ink_core::Error;
    ///
    /// let err = Error::UnsupportedFormat { format: "gif".to_string() };
    /// assert!(err.is_input_error());
    /// assert!(!Error::PayloadTooLarge.is_input_error());
    /// ```
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput
                | Self::UnsupportedFormat { .. }
                | Self::UnsupportedTheme { .. }
                | Self::EncodingFailure { .. }
        )
    }

    /// Returns `true` if the service answered with a non-200 status.
    ///
    /// # Examples
    ///
    /// ```
    /// use mermaid_ink_core::Error;
    ///
    /// assert!(Error::UpstreamError { status: 503 }.is_upstream_error());
    /// assert!(Error::PayloadTooLarge.is_upstream_error());
    /// ```
    #[must_use]
    pub const fn is_upstream_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidSyntax { .. } | Self::PayloadTooLarge | Self::UpstreamError { .. }
        )
    }

    /// Returns `true` if the request failed in transit.
    ///
    /// # Examples
    ///
    /// ```
    /// use mermaid_ink_core::Error;
    /// use std::time::Duration;
    ///
    /// let err = Error::Timeout { timeout: Duration::from_secs(30) };
    /// assert!(err.is_transport_error());
    /// ```
    #[must_use]
    pub const fn is_transport_error(&self) -> bool {
        matches!(
            self,
            Self::Timeout { .. } | Self::ConnectionFailure { .. } | Self::RequestError { .. }
        )
    }

    /// Returns `true` if this is a timeout error.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// Returns `true` if this is a configuration error.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }
}

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;

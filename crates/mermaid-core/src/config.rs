//! Configuration for the diagram converter.
//!
//! # Examples
//!
//! ```
//! use mermaid_ink_core::ConverterConfig;
//! use std::time::Duration;
//!
//! // Use default configuration
//! let config = ConverterConfig::default();
//! assert_eq!(config.base_url, "https://mermaid.ink");
//!
//! // Create custom configuration
//! let custom = ConverterConfig {
//!     timeout: Duration::from_secs(10),
//!     ..Default::default()
//! };
//! assert!(custom.validate().is_ok());
//! ```

use crate::{Error, Result};
use reqwest::Url;
use std::time::Duration;

/// Environment variable overriding the service base URL.
pub const ENV_BASE_URL: &str = "MERMAID_INK_BASE_URL";

/// Environment variable overriding the request timeout, in whole seconds.
pub const ENV_TIMEOUT_SECS: &str = "MERMAID_INK_TIMEOUT_SECS";

/// Public mermaid.ink instance.
pub const DEFAULT_BASE_URL: &str = "https://mermaid.ink";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Converter configuration.
///
/// # Examples
///
/// ```
/// use mermaid_ink_core::ConverterConfig;
/// use std::time::Duration;
///
/// let config = ConverterConfig::builder()
///     .base_url("http://localhost:3000")
///     .timeout(Duration::from_secs(5))
///     .build();
///
/// assert_eq!(config.timeout.as_secs(), 5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterConfig {
    /// Rendering service root, without a trailing slash.
    ///
    /// Point this at a self-hosted instance to avoid the public service.
    /// Default: `https://mermaid.ink`
    pub base_url: String,

    /// Upper bound on a single request, including reading the body.
    ///
    /// Default: 30 seconds
    pub timeout: Duration,

    /// `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("mermaid-ink/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ConverterConfig {
    /// Creates a new configuration builder.
    #[must_use]
    pub fn builder() -> ConverterConfigBuilder {
        ConverterConfigBuilder::new()
    }

    /// Builds a configuration from the process environment.
    ///
    /// Reads [`ENV_BASE_URL`] and [`ENV_TIMEOUT_SECS`]; unset variables keep
    /// their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the timeout is not a whole number
    /// or the resulting configuration fails [`validate`](Self::validate).
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup.
    ///
    /// Same rules as [`from_env`](Self::from_env), without touching the
    /// process environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] on unparsable or invalid values.
    ///
    /// # Examples
    ///
    /// ```
    /// use mermaid_ink_core::ConverterConfig;
    ///
    /// let config = ConverterConfig::from_lookup(|key| match key {
    ///     "MERMAID_INK_TIMEOUT_SECS" => Some("12".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(config.timeout.as_secs(), 12);
    /// ```
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(base_url) = lookup(ENV_BASE_URL).filter(|v| !v.trim().is_empty()) {
            config.base_url = normalize_base_url(&base_url);
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|_| Error::ConfigError {
                message: format!("{ENV_TIMEOUT_SECS} must be a whole number of seconds, got '{raw}'"),
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if:
    /// - The timeout is zero
    /// - The base URL does not parse or is not `http`/`https`
    /// - The user agent is empty
    ///
    /// # Examples
    ///
    /// ```
    /// use mermaid_ink_core::ConverterConfig;
    /// use std::time::Duration;
    ///
    /// let mut invalid = ConverterConfig::default();
    /// invalid.timeout = Duration::ZERO;
    /// assert!(invalid.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.timeout.is_zero() {
            return Err(Error::ConfigError {
                message: "Timeout must be greater than zero".to_string(),
            });
        }

        let url = Url::parse(&self.base_url).map_err(|e| Error::ConfigError {
            message: format!("Invalid base URL '{}': {e}", self.base_url),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::ConfigError {
                message: format!("Base URL must use http or https, got '{}'", url.scheme()),
            });
        }

        if self.user_agent.trim().is_empty() {
            return Err(Error::ConfigError {
                message: "User agent cannot be empty".to_string(),
            });
        }

        Ok(())
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

/// Builder for [`ConverterConfig`].
#[derive(Debug, Clone, Default)]
pub struct ConverterConfigBuilder {
    config: ConverterConfig,
}

impl ConverterConfigBuilder {
    /// Creates a builder seeded with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the service base URL. Trailing slashes are dropped.
    #[must_use]
    pub fn base_url(mut self, base_url: impl AsRef<str>) -> Self {
        self.config.base_url = normalize_base_url(base_url.as_ref());
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Sets the `User-Agent` header.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Builds the configuration. Call `validate()` on the result to check it.
    #[must_use]
    pub fn build(self) -> ConverterConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ConverterConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("mermaid-ink/"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_strips_trailing_slash() {
        let config = ConverterConfig::builder()
            .base_url("https://render.example.com/")
            .build();
        assert_eq!(config.base_url, "https://render.example.com");
    }

    #[test]
    fn test_validate_zero_timeout() {
        let config = ConverterConfig::builder().timeout(Duration::ZERO).build();
        let err = config.validate().unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_validate_bad_scheme() {
        let config = ConverterConfig::builder()
            .base_url("ftp://mermaid.ink")
            .build();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_unparsable_url() {
        let config = ConverterConfig::builder().base_url("not a url").build();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_empty_user_agent() {
        let config = ConverterConfig::builder().user_agent("  ").build();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_lookup_defaults() {
        let config = ConverterConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ConverterConfig::default());
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = ConverterConfig::from_lookup(lookup_from(&[
            (ENV_BASE_URL, "http://127.0.0.1:3000/"),
            (ENV_TIMEOUT_SECS, "7"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:3000");
        assert_eq!(config.timeout, Duration::from_secs(7));
    }

    #[test]
    fn test_from_lookup_blank_base_url_keeps_default() {
        let config = ConverterConfig::from_lookup(lookup_from(&[(ENV_BASE_URL, "  ")])).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_from_lookup_rejects_bad_timeout() {
        let err =
            ConverterConfig::from_lookup(lookup_from(&[(ENV_TIMEOUT_SECS, "soon")])).unwrap_err();
        assert!(err.to_string().contains(ENV_TIMEOUT_SECS));
    }

    #[test]
    fn test_from_lookup_rejects_zero_timeout() {
        assert!(ConverterConfig::from_lookup(lookup_from(&[(ENV_TIMEOUT_SECS, "0")])).is_err());
    }
}

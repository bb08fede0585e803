//! Diagram source normalization and encoding.
//!
//! Chat-style input often wraps a diagram in a Markdown code fence; the
//! fence is removed before the source is encoded into the request URL.

use crate::{Error, Result};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;

const MERMAID_FENCE: &str = "```mermaid";
const FENCE: &str = "```";

/// Trims the source and strips a surrounding Markdown code fence.
///
/// A leading ```` ```mermaid ```` (or bare ```` ``` ````) and a trailing
/// ```` ``` ```` are removed. Fences inside the diagram are left alone.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] if nothing is left.
///
/// # Examples
///
/// ```
/// use mermaid_ink_core::normalize_source;
///
/// let fenced = "```mermaid\ngraph TD; A-->B\n```";
/// assert_eq!(normalize_source(fenced).unwrap(), "graph TD; A-->B");
///
/// assert!(normalize_source("```\n```").is_err());
/// ```
pub fn normalize_source(raw: &str) -> Result<String> {
    let mut text = raw.trim();

    if let Some(rest) = text
        .strip_prefix(MERMAID_FENCE)
        .or_else(|| text.strip_prefix(FENCE))
    {
        text = rest.trim();
    }

    if let Some(rest) = text.strip_suffix(FENCE) {
        text = rest.trim();
    }

    if text.is_empty() {
        return Err(Error::EmptyInput);
    }

    Ok(text.to_string())
}

/// Encodes normalized source as URL-safe base64 of its UTF-8 bytes.
///
/// Padding is kept; the service accepts it in the path.
///
/// # Examples
///
/// ```
/// use mermaid_ink_core::encode_source;
///
/// assert_eq!(encode_source("graph TD"), "Z3JhcGggVEQ=");
/// ```
#[must_use]
pub fn encode_source(source: &str) -> String {
    URL_SAFE.encode(source.as_bytes())
}

//! Request and result types for a single conversion.
//!
//! # Examples
//!
//! ```
//! use mermaid_ink_core::ConversionRequest;
//!
//! let request = ConversionRequest::new("graph TD; A-->B")
//!     .with_format("svg")
//!     .with_background_color("!white");
//!
//! assert_eq!(request.output_format, "svg");
//! ```

use crate::{OutputFormat, Result};
use reqwest::Url;

/// One conversion request, as received from the host.
///
/// Fields hold raw host input; validation happens in
/// [`DiagramConverter::plan`](crate::DiagramConverter::plan).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRequest {
    /// Mermaid source, possibly wrapped in a Markdown fence
    pub diagram_source: String,
    /// Requested output format, `png` by default
    pub output_format: String,
    /// Requested theme
    pub theme: Option<String>,
    /// Background color, `RRGGBB`, `#RRGGBB` or `!name`
    pub background_color: Option<String>,
    /// Width in pixels; `0` means unset
    pub width: Option<u32>,
    /// Height in pixels; `0` means unset
    pub height: Option<u32>,
}

impl ConversionRequest {
    /// Creates a PNG request with no optional parameters.
    #[must_use]
    pub fn new(diagram_source: impl Into<String>) -> Self {
        Self {
            diagram_source: diagram_source.into(),
            output_format: OutputFormat::default().as_str().to_string(),
            theme: None,
            background_color: None,
            width: None,
            height: None,
        }
    }

    /// Sets the output format.
    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.output_format = format.into();
        self
    }

    /// Sets the theme.
    #[must_use]
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    /// Sets the background color.
    #[must_use]
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Sets the width in pixels.
    #[must_use]
    pub const fn with_width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Sets the height in pixels.
    #[must_use]
    pub const fn with_height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }
}

/// A validated request, ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPlan {
    /// Validated output format
    pub format: OutputFormat,
    /// Normalized diagram source
    pub source: String,
    /// Full request URL
    pub url: Url,
}

/// A diagram rendered by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDiagram {
    /// Format that was requested
    pub format: OutputFormat,
    /// MIME type of `bytes`
    pub mime_type: &'static str,
    /// Suggested file name, `mermaid_diagram.<format>`
    pub file_name: String,
    /// Payload returned by the service
    pub bytes: Vec<u8>,
}

impl RenderedDiagram {
    /// Wraps a payload with the metadata for `format`.
    ///
    /// # Examples
    ///
    /// ```
    /// use mermaid_ink_core::{OutputFormat, RenderedDiagram};
    ///
    /// let diagram = RenderedDiagram::new(OutputFormat::Pdf, b"%PDF".to_vec());
    /// assert_eq!(diagram.mime_type, "application/pdf");
    /// assert_eq!(diagram.file_name, "mermaid_diagram.pdf");
    /// ```
    #[must_use]
    pub fn new(format: OutputFormat, bytes: Vec<u8>) -> Self {
        Self {
            format,
            mime_type: format.mime_type(),
            file_name: format.file_name(),
            bytes,
        }
    }

    /// Returns the payload size in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the payload is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Outcome of [`DiagramConverter::convert`](crate::DiagramConverter::convert).
///
/// Exactly one message is produced per conversion: the rendered payload or
/// a user-facing error description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionResult {
    /// Rendered payload with metadata
    Blob(RenderedDiagram),
    /// Human-readable error message
    Error(String),
}

impl ConversionResult {
    /// Returns `true` if the conversion produced a payload.
    #[must_use]
    pub const fn is_blob(&self) -> bool {
        matches!(self, Self::Blob(_))
    }

    /// Returns the error message, if any.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Blob(_) => None,
            Self::Error(message) => Some(message),
        }
    }

    /// Consumes the result, returning the payload if there is one.
    #[must_use]
    pub fn into_blob(self) -> Option<RenderedDiagram> {
        match self {
            Self::Blob(diagram) => Some(diagram),
            Self::Error(_) => None,
        }
    }
}

impl From<Result<RenderedDiagram>> for ConversionResult {
    fn from(result: Result<RenderedDiagram>) -> Self {
        match result {
            Ok(diagram) => Self::Blob(diagram),
            Err(err) => Self::Error(err.to_string()),
        }
    }
}

//! Mermaid to image conversion through the rendering service.
//!
//! A conversion is one linear round trip: normalize the source, validate
//! the options, build the URL, issue one GET, and map the response. There is
//! no retry and no cross-request state.

use crate::api_url::{QueryOptions, build_api_url};
use crate::http::HttpFetcher;
use crate::request::{ConversionRequest, ConversionResult, RenderPlan, RenderedDiagram};
use crate::source::{encode_source, normalize_source};
use crate::traits::DiagramFetcher;
use crate::{BackgroundColor, ConverterConfig, Error, OutputFormat, Result, Theme};
use tracing::{debug, error, info, warn};

/// Converts Mermaid source into rendered diagrams.
///
/// Generic over the [`DiagramFetcher`] so the HTTP layer can be replaced;
/// [`DiagramConverter::new`] wires in [`HttpFetcher`].
///
/// # Examples
///
/// ```no_run
/// use mermaid_ink_core::{ConversionRequest, ConversionResult, ConverterConfig, DiagramConverter};
///
/// # async fn example() -> mermaid_ink_core::Result<()> {
/// let converter = DiagramConverter::new(ConverterConfig::default())?;
///
/// let request = ConversionRequest::new("graph TD; A-->B").with_format("svg");
/// match converter.convert(&request).await {
///     ConversionResult::Blob(diagram) => println!("{} bytes", diagram.len()),
///     ConversionResult::Error(message) => eprintln!("{message}"),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DiagramConverter<F = HttpFetcher> {
    config: ConverterConfig,
    fetcher: F,
}

impl DiagramConverter<HttpFetcher> {
    /// Creates a converter that talks HTTP via `reqwest`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the configuration is invalid or the
    /// HTTP client cannot be built.
    pub fn new(config: ConverterConfig) -> Result<Self> {
        config.validate()?;
        let fetcher = HttpFetcher::new(&config)?;
        Ok(Self { config, fetcher })
    }
}

impl<F: DiagramFetcher> DiagramConverter<F> {
    /// Creates a converter with a custom fetcher.
    #[must_use]
    pub const fn with_fetcher(config: ConverterConfig, fetcher: F) -> Self {
        Self { config, fetcher }
    }

    /// Returns the converter configuration.
    #[must_use]
    pub const fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Validates a request and builds its URL without any I/O.
    ///
    /// The theme is only read for raster formats. Unknown themes and invalid
    /// background colors are dropped with a warning.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyInput`] if the source is empty after normalization
    /// - [`Error::UnsupportedFormat`] for an unknown output format
    /// - [`Error::EncodingFailure`] if the URL cannot be assembled
    pub fn plan(&self, request: &ConversionRequest) -> Result<RenderPlan> {
        let source = normalize_source(&request.diagram_source)?;
        let format: OutputFormat = request.output_format.parse()?;

        let theme = request
            .theme
            .as_deref()
            .filter(|t| format.is_raster() && !t.trim().is_empty())
            .and_then(|raw| {
                raw.parse::<Theme>()
                    .inspect_err(|_| warn!(theme = raw, "Ignoring unknown theme"))
                    .ok()
            });

        let background_color = request.background_color.as_deref().and_then(|raw| {
            let parsed = BackgroundColor::parse(raw);
            if parsed.is_none() && !raw.is_empty() {
                warn!(background_color = raw, "Ignoring invalid background color");
            }
            parsed
        });

        let options = QueryOptions {
            theme,
            background_color,
            width: request.width.filter(|w| *w > 0),
            height: request.height.filter(|h| *h > 0),
        };

        let encoded = encode_source(&source);
        let url = build_api_url(&self.config.base_url, &encoded, format, &options)?;

        Ok(RenderPlan {
            format,
            source,
            url,
        })
    }

    /// Renders a diagram, returning typed errors.
    ///
    /// # Errors
    ///
    /// Any error from [`plan`](Self::plan), plus:
    /// - [`Error::InvalidSyntax`] on HTTP 400, with the response body
    /// - [`Error::PayloadTooLarge`] on HTTP 413
    /// - [`Error::UpstreamError`] on any other non-200 status
    /// - [`Error::Timeout`], [`Error::ConnectionFailure`] or
    ///   [`Error::RequestError`] if no response arrived
    pub async fn render(&self, request: &ConversionRequest) -> Result<RenderedDiagram> {
        let plan = self.plan(request)?;

        info!(format = %plan.format, "Converting Mermaid diagram");
        debug!(url = %plan.url, "Requesting rendering service");

        let response = self.fetcher.fetch(&plan.url).await?;

        match response.status {
            200 => {
                let diagram = RenderedDiagram::new(plan.format, response.body);
                info!(
                    format = %plan.format,
                    bytes = diagram.len(),
                    "Successfully converted diagram"
                );
                Ok(diagram)
            }
            400 => Err(Error::InvalidSyntax {
                detail: response.body_text(),
            }),
            413 => Err(Error::PayloadTooLarge),
            status => Err(Error::UpstreamError { status }),
        }
    }

    /// Converts a diagram, folding every failure into a text result.
    ///
    /// Never returns an error: the caller always gets either a payload or
    /// a message describing what went wrong.
    pub async fn convert(&self, request: &ConversionRequest) -> ConversionResult {
        match self.render(request).await {
            Ok(diagram) => ConversionResult::Blob(diagram),
            Err(err) => {
                error!(error = %err, "Diagram conversion failed");
                ConversionResult::Error(err.to_string())
            }
        }
    }
}

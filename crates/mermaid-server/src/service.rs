//! MCP server implementation for Mermaid rendering.
//!
//! The `MermaidService` provides two tools:
//! 1. `convert_mermaid` - Render a diagram and return it as image content
//! 2. `mermaid_url` - Build the rendering URL without fetching it
//!
//! Conversion failures are tool results with `is_error` set, never protocol
//! errors: the calling model sees the message and can fix its input.

use crate::types::{ConvertMermaidParams, MermaidUrlResult, RenderMetadata};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use mermaid_ink_core::traits::DiagramFetcher;
use mermaid_ink_core::{ConversionRequest, ConversionResult, ConverterConfig, DiagramConverter};
use rmcp::handler::server::ServerHandler;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{ErrorData as McpError, tool, tool_handler, tool_router};
use std::fmt;
use std::sync::Arc;
use tracing::warn;

type SharedConverter = DiagramConverter<Arc<dyn DiagramFetcher>>;

/// MCP server for Mermaid diagram rendering.
///
/// # Examples
///
/// ```no_run
/// use mermaid_ink_core::ConverterConfig;
/// use mermaid_ink_server::service::MermaidService;
/// use rmcp::ServiceExt;
/// use rmcp::transport::stdio;
///
/// # async fn example() -> anyhow::Result<()> {
/// let service = MermaidService::new(ConverterConfig::default())?
///     .serve(stdio())
///     .await?;
/// service.waiting().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct MermaidService {
    /// Shared converter; one per server process
    converter: Arc<SharedConverter>,

    /// Tool router for MCP protocol
    tool_router: ToolRouter<Self>,
}

impl fmt::Debug for MermaidService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MermaidService")
            .field("config", self.converter.config())
            .finish_non_exhaustive()
    }
}

impl MermaidService {
    /// Creates a service backed by the HTTP fetcher.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: ConverterConfig) -> mermaid_ink_core::Result<Self> {
        config.validate()?;
        let fetcher = mermaid_ink_core::HttpFetcher::new(&config)?;
        Ok(Self::with_fetcher(config, fetcher))
    }

    /// Creates a service with a custom fetcher.
    #[must_use]
    pub fn with_fetcher(config: ConverterConfig, fetcher: impl DiagramFetcher + 'static) -> Self {
        let fetcher: Arc<dyn DiagramFetcher> = Arc::new(fetcher);
        Self {
            converter: Arc::new(DiagramConverter::with_fetcher(config, fetcher)),
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_router]
impl MermaidService {
    /// Render a Mermaid diagram through mermaid.ink.
    ///
    /// Returns the image as base64 image content followed by a JSON text
    /// block with MIME type, file name and size.
    #[tool(
        description = "Convert Mermaid diagram code to an image (png, jpg, jpeg, svg or pdf) using the mermaid.ink rendering service. Supports themes, background color and size for raster output."
    )]
    async fn convert_mermaid(
        &self,
        Parameters(params): Parameters<ConvertMermaidParams>,
    ) -> Result<CallToolResult, McpError> {
        let request = ConversionRequest::from(params);

        match self.converter.convert(&request).await {
            ConversionResult::Blob(diagram) => {
                let metadata = RenderMetadata::from(&diagram);
                let data = STANDARD.encode(&diagram.bytes);

                Ok(CallToolResult::success(vec![
                    Content::image(data, diagram.mime_type),
                    Content::text(serde_json::to_string_pretty(&metadata).map_err(|e| {
                        McpError::internal_error(format!("Failed to serialize result: {e}"), None)
                    })?),
                ]))
            }
            ConversionResult::Error(message) => {
                Ok(CallToolResult::error(vec![Content::text(message)]))
            }
        }
    }

    /// Build the mermaid.ink URL for a diagram without fetching it.
    #[tool(
        description = "Build the mermaid.ink URL that renders a Mermaid diagram, without downloading it. Takes the same parameters as convert_mermaid."
    )]
    async fn mermaid_url(
        &self,
        Parameters(params): Parameters<ConvertMermaidParams>,
    ) -> Result<CallToolResult, McpError> {
        let request = ConversionRequest::from(params);

        match self.converter.plan(&request) {
            Ok(plan) => {
                let result = MermaidUrlResult::from(&plan);
                Ok(CallToolResult::success(vec![Content::text(
                    serde_json::to_string_pretty(&result).map_err(|e| {
                        McpError::internal_error(format!("Failed to serialize result: {e}"), None)
                    })?,
                )]))
            }
            Err(err) => {
                warn!(error = %err, "Rejected mermaid_url request");
                Ok(CallToolResult::error(vec![Content::text(err.to_string())]))
            }
        }
    }
}

#[tool_handler]
impl ServerHandler for MermaidService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Render Mermaid diagrams to images. Use convert_mermaid with the diagram \
                 source and an optional output_format (png, jpg, jpeg, svg, pdf); use \
                 mermaid_url to get a shareable link instead of the image."
                    .to_string(),
            ),
        }
    }
}

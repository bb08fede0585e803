//! Type definitions for MCP server tools.
//!
//! Both tools take the same parameters:
//! - `convert_mermaid`: render a diagram and return it as an image
//! - `mermaid_url`: build the rendering URL without fetching it

use mermaid_ink_core::{ConversionRequest, OutputFormat, RenderPlan, RenderedDiagram};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

fn default_output_format() -> String {
    OutputFormat::default().as_str().to_string()
}

/// Parameters for rendering a Mermaid diagram.
///
/// # Examples
///
/// ```
/// use mermaid_ink_server::types::ConvertMermaidParams;
///
/// let params: ConvertMermaidParams = serde_json::from_value(serde_json::json!({
///     "mermaid_code": "graph TD; A-->B",
///     "format": "svg",
///     "bg_color": "!white"
/// }))
/// .unwrap();
///
/// assert_eq!(params.output_format.as_deref(), Some("svg"));
/// assert_eq!(params.background_color.as_deref(), Some("!white"));
/// ```
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ConvertMermaidParams {
    /// Mermaid diagram source. A surrounding ```mermaid fence is stripped.
    #[serde(alias = "diagram")]
    pub mermaid_code: String,

    /// Output format: png, jpg, jpeg, svg or pdf (default: png)
    #[serde(default, alias = "format")]
    pub output_format: Option<String>,

    /// Theme for png/jpg output: default, dark, neutral or forest
    #[serde(default)]
    pub theme: Option<String>,

    /// Background color: hex like FF0000 or #FF0000, or a named color like !white
    #[serde(default, alias = "bg_color")]
    pub background_color: Option<String>,

    /// Image width in pixels
    #[serde(default)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[serde(default)]
    pub height: Option<u32>,
}

impl From<ConvertMermaidParams> for ConversionRequest {
    fn from(params: ConvertMermaidParams) -> Self {
        Self {
            diagram_source: params.mermaid_code,
            output_format: params
                .output_format
                .unwrap_or_else(default_output_format),
            theme: params.theme,
            background_color: params.background_color,
            width: params.width,
            height: params.height,
        }
    }
}

/// Metadata returned next to a rendered diagram.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RenderMetadata {
    /// MIME type of the image content
    pub mime_type: String,

    /// Suggested file name
    pub file_name: String,

    /// Payload size before base64 encoding
    pub size_bytes: usize,
}

impl From<&RenderedDiagram> for RenderMetadata {
    fn from(diagram: &RenderedDiagram) -> Self {
        Self {
            mime_type: diagram.mime_type.to_string(),
            file_name: diagram.file_name.clone(),
            size_bytes: diagram.len(),
        }
    }
}

/// Result from `mermaid_url`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MermaidUrlResult {
    /// Rendering URL; a GET on it returns the diagram
    pub url: String,

    /// Validated output format
    pub format: String,

    /// MIME type the URL will return
    pub mime_type: String,
}

impl From<&RenderPlan> for MermaidUrlResult {
    fn from(plan: &RenderPlan) -> Self {
        Self {
            url: plan.url.to_string(),
            format: plan.format.as_str().to_string(),
            mime_type: plan.format.mime_type().to_string(),
        }
    }
}

//! Input handling shared by the rendering commands.

use crate::cli::RenderArgs;
use crate::commands::config::DefaultsConfig;
use anyhow::{Context, Result};
use mermaid_ink_core::ConversionRequest;
use std::fs;
use std::io::{self, Read};

/// Input argument meaning "read from stdin".
pub const STDIN_MARKER: &str = "-";

/// Reads diagram source from a file, or from stdin when `input` is `-`.
///
/// # Errors
///
/// Returns an error if the file or stdin cannot be read.
pub fn read_input(input: &str) -> Result<String> {
    if input == STDIN_MARKER {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .context("failed to read diagram from stdin")?;
        return Ok(source);
    }

    fs::read_to_string(input).with_context(|| format!("failed to read diagram from {input}"))
}

/// Assembles a request from flags, falling back to configured defaults.
///
/// Values are passed through unvalidated; the converter reports bad input.
///
/// # Examples
///
/// ```
/// use mermaid_ink_cli::cli::RenderArgs;
/// use mermaid_ink_cli::commands::common::build_request;
/// use mermaid_ink_cli::commands::config::DefaultsConfig;
///
/// let args = RenderArgs { width: Some(640), ..Default::default() };
/// let request = build_request("graph TD", &args, &DefaultsConfig::default());
/// assert_eq!(request.output_format, "png");
/// assert_eq!(request.width, Some(640));
/// ```
#[must_use]
pub fn build_request(
    source: impl Into<String>,
    args: &RenderArgs,
    defaults: &DefaultsConfig,
) -> ConversionRequest {
    ConversionRequest {
        diagram_source: source.into(),
        output_format: args
            .format
            .clone()
            .unwrap_or_else(|| defaults.format.clone()),
        theme: args.theme.clone().or_else(|| defaults.theme.clone()),
        background_color: args
            .bg_color
            .clone()
            .or_else(|| defaults.background_color.clone()),
        width: args.width,
        height: args.height,
    }
}

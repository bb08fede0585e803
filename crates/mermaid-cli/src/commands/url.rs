//! Url command implementation.
//!
//! Prints the rendering URL for a diagram. Nothing is fetched.

use crate::cli::RenderArgs;
use crate::commands::common::{build_request, read_input};
use crate::commands::config::DefaultsConfig;
use crate::exit::ExitCode;
use anyhow::{Context, Result};
use colored::Colorize;
use mermaid_ink_core::{ConverterConfig, DiagramConverter};
use tracing::warn;

/// Computes the rendering URL for `source`.
///
/// # Errors
///
/// Returns the converter's validation error for bad input.
///
/// # Examples
///
/// ```
/// use mermaid_ink_cli::cli::RenderArgs;
/// use mermaid_ink_cli::commands::config::DefaultsConfig;
/// use mermaid_ink_cli::commands::url::render_url;
/// use mermaid_ink_core::{ConverterConfig, DiagramConverter};
///
/// let converter = DiagramConverter::new(ConverterConfig::default()).unwrap();
/// let args = RenderArgs { format: Some("svg".into()), ..Default::default() };
/// let url = render_url(&converter, "graph TD", &args, &DefaultsConfig::default()).unwrap();
/// assert_eq!(url, "https://mermaid.ink/svg/Z3JhcGggVEQ=");
/// ```
pub fn render_url(
    converter: &DiagramConverter,
    source: &str,
    render: &RenderArgs,
    defaults: &DefaultsConfig,
) -> mermaid_ink_core::Result<String> {
    let plan = converter.plan(&build_request(source, render, defaults))?;
    Ok(plan.url.to_string())
}

/// Runs the url command.
///
/// Rejected diagrams print the message to stderr and return
/// [`ExitCode::ERROR`].
///
/// # Errors
///
/// Returns an error if the input cannot be read or the configuration is invalid.
pub async fn run(
    input: &str,
    render: &RenderArgs,
    defaults: &DefaultsConfig,
    config: ConverterConfig,
) -> Result<ExitCode> {
    let source = read_input(input)?;
    let converter = DiagramConverter::new(config).context("invalid converter configuration")?;

    match render_url(&converter, &source, render, defaults) {
        Ok(url) => {
            println!("{url}");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            warn!(error = %err, "Rejected diagram");
            eprintln!("{} {err}", "✗".red());
            Ok(ExitCode::ERROR)
        }
    }
}

//! Convert command implementation.
//!
//! Renders one diagram and writes the payload to a file or stdout.

use crate::cli::RenderArgs;
use crate::commands::common::{STDIN_MARKER, build_request, read_input};
use crate::commands::config::DefaultsConfig;
use crate::exit::ExitCode;
use anyhow::{Context, Result};
use colored::Colorize;
use mermaid_ink_core::{ConversionResult, ConverterConfig, DiagramConverter, RenderedDiagram};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Where a rendered diagram ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Raw bytes on stdout
    Stdout,
    /// A file on disk
    File(PathBuf),
}

impl OutputTarget {
    /// Resolves `-o`: `-` is stdout, absent means the diagram's default name.
    ///
    /// # Examples
    ///
    /// ```
    /// use mermaid_ink_cli::commands::convert::OutputTarget;
    /// use std::path::PathBuf;
    ///
    /// let target = OutputTarget::resolve(None, "mermaid_diagram.svg");
    /// assert_eq!(target, OutputTarget::File(PathBuf::from("mermaid_diagram.svg")));
    /// ```
    #[must_use]
    pub fn resolve(output: Option<PathBuf>, default_name: &str) -> Self {
        match output {
            Some(path) if path.as_os_str() == STDIN_MARKER => Self::Stdout,
            Some(path) => Self::File(path),
            None => Self::File(PathBuf::from(default_name)),
        }
    }
}

/// Writes the diagram payload to `target`.
///
/// # Errors
///
/// Returns an error if the file or stdout cannot be written.
pub fn write_diagram(diagram: &RenderedDiagram, target: &OutputTarget) -> Result<()> {
    match target {
        OutputTarget::Stdout => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(&diagram.bytes)
                .context("failed to write diagram to stdout")?;
            stdout.flush().context("failed to flush stdout")?;
        }
        OutputTarget::File(path) => write_file(path, &diagram.bytes)?,
    }
    Ok(())
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    fs::write(path, bytes).with_context(|| format!("failed to write {}", path.display()))
}

/// Runs the convert command.
///
/// Conversion failures print the message to stderr and return
/// [`ExitCode::ERROR`]; I/O and configuration failures are returned as errors.
///
/// # Errors
///
/// Returns an error if the input cannot be read, the configuration is
/// invalid, or the output cannot be written.
pub async fn run(
    input: &str,
    output: Option<PathBuf>,
    render: &RenderArgs,
    defaults: &DefaultsConfig,
    config: ConverterConfig,
) -> Result<ExitCode> {
    let source = read_input(input)?;
    let request = build_request(source, render, defaults);
    let converter = DiagramConverter::new(config).context("invalid converter configuration")?;

    match converter.convert(&request).await {
        ConversionResult::Blob(diagram) => {
            let target = OutputTarget::resolve(output, &diagram.file_name);
            write_diagram(&diagram, &target)?;

            if let OutputTarget::File(path) = &target {
                info!(path = %path.display(), bytes = diagram.len(), "Diagram written");
                println!(
                    "{} Wrote {} ({} bytes, {})",
                    "✓".green(),
                    path.display(),
                    diagram.len(),
                    diagram.mime_type
                );
            }
            Ok(ExitCode::SUCCESS)
        }
        ConversionResult::Error(message) => {
            eprintln!("{} {message}", "✗".red());
            Ok(ExitCode::ERROR)
        }
    }
}

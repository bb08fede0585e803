//! `mermaid-ink` command-line entry point.
//!
//! # Examples
//!
//! ```bash
//! # Render to mermaid_diagram.png
//! mermaid-ink convert flow.mmd
//!
//! # SVG from stdin
//! echo 'graph TD; A-->B' | mermaid-ink convert - --format svg -o flow.svg
//!
//! # Shareable link only
//! mermaid-ink url flow.mmd --theme dark
//! ```

use anyhow::Result;
use clap::Parser;
use mermaid_ink_cli::cli::Cli;
use mermaid_ink_cli::runner::{execute_command, init_logging};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    let exit_code = execute_command(cli).await?;

    std::process::exit(exit_code.as_i32());
}

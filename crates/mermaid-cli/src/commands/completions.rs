//! Shell completion generation command.
//!
//! Generates shell completion scripts for bash, zsh, fish, elvish and
//! `PowerShell`.

use crate::exit::ExitCode;
use anyhow::Result;
use clap::Command;
use clap_complete::{Shell, generate};
use std::io;
use tracing::info;

/// Writes the completion script for `shell` to `out`.
pub fn generate_completions(shell: Shell, cmd: &mut Command, out: &mut dyn io::Write) {
    let name = cmd.get_name().to_string();
    generate(shell, cmd, name, out);
}

/// Runs the completions command, printing the script to stdout.
///
/// # Examples
///
/// ```no_run
/// use mermaid_ink_cli::commands::completions;
/// use clap::Command;
/// use clap_complete::Shell;
///
/// # #[tokio::main]
/// # async fn main() {
/// let mut cmd = Command::new("mermaid-ink");
/// let result = completions::run(Shell::Bash, &mut cmd).await;
/// assert!(result.is_ok());
/// # }
/// ```
pub async fn run(shell: Shell, cmd: &mut Command) -> Result<ExitCode> {
    info!("Generating {shell} completions");
    generate_completions(shell, cmd, &mut io::stdout());
    Ok(ExitCode::SUCCESS)
}

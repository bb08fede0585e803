//! Action type definitions for CLI commands.

use clap::Subcommand;

/// Configuration file actions.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,

    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the configuration file location
    Path,
}

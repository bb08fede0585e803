//! CLI argument definitions and parsing.
//!
//! Defines the command-line interface structure using clap:
//! - `Cli` - Main CLI entry point
//! - `Commands` - Available subcommands
//! - `RenderArgs` - Rendering options shared by `convert` and `url`

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use mermaid_ink_core::{ENV_BASE_URL, ENV_TIMEOUT_SECS};
use std::path::PathBuf;

use crate::actions::ConfigAction;

/// Render Mermaid diagrams to PNG, JPG, SVG or PDF through mermaid.ink.
#[derive(Parser, Debug)]
#[command(name = "mermaid-ink")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Rendering service base URL (overrides the config file)
    #[arg(long, global = true, env = ENV_BASE_URL)]
    pub base_url: Option<String>,

    /// Request timeout in seconds (overrides the config file)
    #[arg(long, global = true, env = ENV_TIMEOUT_SECS)]
    pub timeout: Option<u64>,

    /// Configuration file (default: platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a diagram and write the image to disk.
    ///
    /// # Examples
    ///
    /// ```bash
    /// # PNG next to the current directory
    /// mermaid-ink convert flow.mmd
    ///
    /// # Dark SVG to a chosen file
    /// mermaid-ink convert flow.mmd --format svg -o flow.svg
    ///
    /// # From stdin, raw bytes to stdout
    /// cat flow.mmd | mermaid-ink convert - -o - > flow.png
    /// ```
    Convert {
        /// Diagram source file, or `-` for stdin
        input: String,

        /// Output file, or `-` for stdout (default: mermaid_diagram.<format>)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Rendering options
        #[command(flatten)]
        render: RenderArgs,
    },

    /// Print the rendering URL without downloading the image.
    Url {
        /// Diagram source file, or `-` for stdin
        input: String,

        /// Rendering options
        #[command(flatten)]
        render: RenderArgs,
    },

    /// Manage the configuration file.
    Config {
        /// Configuration action
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell for completion generation
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Rendering options. Unset values fall back to the `[defaults]` table.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderArgs {
    /// Output format: png, jpg, jpeg, svg or pdf
    #[arg(short, long)]
    pub format: Option<String>,

    /// Theme for raster output: default, dark, neutral or forest
    #[arg(short, long)]
    pub theme: Option<String>,

    /// Background color: RRGGBB, #RRGGBB or !name
    #[arg(long = "bg-color")]
    pub bg_color: Option<String>,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,
}

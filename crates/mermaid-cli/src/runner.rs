//! Command execution and runtime logic.
//!
//! Contains command dispatch and logging initialization.

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Commands};
use crate::commands;
use crate::commands::config::{Config, resolve_config_path};
use crate::exit::ExitCode;

/// Initializes logging infrastructure.
///
/// `--verbose` forces debug level; otherwise `RUST_LOG` applies, defaulting
/// to `info`. Logs go to stderr so stdout can carry diagram bytes.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    Ok(())
}

/// Executes the parsed command line.
///
/// Loads the config file once and routes to the subcommand handler.
///
/// # Errors
///
/// Returns an error if the config file is invalid or the command fails.
pub async fn execute_command(cli: Cli) -> Result<ExitCode> {
    let config_path = resolve_config_path(cli.config)?;

    match cli.command {
        Commands::Convert {
            input,
            output,
            render,
        } => {
            let config = Config::load(&config_path)?;
            let converter_config = config.converter_config(cli.base_url.as_deref(), cli.timeout);
            commands::convert::run(&input, output, &render, &config.defaults, converter_config)
                .await
        }
        Commands::Url { input, render } => {
            let config = Config::load(&config_path)?;
            let converter_config = config.converter_config(cli.base_url.as_deref(), cli.timeout);
            commands::url::run(&input, &render, &config.defaults, converter_config).await
        }
        Commands::Config { action } => commands::config::run(action, &config_path).await,
        Commands::Completions { shell } => {
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            commands::completions::run(shell, &mut cmd).await
        }
    }
}

//! MCP server entry point for Mermaid rendering.
//!
//! # Usage
//!
//! Run the server via stdio transport:
//!
//! ```bash
//! mermaid-ink-server
//! ```
//!
//! Or configure it in an MCP client:
//!
//! ```json
//! {
//!   "mcpServers": {
//!     "mermaid": {
//!       "command": "mermaid-ink-server",
//!       "env": { "MERMAID_INK_TIMEOUT_SECS": "60" }
//!     }
//!   }
//! }
//! ```

use anyhow::{Context, Result};
use mermaid_ink_core::ConverterConfig;
use mermaid_ink_server::{Credentials, MermaidService, validate_credentials};
use rmcp::ServiceExt;
use rmcp::transport::stdio;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging to stderr (stdout is for MCP protocol)
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,mermaid_ink_server=debug")),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .init();

    tracing::info!("Starting mermaid-ink-server v{}", env!("CARGO_PKG_VERSION"));

    let config = ConverterConfig::from_env().context("Invalid converter configuration")?;
    tracing::info!(
        base_url = %config.base_url,
        timeout_secs = config.timeout.as_secs(),
        "Rendering service configured"
    );

    validate_credentials(&Credentials::new())?;
    let service = MermaidService::new(config).context("Failed to create service")?;

    // Create and run the service with stdio transport
    let running = service.serve(stdio()).await?;
    running.waiting().await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

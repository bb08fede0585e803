//! MCP server exposing Mermaid diagram rendering.
//!
//! This crate wraps [`mermaid_ink_core`] in an MCP server so language models
//! can turn Mermaid source into images. Rendering itself is delegated to
//! mermaid.ink (or a self-hosted instance).
//!
//! # Tools
//!
//! 1. **`convert_mermaid`** - Render a diagram; returns image content plus
//!    `{mime_type, file_name, size_bytes}` metadata
//! 2. **`mermaid_url`** - Return the rendering URL without fetching it
//!
//! Both accept `mermaid_code` (alias `diagram`), `output_format` (alias
//! `format`), `theme`, `background_color` (alias `bg_color`), `width` and
//! `height`.
//!
//! # Examples
//!
//! ```no_run
//! use mermaid_ink_core::ConverterConfig;
//! use mermaid_ink_server::MermaidService;
//! use rmcp::ServiceExt;
//! use rmcp::transport::stdio;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let service = MermaidService::new(ConverterConfig::from_env()?)?
//!     .serve(stdio())
//!     .await?;
//! service.waiting().await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! The binary reads `MERMAID_INK_BASE_URL` and `MERMAID_INK_TIMEOUT_SECS`
//! from the environment; see [`ConverterConfig::from_env`].
//!
//! [`ConverterConfig::from_env`]: mermaid_ink_core::ConverterConfig::from_env

pub mod credentials;
pub mod service;
pub mod types;

pub use credentials::{CredentialValidationError, Credentials, validate_credentials};
pub use service::MermaidService;
pub use types::{ConvertMermaidParams, MermaidUrlResult, RenderMetadata};

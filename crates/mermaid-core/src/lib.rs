//! Core types and conversion logic for rendering Mermaid diagrams through
//! mermaid.ink.
//!
//! This crate does no rendering of its own. It validates host input, encodes
//! the diagram into a request URL, performs one HTTP GET against the
//! rendering service and maps the response into a payload or an error.
//!
//! # Architecture
//!
//! The core consists of:
//! - Domain types (`OutputFormat`, `Theme`, `BackgroundColor`)
//! - Request/result types (`ConversionRequest`, `ConversionResult`)
//! - Source normalization and URL construction
//! - The `DiagramFetcher` trait and its `reqwest` implementation
//! - `DiagramConverter`, which ties them together
//!
//! # Examples
//!
//! ```
//! use mermaid_ink_core::{ConversionRequest, ConverterConfig, DiagramConverter};
//!
//! let converter = DiagramConverter::new(ConverterConfig::default()).unwrap();
//!
//! // Planning performs no I/O
//! let plan = converter
//!     .plan(&ConversionRequest::new("graph TD; A-->B").with_format("svg"))
//!     .unwrap();
//! assert!(plan.url.as_str().starts_with("https://mermaid.ink/svg/"));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod api_url;
mod config;
mod converter;
mod error;
mod http;
mod request;
mod source;
mod types;

pub mod traits;

pub use api_url::{QueryOptions, build_api_url, query_params};
pub use config::{
    ConverterConfig, ConverterConfigBuilder, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, ENV_BASE_URL,
    ENV_TIMEOUT_SECS,
};
pub use converter::DiagramConverter;
pub use error::{Error, Result, SUPPORTED_FORMATS, SUPPORTED_THEMES};
pub use http::HttpFetcher;
pub use request::{ConversionRequest, ConversionResult, RenderPlan, RenderedDiagram};
pub use reqwest::Url;
pub use source::{encode_source, normalize_source};
pub use types::{BackgroundColor, OutputFormat, Theme};

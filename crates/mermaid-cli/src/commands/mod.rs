//! Command implementations for the `mermaid-ink` CLI.
//!
//! Each module owns one subcommand; `common` holds input reading and
//! request assembly shared by `convert` and `url`.

pub mod common;
pub mod completions;
pub mod config;
pub mod convert;
pub mod url;

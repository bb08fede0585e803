//! Mermaid rendering CLI library.
//!
//! Exposes the command implementations behind the `mermaid-ink` binary so
//! they can be tested without spawning a process.

#![allow(clippy::unused_async)]
#![allow(clippy::missing_errors_doc)]

pub mod actions;
pub mod cli;
pub mod commands;
pub mod exit;
pub mod runner;

pub use actions::ConfigAction;
pub use exit::ExitCode;

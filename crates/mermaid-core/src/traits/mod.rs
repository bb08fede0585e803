//! Core traits for diagram conversion.
//!
//! - [`DiagramFetcher`]: performs the single HTTP GET against the rendering
//!   service
//!
//! The converter is generic over the fetcher so tests can substitute a mock
//! and hosts can plug in their own HTTP stack.

mod fetcher;

pub use fetcher::{DiagramFetcher, FetchResponse};

#[cfg(test)]
pub use fetcher::MockDiagramFetcher;

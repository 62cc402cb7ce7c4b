use crate::compat::String;

/// Errors surfaced by the fallible entry points.
///
/// Parsing, resolving and serializing are total; only the orchestrator can
/// reject its input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// URL was empty or not a string
    #[error("Invalid URL")]
    InvalidUrl,
    /// Action set could not be read from its wire form
    #[error("Invalid actions: {0}")]
    InvalidActions(String),
}

/// Result type for query string manipulation
pub type Result<T> = core::result::Result<T, Error>;

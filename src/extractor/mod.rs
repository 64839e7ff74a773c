//! Extraction contract
//!
//! Extractors pull structural metadata from an external system and expose it
//! as a lazy, single-use sequence of model objects. The orchestrator calls
//! [`extract`](Extractor::extract) repeatedly until it returns `None`;
//! exhaustion is terminal and idempotent, never an error.
//!
//! Initialization is the fallible constructor of each concrete extractor, so
//! configuration problems surface before the first pull.

pub mod elasticsearch;

use crate::client::ClientError;
use crate::config::ConfigError;

/// Error during extraction
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Catalog fetch failed: {0}")]
    Fetch(#[from] ClientError),
}

/// Pull-based extraction contract
pub trait Extractor {
    /// Model type this extractor produces
    type Output;

    /// Produce the next unit, or `None` when the sequence is exhausted.
    ///
    /// Once exhausted, every subsequent call returns `None`.
    fn extract(&mut self) -> Result<Option<Self::Output>, ExtractError>;

    /// Static identifier used by the orchestrator for configuration
    /// namespacing
    fn scope(&self) -> &'static str;
}

pub use elasticsearch::EsIndexExtractor;

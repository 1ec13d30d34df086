//! Structured error types for taxonomer.

use thiserror::Error;

/// Unified error type for all taxonomer operations.
#[derive(Debug, Error)]
pub enum TaxonomerError {
    /// I/O error (corpus file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error (malformed or empty corpus data)
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid input (bad arguments)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Corpus decompression failure
    #[error("compression error: {0}")]
    Compression(String),

    /// A substitution pattern could not be compiled
    #[error("pattern error: {0}")]
    Pattern(String),
}

/// Convenience alias used throughout taxonomer.
pub type Result<T> = std::result::Result<T, TaxonomerError>;

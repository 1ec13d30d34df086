//! Shared primitives for the taxonomer text-anonymization crates.
//!
//! `taxonomer-core` provides the foundation the species and strain crates
//! build on:
//!
//! - **Error types**: [`TaxonomerError`] and [`Result`] for structured error handling
//! - **Randomness**: [`TaxonRng`] and [`seeded_rng`] for reproducible shuffles
//! - **Compression**: transparent gzip and zstd corpus decoding

pub mod compress;
pub mod error;
pub mod rng;

pub use error::{Result, TaxonomerError};
pub use rng::{seeded_rng, TaxonRng};

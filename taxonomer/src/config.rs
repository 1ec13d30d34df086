//! Configuration for building a [`Taxonomer`](crate::Taxonomer).

use std::path::PathBuf;

use taxonomer_core::Result;
use taxonomer_strain::StrainOptions;

use crate::corpus::{bundled_corpus, load_corpus};

/// Everything needed to build a [`Taxonomer`](crate::Taxonomer).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TaxonomerConfig {
    /// Species corpus file (plain, gzip or zstd). `None` uses the bundled list.
    pub corpus_path: Option<PathBuf>,
    /// Seed for the order species names are drawn in. `None` is random.
    pub species_seed: Option<u64>,
    /// Default options for strain scrambling.
    pub strain: StrainOptions,
}

impl TaxonomerConfig {
    pub fn with_corpus_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.corpus_path = Some(path.into());
        self
    }

    pub fn with_species_seed(mut self, seed: u64) -> Self {
        self.species_seed = Some(seed);
        self
    }

    pub fn with_strain_options(mut self, strain: StrainOptions) -> Self {
        self.strain = strain;
        self
    }

    /// The species names this configuration points at.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured corpus file cannot be loaded.
    pub fn corpus(&self) -> Result<Vec<String>> {
        match &self.corpus_path {
            Some(path) => load_corpus(path),
            None => Ok(bundled_corpus()),
        }
    }
}

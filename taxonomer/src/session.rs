//! The [`Taxonomer`] facade.

use std::path::Path;

use taxonomer_core::Result;
use taxonomer_species::{SpeciesCatalog, SpeciesRewriter};
use taxonomer_strain::{scramble_strains, StrainOptions};

use crate::config::TaxonomerConfig;
use crate::corpus::{bundled_corpus, load_corpus};

/// Swaps species names and scrambles strain names in text.
///
/// A `Taxonomer` owns a [`SpeciesCatalog`]: each species replacement uses up
/// a name from its pool, and the pool is refilled automatically once every
/// name has been handed out. Strain scrambling builds a fresh cipher on every
/// call and touches no catalog state.
///
/// One instance is meant for one thread at a time; share it behind a lock or
/// create one per thread.
#[derive(Debug, Clone)]
pub struct Taxonomer {
    catalog: SpeciesCatalog,
    rewriter: SpeciesRewriter,
    strain_options: StrainOptions,
}

impl Taxonomer {
    /// Build a taxonomer over the bundled species list.
    ///
    /// `specseed` fixes the order species names are drawn in.
    pub fn new(specseed: Option<u64>) -> Result<Self> {
        Self::with_corpus(bundled_corpus(), specseed)
    }

    /// Build a taxonomer over a caller-supplied list of full species names.
    ///
    /// # Errors
    ///
    /// Returns an error if `names` is empty.
    pub fn with_corpus<I, S>(names: I, specseed: Option<u64>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            catalog: SpeciesCatalog::new(names, specseed)?,
            rewriter: SpeciesRewriter::new()?,
            strain_options: StrainOptions::default(),
        })
    }

    /// Build a taxonomer over a corpus file.
    ///
    /// # Errors
    ///
    /// Returns an error if the corpus cannot be loaded.
    pub fn from_path(path: impl AsRef<Path>, specseed: Option<u64>) -> Result<Self> {
        Self::with_corpus(load_corpus(path)?, specseed)
    }

    /// Build a taxonomer from a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured corpus cannot be loaded.
    pub fn from_config(config: &TaxonomerConfig) -> Result<Self> {
        let mut tx = Self::with_corpus(config.corpus()?, config.species_seed)?;
        tx.strain_options = config.strain.clone();
        Ok(tx)
    }

    /// Options used by [`strains`](Self::strains) and
    /// [`obfuscate`](Self::obfuscate).
    pub fn strain_options(&self) -> &StrainOptions {
        &self.strain_options
    }

    pub fn set_strain_options(&mut self, options: StrainOptions) {
        self.strain_options = options;
    }

    /// The underlying species catalog.
    pub fn catalog(&self) -> &SpeciesCatalog {
        &self.catalog
    }

    /// Currently unused species names. The last one is drawn next.
    pub fn species_pool(&self) -> &[String] {
        self.catalog.pool()
    }

    /// Draw a new species name. A name is not seen again until the pool has
    /// been (automatically) refilled.
    pub fn sample(&mut self) -> String {
        self.catalog.sample()
    }

    /// Refill the species pool with a fresh permutation.
    pub fn regenerate(&mut self) {
        self.catalog.regenerate();
    }

    /// Replace every detected species name in `text` with a new one.
    ///
    /// Abbreviated names ("E. coli") are detected too and renamed
    /// consistently with their full form.
    pub fn species(&mut self, text: &str) -> String {
        self.rewriter.rewrite(text, &mut self.catalog)
    }

    /// Scramble the strain names in `wordlist` using the stored options.
    ///
    /// # Errors
    ///
    /// Returns an error if a strain cannot be compiled into a pattern.
    pub fn strains<S: AsRef<str>>(&self, text: &str, wordlist: &[S]) -> Result<String> {
        scramble_strains(text, wordlist, &self.strain_options)
    }

    /// Scramble the strain names in `wordlist` with explicit options.
    ///
    /// # Errors
    ///
    /// Returns an error if a strain cannot be compiled into a pattern.
    pub fn strains_with<S: AsRef<str>>(
        &self,
        text: &str,
        wordlist: &[S],
        options: &StrainOptions,
    ) -> Result<String> {
        scramble_strains(text, wordlist, options)
    }

    /// Replace species names, then scramble strain names, using the stored
    /// strain options.
    ///
    /// # Errors
    ///
    /// Returns an error if a strain cannot be compiled into a pattern.
    pub fn obfuscate<S: AsRef<str>>(&mut self, text: &str, wordlist: &[S]) -> Result<String> {
        let options = self.strain_options.clone();
        self.obfuscate_with(text, wordlist, &options)
    }

    /// Replace species names, then scramble strain names with explicit
    /// options.
    ///
    /// # Errors
    ///
    /// Returns an error if a strain cannot be compiled into a pattern.
    pub fn obfuscate_with<S: AsRef<str>>(
        &mut self,
        text: &str,
        wordlist: &[S],
        options: &StrainOptions,
    ) -> Result<String> {
        let text = self.species(text);
        scramble_strains(&text, wordlist, options)
    }
}

//! The species corpus and its pool of unused names.
//!
//! A [`SpeciesCatalog`] indexes every corpus species under both its full and
//! abbreviated form, and keeps a shuffled pool of full names that have not
//! been handed out yet. The pool is consumed from the end; once it runs dry
//! it is refilled with a fresh permutation of the same names.

use std::collections::HashMap;

use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::Rng;
use taxonomer_core::{seeded_rng, Result, TaxonRng, TaxonomerError};

use crate::name::{is_binomial, NameForm, SpeciesName};

/// The corpus of known species names plus the pool of names still unused.
#[derive(Debug, Clone)]
pub struct SpeciesCatalog {
    /// Distinct species, in first-seen corpus order.
    species: Vec<SpeciesName>,
    /// Full and abbreviated strings → which form they are.
    index: HashMap<String, NameForm>,
    /// Unused full names; the next draw is the last element.
    pool: Vec<String>,
    rng: TaxonRng,
}

impl SpeciesCatalog {
    /// Build a catalog from full species names.
    ///
    /// `seed` fixes the order in which names are drawn; `None` uses OS
    /// entropy. Duplicate names collapse into one entry. Names that are not
    /// two-word binomials are skipped with a warning: every replacement drawn
    /// from the pool spans exactly two words.
    ///
    /// # Errors
    ///
    /// Returns an error if no binomial name remains.
    pub fn new<I, S>(names: I, seed: Option<u64>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_rng(names, seeded_rng(seed))
    }

    /// Build a catalog that draws its shuffles from an existing random source.
    ///
    /// # Errors
    ///
    /// Returns an error if no binomial name remains.
    pub fn with_rng<I, S>(names: I, rng: TaxonRng) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut species = Vec::new();
        let mut index = HashMap::new();

        for name in names {
            let name: String = name.into();
            if !is_binomial(&name) {
                warn!("{name:?} is not a two-word binomial, skipped");
                continue;
            }
            let name = SpeciesName::new(name.split_whitespace().collect::<Vec<_>>().join(" "));
            if index.get(name.full()) == Some(&NameForm::Full) {
                continue;
            }
            index.insert(name.full().to_string(), NameForm::Full);
            index
                .entry(name.abbreviated().to_string())
                .or_insert(NameForm::Abbreviated);
            species.push(name);
        }

        if species.is_empty() {
            return Err(TaxonomerError::InvalidInput(
                "species catalog needs at least one binomial name".into(),
            ));
        }

        let mut catalog = Self {
            species,
            index,
            pool: Vec::new(),
            rng,
        };
        catalog.regenerate();
        Ok(catalog)
    }

    /// Refill the pool with every full name, freshly shuffled.
    ///
    /// Called automatically when the pool runs out; there is normally no
    /// reason to call it by hand. The pool contents afterwards are always the
    /// same set of names, only the order changes.
    pub fn regenerate(&mut self) {
        self.pool = shuffled_pool(&self.species, &mut self.rng);
        debug!("regenerated species pool with {} names", self.pool.len());
    }

    /// Draw a species name that has not been handed out in this generation.
    ///
    /// An empty pool is regenerated first, so this never runs dry; names may
    /// repeat across generations but never within one.
    pub fn sample(&mut self) -> String {
        if self.pool.is_empty() {
            self.regenerate();
        }
        // Construction rejects empty corpora, so a regenerated pool has names.
        self.pool.pop().unwrap_or_default()
    }

    /// The name the next [`sample`](Self::sample) will return, if the pool
    /// is not empty.
    pub fn peek(&self) -> Option<&str> {
        self.pool.last().map(String::as_str)
    }

    /// Currently unused full names. The last element is drawn next.
    pub fn pool(&self) -> &[String] {
        &self.pool
    }

    /// Which form `name` takes in the corpus, or `None` if it is unknown.
    pub fn lookup(&self, name: &str) -> Option<NameForm> {
        self.index.get(name).copied()
    }

    /// Whether `name` is a known full or abbreviated species name.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All distinct species in the corpus.
    pub fn species(&self) -> &[SpeciesName] {
        &self.species
    }

    /// Number of distinct species (the size of a freshly generated pool).
    pub fn len(&self) -> usize {
        self.species.len()
    }

    /// Whether the catalog holds no species. Always false for a constructed
    /// catalog.
    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }
}

/// Shuffle the full names of `species` into a new pool.
pub fn shuffled_pool<R: Rng + ?Sized>(species: &[SpeciesName], rng: &mut R) -> Vec<String> {
    let mut pool: Vec<String> = species.iter().map(|s| s.full().to_string()).collect();
    pool.shuffle(rng);
    pool
}

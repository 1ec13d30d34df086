//! Text augmentation that swaps species and strain names.
//!
//! Taxonomic species names are detected automatically and exchanged for
//! other valid species names; strain names are supplied by the caller and
//! replaced with randomly generated names of the same shape (letters become
//! similar letters, digits become digits).
//!
//! - **Facade**: [`Taxonomer`] with [`sample`](Taxonomer::sample),
//!   [`species`](Taxonomer::species), [`strains`](Taxonomer::strains) and
//!   [`obfuscate`](Taxonomer::obfuscate)
//! - **Corpus**: [`bundled_corpus`], [`load_corpus`], [`parse_corpus`]
//! - **Configuration**: [`TaxonomerConfig`] and [`StrainOptions`]
//!
//! # Example
//!
//! ```
//! use taxonomer::{StrainOptions, Taxonomer};
//!
//! let mut tx = Taxonomer::new(Some(42)).unwrap();
//! let text = "Escherichia coli K12 is a well-known laboratory strain.";
//! let options = StrainOptions::default().with_force_diff(true).with_seed(7);
//!
//! let out = tx.obfuscate_with(text, &["K12"], &options).unwrap();
//! let words: Vec<&str> = out.split_whitespace().collect();
//! assert_eq!(words.len(), text.split_whitespace().count());
//! assert_ne!(words[2], "K12");
//! assert!(out.ends_with("is a well-known laboratory strain."));
//! ```

pub mod config;
pub mod corpus;
pub mod session;

pub use config::TaxonomerConfig;
pub use corpus::{bundled_corpus, load_corpus, parse_corpus};
pub use session::Taxonomer;

pub use taxonomer_core::{Result, TaxonomerError};
pub use taxonomer_species::{abbreviate, NameForm, SpeciesCatalog, SpeciesName};
pub use taxonomer_strain::{StrainOptions, CONSERVED_WORDS};

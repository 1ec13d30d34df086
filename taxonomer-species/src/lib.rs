//! Taxonomic species-name detection and substitution.
//!
//! Finds binomial names ("Escherichia coli") and their abbreviations
//! ("E. coli") in free text and swaps every distinct species for a fresh name
//! drawn from a curated corpus:
//!
//! - **Names**: [`SpeciesName`] pairs a full name with its abbreviation, [`NameForm`] tags which is which
//! - **Catalog**: [`SpeciesCatalog`] indexes the corpus and hands out unused names
//! - **Rewriting**: [`SpeciesRewriter`] detects, verifies and replaces names in text
//!
//! # Example
//!
//! ```
//! use taxonomer_species::{SpeciesCatalog, SpeciesRewriter};
//!
//! let mut catalog = SpeciesCatalog::new(
//!     ["Escherichia coli", "Bacillus subtilis"],
//!     Some(42),
//! ).unwrap();
//! let rewriter = SpeciesRewriter::new().unwrap();
//!
//! let text = "E. coli, also known as Escherichia coli, is a bacterium.";
//! let out = rewriter.rewrite(text, &mut catalog);
//!
//! // Full and abbreviated forms are renamed to the same species.
//! let words: Vec<&str> = out.split_whitespace().collect();
//! let (genus, epithet) = (words[5], words[6].trim_end_matches(','));
//! assert_eq!(words[0], format!("{}.", &genus[..1]));
//! assert_eq!(words[1].trim_end_matches(','), epithet);
//! ```

pub mod catalog;
pub mod name;
pub mod rewriter;

pub use catalog::{shuffled_pool, SpeciesCatalog};
pub use name::{abbreviate, is_binomial, NameForm, SpeciesName};
pub use rewriter::{SpeciesRewriter, SpeciesSource, Verification, VerifiedName};

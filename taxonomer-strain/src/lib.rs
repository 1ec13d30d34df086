//! Strain-name scrambling.
//!
//! Strain identifiers such as "K12" or "O157:H7" are supplied by the caller
//! and re-lettered with a random substitution cipher that keeps every
//! character in its class (digit for digit, vowel for vowel, Greek for
//! Greek) and leaves qualifier words like "pv." or "isolate" untouched:
//!
//! - **Character classes**: [`CharClass`] partitions the scrambled alphabet
//! - **Cipher**: [`SubstitutionCipher`], rebuilt for every call
//! - **Qualifiers**: [`CONSERVED_WORDS`] and [`is_conserved`]
//! - **Scrambling**: [`scramble_strains`] configured by [`StrainOptions`]
//!
//! # Example
//!
//! ```
//! use taxonomer_strain::{scramble_strains, StrainOptions};
//!
//! let options = StrainOptions::default().with_force_diff(true).with_seed(42);
//! let out = scramble_strains("Strain Q found.", &["Q"], &options).unwrap();
//!
//! let words: Vec<&str> = out.split_whitespace().collect();
//! assert_eq!(words[0], "Strain");
//! assert_ne!(words[1], "Q");
//! assert_eq!(words[2], "found.");
//! ```

pub mod charclass;
pub mod cipher;
pub mod conserved;
pub mod scrambler;

pub use charclass::CharClass;
pub use cipher::SubstitutionCipher;
pub use conserved::{is_conserved, CONSERVED_WORDS};
pub use scrambler::{scramble_phrase, scramble_strains, StrainOptions, DEFAULT_SKIPPED_CHARS};

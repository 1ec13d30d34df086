//! Replacing caller-specified strain names in text.

use std::collections::BTreeSet;

use log::debug;
use regex::{NoExpand, Regex};
use taxonomer_core::{seeded_rng, Result, TaxonomerError};

use crate::cipher::SubstitutionCipher;

/// Characters left untouched by default: the Greek delta, commonly used for
/// deletion mutants ("ΔlacZ").
pub const DEFAULT_SKIPPED_CHARS: [char; 2] = ['δ', 'Δ'];

/// Options for one strain-scrambling call.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StrainOptions {
    /// Guarantee that every scrambled character changes (default false).
    pub force_diff: bool,
    /// Characters that are never substituted (default δ and Δ).
    pub skipped_chars: BTreeSet<char>,
    /// Seed for the cipher; `None` draws a fresh one per call.
    pub seed: Option<u64>,
}

impl Default for StrainOptions {
    fn default() -> Self {
        Self {
            force_diff: false,
            skipped_chars: DEFAULT_SKIPPED_CHARS.into_iter().collect(),
            seed: None,
        }
    }
}

impl StrainOptions {
    pub fn with_force_diff(mut self, force_diff: bool) -> Self {
        self.force_diff = force_diff;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the skipped characters.
    pub fn with_skipped_chars<I: IntoIterator<Item = char>>(mut self, chars: I) -> Self {
        self.skipped_chars = chars.into_iter().collect();
        self
    }

    /// Replace the skipped characters from one-character strings.
    ///
    /// # Errors
    ///
    /// Returns an error if any entry is not exactly one character long.
    pub fn with_skipped_strs<I, S>(self, chars: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut skipped = BTreeSet::new();
        for s in chars {
            let s = s.as_ref();
            let mut it = s.chars();
            match (it.next(), it.next()) {
                (Some(c), None) => {
                    skipped.insert(c);
                }
                _ => {
                    return Err(TaxonomerError::InvalidInput(format!(
                        "skipped character must be a single character, got {s:?}"
                    )))
                }
            }
        }
        Ok(self.with_skipped_chars(skipped))
    }
}

/// Scramble a strain designation word by word.
///
/// Words are split on whitespace and rejoined with single spaces; conserved
/// qualifiers are kept verbatim.
pub fn scramble_phrase(phrase: &str, cipher: &SubstitutionCipher) -> String {
    phrase
        .split_whitespace()
        .map(|word| cipher.encode_word(word))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Replace every whole-word occurrence of each strain in `wordlist`.
///
/// One cipher is built per call, so a character is substituted the same way
/// in every strain of the list. Strains are replaced in list order; blank and
/// repeated entries are ignored. A multi-word strain matches across any run
/// of whitespace in `text`. The number of whitespace-separated words in the
/// text never changes.
///
/// # Errors
///
/// Returns an error if a strain is too large to compile into a pattern.
pub fn scramble_strains<S: AsRef<str>>(
    text: &str,
    wordlist: &[S],
    options: &StrainOptions,
) -> Result<String> {
    let mut rng = seeded_rng(options.seed);
    let cipher = SubstitutionCipher::build(&mut rng, options.force_diff, &options.skipped_chars);

    let mut seen: BTreeSet<&str> = BTreeSet::new();
    let mut text = text.to_string();
    for strain in wordlist {
        let strain = strain.as_ref();
        if strain.trim().is_empty() || !seen.insert(strain) {
            continue;
        }
        let replacement = scramble_phrase(strain, &cipher);
        let pattern = strain_pattern(strain)?;
        debug!("strain {strain:?} -> {replacement:?}");
        text = pattern
            .replace_all(&text, NoExpand(&replacement))
            .into_owned();
    }
    Ok(text)
}

/// Whole-word pattern for a strain designation.
///
/// Words are matched literally and joined by `\s+`. A `\b` anchor is added on
/// each end that starts or finishes with a word character; an end made of
/// punctuation is matched as-is.
fn strain_pattern(strain: &str) -> Result<Regex> {
    let body = strain
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+");
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let trimmed = strain.trim();
    let open = if trimmed.chars().next().is_some_and(is_word) { r"\b" } else { "" };
    let close = if trimmed.chars().last().is_some_and(is_word) { r"\b" } else { "" };
    Regex::new(&format!("{open}{body}{close}")).map_err(|e| TaxonomerError::Pattern(e.to_string()))
}

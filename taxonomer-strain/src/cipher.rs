//! The per-call character substitution cipher.
//!
//! Each [`CharClass`] is shuffled independently and paired position by
//! position with its own members, giving a permutation within the class.
//! With `force_diff` the shuffled list is instead paired with itself rotated
//! by one, which turns every class into a single cycle: no member maps to
//! itself. A class left with one member after removing skipped characters
//! cannot be deranged, so that member stays unmapped.

use std::collections::{BTreeSet, HashMap};

use log::trace;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::charclass::CharClass;
use crate::conserved::is_conserved;

/// A character → character mapping, bijective within each class.
///
/// Characters absent from the table (punctuation, whitespace, skipped
/// characters) pass through [`apply`](Self::apply) unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstitutionCipher {
    table: HashMap<char, char>,
}

impl SubstitutionCipher {
    /// Build a fresh cipher from `rng`.
    ///
    /// Characters in `skipped` are left out of every class and therefore map
    /// to themselves. With `force_diff`, no mapped character maps to itself.
    pub fn build<R: Rng + ?Sized>(rng: &mut R, force_diff: bool, skipped: &BTreeSet<char>) -> Self {
        let mut table = HashMap::new();

        for class in CharClass::ALL {
            let members: Vec<char> = class
                .members()
                .iter()
                .copied()
                .filter(|c| !skipped.contains(c))
                .collect();

            let mut shuffled = members.clone();
            shuffled.shuffle(rng);

            if force_diff {
                if shuffled.len() < 2 {
                    trace!("{class:?}: {} member(s), left unmapped", shuffled.len());
                    continue;
                }
                let mut sources = shuffled.clone();
                sources.rotate_left(1);
                table.extend(sources.into_iter().zip(shuffled));
            } else {
                table.extend(members.into_iter().zip(shuffled));
            }
        }

        trace!("built substitution cipher over {} characters", table.len());
        Self { table }
    }

    /// The substitute for `c`, or `None` if `c` is not in the cipher.
    pub fn get(&self, c: char) -> Option<char> {
        self.table.get(&c).copied()
    }

    /// The substitute for `c`, or `c` itself if it is not in the cipher.
    pub fn apply(&self, c: char) -> char {
        self.get(c).unwrap_or(c)
    }

    /// Substitute every character of `word`.
    pub fn encode(&self, word: &str) -> String {
        word.chars().map(|c| self.apply(c)).collect()
    }

    /// Substitute a word unless it is a conserved qualifier.
    pub fn encode_word(&self, word: &str) -> String {
        if is_conserved(word) {
            word.to_string()
        } else {
            self.encode(word)
        }
    }

    /// Number of characters with a mapping.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether no character has a mapping.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// All `(from, to)` pairs, in no particular order.
    pub fn pairs(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.table.iter().map(|(&from, &to)| (from, to))
    }
}

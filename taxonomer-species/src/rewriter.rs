//! Detection and consistent substitution of species names in text.
//!
//! Rewriting a text runs in four steps:
//!
//! 1. Scan for binomial-shaped candidates ("Genus species" or "G. species").
//! 2. Verify candidates against the corpus. A known full name also verifies
//!    its abbreviation and links the two.
//! 3. Draw one new species per verified full name; the abbreviation linked to
//!    it is renamed to the abbreviation of the same new species.
//! 4. Draw a separate species for every abbreviation whose full form never
//!    appeared in the text.
//!
//! Every distinct detected string gets exactly one replacement, so repeated
//! mentions of a species stay consistent. An abbreviation shared by two
//! genera present in the same text ("P. syringae" for both *Pseudomonas* and
//! *Pantoea*) follows whichever full name was verified last.

use std::collections::{HashMap, HashSet};

use log::{debug, trace};
use regex::Regex;
use taxonomer_core::{Result, TaxonomerError};

use crate::catalog::SpeciesCatalog;
use crate::name::{abbreviate, NameForm};

/// Capitalized word or initial, whitespace, lowercase epithet.
const BINOMIAL_PATTERN: &str = r"[A-Z](?:[a-z]+|\.)\s[a-z]+";

/// Where the rewriter looks names up and draws replacements from.
///
/// [`SpeciesCatalog`] is the production implementation.
pub trait SpeciesSource {
    /// Which form `name` takes in the corpus, or `None` if unknown.
    fn lookup(&self, name: &str) -> Option<NameForm>;

    /// Draw an unused full species name.
    fn draw(&mut self) -> String;
}

impl SpeciesSource for SpeciesCatalog {
    fn lookup(&self, name: &str) -> Option<NameForm> {
        SpeciesCatalog::lookup(self, name)
    }

    fn draw(&mut self) -> String {
        self.sample()
    }
}

/// How a verified name was reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    /// Verified on its own.
    Unlinked,
    /// An abbreviation verified through this full name found in the same text.
    LinkedTo(String),
}

/// A detected string confirmed to be a known species name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedName {
    /// The string as it occurs in the text.
    pub name: String,
    /// Whether `name` is a full or an abbreviated form.
    pub form: NameForm,
    /// Whether an abbreviation was reached through its full name.
    pub verification: Verification,
}

/// Verified names in first-verified order. Re-verifying a name updates it in
/// place.
#[derive(Debug, Default)]
struct VerifiedSet {
    names: Vec<VerifiedName>,
    positions: HashMap<String, usize>,
}

impl VerifiedSet {
    fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    fn set(&mut self, name: &str, form: NameForm, verification: Verification) {
        match self.position(name) {
            Some(i) => {
                self.names[i].form = form;
                self.names[i].verification = verification;
            }
            None => {
                self.positions.insert(name.to_string(), self.names.len());
                self.names.push(VerifiedName {
                    name: name.to_string(),
                    form,
                    verification,
                });
            }
        }
    }
}

/// Detects species names in text and swaps them for names from a
/// [`SpeciesSource`].
#[derive(Debug, Clone)]
pub struct SpeciesRewriter {
    pattern: Regex,
}

impl SpeciesRewriter {
    /// Compile the binomial-name detector.
    pub fn new() -> Result<Self> {
        let pattern =
            Regex::new(BINOMIAL_PATTERN).map_err(|e| TaxonomerError::Pattern(e.to_string()))?;
        Ok(Self { pattern })
    }

    /// Distinct binomial-shaped substrings of `text`, in first-occurrence
    /// order. Candidates are not checked against any corpus.
    pub fn candidates<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let mut seen = HashSet::new();
        self.pattern
            .find_iter(text)
            .map(|m| m.as_str())
            .filter(|candidate| seen.insert(*candidate))
            .collect()
    }

    /// Candidates in `text` that the source knows, with their links.
    ///
    /// A full name verifies its own abbreviation as
    /// [`Verification::LinkedTo`] even if the abbreviation never occurs in
    /// the text. An abbreviation seen on its own stays
    /// [`Verification::Unlinked`] unless a matching full name turns up.
    pub fn verify<S: SpeciesSource + ?Sized>(&self, text: &str, source: &S) -> Vec<VerifiedName> {
        self.verified_set(text, source).names
    }

    fn verified_set<S: SpeciesSource + ?Sized>(&self, text: &str, source: &S) -> VerifiedSet {
        let mut verified = VerifiedSet::default();
        for candidate in self.candidates(text) {
            match source.lookup(candidate) {
                Some(NameForm::Abbreviated) => {
                    if verified.position(candidate).is_none() {
                        verified.set(candidate, NameForm::Abbreviated, Verification::Unlinked);
                    }
                }
                Some(NameForm::Full) => {
                    verified.set(candidate, NameForm::Full, Verification::Unlinked);
                    verified.set(
                        &abbreviate(candidate),
                        NameForm::Abbreviated,
                        Verification::LinkedTo(candidate.to_string()),
                    );
                }
                None => trace!("ignoring unknown binomial candidate {candidate:?}"),
            }
        }
        verified
    }

    /// Decide the replacement for every verified name in `text`, drawing new
    /// names from `source`.
    ///
    /// Returns `(original, replacement)` pairs in verification order. Each
    /// original appears once.
    pub fn substitutions<S: SpeciesSource + ?Sized>(
        &self,
        text: &str,
        source: &mut S,
    ) -> Vec<(String, String)> {
        let verified = self.verified_set(text, source);
        let mut replacements: Vec<Option<String>> = vec![None; verified.names.len()];

        for (i, entry) in verified.names.iter().enumerate() {
            if entry.form != NameForm::Full {
                continue;
            }
            let new_species = source.draw();
            if let Some(j) = verified.position(&abbreviate(&entry.name)) {
                replacements[j] = Some(abbreviate(&new_species));
            }
            replacements[i] = Some(new_species);
        }

        // Abbreviations whose full form never appeared draw on their own.
        for (i, entry) in verified.names.iter().enumerate() {
            if entry.form == NameForm::Abbreviated && entry.verification == Verification::Unlinked
            {
                replacements[i] = Some(abbreviate(&source.draw()));
            }
        }

        debug!(
            "species: {} verified names, {} substitutions",
            verified.names.len(),
            replacements.iter().flatten().count()
        );

        verified
            .names
            .into_iter()
            .zip(replacements)
            .filter_map(|(entry, replacement)| replacement.map(|r| (entry.name, r)))
            .collect()
    }

    /// Replace every detected species name in `text`.
    ///
    /// Text without known species comes back unchanged and draws nothing.
    pub fn rewrite<S: SpeciesSource + ?Sized>(&self, text: &str, source: &mut S) -> String {
        let substitutions = self.substitutions(text, source);
        apply_substitutions(text, &substitutions)
    }
}

/// Replace every literal occurrence of each original in a single pass.
///
/// At each position the longest matching original wins; ties go to the
/// earlier pair. Replaced text is never scanned again, so a drawn name that
/// happens to equal another original stays as drawn.
fn apply_substitutions(text: &str, substitutions: &[(String, String)]) -> String {
    let mut ordered: Vec<&(String, String)> = substitutions
        .iter()
        .filter(|(from, _)| !from.is_empty())
        .collect();
    if ordered.is_empty() {
        return text.to_string();
    }
    ordered.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    'scan: while let Some(c) = rest.chars().next() {
        for (from, to) in &ordered {
            if rest.starts_with(from.as_str()) {
                out.push_str(to);
                rest = &rest[from.len()..];
                continue 'scan;
            }
        }
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A source with a fixed vocabulary and a scripted draw order (drawn from
    /// the end, like the catalog pool).
    struct Scripted {
        known: HashMap<String, NameForm>,
        draws: Vec<String>,
    }

    impl Scripted {
        fn new(known: &[&str], draws: &[&str]) -> Self {
            let mut map = HashMap::new();
            for name in known {
                map.insert(name.to_string(), NameForm::Full);
                map.insert(abbreviate(name), NameForm::Abbreviated);
            }
            Self {
                known: map,
                draws: draws.iter().map(|s| s.to_string()).collect(),
            }
        }
    }

    impl SpeciesSource for Scripted {
        fn lookup(&self, name: &str) -> Option<NameForm> {
            self.known.get(name).copied()
        }

        fn draw(&mut self) -> String {
            self.draws.pop().expect("test drew more names than scripted")
        }
    }

    fn rewriter() -> SpeciesRewriter {
        SpeciesRewriter::new().unwrap()
    }

    #[test]
    fn candidates_are_distinct_and_ordered() {
        let text = "E. coli and Escherichia coli, then E. coli again.";
        assert_eq!(rewriter().candidates(text), vec!["E. coli", "Escherichia coli"]);
    }

    #[test]
    fn candidates_in_a_long_document() {
        // Lowercase base-26 epithets: "a", "b", ..., "ba", ...
        let epithet = |mut i: usize| {
            let mut word = Vec::new();
            loop {
                word.push(b'a' + (i % 26) as u8);
                i /= 26;
                if i == 0 {
                    break;
                }
            }
            word.reverse();
            String::from_utf8(word).unwrap()
        };
        let names: Vec<String> = (0..3000).map(|i| format!("Genus {}", epithet(i))).collect();
        let text = [names.join(", "), names.join("; ")].join(". ");

        let found = rewriter().candidates(&text);
        assert_eq!(found.len(), names.len());
        assert!(found.iter().zip(&names).all(|(f, n)| f == n));
    }

    #[test]
    fn candidates_need_lowercase_epithet() {
        let text = "In Escherichia Coli; Strain K12.";
        assert!(rewriter().candidates(text).is_empty());
    }

    #[test]
    fn full_name_links_its_abbreviation() {
        let source = Scripted::new(&["Escherichia coli"], &[]);
        let verified = rewriter().verify("E. coli is Escherichia coli.", &source);
        assert_eq!(
            verified,
            vec![
                VerifiedName {
                    name: "E. coli".into(),
                    form: NameForm::Abbreviated,
                    verification: Verification::LinkedTo("Escherichia coli".into()),
                },
                VerifiedName {
                    name: "Escherichia coli".into(),
                    form: NameForm::Full,
                    verification: Verification::Unlinked,
                },
            ]
        );
    }

    #[test]
    fn lone_abbreviation_stays_unlinked() {
        let source = Scripted::new(&["Escherichia coli"], &[]);
        let verified = rewriter().verify("We grew E. coli overnight.", &source);
        assert_eq!(verified.len(), 1);
        assert_eq!(verified[0].verification, Verification::Unlinked);
    }

    #[test]
    fn full_and_abbreviated_share_one_draw() {
        let mut source = Scripted::new(&["Escherichia coli"], &["Bacillus subtilis"]);
        let out = rewriter().rewrite(
            "E. coli is a bacterial species that is also known as Escherichia coli.",
            &mut source,
        );
        assert_eq!(
            out,
            "B. subtilis is a bacterial species that is also known as Bacillus subtilis."
        );
        assert!(source.draws.is_empty());
    }

    #[test]
    fn lone_abbreviation_draws_its_own_name() {
        let mut source = Scripted::new(&["Escherichia coli"], &["Vibrio cholerae"]);
        let out = rewriter().rewrite("Cultures of E. coli grew.", &mut source);
        assert_eq!(out, "Cultures of V. cholerae grew.");
    }

    #[test]
    fn draw_order_follows_verification_order() {
        let text = "Plant pathogen Pseudomonas syringae is a challenge while E. coli is not. \
                    However, P. syringae and E. coli are only two examples, and Dickeya \
                    dadantii also matters.";
        let known = ["Pseudomonas syringae", "Escherichia coli", "Dickeya dadantii"];
        // Full names draw first in text order, then lone abbreviations.
        let draws = ["Vibrio cholerae", "Listeria monocytogenes", "Bacillus subtilis"];
        let mut source = Scripted::new(&known, &draws);
        let out = rewriter().rewrite(text, &mut source);
        assert_eq!(
            out,
            "Plant pathogen Bacillus subtilis is a challenge while V. cholerae is not. \
             However, B. subtilis and V. cholerae are only two examples, and Listeria \
             monocytogenes also matters."
        );
    }

    #[test]
    fn repeated_mentions_are_consistent() {
        let mut source = Scripted::new(&["Vibrio cholerae"], &["Salmonella enterica"]);
        let out = rewriter().rewrite(
            "Vibrio cholerae, V. cholerae, Vibrio cholerae and V. cholerae.",
            &mut source,
        );
        assert_eq!(
            out,
            "Salmonella enterica, S. enterica, Salmonella enterica and S. enterica."
        );
    }

    #[test]
    fn unknown_binomials_are_left_alone() {
        let mut source = Scripted::new(&["Escherichia coli"], &[]);
        let text = "Plant pathogen studies from Helsinki in general.";
        assert_eq!(rewriter().rewrite(text, &mut source), text);
    }

    #[test]
    fn text_without_species_is_unchanged() {
        let mut source = Scripted::new(&["Escherichia coli"], &[]);
        assert_eq!(rewriter().rewrite("", &mut source), "");
        assert_eq!(rewriter().rewrite("no names here.", &mut source), "no names here.");
    }

    #[test]
    fn drawn_names_are_not_rewritten_again() {
        // Each species is renamed to the other; a sequential replace would
        // collapse both onto one name.
        let mut source = Scripted::new(
            &["Escherichia coli", "Bacillus subtilis"],
            &["Escherichia coli", "Bacillus subtilis"],
        );
        let out = rewriter().rewrite("Escherichia coli and Bacillus subtilis", &mut source);
        assert_eq!(out, "Bacillus subtilis and Escherichia coli");
    }

    #[test]
    fn shared_abbreviation_follows_last_full_name() {
        let mut source = Scripted::new(
            &["Pseudomonas syringae", "Pantoea syringae"],
            &["Vibrio cholerae", "Listeria monocytogenes"],
        );
        let out = rewriter().rewrite(
            "Pseudomonas syringae, Pantoea syringae and P. syringae.",
            &mut source,
        );
        assert_eq!(
            out,
            "Listeria monocytogenes, Vibrio cholerae and V. cholerae."
        );
    }

    #[test]
    fn rewrites_with_catalog() {
        let mut catalog = SpeciesCatalog::new(
            ["Escherichia coli", "Pseudomonas syringae", "Dickeya dadantii"],
            Some(42),
        )
        .unwrap();
        let expected = catalog.peek().unwrap().to_string();
        let out = rewriter().rewrite("E. coli, also Escherichia coli.", &mut catalog);
        assert_eq!(out, format!("{}, also {}.", abbreviate(&expected), expected));
        assert_eq!(catalog.pool().len(), 2);
    }

    #[test]
    fn apply_prefers_longest_original() {
        let subs = vec![
            ("E. coli".to_string(), "X".to_string()),
            ("E. coli K".to_string(), "Y".to_string()),
        ];
        assert_eq!(apply_substitutions("E. coli K and E. coli", &subs), "Y and X");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    const NAMES: &[&str] = &[
        "Escherichia coli",
        "Pseudomonas syringae",
        "Dickeya dadantii",
        "Bacillus subtilis",
    ];

    fn mention() -> impl Strategy<Value = String> {
        prop_oneof![
            (0..NAMES.len()).prop_map(|i| NAMES[i].to_string()),
            (0..NAMES.len()).prop_map(|i| abbreviate(NAMES[i])),
            Just("bacteria".to_string()),
            Just("grow".to_string()),
        ]
    }

    proptest! {
        #[test]
        fn word_count_is_preserved(mentions in proptest::collection::vec(mention(), 0..20),
                                   seed in any::<u64>()) {
            let text = mentions.join(" and ");
            let mut catalog = SpeciesCatalog::new(NAMES.iter().copied(), Some(seed)).unwrap();
            let out = SpeciesRewriter::new().unwrap().rewrite(&text, &mut catalog);
            prop_assert_eq!(out.split_whitespace().count(), text.split_whitespace().count());
        }

        #[test]
        fn full_and_abbreviated_mentions_pair_up(i in 0..NAMES.len(), seed in any::<u64>()) {
            let text = format!("{} then {}", NAMES[i], abbreviate(NAMES[i]));
            let mut catalog = SpeciesCatalog::new(NAMES.iter().copied(), Some(seed)).unwrap();
            let out = SpeciesRewriter::new().unwrap().rewrite(&text, &mut catalog);
            let (full, abbr) = out.split_once(" then ").unwrap();
            prop_assert_eq!(abbreviate(full), abbr);
        }
    }
}

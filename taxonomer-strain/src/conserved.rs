//! Qualifier words that are never scrambled.

/// Lowercase qualifiers that commonly sit inside strain designations
/// ("P. syringae pv. tomato", "isolate 12B").
pub const CONSERVED_WORDS: &[&str] = &[
    "strain",
    "subsp",
    "subspecies",
    "isolate",
    "pathovar",
    "serovar",
    "serotype",
    "genotype",
    "ecotype",
    "sequence",
    "mutant",
    "wild-type",
    "complementation",
    "complemented",
    "pv",
    "wt",
    "type",
    "sp",
];

/// Whether `word` is a conserved qualifier once trailing periods are removed.
///
/// Matching is case-sensitive: "Strain" at the start of a designation is
/// scrambled like any other word.
pub fn is_conserved(word: &str) -> bool {
    CONSERVED_WORDS.contains(&word.trim_end_matches('.'))
}

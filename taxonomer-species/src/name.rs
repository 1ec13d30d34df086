//! Full and abbreviated species names.

use std::fmt;

/// Which written form a species-name string takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NameForm {
    /// "Genus species", e.g. "Escherichia coli".
    Full,
    /// "G. species", e.g. "E. coli".
    Abbreviated,
}

/// A species known to the corpus, carrying both of its written forms.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeciesName {
    full: String,
    abbreviated: String,
}

impl SpeciesName {
    /// Build a species record from its full name, deriving the abbreviation.
    pub fn new(full: impl Into<String>) -> Self {
        let full = full.into();
        let abbreviated = abbreviate(&full);
        Self { full, abbreviated }
    }

    /// The full "Genus species" form.
    pub fn full(&self) -> &str {
        &self.full
    }

    /// The abbreviated "G. species" form.
    pub fn abbreviated(&self) -> &str {
        &self.abbreviated
    }

    /// The string for the requested form.
    pub fn form(&self, form: NameForm) -> &str {
        match form {
            NameForm::Full => &self.full,
            NameForm::Abbreviated => &self.abbreviated,
        }
    }
}

impl fmt::Display for SpeciesName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full)
    }
}

/// Abbreviate a full species name: genus initial, a period, then the epithet.
///
/// Names without a second word keep an empty epithet ("Bacteria" becomes
/// "B. "); [`SpeciesCatalog`](crate::SpeciesCatalog) never indexes such
/// names, see [`is_binomial`].
///
/// ```
/// # use taxonomer_species::abbreviate;
/// assert_eq!(abbreviate("Escherichia coli"), "E. coli");
/// assert_eq!(abbreviate("Pseudomonas syringae"), "P. syringae");
/// ```
pub fn abbreviate(full: &str) -> String {
    let mut words = full.split_whitespace();
    let genus = words.next().unwrap_or("");
    let epithet = words.next().unwrap_or("");
    match genus.chars().next() {
        Some(initial) => format!("{initial}. {epithet}"),
        None => format!(". {epithet}"),
    }
}

/// Whether `name` is a full binomial: exactly two words, the genus not
/// already abbreviated.
///
/// ```
/// # use taxonomer_species::is_binomial;
/// assert!(is_binomial("Escherichia coli"));
/// assert!(!is_binomial("E. coli"));
/// assert!(!is_binomial("Salmonella enterica enterica"));
/// ```
pub fn is_binomial(name: &str) -> bool {
    let mut words = name.split_whitespace();
    match (words.next(), words.next(), words.next()) {
        (Some(genus), Some(_), None) => !genus.ends_with('.'),
        _ => false,
    }
}

//! Species corpus loading.
//!
//! A corpus is plain text with one full species name ("Genus species") per
//! line. Files may be gzip- or zstd-compressed; the format is detected from
//! the magic bytes. Blank lines and `#` comments are ignored.

use std::path::Path;

use log::{debug, warn};
use taxonomer_core::{compress, Result, TaxonomerError};

/// The species list compiled into the crate.
pub const BUNDLED_CORPUS: &str = include_str!("../data/species.txt");

/// The bundled species list, one full name per entry.
pub fn bundled_corpus() -> Vec<String> {
    corpus_lines(BUNDLED_CORPUS)
}

/// Parse corpus text into full species names.
///
/// Whitespace inside a name is collapsed to single spaces. Lines that are not
/// exactly two words ("Genus species"), or whose genus is already abbreviated
/// ("E. coli"), are skipped with a warning.
///
/// # Errors
///
/// Returns an error if no usable name remains.
///
/// # Examples
///
/// ```
/// # use taxonomer::parse_corpus;
/// let names = parse_corpus("# bacteria\nEscherichia  coli\n\nVibrio cholerae\n").unwrap();
/// assert_eq!(names, vec!["Escherichia coli", "Vibrio cholerae"]);
/// ```
pub fn parse_corpus(text: &str) -> Result<Vec<String>> {
    let names = corpus_lines(text);
    if names.is_empty() {
        return Err(TaxonomerError::Parse(
            "species corpus contains no usable names".into(),
        ));
    }
    Ok(names)
}

/// Read a corpus file, decompressing it if needed.
///
/// # Errors
///
/// Returns an error if the file cannot be read or decompressed, is not valid
/// UTF-8, or holds no usable names.
pub fn load_corpus(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| {
        TaxonomerError::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {}", path.display(), e),
        ))
    })?;
    let bytes = compress::decode(bytes)?;
    let text = String::from_utf8(bytes).map_err(|e| {
        TaxonomerError::Parse(format!("{}: corpus is not valid UTF-8: {}", path.display(), e))
    })?;
    let names = parse_corpus(&text)?;
    debug!("loaded {} species names from {}", names.len(), path.display());
    Ok(names)
}

fn corpus_lines(text: &str) -> Vec<String> {
    let mut names = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.len() != 2 {
            warn!("corpus line {}: {line:?} is not a binomial name, skipped", lineno + 1);
            continue;
        }
        if words[0].ends_with('.') {
            warn!("corpus line {}: {line:?} is abbreviated, skipped", lineno + 1);
            continue;
        }
        names.push(words.join(" "));
    }
    names
}

//! Character classes the strain cipher permutes within.

/// A set of interchangeable characters. Each class is permuted on its own, so
/// a scrambled character always stays in the class it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Digit,
    LowerVowel,
    LowerConsonant,
    UpperVowel,
    UpperConsonant,
    GreekLower,
    GreekUpper,
}

const DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

const LOWER_VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];

const LOWER_CONSONANTS: &[char] = &[
    'b', 'c', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'm', 'n', 'p', 'q', 'r', 's', 't', 'v', 'w',
    'x', 'z',
];

const UPPER_VOWELS: &[char] = &['A', 'E', 'I', 'O', 'U', 'Y'];

const UPPER_CONSONANTS: &[char] = &[
    'B', 'C', 'D', 'F', 'G', 'H', 'J', 'K', 'L', 'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'V', 'W',
    'X', 'Z',
];

const GREEK_LOWER: &[char] = &[
    'α', 'β', 'γ', 'δ', 'ε', 'ζ', 'η', 'θ', 'ι', 'κ', 'λ', 'μ', 'ν', 'ξ', 'ο', 'π', 'ρ', 'σ',
    'τ', 'υ', 'φ', 'χ', 'ψ', 'ω',
];

const GREEK_UPPER: &[char] = &[
    'Α', 'Β', 'Γ', 'Δ', 'Ε', 'Ζ', 'Η', 'Θ', 'Ι', 'Κ', 'Λ', 'Μ', 'Ν', 'Ξ', 'Ο', 'Π', 'Ρ', 'Σ',
    'Τ', 'Υ', 'Φ', 'Χ', 'Ψ', 'Ω',
];

impl CharClass {
    /// Every class, in the order the cipher consumes randomness for them.
    pub const ALL: [CharClass; 7] = [
        CharClass::Digit,
        CharClass::LowerVowel,
        CharClass::LowerConsonant,
        CharClass::UpperVowel,
        CharClass::UpperConsonant,
        CharClass::GreekLower,
        CharClass::GreekUpper,
    ];

    /// The characters belonging to this class.
    pub fn members(self) -> &'static [char] {
        match self {
            CharClass::Digit => DIGITS,
            CharClass::LowerVowel => LOWER_VOWELS,
            CharClass::LowerConsonant => LOWER_CONSONANTS,
            CharClass::UpperVowel => UPPER_VOWELS,
            CharClass::UpperConsonant => UPPER_CONSONANTS,
            CharClass::GreekLower => GREEK_LOWER,
            CharClass::GreekUpper => GREEK_UPPER,
        }
    }

    /// The class `c` belongs to, or `None` for punctuation, whitespace and
    /// anything else the cipher passes through.
    pub fn of(c: char) -> Option<CharClass> {
        Self::ALL.into_iter().find(|class| class.members().contains(&c))
    }
}

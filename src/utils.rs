//! Utility functions for string processing.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Punctuation removed before comparing words, on top of ASCII punctuation.
///
/// Greek texts use the ano teleia (`·`) and the Greek question mark (`;`,
/// U+037E), and rendered editions add typographic quotes and dashes.
const EXTRA_PUNCTUATION: &[char] = &[
    '\u{00B7}', // middle dot
    '\u{0387}', // ano teleia
    '\u{037E}', // greek question mark
    '\u{00AB}', '\u{00BB}', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}', '\u{2013}', '\u{2014}',
    '\u{2026}',
];

/// True for characters stripped before word comparison.
pub fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation() || EXTRA_PUNCTUATION.contains(&c)
}

/// Remove every punctuation character.
pub fn strip_punctuation(value: &str) -> String {
    value.chars().filter(|c| !is_punctuation(*c)).collect()
}

/// Normalize a word for comparison: strip punctuation and surrounding
/// whitespace, then compose to NFC.
///
/// Rendered passages and stored sentences do not always agree on composed
/// vs. decomposed polytonic Greek, so both sides are composed before they
/// are compared.
#[cfg(feature = "unicode-normalization")]
pub fn normalize_word(value: &str) -> String {
    strip_punctuation(value).trim().nfc().collect()
}

/// Without unicode-normalization: strip punctuation and trim only.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize_word(value: &str) -> String {
    strip_punctuation(value).trim().to_string()
}

/// Split text into normalized words, dropping tokens that were pure punctuation.
pub fn normalized_words(value: &str) -> Vec<String> {
    value
        .split_whitespace()
        .map(normalize_word)
        .filter(|w| !w.is_empty())
        .collect()
}

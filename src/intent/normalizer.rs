//! Prompt normalization
//!
//! Produces the matching-friendly form of a prompt used by every detector.
//! The original prompt is kept alongside because name extraction relies on
//! capitalization that normalization destroys.

/// A prompt in both its original and normalized forms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedPrompt<'a> {
    pub original: &'a str,
    pub normalized: String,
}

impl<'a> NormalizedPrompt<'a> {
    pub fn new(original: &'a str) -> Self {
        Self {
            original,
            normalized: normalize(original),
        }
    }
}

/// Lower-case, drop everything except letters, digits and whitespace, trim.
pub fn normalize(input: &str) -> String {
    input
        .to_lowercase()
        .chars()
        .filter(|c| is_kept(*c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Letters, decimal digits and whitespace. Letter-numbers (`Ⅻ`) and other
/// numeric symbols (`½`, `²`) count as neither.
fn is_kept(c: char) -> bool {
    c.is_whitespace() || c.is_ascii_digit() || (c.is_alphabetic() && !c.is_numeric())
}

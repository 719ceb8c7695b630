//! Component name extraction
//!
//! A fixed cascade of progressively weaker patterns. Each pattern is a plain
//! function returning `Option<NameMatch>`; the first hit wins.
//!
//! Offsets located in the normalized text are reused on the original prompt.
//! Normalization can drop characters, so such offsets are clamped to the
//! nearest character boundary instead of being trusted.

use tracing::debug;

use super::normalizer::NormalizedPrompt;
use super::rules::{
    ACTION_VERBS, COMMON_PATTERNS, COMPONENT_TYPE_WORDS, PAIR_STOPWORDS, PASCAL_STOPWORDS,
    VERB_STOPWORDS, common_pattern,
};

const VERB_ANCHORED_CONFIDENCE: f64 = 0.9;
const TYPE_WORD_CONFIDENCE: f64 = 0.7;
const PASCAL_CASE_CONFIDENCE: f64 = 0.6;
const KNOWN_PHRASE_CONFIDENCE: f64 = 0.5;
const SYNTHESIZED_CONFIDENCE: f64 = 0.4;

/// Tokens inspected before a component-type word
const TYPE_WORD_LOOKBEHIND: usize = 3;

/// Which pattern produced a name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamePattern {
    VerbAnchored,
    TypeWordAnchored,
    PascalCase,
    KnownPhrase,
    AdjacentPair,
    None,
}

impl NamePattern {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VerbAnchored => "verb-anchored",
            Self::TypeWordAnchored => "type-word",
            Self::PascalCase => "pascal-case",
            Self::KnownPhrase => "known-phrase",
            Self::AdjacentPair => "adjacent-pair",
            Self::None => "none",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NameMatch {
    pub name: String,
    pub confidence: f64,
    pub pattern: NamePattern,
}

impl NameMatch {
    fn new(name: impl Into<String>, confidence: f64, pattern: NamePattern) -> Self {
        Self {
            name: name.into(),
            confidence,
            pattern,
        }
    }

    fn none() -> Self {
        Self::new(String::new(), 0.0, NamePattern::None)
    }
}

/// Run the full cascade
pub fn extract_component_name(prompt: &NormalizedPrompt<'_>) -> NameMatch {
    let normalized = prompt.normalized.as_str();
    let original = prompt.original;

    let result = verb_anchored(normalized, original)
        .or_else(|| type_word_anchored(normalized, original))
        .or_else(|| pascal_case(original))
        .or_else(|| known_phrase(normalized))
        .or_else(|| adjacent_pair(normalized))
        .unwrap_or_else(NameMatch::none);

    debug!(
        name = %result.name,
        confidence = result.confidence,
        pattern = ?result.pattern,
        "extracted component name"
    );
    result
}

/// "create a UserProfile component": first capitalized token after the verb
fn verb_anchored(normalized: &str, original: &str) -> Option<NameMatch> {
    let (verb, idx) = ACTION_VERBS
        .iter()
        .find_map(|verb| normalized.find(verb).map(|idx| (*verb, idx)))?;

    let zone = tail_from(original, idx + verb.len()).trim();

    zone.split_whitespace()
        .map(strip_punctuation)
        .filter(|token| !VERB_STOPWORDS.contains(&token.to_lowercase().as_str()))
        .find(|token| starts_uppercase(token))
        .map(|token| NameMatch::new(token, VERB_ANCHORED_CONFIDENCE, NamePattern::VerbAnchored))
}

/// "the UserCard component": capitalized token shortly before a type word.
///
/// Type words are tried in table order; a word whose lookbehind window holds
/// no capitalized token hands over to the next one.
fn type_word_anchored(normalized: &str, original: &str) -> Option<NameMatch> {
    COMPONENT_TYPE_WORDS
        .iter()
        .filter_map(|word| normalized.find(word))
        .find_map(|idx| {
            let tokens: Vec<&str> = head_to(original, idx).split_whitespace().collect();
            let start = tokens.len().saturating_sub(TYPE_WORD_LOOKBEHIND);

            tokens[start..]
                .iter()
                .rev()
                .map(|token| strip_punctuation(token))
                .find(|token| starts_uppercase(token))
                .map(|token| {
                    NameMatch::new(token, TYPE_WORD_CONFIDENCE, NamePattern::TypeWordAnchored)
                })
        })
}

/// Any capitalized, multi-character token that is not a filler word
fn pascal_case(original: &str) -> Option<NameMatch> {
    original
        .split_whitespace()
        .map(strip_punctuation)
        .find(|token| {
            starts_uppercase(token)
                && token.chars().count() >= 2
                && !PASCAL_STOPWORDS.contains(&token.to_lowercase().as_str())
        })
        .map(|token| NameMatch::new(token, PASCAL_CASE_CONFIDENCE, NamePattern::PascalCase))
}

fn known_phrase(normalized: &str) -> Option<NameMatch> {
    COMMON_PATTERNS
        .iter()
        .find(|(phrase, _)| normalized.contains(phrase))
        .map(|(_, name)| NameMatch::new(*name, KNOWN_PHRASE_CONFIDENCE, NamePattern::KnownPhrase))
}

/// First adjacent word pair that is a known phrase or free of filler words
fn adjacent_pair(normalized: &str) -> Option<NameMatch> {
    let words: Vec<&str> = normalized.split_whitespace().collect();

    words.windows(2).find_map(|pair| {
        let (first, second) = (pair[0], pair[1]);

        if let Some(name) = common_pattern(&format!("{} {}", first, second)) {
            return Some(NameMatch::new(
                name,
                KNOWN_PHRASE_CONFIDENCE,
                NamePattern::KnownPhrase,
            ));
        }

        if PAIR_STOPWORDS.contains(&first) || PAIR_STOPWORDS.contains(&second) {
            return None;
        }

        Some(NameMatch::new(
            format!("{}{}", capitalize(first), capitalize(second)),
            SYNTHESIZED_CONFIDENCE,
            NamePattern::AdjacentPair,
        ))
    })
}

fn strip_punctuation(token: &str) -> &str {
    token.trim_matches(|c| matches!(c, ',' | '.' | '!' | '?'))
}

fn starts_uppercase(token: &str) -> bool {
    token.chars().next().is_some_and(char::is_uppercase)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `text[idx..]`, with `idx` moved forward to a char boundary
fn tail_from(text: &str, idx: usize) -> &str {
    let mut start = idx.min(text.len());
    while !text.is_char_boundary(start) {
        start += 1;
    }
    &text[start..]
}

/// `text[..idx]`, with `idx` moved back to a char boundary
fn head_to(text: &str, idx: usize) -> &str {
    let mut end = idx.min(text.len());
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(prompt: &str) -> NameMatch {
        extract_component_name(&NormalizedPrompt::new(prompt))
    }

    #[test]
    fn test_verb_anchored() {
        let result = extract("Create a UserProfile component");
        assert_eq!(result.name, "UserProfile");
        assert_eq!(result.confidence, 0.9);
        assert_eq!(result.pattern, NamePattern::VerbAnchored);
    }

    #[test]
    fn test_verb_anchored_skips_capitalized_stopwords() {
        let result = extract("build The Component With SearchBox!");
        assert_eq!(result.name, "SearchBox");
        assert_eq!(result.pattern, NamePattern::VerbAnchored);
    }

    #[test]
    fn test_type_word_anchored() {
        let result = extract("I want the Sidebar component here");
        assert_eq!(result.name, "Sidebar");
        assert_eq!(result.confidence, 0.7);
        assert_eq!(result.pattern, NamePattern::TypeWordAnchored);
    }

    #[test]
    fn test_type_word_falls_through_to_next_word() {
        // Nothing capitalized before "component"; "page" supplies the name
        let result = extract("a component for the Settings page");
        assert_eq!(result.name, "Settings");
        assert_eq!(result.confidence, 0.7);
        assert_eq!(result.pattern, NamePattern::TypeWordAnchored);
    }

    #[test]
    fn test_type_word_lookbehind_limit() {
        // "Header" is four tokens before "component"; pascal scan picks it up
        let result = extract("Header is needed as a small component");
        assert_eq!(result.name, "Header");
        assert_eq!(result.pattern, NamePattern::PascalCase);
    }

    #[test]
    fn test_pascal_case_scan() {
        let result = extract("I would like a ProductGrid please");
        assert_eq!(result.name, "ProductGrid");
        assert_eq!(result.confidence, 0.6);
        assert_eq!(result.pattern, NamePattern::PascalCase);
    }

    #[test]
    fn test_pascal_case_skips_capitalized_stopwords() {
        let result = extract("The Navbar please");
        assert_eq!(result.name, "Navbar");
        assert_eq!(result.confidence, 0.6);
        assert_eq!(result.pattern, NamePattern::PascalCase);

        // "create" anchors the verb pattern but nothing capitalized follows it
        for prompt in ["Make Toolbar then create it", "Build Toolbar then create it"] {
            let result = extract(prompt);
            assert_eq!(result.name, "Toolbar", "{}", prompt);
            assert_eq!(result.pattern, NamePattern::PascalCase, "{}", prompt);
        }
    }

    #[test]
    fn test_known_phrase() {
        let result = extract("i need a vue dashboard");
        assert_eq!(result.name, "Dashboard");
        assert_eq!(result.confidence, 0.5);
        assert_eq!(result.pattern, NamePattern::KnownPhrase);
    }

    #[test]
    fn test_adjacent_pair_synthesized() {
        let result = extract("build a login form");
        assert_eq!(result.name, "LoginForm");
        assert_eq!(result.confidence, 0.4);
        assert_eq!(result.pattern, NamePattern::AdjacentPair);
    }

    #[test]
    fn test_no_name() {
        let result = extract("make a widget");
        assert_eq!(result.name, "");
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.pattern, NamePattern::None);
    }

    #[test]
    fn test_empty_prompt() {
        assert_eq!(extract(""), NameMatch::none());
    }

    #[test]
    fn test_offsets_clamped_on_multibyte_text() {
        // Lower-casing "İ" and dropping symbols both shift byte offsets
        let result = extract("İİİ create Foo");
        assert_eq!(result.name, "Foo");
        assert_eq!(result.pattern, NamePattern::VerbAnchored);

        let result = extract("★★★ make Navbar");
        assert_eq!(result.name, "Navbar");
        assert_eq!(result.confidence, 0.9);
        assert_eq!(result.pattern, NamePattern::VerbAnchored);

        assert_eq!(extract("✨✨✨✨✨✨ make"), NameMatch::none());
    }

    #[test]
    fn test_boundary_helpers() {
        assert_eq!(tail_from("héllo", 2), "llo");
        assert_eq!(head_to("héllo", 2), "h");
        assert_eq!(tail_from("abc", 10), "");
        assert_eq!(head_to("abc", 10), "abc");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("login"), "Login");
        assert_eq!(capitalize("élan"), "Élan");
        assert_eq!(capitalize(""), "");
    }
}

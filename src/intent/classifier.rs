//! Component type classification
//!
//! First-match-wins scan over an ordered rule list.

use tracing::debug;

use super::rules::{DEFAULT_COMPONENT_TYPE, DEFAULT_TYPE_CONFIDENCE, TYPE_RULES, TypeRule};

/// Classification outcome
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypeMatch {
    pub type_name: &'static str,
    pub confidence: f64,
    /// Keyword that selected the rule; `None` for the default
    pub keyword: Option<&'static str>,
}

impl TypeMatch {
    fn fallback() -> Self {
        Self {
            type_name: DEFAULT_COMPONENT_TYPE,
            confidence: DEFAULT_TYPE_CONFIDENCE,
            keyword: None,
        }
    }
}

/// Classify normalized text against the built-in rules
pub fn detect_component_type(normalized: &str) -> TypeMatch {
    classify_with(TYPE_RULES, normalized)
}

/// Classify normalized text against an explicit ordered rule list
pub fn classify_with(rules: &[TypeRule], normalized: &str) -> TypeMatch {
    let matched = rules.iter().find_map(|rule| {
        rule.keywords
            .iter()
            .find(|keyword| normalized.contains(**keyword))
            .map(|keyword| TypeMatch {
                type_name: rule.type_name,
                confidence: rule.confidence,
                keyword: Some(*keyword),
            })
    });

    let result = matched.unwrap_or_else(TypeMatch::fallback);
    debug!(
        type_name = result.type_name,
        confidence = result.confidence,
        keyword = ?result.keyword,
        "classified component type"
    );
    result
}

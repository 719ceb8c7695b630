//! Intent Rule Tables
//!
//! Static, read-only lookup data for the intent pipeline. Every table is an
//! ordered slice: position encodes priority, so earlier entries shadow later
//! ones whenever their vocabularies overlap.

/// Component type rule: any keyword match selects `type_name`
#[derive(Debug, Clone, Copy)]
pub struct TypeRule {
    /// Substrings matched against normalized text
    pub keywords: &'static [&'static str],
    pub type_name: &'static str,
    pub confidence: f64,
}

/// Type returned when no rule matches
pub const DEFAULT_COMPONENT_TYPE: &str = "react-component";

/// Confidence paired with [`DEFAULT_COMPONENT_TYPE`]
pub const DEFAULT_TYPE_CONFIDENCE: f64 = 0.3;

/// Component type rules in priority order.
///
/// Framework-specific rules come first so that "vue page" resolves to Vue
/// rather than to the generic page rule.
pub const TYPE_RULES: &[TypeRule] = &[
    TypeRule {
        keywords: &["vue", "nuxt"],
        type_name: "vue-component",
        confidence: 0.9,
    },
    TypeRule {
        keywords: &["angular"],
        type_name: "angular-component",
        confidence: 0.9,
    },
    TypeRule {
        keywords: &["svelte"],
        type_name: "svelte-component",
        confidence: 0.9,
    },
    TypeRule {
        keywords: &["custom hook", "react hook", "hook"],
        type_name: "react-hook",
        confidence: 0.8,
    },
    TypeRule {
        keywords: &["react", "jsx", "tsx", "nextjs", "next js"],
        type_name: "react-component",
        confidence: 0.8,
    },
    TypeRule {
        keywords: &["landing page", "page", "screen"],
        type_name: "react-page",
        confidence: 0.6,
    },
];

/// Verbs anchoring the explicit-naming pattern ("create a Foo ...")
pub const ACTION_VERBS: &[&str] = &[
    "create",
    "build",
    "make",
    "generate",
    "design",
    "develop",
    "implement",
    "write",
];

/// Nouns anchoring the direct-mention pattern ("Foo component")
pub const COMPONENT_TYPE_WORDS: &[&str] = &[
    "component",
    "hook",
    "page",
    "app",
    "form",
    "widget",
    "modal",
    "layout",
];

/// Lowercase phrase to canonical PascalCase component name, in lookup order
pub const COMMON_PATTERNS: &[(&str, &str)] = &[
    ("todo list", "TodoList"),
    ("todo app", "TodoApp"),
    ("user profile", "UserProfile"),
    ("login page", "LoginPage"),
    ("signup form", "SignupForm"),
    ("sign up", "SignUp"),
    ("navigation bar", "NavigationBar"),
    ("navbar", "Navbar"),
    ("shopping cart", "ShoppingCart"),
    ("product card", "ProductCard"),
    ("product list", "ProductList"),
    ("contact form", "ContactForm"),
    ("data table", "DataTable"),
    ("pricing table", "PricingTable"),
    ("image gallery", "ImageGallery"),
    ("dashboard", "Dashboard"),
    ("sidebar", "Sidebar"),
    ("modal dialog", "ModalDialog"),
    ("dropdown menu", "DropdownMenu"),
    ("search bar", "SearchBar"),
    ("weather app", "WeatherApp"),
    ("chat app", "ChatApp"),
    ("landing page", "LandingPage"),
    ("blog post", "BlogPost"),
    ("comment section", "CommentSection"),
    ("file upload", "FileUpload"),
    ("date picker", "DatePicker"),
    ("color picker", "ColorPicker"),
    ("calculator", "Calculator"),
    ("counter", "Counter"),
    ("timer", "Timer"),
];

/// Keyword to feature tag. Several keywords may map to one feature.
pub const FEATURE_KEYWORDS: &[(&str, &str)] = &[
    ("state", "state"),
    ("usestate", "state"),
    ("props", "props"),
    ("hook", "hooks"),
    ("effect", "effects"),
    ("fetch", "api"),
    ("api", "api"),
    ("axios", "api"),
    ("form", "forms"),
    ("validation", "validation"),
    ("validate", "validation"),
    ("router", "routing"),
    ("routing", "routing"),
    ("navigation", "routing"),
    ("animation", "animation"),
    ("animate", "animation"),
    ("responsive", "responsive"),
    ("mobile", "responsive"),
    ("dark mode", "theming"),
    ("theme", "theming"),
    ("context", "context"),
    ("redux", "state-management"),
    ("zustand", "state-management"),
    ("auth", "authentication"),
    ("login", "authentication"),
    ("modal", "modal"),
    ("pagination", "pagination"),
    ("search", "search"),
    ("filter", "filtering"),
    ("sort", "sorting"),
    ("drag", "drag-and-drop"),
    ("accessib", "accessibility"),
    ("typescript", "typescript"),
    ("tailwind", "tailwind"),
];

/// Tokens skipped after an action verb
pub const VERB_STOPWORDS: &[&str] = &[
    "a", "an", "the", "component", "app", "page", "hook", "form", "with",
];

/// Capitalized words that never count as a PascalCase name
pub const PASCAL_STOPWORDS: &[&str] = &["the", "a", "an", "i", "create", "build", "make"];

/// Words that disqualify an adjacent pair from becoming a synthesized name
pub const PAIR_STOPWORDS: &[&str] = &["a", "an", "the", "with", "for", "and", "or", "to"];

/// Look up a phrase in [`COMMON_PATTERNS`]
pub fn common_pattern(phrase: &str) -> Option<&'static str> {
    COMMON_PATTERNS
        .iter()
        .find(|(key, _)| *key == phrase)
        .map(|(_, name)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_confidences_in_range() {
        for rule in TYPE_RULES {
            assert!((0.0..=1.0).contains(&rule.confidence), "{}", rule.type_name);
            assert!(!rule.keywords.is_empty());
        }
        assert!((0.0..=1.0).contains(&DEFAULT_TYPE_CONFIDENCE));
    }

    #[test]
    fn test_framework_rules_precede_generic_rules() {
        let position = |name: &str| TYPE_RULES.iter().position(|r| r.type_name == name);
        assert!(position("vue-component") < position("react-page"));
        assert!(position("react-hook") < position("react-component"));
    }

    #[test]
    fn test_table_keys_are_normalized() {
        let is_normalized = |s: &str| {
            s.chars()
                .all(|c| c.is_lowercase() || c.is_ascii_digit() || c == ' ')
        };
        for (phrase, _) in COMMON_PATTERNS {
            assert!(is_normalized(phrase), "{}", phrase);
        }
        for (keyword, _) in FEATURE_KEYWORDS {
            assert!(is_normalized(keyword), "{}", keyword);
        }
        for verb in ACTION_VERBS {
            assert!(is_normalized(verb), "{}", verb);
        }
    }

    #[test]
    fn test_common_pattern_keys_unique() {
        let keys: HashSet<_> = COMMON_PATTERNS.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys.len(), COMMON_PATTERNS.len());
    }

    #[test]
    fn test_common_pattern_lookup() {
        assert_eq!(common_pattern("todo list"), Some("TodoList"));
        assert_eq!(common_pattern("login form"), None);
    }
}

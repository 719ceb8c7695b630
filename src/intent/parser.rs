//! Intent parser
//!
//! Runs normalization, the three independent detectors and confidence
//! aggregation. The parser holds only a reference to static rule data, so a
//! single instance can be shared freely across threads.

use tracing::debug;

use super::classifier::{TypeMatch, classify_with};
use super::features::{FeatureMatch, detect_features};
use super::name::{NameMatch, extract_component_name};
use super::normalizer::{NormalizedPrompt, normalize};
use super::rules::{TYPE_RULES, TypeRule};
use crate::types::{GenerationRequest, Intent, RequestOptions};

/// Per-stage results behind an [`Intent`]
#[derive(Debug, Clone, PartialEq)]
pub struct IntentBreakdown {
    pub normalized: String,
    pub component_type: TypeMatch,
    pub name: NameMatch,
    pub features: FeatureMatch,
}

impl IntentBreakdown {
    pub fn confidence(&self) -> f64 {
        average(&[
            self.component_type.confidence,
            self.name.confidence,
            self.features.confidence,
        ])
    }

    pub fn into_intent(self) -> Intent {
        let confidence = self.confidence();
        Intent {
            component_type: self.component_type.type_name.to_string(),
            component_name: self.name.name,
            features: self.features.features,
            confidence,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct IntentParser {
    type_rules: &'static [TypeRule],
}

impl Default for IntentParser {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentParser {
    pub fn new() -> Self {
        Self {
            type_rules: TYPE_RULES,
        }
    }

    /// Use a custom ordered rule list for type classification
    pub fn with_type_rules(type_rules: &'static [TypeRule]) -> Self {
        Self { type_rules }
    }

    /// Parse a prompt into an intent. Never fails.
    pub fn parse(&self, prompt: &str, options: &RequestOptions) -> Intent {
        let intent = self.analyze(prompt, options).into_intent();
        debug!(
            component_type = %intent.component_type,
            component_name = %intent.component_name,
            features = intent.features.len(),
            confidence = intent.confidence,
            "parsed intent"
        );
        intent
    }

    /// Parse a prompt and keep every stage's result
    pub fn analyze(&self, prompt: &str, options: &RequestOptions) -> IntentBreakdown {
        let prompt = NormalizedPrompt::new(prompt);

        let component_type = classify_with(self.type_rules, &prompt.normalized);
        let name = extract_component_name(&prompt);
        let features = detect_features(&prompt.normalized, options);

        IntentBreakdown {
            normalized: prompt.normalized,
            component_type,
            name,
            features,
        }
    }

    /// Parse a full request. A `componentType` hint that matches a type rule
    /// replaces the type detected from the prompt.
    pub fn parse_request(&self, request: &GenerationRequest) -> Intent {
        let mut breakdown = self.analyze(&request.prompt, &request.options);

        if let Some(hint) = request.component_type.as_deref() {
            let hinted = classify_with(self.type_rules, &normalize(hint));
            if hinted.keyword.is_some() {
                debug!(hint, component_type = hinted.type_name, "applied type hint");
                breakdown.component_type = hinted;
            }
        }

        breakdown.into_intent()
    }
}

/// Parse with the built-in rule tables
pub fn parse_intent(prompt: &str, options: &RequestOptions) -> Intent {
    IntentParser::new().parse(prompt, options)
}

/// Unweighted arithmetic mean
fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_named_component() {
        let intent = parse_intent("Create a UserProfile component", &RequestOptions::default());
        assert_eq!(intent.component_type, "react-component");
        assert_eq!(intent.component_name, "UserProfile");
        assert!(intent.features.is_empty());
        assert!(approx(intent.confidence, 0.4));
    }

    #[test]
    fn test_empty_prompt() {
        let intent = parse_intent("", &RequestOptions::default());
        assert_eq!(intent.component_type, "react-component");
        assert_eq!(intent.component_name, "");
        assert!(intent.features.is_empty());
        assert!(approx(intent.confidence, 0.1));
    }

    #[test]
    fn test_vue_dashboard() {
        let parser = IntentParser::new();
        let breakdown = parser.analyze("I need a vue dashboard", &RequestOptions::default());
        assert_eq!(breakdown.component_type.type_name, "vue-component");
        assert_eq!(breakdown.component_type.confidence, 0.9);
        assert_eq!(breakdown.name.name, "Dashboard");
    }

    #[test]
    fn test_synthesized_name() {
        let breakdown =
            IntentParser::new().analyze("build a login form", &RequestOptions::default());
        assert_eq!(breakdown.name.name, "LoginForm");
        assert_eq!(breakdown.name.confidence, 0.4);
    }

    #[test]
    fn test_typescript_option_only() {
        let options = RequestOptions::default().typescript();
        let breakdown = IntentParser::new().analyze("make a widget", &options);
        assert_eq!(
            breakdown.features.features.iter().collect::<Vec<_>>(),
            vec!["typescript"]
        );
        assert!(approx(breakdown.features.confidence, 0.1));

        let intent = breakdown.into_intent();
        assert!(approx(intent.confidence, (0.3 + 0.0 + 0.1) / 3.0));
    }

    #[test]
    fn test_custom_rules_take_priority_by_position() {
        static RULES: &[TypeRule] = &[
            TypeRule {
                keywords: &["dashboard"],
                type_name: "admin-panel",
                confidence: 0.95,
            },
            TypeRule {
                keywords: &["vue"],
                type_name: "vue-component",
                confidence: 0.9,
            },
        ];

        let intent = IntentParser::with_type_rules(RULES)
            .parse("I need a vue dashboard", &RequestOptions::default());
        assert_eq!(intent.component_type, "admin-panel");
    }

    #[test]
    fn test_parser_is_shareable_across_threads() {
        let parser = IntentParser::new();
        let handles: Vec<_> = ["build a login form", "Create a UserProfile component"]
            .into_iter()
            .map(|prompt| {
                std::thread::spawn(move || parser.parse(prompt, &RequestOptions::default()))
            })
            .collect();

        let names: Vec<String> = handles
            .into_iter()
            .map(|h| h.join().unwrap().component_name)
            .collect();
        assert_eq!(names, vec!["LoginForm", "UserProfile"]);
    }

    #[test]
    fn test_request_type_hint() {
        let mut request = GenerationRequest {
            prompt: "Create a UserProfile component".to_string(),
            component_type: Some("Vue".to_string()),
            options: RequestOptions::default(),
        };
        let intent = IntentParser::new().parse_request(&request);
        assert_eq!(intent.component_type, "vue-component");
        assert!(approx(intent.confidence, 0.6));

        request.component_type = Some("qwik".to_string());
        let intent = IntentParser::new().parse_request(&request);
        assert_eq!(intent.component_type, "react-component");
        assert!(approx(intent.confidence, 0.4));
    }

    #[test]
    fn test_average() {
        assert_eq!(average(&[]), 0.0);
        assert!(approx(average(&[0.9, 0.3, 0.0]), 0.4));
    }

    proptest! {
        #[test]
        fn prop_confidences_in_unit_range(
            prompt in "\\PC{0,200}",
            use_type_script in any::<bool>(),
            include_tests in any::<bool>(),
            style in prop::sample::select(vec!["", "tailwind", "scss", "bootstrap", "CSS"]),
        ) {
            let options = RequestOptions {
                use_type_script,
                include_tests,
                style_library: style.to_string(),
            };
            let breakdown = IntentParser::new().analyze(&prompt, &options);

            for value in [
                breakdown.component_type.confidence,
                breakdown.name.confidence,
                breakdown.features.confidence,
                breakdown.confidence(),
            ] {
                prop_assert!((0.0..=1.0).contains(&value));
            }
        }

        #[test]
        fn prop_parse_is_deterministic(prompt in "[A-Za-z ,.!?]{0,80}") {
            let options = RequestOptions::default();
            prop_assert_eq!(parse_intent(&prompt, &options), parse_intent(&prompt, &options));
        }
    }
}

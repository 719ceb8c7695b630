//! Feature detection
//!
//! Keyword lookup over the normalized prompt plus explicit request options.
//! Every keyword hit adds to the score even when its feature is already in
//! the set; an empty set always reports zero confidence.

use std::collections::BTreeSet;

use tracing::debug;

use super::rules::FEATURE_KEYWORDS;
use crate::types::RequestOptions;

/// Score added per keyword hit or applied option
const FEATURE_WEIGHT: f64 = 0.1;

#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatch {
    pub features: BTreeSet<String>,
    pub confidence: f64,
}

/// Canonical style library names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleLibrary {
    Tailwind,
    StyledComponents,
    Css,
    Scss,
}

impl StyleLibrary {
    /// Case-insensitive lookup; `None` for unrecognized libraries
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "tailwind" | "tailwindcss" => Some(Self::Tailwind),
            "styled-components" | "styledcomponents" => Some(Self::StyledComponents),
            "css" | "css-modules" | "cssmodules" => Some(Self::Css),
            "scss" | "sass" => Some(Self::Scss),
            _ => None,
        }
    }

    pub fn feature(&self) -> &'static str {
        match self {
            Self::Tailwind => "tailwind",
            Self::StyledComponents => "styled-components",
            Self::Css => "css",
            Self::Scss => "scss",
        }
    }
}

pub fn detect_features(normalized: &str, options: &RequestOptions) -> FeatureMatch {
    let mut features = BTreeSet::new();
    let mut score = 0.0;

    for (keyword, feature) in FEATURE_KEYWORDS {
        if normalized.contains(keyword) {
            features.insert(feature.to_string());
            score += FEATURE_WEIGHT;
        }
    }

    if options.use_type_script {
        features.insert("typescript".to_string());
        score += FEATURE_WEIGHT;
    }

    if !options.style_library.is_empty() {
        match StyleLibrary::parse(&options.style_library) {
            Some(library) => {
                features.insert(library.feature().to_string());
            }
            None => debug!(library = %options.style_library, "unrecognized style library"),
        }
        score += FEATURE_WEIGHT;
    }

    if options.include_tests {
        features.insert("testing".to_string());
        score += FEATURE_WEIGHT;
    }

    let confidence = if features.is_empty() {
        0.0
    } else {
        f64::min(score, 1.0)
    };

    debug!(?features, confidence, "detected features");
    FeatureMatch {
        features,
        confidence,
    }
}

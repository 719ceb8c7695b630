//! Generation Domain Types
//!
//! Wire-level shapes shared by the intent parser, the template repository
//! and the post-processor. Field names serialize in camelCase to match the
//! JSON consumed by the generation frontend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Structured guess of what a free-text prompt is asking for.
///
/// Built fresh for every prompt and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    /// Component category, e.g. `react-component` or `vue-component`
    #[serde(rename = "type")]
    pub component_type: String,
    /// Guessed component name; empty when nothing qualified
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub component_name: String,
    /// Requested feature tags
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub features: BTreeSet<String>,
    /// Aggregate confidence in [0, 1]
    pub confidence: f64,
}

impl Intent {
    /// Whether the aggregate confidence reaches the given threshold
    pub fn meets(&self, threshold: f64) -> bool {
        self.confidence >= threshold
    }

    pub fn has_name(&self) -> bool {
        !self.component_name.is_empty()
    }

    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.contains(feature)
    }
}

/// Caller-supplied generation options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestOptions {
    pub use_type_script: bool,
    pub include_tests: bool,
    /// tailwind, styled-components, css, scss; empty for none
    #[serde(skip_serializing_if = "String::is_empty")]
    pub style_library: String,
}

impl RequestOptions {
    pub fn typescript(mut self) -> Self {
        self.use_type_script = true;
        self
    }

    pub fn with_tests(mut self) -> Self {
        self.include_tests = true;
        self
    }

    pub fn with_style(mut self, library: impl Into<String>) -> Self {
        self.style_library = library.into();
        self
    }
}

/// Incoming generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub prompt: String,
    /// Explicit framework hint (react, vue, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_type: Option<String>,
    #[serde(default)]
    pub options: RequestOptions,
}

/// Packaged result of a generation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResponse {
    pub component_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_json: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub config_files: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<GeneratedFile>,
}

/// A single file in a generation response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: FileKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Component,
    Config,
    Test,
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileKind::Component => write!(f, "component"),
            FileKind::Config => write!(f, "config"),
            FileKind::Test => write!(f, "test"),
        }
    }
}

/// Service health report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub services: BTreeMap<String, String>,
}

impl HealthStatus {
    pub fn healthy(version: &str, templates_available: bool) -> Self {
        let mut services = BTreeMap::new();
        services.insert("intent-parser".to_string(), "operational".to_string());
        services.insert(
            "templates".to_string(),
            if templates_available {
                "operational"
            } else {
                "degraded"
            }
            .to_string(),
        );

        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
            version: version.to_string(),
            services,
        }
    }
}

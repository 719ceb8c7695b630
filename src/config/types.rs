//! Configuration Types
//!
//! All configuration structures with sensible defaults.
//! Supports global (~/.config/uiforge/) and project (.uiforge/) level configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::types::{Result, ValidationError};

/// Log levels accepted by `logging.level`
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// HTTP surface settings (consumed by the serving layer)
    pub server: ServerConfig,

    /// Template repository settings
    pub templates: TemplatesConfig,

    /// Logging settings
    pub logging: LoggingConfig,

    /// Intent parser settings
    pub parser: ParserConfig,

    /// CLI output settings
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            server: ServerConfig::default(),
            templates: TemplatesConfig::default(),
            logging: LoggingConfig::default(),
            parser: ParserConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.parser.min_confidence) {
            return Err(ValidationError::new("confidence threshold out of range")
                .with_field("parser.min_confidence")
                .with_comparison("0.0..=1.0", self.parser.min_confidence.to_string())
                .into());
        }

        if self.server.port == 0 {
            return Err(ValidationError::new("port must be greater than 0")
                .with_field("server.port")
                .into());
        }

        let level = self.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ValidationError::new("unknown log level")
                .with_field("logging.level")
                .with_comparison(LOG_LEVELS.join("|"), self.logging.level.clone())
                .into());
        }

        if self.templates.extensions.iter().any(|ext| ext.is_empty()) {
            return Err(ValidationError::new("template extensions must not be empty")
                .with_field("templates.extensions")
                .into());
        }

        Ok(())
    }
}

// =============================================================================
// Server Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            allowed_origins: vec![
                "http://localhost:5173".to_string(),
                "http://localhost:3000".to_string(),
            ],
        }
    }
}

// =============================================================================
// Templates Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplatesConfig {
    /// Template root directory
    pub dir: PathBuf,

    /// File extensions listed as templates (without the dot)
    pub extensions: Vec<String>,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("./templates"),
            extensions: ["tsx", "jsx", "ts", "js", "vue", "svelte", "html", "css"]
                .iter()
                .map(|e| e.to_string())
                .collect(),
        }
    }
}

// =============================================================================
// Logging Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

// =============================================================================
// Parser Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ParserConfig {
    /// Intents below this confidence are reported as low-confidence
    pub min_confidence: f64,
}

// =============================================================================
// Output Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Unknown output format: {}. Valid values: text, json",
                s
            )),
        }
    }
}

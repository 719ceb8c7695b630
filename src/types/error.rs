//! Unified Error Type System
//!
//! Centralized error types for the template, packaging and configuration
//! layers. Intent parsing itself is total and never produces an error:
//! low confidence and empty values are its failure signal.

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Structured validation error with context
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Field or component that failed validation
    pub field: Option<String>,
    /// Detailed message
    pub message: String,
    /// Expected value or format
    pub expected: Option<String>,
    /// Actual value received
    pub actual: Option<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "Validation failed for '{}': {}", field, self.message)?;
        } else {
            write!(f, "Validation failed: {}", self.message)?;
        }
        if let (Some(expected), Some(actual)) = (&self.expected, &self.actual) {
            write!(f, " (expected {}, got {})", expected, actual)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            field: None,
            message: message.into(),
            expected: None,
            actual: None,
        }
    }

    /// Add field context
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Add expected/actual values
    pub fn with_comparison(
        mut self,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        self.expected = Some(expected.into());
        self.actual = Some(actual.into());
        self
    }
}

// =============================================================================
// Application Error
// =============================================================================

#[derive(Debug, Error)]
pub enum ForgeError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),

    // -------------------------------------------------------------------------
    // Template Errors
    // -------------------------------------------------------------------------
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Invalid template path '{path}': {reason}")]
    InvalidTemplatePath { path: String, reason: String },

    // -------------------------------------------------------------------------
    // Domain Errors
    // -------------------------------------------------------------------------
    #[error("Post-processing failed: {0}")]
    PostProcess(String),

    #[error("{0}")]
    Validation(ValidationError),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<ValidationError> for ForgeError {
    fn from(err: ValidationError) -> Self {
        ForgeError::Validation(err)
    }
}

pub type Result<T> = std::result::Result<T, ForgeError>;

impl ForgeError {
    /// Create an invalid template path error
    pub fn invalid_path(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTemplatePath {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Whether the error was caused by caller input rather than the environment
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::TemplateNotFound(_)
                | Self::InvalidTemplatePath { .. }
                | Self::PostProcess(_)
                | Self::Validation(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new("must be within range")
            .with_field("parser.min_confidence")
            .with_comparison("0.0..=1.0", "1.5");
        assert_eq!(
            err.to_string(),
            "Validation failed for 'parser.min_confidence': must be within range (expected 0.0..=1.0, got 1.5)"
        );

        let plain = ValidationError::new("empty");
        assert_eq!(plain.to_string(), "Validation failed: empty");
    }

    #[test]
    fn test_invalid_path_display() {
        let err = ForgeError::invalid_path("../secret", "parent traversal");
        assert_eq!(
            err.to_string(),
            "Invalid template path '../secret': parent traversal"
        );
        assert!(err.is_client_error());
    }

    #[test]
    fn test_io_is_not_client_error() {
        let err: ForgeError = std::io::Error::other("disk").into();
        assert!(!err.is_client_error());
        assert!(err.to_string().starts_with("IO error"));
    }
}

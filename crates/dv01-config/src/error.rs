//! Configuration error types.

use std::path::PathBuf;

use dv01_curves::CurveError;
use thiserror::Error;

/// Configuration operation result type.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("Cannot read configuration file {path}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Validation error.
    #[error("Validation error: {field}: {message}")]
    Validation {
        /// Field that failed validation.
        field: String,
        /// Validation error message.
        message: String,
    },

    /// Multiple validation errors.
    #[error("Multiple validation errors: {}", format_errors(.0))]
    MultipleValidationErrors(Vec<ValidationError>),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Deserialization error.
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// The configured curve table could not be built.
    #[error("Curve error: {0}")]
    Curve(#[from] CurveError),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A single validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Field that failed validation.
    pub field: String,
    /// Validation error message.
    pub message: String,
    /// Validation rule that was violated.
    pub rule: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: None,
        }
    }

    /// Creates a validation error with a rule name.
    pub fn with_rule(
        field: impl Into<String>,
        message: impl Into<String>,
        rule: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: Some(rule.into()),
        }
    }

    /// Prefixes the field path, e.g. `face` becomes `instruments[0].face`.
    #[must_use]
    pub fn nested(self, prefix: &str) -> Self {
        Self {
            field: format!("{prefix}.{}", self.field),
            ..self
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref rule) = self.rule {
            write!(f, "{}: {} (rule: {})", self.field, self.message, rule)
        } else {
            write!(f, "{}: {}", self.field, self.message)
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Deserialization(err.to_string())
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::Serialization(err.to_string())
    }
}

/// Trait for validatable configurations.
pub trait Validate {
    /// Validates the configuration.
    ///
    /// Returns a list of validation errors, or an empty vector if valid.
    fn validate(&self) -> Vec<ValidationError>;

    /// Returns true if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Validates and returns an error if invalid.
    fn validate_or_error(&self) -> ConfigResult<()> {
        let mut errors = self.validate();
        match errors.len() {
            0 => Ok(()),
            1 => {
                let err = errors.remove(0);
                Err(ConfigError::Validation {
                    field: err.field,
                    message: err.message,
                })
            }
            _ => Err(ConfigError::MultipleValidationErrors(errors)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Positive(f64);

    impl Validate for Positive {
        fn validate(&self) -> Vec<ValidationError> {
            if self.0 > 0.0 {
                Vec::new()
            } else {
                vec![ValidationError::with_rule("value", "must be positive", "positive")]
            }
        }
    }

    #[test]
    fn test_validate_or_error() {
        assert!(Positive(1.0).validate_or_error().is_ok());
        assert!(Positive(1.0).is_valid());

        match Positive(-1.0).validate_or_error() {
            Err(ConfigError::Validation { field, message }) => {
                assert_eq!(field, "value");
                assert_eq!(message, "must be positive");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_nested_field_path() {
        let err = ValidationError::new("face", "Face must be positive").nested("instruments[1]");
        assert_eq!(err.field, "instruments[1].face");
        assert_eq!(err.to_string(), "instruments[1].face: Face must be positive");
    }

    #[test]
    fn test_multiple_errors_display() {
        let err = ConfigError::MultipleValidationErrors(vec![
            ValidationError::new("a", "bad"),
            ValidationError::with_rule("b", "worse", "rule_b"),
        ]);
        assert_eq!(
            err.to_string(),
            "Multiple validation errors: a: bad; b: worse (rule: rule_b)"
        );
    }
}

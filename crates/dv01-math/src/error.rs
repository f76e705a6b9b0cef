//! Error types for mathematical operations.

use thiserror::Error;

/// A specialized Result type for mathematical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during mathematical operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Matrix is singular (not invertible).
    #[error("Singular matrix: cannot solve spline system")]
    SingularMatrix,

    /// Insufficient data points for operation.
    #[error("Insufficient data: need at least {required}, got {actual}")]
    InsufficientData {
        /// Minimum required points.
        required: usize,
        /// Actual number of points.
        actual: usize,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },

    /// A computation produced NaN or infinity.
    #[error("Non-finite result {value} at x = {x}")]
    NonFinite {
        /// The query point.
        x: f64,
        /// The offending value.
        value: f64,
    },
}

impl MathError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates an insufficient data error.
    #[must_use]
    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }

    /// Returns true if the error was caused by the caller's data rather than
    /// by the numerics.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InsufficientData { .. } | Self::InvalidInput { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MathError::insufficient_data(2, 1);
        assert!(err.to_string().contains("at least 2"));
    }

    #[test]
    fn test_input_error_classification() {
        assert!(MathError::invalid_input("bad").is_input_error());
        assert!(!MathError::SingularMatrix.is_input_error());
        assert!(!MathError::NonFinite { x: 1.0, value: f64::NAN }.is_input_error());
    }
}

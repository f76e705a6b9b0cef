//! Error types for curve operations.

use dv01_math::MathError;
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Malformed or insufficient curve points.
    #[error("Invalid curve input: {reason}")]
    InvalidCurveInput {
        /// Description of what is wrong with the input.
        reason: String,
    },

    /// Interpolation or discounting produced NaN or infinity.
    #[error("Numeric error: {reason}")]
    NumericError {
        /// Description of the numerical failure.
        reason: String,
    },
}

impl CurveError {
    /// Creates an invalid curve input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidCurveInput {
            reason: reason.into(),
        }
    }

    /// Creates a numeric error.
    #[must_use]
    pub fn numeric(reason: impl Into<String>) -> Self {
        Self::NumericError {
            reason: reason.into(),
        }
    }
}

impl From<MathError> for CurveError {
    fn from(err: MathError) -> Self {
        if err.is_input_error() {
            CurveError::invalid_input(err.to_string())
        } else {
            CurveError::numeric(err.to_string())
        }
    }
}

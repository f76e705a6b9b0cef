//! Error types for valuation and risk.

use dv01_curves::CurveError;
use thiserror::Error;

/// A specialized Result type for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Unified error type for all analytics operations.
///
/// Every error surfaces immediately to the caller; no partial valuation is
/// ever returned.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalyticsError {
    /// Payment count is non-integral or non-positive.
    #[error("invalid schedule: {reason}")]
    InvalidSchedule {
        /// Why the schedule could not be generated.
        reason: String,
    },

    /// Instrument terms are not usable (non-finite rate, non-positive face).
    #[error("invalid instrument: {reason}")]
    InvalidInstrument {
        /// What is wrong with the instrument.
        reason: String,
    },

    /// Parallel shift is zero or not finite.
    #[error("invalid bump: {reason}")]
    InvalidBump {
        /// What is wrong with the bump.
        reason: String,
    },

    /// Malformed or insufficient curve points.
    #[error("invalid curve input: {reason}")]
    InvalidCurveInput {
        /// Description of the curve input problem.
        reason: String,
    },

    /// Non-finite result from interpolation or discounting.
    #[error("numeric error: {reason}")]
    NumericError {
        /// Description of the numerical failure.
        reason: String,
    },
}

impl AnalyticsError {
    /// Creates an invalid schedule error.
    pub fn invalid_schedule(reason: impl Into<String>) -> Self {
        Self::InvalidSchedule {
            reason: reason.into(),
        }
    }

    /// Creates an invalid instrument error.
    pub fn invalid_instrument(reason: impl Into<String>) -> Self {
        Self::InvalidInstrument {
            reason: reason.into(),
        }
    }

    /// Creates an invalid bump error.
    pub fn invalid_bump(reason: impl Into<String>) -> Self {
        Self::InvalidBump {
            reason: reason.into(),
        }
    }

    /// Creates a numeric error.
    pub fn numeric(reason: impl Into<String>) -> Self {
        Self::NumericError {
            reason: reason.into(),
        }
    }
}

impl From<CurveError> for AnalyticsError {
    fn from(err: CurveError) -> Self {
        match err {
            CurveError::InvalidCurveInput { reason } => Self::InvalidCurveInput { reason },
            CurveError::NumericError { reason } => Self::NumericError { reason },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curve_error_conversion() {
        let err: AnalyticsError = CurveError::invalid_input("need at least 2 points").into();
        assert_eq!(
            err,
            AnalyticsError::InvalidCurveInput {
                reason: "need at least 2 points".to_string()
            }
        );

        let err: AnalyticsError = CurveError::numeric("NaN").into();
        assert!(matches!(err, AnalyticsError::NumericError { .. }));
    }

    #[test]
    fn test_display() {
        let err = AnalyticsError::invalid_schedule("2.5 periods");
        assert_eq!(err.to_string(), "invalid schedule: 2.5 periods");
    }
}

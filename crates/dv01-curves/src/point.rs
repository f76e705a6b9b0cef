//! Curve pillar points.

use serde::{Deserialize, Serialize};

use crate::error::{CurveError, CurveResult};

/// A single market input: tenor in years and its zero rate as a decimal.
///
/// Market tables quote yields in percent; use [`CurvePoint::from_percent`] to
/// convert. The yield is taken as the zero rate directly, without
/// bootstrapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Tenor in years.
    pub tenor: f64,
    /// Continuously compounded zero rate (0.05 = 5%).
    pub zero_rate: f64,
}

impl CurvePoint {
    /// Creates a curve point from a decimal zero rate.
    #[must_use]
    pub fn new(tenor: f64, zero_rate: f64) -> Self {
        Self { tenor, zero_rate }
    }

    /// Creates a curve point from a yield quoted in percent (5.0 = 5%).
    #[must_use]
    pub fn from_percent(tenor: f64, yield_pct: f64) -> Self {
        Self::new(tenor, yield_pct / 100.0)
    }

    /// Checks that the tenor is positive and finite and the rate is finite.
    pub fn validate(&self) -> CurveResult<()> {
        if !self.tenor.is_finite() || self.tenor <= 0.0 {
            return Err(CurveError::invalid_input(format!(
                "tenor must be positive and finite, got {}",
                self.tenor
            )));
        }
        if !self.zero_rate.is_finite() {
            return Err(CurveError::invalid_input(format!(
                "zero rate at tenor {} is not finite: {}",
                self.tenor, self.zero_rate
            )));
        }
        Ok(())
    }
}

impl From<(f64, f64)> for CurvePoint {
    fn from((tenor, zero_rate): (f64, f64)) -> Self {
        Self::new(tenor, zero_rate)
    }
}

//! Risk and plot settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use dv01_analytics::Dv01Calculator;

use crate::error::{Validate, ValidationError};

// =============================================================================
// RISK CONFIGURATION
// =============================================================================

fn default_bump_bps() -> f64 {
    1.0
}

/// DV01 calculation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskConfig {
    /// Parallel shift applied to the curve, in basis points.
    #[serde(default = "default_bump_bps")]
    pub bump_bps: f64,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            bump_bps: default_bump_bps(),
        }
    }
}

impl RiskConfig {
    /// Returns a calculator using the configured bump.
    #[must_use]
    pub fn calculator(&self) -> Dv01Calculator {
        Dv01Calculator::with_bump_bps(self.bump_bps)
    }
}

impl Validate for RiskConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if !self.bump_bps.is_finite() || self.bump_bps == 0.0 {
            errors.push(ValidationError::with_rule(
                "bump_bps",
                "Bump must be finite and non-zero",
                "non_zero_bump",
            ));
        }
        errors
    }
}

// =============================================================================
// PLOT CONFIGURATION
// =============================================================================

fn default_samples() -> usize {
    100
}

fn default_output() -> PathBuf {
    PathBuf::from("yield_curve.svg")
}

/// Yield curve chart settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotConfig {
    /// Number of evenly spaced tenors drawn across the curve.
    #[serde(default = "default_samples")]
    pub samples: usize,

    /// SVG file to write.
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            samples: default_samples(),
            output: default_output(),
        }
    }
}

impl Validate for PlotConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if self.samples < 2 {
            errors.push(ValidationError::with_rule(
                "samples",
                "Plot needs at least 2 samples",
                "min_samples",
            ));
        }
        if self.output.as_os_str().is_empty() {
            errors.push(ValidationError::new("output", "Output path cannot be empty"));
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(RiskConfig::default().bump_bps, 1.0);
        assert_eq!(RiskConfig::default().calculator(), Dv01Calculator::default());

        let plot = PlotConfig::default();
        assert_eq!(plot.samples, 100);
        assert_eq!(plot.output, PathBuf::from("yield_curve.svg"));
    }

    #[test]
    fn test_invalid_settings() {
        assert!(!RiskConfig { bump_bps: 0.0 }.is_valid());
        assert!(!RiskConfig { bump_bps: f64::NAN }.is_valid());

        let plot = PlotConfig {
            samples: 0,
            output: PathBuf::new(),
        };
        assert_eq!(plot.validate().len(), 2);
    }
}

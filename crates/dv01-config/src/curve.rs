//! Curve configuration types.
//!
//! The curve is given as a table of `(tenor, yield %)` pairs, the way market
//! yields are usually quoted, plus the spline boundary condition.

use serde::{Deserialize, Serialize};

use dv01_curves::prelude::{CurveBuilder, CurveResult, SplineBoundary, ZeroCurve};

use crate::error::{Validate, ValidationError};

// =============================================================================
// DEFAULTS
// =============================================================================

/// Mock Treasury table: 6M to 10Y yields in percent.
pub const DEFAULT_CURVE_POINTS: [(f64, f64); 7] = [
    (0.5, 5.0),
    (1.0, 5.1),
    (2.0, 5.2),
    (3.0, 5.3),
    (5.0, 5.5),
    (7.0, 5.6),
    (10.0, 5.7),
];

fn default_points() -> Vec<(f64, f64)> {
    DEFAULT_CURVE_POINTS.to_vec()
}

// =============================================================================
// CURVE CONFIGURATION
// =============================================================================

/// Configuration for zero curve construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveConfig {
    /// Spline boundary condition.
    #[serde(default)]
    pub boundary: SplineBoundary,

    /// `(tenor in years, yield in percent)` pairs, in any order.
    #[serde(default = "default_points")]
    pub points: Vec<(f64, f64)>,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            boundary: SplineBoundary::default(),
            points: default_points(),
        }
    }
}

impl CurveConfig {
    /// Creates a curve configuration from percent yields.
    #[must_use]
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self {
            points,
            ..Self::default()
        }
    }

    /// Sets the spline boundary condition.
    #[must_use]
    pub fn with_boundary(mut self, boundary: SplineBoundary) -> Self {
        self.boundary = boundary;
        self
    }

    /// Builds the zero curve described by this configuration.
    pub fn build_curve(&self) -> CurveResult<ZeroCurve> {
        self.points
            .iter()
            .fold(CurveBuilder::new().boundary(self.boundary), |b, &(t, y)| {
                b.add_percent(t, y)
            })
            .build()
    }
}

impl Validate for CurveConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.points.len() < 2 {
            errors.push(ValidationError::with_rule(
                "points",
                format!(
                    "Curve needs at least 2 points, got {}",
                    self.points.len()
                ),
                "min_points",
            ));
        }

        for (i, &(tenor, yield_pct)) in self.points.iter().enumerate() {
            if !tenor.is_finite() || tenor <= 0.0 {
                errors.push(ValidationError::with_rule(
                    format!("points[{i}].tenor"),
                    "Tenor must be positive and finite",
                    "positive_tenor",
                ));
            }
            if !yield_pct.is_finite() {
                errors.push(ValidationError::with_rule(
                    format!("points[{i}].yield"),
                    "Yield must be finite",
                    "finite_yield",
                ));
            }
        }

        errors
    }
}

//! Interpolation methods for yield curve construction.
//!
//! # Available Methods
//!
//! - [`CubicSpline`]: Piecewise cubic through every knot, C2 continuous
//!
//! # Boundary Conditions
//!
//! | Boundary | End condition | Notes |
//! |----------|---------------|-------|
//! | Not-a-knot | Third derivative continuous at the second and penultimate knots | Default, matches common scientific libraries |
//! | Natural | Second derivative zero at both ends | Flatter tails when extrapolating |

mod cubic_spline;

pub use cubic_spline::CubicSpline;

use serde::{Deserialize, Serialize};

use crate::error::MathResult;

/// End condition used to close the cubic spline system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SplineBoundary {
    /// Third derivative continuous across the second and penultimate knots.
    #[default]
    NotAKnot,
    /// Second derivative zero at the end points.
    Natural,
}

impl std::fmt::Display for SplineBoundary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SplineBoundary::NotAKnot => write!(f, "not-a-knot"),
            SplineBoundary::Natural => write!(f, "natural"),
        }
    }
}

/// Trait for interpolation methods.
///
/// All interpolation methods implement this trait, providing a unified
/// interface for curve construction.
pub trait Interpolator: Send + Sync {
    /// Returns the interpolated value at x.
    fn interpolate(&self, x: f64) -> MathResult<f64>;

    /// Interpolates an ordered sequence of points, preserving order.
    fn interpolate_many(&self, xs: &[f64]) -> MathResult<Vec<f64>> {
        xs.iter().map(|&x| self.interpolate(x)).collect()
    }

    /// Returns the minimum x value in the data.
    fn min_x(&self) -> f64;

    /// Returns the maximum x value in the data.
    fn max_x(&self) -> f64;

    /// Checks if x is within the interpolation range.
    fn in_range(&self, x: f64) -> bool {
        x >= self.min_x() && x <= self.max_x()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_both_boundaries_through_points() {
        let times = vec![0.5, 1.0, 2.0, 3.0, 5.0];
        let rates = vec![0.02, 0.025, 0.03, 0.035, 0.04];

        for boundary in [SplineBoundary::NotAKnot, SplineBoundary::Natural] {
            let spline =
                CubicSpline::with_boundary(times.clone(), rates.clone(), boundary).unwrap();
            for (t, r) in times.iter().zip(rates.iter()) {
                assert_relative_eq!(spline.interpolate(*t).unwrap(), *r, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_interpolate_many_preserves_order() {
        let spline =
            CubicSpline::new(vec![1.0, 2.0, 3.0, 4.0], vec![1.0, 4.0, 9.0, 16.0]).unwrap();

        let xs = [3.5, 1.5, 2.5];
        let ys = spline.interpolate_many(&xs).unwrap();

        assert_eq!(ys.len(), 3);
        for (x, y) in xs.iter().zip(ys.iter()) {
            assert_relative_eq!(*y, spline.interpolate(*x).unwrap(), epsilon = 1e-15);
        }
    }

    #[test]
    fn test_yield_curve_construction() {
        let maturities = vec![0.25, 0.5, 1.0, 2.0, 3.0, 5.0, 7.0, 10.0, 20.0, 30.0];
        let zero_rates = vec![
            0.0200, 0.0210, 0.0225, 0.0250, 0.0275, 0.0310, 0.0340, 0.0370, 0.0400, 0.0410,
        ];

        let spline = CubicSpline::new(maturities, zero_rates).unwrap();

        // Between the 3Y and 5Y pillars
        let z = spline.interpolate(4.0).unwrap();
        assert!(z > 0.0275 && z < 0.0310);
    }

    #[test]
    fn test_boundary_display() {
        assert_eq!(SplineBoundary::NotAKnot.to_string(), "not-a-knot");
        assert_eq!(SplineBoundary::Natural.to_string(), "natural");
        assert_eq!(SplineBoundary::default(), SplineBoundary::NotAKnot);
    }
}

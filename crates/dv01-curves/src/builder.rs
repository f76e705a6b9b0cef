//! Fluent builder for zero curves.
//!
//! The builder owns the curve inputs until `build()` is called. Points may be
//! added in any order; they are validated, sorted by tenor, and checked for
//! duplicates before the spline is fitted.

use log::debug;

use dv01_math::interpolation::SplineBoundary;

use crate::error::{CurveError, CurveResult};
use crate::point::CurvePoint;
use crate::zero::ZeroCurve;

/// Minimum number of pillars needed to build a curve.
pub const MIN_CURVE_POINTS: usize = 2;

/// Builder for [`ZeroCurve`].
///
/// # Example
///
/// ```rust
/// use dv01_curves::{CurveBuilder, TermStructure};
///
/// // Market table quoted in percent
/// let curve = CurveBuilder::new()
///     .add_percent(10.0, 5.7)
///     .add_percent(0.5, 5.0)
///     .add_percent(2.0, 5.2)
///     .build()
///     .unwrap();
///
/// assert_eq!(curve.tenor_bounds(), (0.5, 10.0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CurveBuilder {
    points: Vec<CurvePoint>,
    boundary: SplineBoundary,
}

impl CurveBuilder {
    /// Creates an empty builder with the default (not-a-knot) boundary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a pillar with a decimal zero rate.
    #[must_use]
    pub fn add_point(mut self, tenor: f64, zero_rate: f64) -> Self {
        self.points.push(CurvePoint::new(tenor, zero_rate));
        self
    }

    /// Adds a pillar with a yield quoted in percent.
    #[must_use]
    pub fn add_percent(mut self, tenor: f64, yield_pct: f64) -> Self {
        self.points.push(CurvePoint::from_percent(tenor, yield_pct));
        self
    }

    /// Adds several pillars at once.
    #[must_use]
    pub fn with_points<I, P>(mut self, points: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<CurvePoint>,
    {
        self.points.extend(points.into_iter().map(Into::into));
        self
    }

    /// Sets the spline boundary condition.
    #[must_use]
    pub fn boundary(mut self, boundary: SplineBoundary) -> Self {
        self.boundary = boundary;
        self
    }

    /// Validates the inputs and builds the curve.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidCurveInput`] if fewer than two points were
    /// given, any tenor is non-positive or non-finite, any rate is non-finite,
    /// or two points share a tenor.
    pub fn build(self) -> CurveResult<ZeroCurve> {
        let Self {
            mut points,
            boundary,
        } = self;

        if points.len() < MIN_CURVE_POINTS {
            return Err(CurveError::invalid_input(format!(
                "need at least {MIN_CURVE_POINTS} points, got {}",
                points.len()
            )));
        }

        for point in &points {
            point.validate()?;
        }

        points.sort_by(|a, b| a.tenor.total_cmp(&b.tenor));

        if let Some(w) = points.windows(2).find(|w| w[1].tenor <= w[0].tenor) {
            return Err(CurveError::invalid_input(format!(
                "duplicate tenor {}",
                w[0].tenor
            )));
        }

        debug!(
            "building zero curve: {} points over [{}, {}], {} spline",
            points.len(),
            points[0].tenor,
            points[points.len() - 1].tenor,
            boundary
        );

        ZeroCurve::from_sorted_points(points, boundary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term_structure::TermStructure;
    use approx::assert_relative_eq;

    #[test]
    fn test_sorts_unordered_points() {
        let curve = CurveBuilder::new()
            .add_point(5.0, 0.055)
            .add_point(1.0, 0.051)
            .add_point(3.0, 0.053)
            .build()
            .unwrap();

        assert_eq!(curve.tenors(), &[1.0, 3.0, 5.0]);
        assert_relative_eq!(curve.zero_rate(3.0).unwrap(), 0.053, epsilon = 1e-15);
    }

    #[test]
    fn test_rejects_too_few_points() {
        let err = CurveBuilder::new().add_point(1.0, 0.05).build().unwrap_err();
        assert!(matches!(err, CurveError::InvalidCurveInput { .. }));
        assert!(CurveBuilder::new().build().is_err());
    }

    #[test]
    fn test_rejects_duplicate_tenors() {
        let err = CurveBuilder::new()
            .add_point(1.0, 0.05)
            .add_point(2.0, 0.052)
            .add_point(1.0, 0.051)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("duplicate tenor"));
    }

    #[test]
    fn test_rejects_non_finite_rates() {
        let err = CurveBuilder::new()
            .add_point(1.0, 0.05)
            .add_point(2.0, f64::NAN)
            .build()
            .unwrap_err();
        assert!(matches!(err, CurveError::InvalidCurveInput { .. }));
    }

    #[test]
    fn test_rejects_non_positive_tenor() {
        assert!(CurveBuilder::new()
            .add_point(0.0, 0.05)
            .add_point(2.0, 0.052)
            .build()
            .is_err());
    }

    #[test]
    fn test_with_points_and_boundary() {
        let curve = CurveBuilder::new()
            .with_points([(0.5, 0.05), (1.0, 0.051), (2.0, 0.052), (5.0, 0.055)])
            .boundary(SplineBoundary::Natural)
            .build()
            .unwrap();

        assert_eq!(curve.boundary(), SplineBoundary::Natural);
        assert_eq!(curve.points().len(), 4);
    }
}

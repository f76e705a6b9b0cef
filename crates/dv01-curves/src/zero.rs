//! Zero-coupon yield curve.

use serde::Serialize;

use dv01_math::interpolation::{CubicSpline, Interpolator, SplineBoundary};

use crate::error::{CurveError, CurveResult};
use crate::point::CurvePoint;
use crate::term_structure::TermStructure;

/// A zero-coupon yield curve.
///
/// Represents continuously compounded zero rates interpolated with a cubic
/// spline through the input pillars. The curve is immutable once built; use
/// [`crate::CurveBuilder`] to construct one.
///
/// Outside the pillar range the boundary segment's cubic is extrapolated
/// without clamping.
#[derive(Debug, Clone)]
pub struct ZeroCurve {
    /// Sorted, validated pillars.
    points: Vec<CurvePoint>,

    /// Spline over (tenor, zero rate).
    spline: CubicSpline,
}

/// A sampled point on a curve, for tabulation and plotting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurveSample {
    /// Tenor in years.
    pub tenor: f64,
    /// Zero rate as a decimal.
    pub zero_rate: f64,
    /// Discount factor `exp(-r t)`.
    pub discount_factor: f64,
}

impl ZeroCurve {
    /// Builds the curve from points already sorted by strictly increasing tenor.
    pub(crate) fn from_sorted_points(
        points: Vec<CurvePoint>,
        boundary: SplineBoundary,
    ) -> CurveResult<Self> {
        let tenors: Vec<f64> = points.iter().map(|p| p.tenor).collect();
        let rates: Vec<f64> = points.iter().map(|p| p.zero_rate).collect();

        let spline = CubicSpline::with_boundary(tenors, rates, boundary)?;

        Ok(Self { points, spline })
    }

    /// Returns the pillar points, sorted by tenor.
    #[must_use]
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Returns the pillar tenors.
    #[must_use]
    pub fn tenors(&self) -> &[f64] {
        self.spline.xs()
    }

    /// Returns the pillar zero rates.
    #[must_use]
    pub fn rates(&self) -> &[f64] {
        self.spline.ys()
    }

    /// Returns the spline boundary condition.
    #[must_use]
    pub fn boundary(&self) -> SplineBoundary {
        self.spline.boundary()
    }

    /// Samples `n` evenly spaced tenors across the pillar range, inclusive.
    pub fn sample(&self, n: usize) -> CurveResult<Vec<CurveSample>> {
        let (min, max) = self.tenor_bounds();
        self.sample_range(min, max, n)
    }

    /// Samples `n` evenly spaced tenors over `[from, to]`, inclusive.
    pub fn sample_range(&self, from: f64, to: f64, n: usize) -> CurveResult<Vec<CurveSample>> {
        if n == 0 {
            return Err(CurveError::invalid_input("sample count must be positive"));
        }
        if !from.is_finite() || !to.is_finite() || to < from {
            return Err(CurveError::invalid_input(format!(
                "invalid sample range [{from}, {to}]"
            )));
        }

        let step = if n > 1 {
            (to - from) / (n - 1) as f64
        } else {
            0.0
        };

        (0..n)
            .map(|i| {
                // Pin the last sample so rounding cannot overshoot the range.
                let tenor = if i + 1 == n && n > 1 {
                    to
                } else {
                    from + step * i as f64
                };
                Ok(CurveSample {
                    tenor,
                    zero_rate: self.zero_rate(tenor)?,
                    discount_factor: self.discount_factor(tenor)?,
                })
            })
            .collect()
    }
}

impl TermStructure for ZeroCurve {
    fn zero_rate(&self, t: f64) -> CurveResult<f64> {
        Ok(self.spline.interpolate(t)?)
    }

    fn zero_rates(&self, tenors: &[f64]) -> CurveResult<Vec<f64>> {
        Ok(self.spline.interpolate_many(tenors)?)
    }

    fn tenor_bounds(&self) -> (f64, f64) {
        (self.spline.min_x(), self.spline.max_x())
    }
}

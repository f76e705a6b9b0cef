//! Cubic spline interpolation.

use log::trace;
use nalgebra::{DMatrix, DVector};

use crate::error::{MathError, MathResult};
use crate::interpolation::{Interpolator, SplineBoundary};

/// Cubic spline interpolation.
///
/// Constructs a smooth curve through data points using piecewise cubic
/// polynomials with continuous first and second derivatives. The spline is
/// stored as its second derivatives at the knots.
///
/// With two knots the spline is the straight line through them. With three
/// knots and the not-a-knot boundary it is the parabola through them.
///
/// Outside the knot range the boundary segment's cubic is evaluated as is.
///
/// # Example
///
/// ```rust
/// use dv01_math::interpolation::{CubicSpline, Interpolator};
///
/// let xs = vec![0.0, 1.0, 2.0, 3.0];
/// let ys = vec![0.0, 1.0, 8.0, 27.0];
///
/// let spline = CubicSpline::new(xs, ys).unwrap();
/// let y = spline.interpolate(1.5).unwrap();
/// assert!((y - 3.375).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct CubicSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Second derivatives at each knot
    y2s: Vec<f64>,
    boundary: SplineBoundary,
}

impl CubicSpline {
    /// Creates a not-a-knot cubic spline interpolator.
    ///
    /// # Arguments
    ///
    /// * `xs` - X coordinates (must be strictly increasing)
    /// * `ys` - Y coordinates
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 2 points, if lengths differ,
    /// if any coordinate is not finite, or if `xs` is not strictly increasing.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        Self::with_boundary(xs, ys, SplineBoundary::NotAKnot)
    }

    /// Creates a cubic spline interpolator with the given boundary condition.
    pub fn with_boundary(
        xs: Vec<f64>,
        ys: Vec<f64>,
        boundary: SplineBoundary,
    ) -> MathResult<Self> {
        if xs.len() < 2 {
            return Err(MathError::insufficient_data(2, xs.len()));
        }
        if xs.len() != ys.len() {
            return Err(MathError::invalid_input(format!(
                "xs and ys must have same length: {} vs {}",
                xs.len(),
                ys.len()
            )));
        }
        if let Some(i) = xs.iter().position(|x| !x.is_finite()) {
            return Err(MathError::invalid_input(format!(
                "x value at index {i} is not finite: {}",
                xs[i]
            )));
        }
        if let Some(i) = ys.iter().position(|y| !y.is_finite()) {
            return Err(MathError::invalid_input(format!(
                "y value at index {i} is not finite: {}",
                ys[i]
            )));
        }

        for i in 1..xs.len() {
            if xs[i] <= xs[i - 1] {
                return Err(MathError::invalid_input(
                    "x values must be strictly increasing",
                ));
            }
        }

        let y2s = compute_second_derivatives(&xs, &ys, boundary)?;
        trace!(
            "cubic spline ({boundary}) over {} knots, y'' = {:?}",
            xs.len(),
            y2s
        );

        Ok(Self {
            xs,
            ys,
            y2s,
            boundary,
        })
    }

    /// Returns the boundary condition the spline was built with.
    pub fn boundary(&self) -> SplineBoundary {
        self.boundary
    }

    /// Returns the knot x coordinates.
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// Returns the knot y coordinates.
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Returns the second derivatives at the knots.
    pub fn second_derivatives(&self) -> &[f64] {
        &self.y2s
    }

    /// Finds the index i such that xs[i] <= x < xs[i+1], clamped to the
    /// boundary segments.
    fn find_segment(&self, x: f64) -> usize {
        match self.xs.binary_search_by(|probe| {
            probe.partial_cmp(&x).unwrap_or(std::cmp::Ordering::Equal)
        }) {
            Ok(i) => i.min(self.xs.len() - 2),
            Err(i) => (i.saturating_sub(1)).min(self.xs.len() - 2),
        }
    }
}

impl Interpolator for CubicSpline {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        let i = self.find_segment(x);

        let x_lo = self.xs[i];
        let x_hi = self.xs[i + 1];
        let y_lo = self.ys[i];
        let y_hi = self.ys[i + 1];
        let y2_lo = self.y2s[i];
        let y2_hi = self.y2s[i + 1];

        let h = x_hi - x_lo;
        let a = (x_hi - x) / h;
        let b = (x - x_lo) / h;

        let y = a * y_lo
            + b * y_hi
            + ((a * a * a - a) * y2_lo + (b * b * b - b) * y2_hi) * (h * h) / 6.0;

        if !y.is_finite() {
            return Err(MathError::NonFinite { x, value: y });
        }
        Ok(y)
    }

    fn min_x(&self) -> f64 {
        self.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.xs[self.xs.len() - 1]
    }
}

/// Solves for the second derivatives at each knot.
///
/// Interior rows enforce continuity of the first derivative:
///
/// ```text
/// h[i-1] M[i-1] + 2 (h[i-1] + h[i]) M[i] + h[i] M[i+1]
///     = 6 ((y[i+1] - y[i]) / h[i] - (y[i] - y[i-1]) / h[i-1])
/// ```
///
/// The first and last rows carry the boundary condition.
fn compute_second_derivatives(
    xs: &[f64],
    ys: &[f64],
    boundary: SplineBoundary,
) -> MathResult<Vec<f64>> {
    let n = xs.len();

    // Two knots: the only cubic with no extra information is the line.
    if n == 2 {
        return Ok(vec![0.0; 2]);
    }

    let h: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();
    let mut a = DMatrix::<f64>::zeros(n, n);
    let mut rhs = DVector::<f64>::zeros(n);

    for i in 1..n - 1 {
        a[(i, i - 1)] = h[i - 1];
        a[(i, i)] = 2.0 * (h[i - 1] + h[i]);
        a[(i, i + 1)] = h[i];
        rhs[i] = 6.0 * ((ys[i + 1] - ys[i]) / h[i] - (ys[i] - ys[i - 1]) / h[i - 1]);
    }

    match boundary {
        SplineBoundary::Natural => {
            a[(0, 0)] = 1.0;
            a[(n - 1, n - 1)] = 1.0;
        }
        SplineBoundary::NotAKnot if n == 3 => {
            // Both conditions collapse onto the middle knot; a single
            // parabola means M is constant.
            a[(0, 0)] = 1.0;
            a[(0, 1)] = -1.0;
            a[(2, 1)] = 1.0;
            a[(2, 2)] = -1.0;
        }
        SplineBoundary::NotAKnot => {
            // (M1 - M0) / h0 == (M2 - M1) / h1
            a[(0, 0)] = h[1];
            a[(0, 1)] = -(h[0] + h[1]);
            a[(0, 2)] = h[0];
            // Same at the penultimate knot
            a[(n - 1, n - 3)] = h[n - 2];
            a[(n - 1, n - 2)] = -(h[n - 3] + h[n - 2]);
            a[(n - 1, n - 1)] = h[n - 3];
        }
    }

    let solution = a.lu().solve(&rhs).ok_or(MathError::SingularMatrix)?;
    Ok(solution.iter().copied().collect())
}

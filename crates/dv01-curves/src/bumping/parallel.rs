//! Parallel (uniform) curve bumping.
//!
//! A parallel bump shifts the entire curve by a constant amount, the
//! standard scenario for DV01.

use crate::error::CurveResult;
use crate::term_structure::TermStructure;

/// One basis point in decimal rate terms.
pub const BASIS_POINT: f64 = 0.0001;

/// A parallel (uniform) shift applied to a curve.
///
/// The shift is given in basis points and affects every tenor equally,
/// including extrapolated ones.
///
/// # Example
///
/// ```rust
/// use dv01_curves::bumping::ParallelBump;
///
/// let bump_up = ParallelBump::new(1.0);    // +1bp
/// let bump_down = ParallelBump::new(-1.0); // -1bp
/// let bump_25 = ParallelBump::new(25.0);   // +25bp
///
/// assert_eq!(bump_up.shift_decimal(), 0.0001);
/// assert_eq!(bump_25.shift_bps(), 25.0);
/// # let _ = bump_down;
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallelBump {
    /// Shift amount in basis points.
    shift_bps: f64,
}

impl ParallelBump {
    /// Creates a new parallel bump of `shift_bps` basis points.
    #[must_use]
    pub fn new(shift_bps: f64) -> Self {
        Self { shift_bps }
    }

    /// Creates a 1bp upward shift (standard for DV01).
    #[must_use]
    pub fn one_bp_up() -> Self {
        Self::new(1.0)
    }

    /// Returns the shift in basis points.
    #[must_use]
    pub fn shift_bps(&self) -> f64 {
        self.shift_bps
    }

    /// Returns the shift as a decimal (0.0001 = 1bp).
    #[must_use]
    pub fn shift_decimal(&self) -> f64 {
        self.shift_bps * BASIS_POINT
    }

    /// Applies the bump to a curve, returning a zero-copy bumped curve.
    #[must_use]
    pub fn apply<'a, T: TermStructure + ?Sized>(&self, curve: &'a T) -> BumpedCurve<'a, T> {
        BumpedCurve {
            base: curve,
            shift_decimal: self.shift_decimal(),
        }
    }
}

impl Default for ParallelBump {
    fn default() -> Self {
        Self::one_bp_up()
    }
}

/// A curve with a parallel shift applied.
///
/// `r'(t) = r(t) + shift` for every tenor. Bumped curves are themselves term
/// structures, so they can be priced against or bumped again.
#[derive(Debug, Clone, Copy)]
pub struct BumpedCurve<'a, T: TermStructure + ?Sized> {
    /// The base curve.
    base: &'a T,
    /// Shift in decimal form (0.0001 = 1bp).
    shift_decimal: f64,
}

impl<T: TermStructure + ?Sized> BumpedCurve<'_, T> {
    /// Returns a reference to the base curve.
    #[must_use]
    pub fn base(&self) -> &T {
        self.base
    }

    /// Returns the applied shift in decimal form.
    #[must_use]
    pub fn shift_decimal(&self) -> f64 {
        self.shift_decimal
    }

    /// Returns the applied shift in basis points.
    #[must_use]
    pub fn shift_bps(&self) -> f64 {
        self.shift_decimal / BASIS_POINT
    }
}

impl<T: TermStructure + ?Sized> TermStructure for BumpedCurve<'_, T> {
    fn zero_rate(&self, t: f64) -> CurveResult<f64> {
        Ok(self.base.zero_rate(t)? + self.shift_decimal)
    }

    fn zero_rates(&self, tenors: &[f64]) -> CurveResult<Vec<f64>> {
        let mut rates = self.base.zero_rates(tenors)?;
        for r in &mut rates {
            *r += self.shift_decimal;
        }
        Ok(rates)
    }

    fn tenor_bounds(&self) -> (f64, f64) {
        self.base.tenor_bounds()
    }
}

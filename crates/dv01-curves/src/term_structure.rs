//! Core term structure trait.
//!
//! The `TermStructure` trait is the abstraction every valuation in the DV01
//! library is written against: a pure mapping from tenor (years) to a
//! continuously compounded zero rate. Base curves and bumped curves both
//! implement it, so pricing code never needs to know whether it is looking at
//! a shifted curve.
//!
//! # Thread Safety
//!
//! All term structures are required to be `Send + Sync`, enabling safe use in
//! parallel pricing across instruments.

use std::sync::Arc;

use crate::error::{CurveError, CurveResult};

/// Core abstraction for a zero-rate term structure.
///
/// # Example
///
/// ```rust
/// use dv01_curves::{CurveBuilder, TermStructure};
///
/// fn annuity<T: TermStructure>(curve: &T, times: &[f64]) -> f64 {
///     curve
///         .discount_factors(times)
///         .unwrap()
///         .iter()
///         .sum()
/// }
///
/// let curve = CurveBuilder::new()
///     .add_point(1.0, 0.05)
///     .add_point(2.0, 0.05)
///     .build()
///     .unwrap();
/// let a = annuity(&curve, &[1.0, 2.0]);
/// assert!((a - ((-0.05f64).exp() + (-0.10f64).exp())).abs() < 1e-12);
/// ```
pub trait TermStructure: Send + Sync {
    /// Returns the continuously compounded zero rate at tenor `t` (years).
    ///
    /// Tenors outside the pillar range are extrapolated.
    fn zero_rate(&self, t: f64) -> CurveResult<f64>;

    /// Returns the range spanned by the curve's input pillars.
    fn tenor_bounds(&self) -> (f64, f64);

    // ========================================================================
    // Default implementations
    // ========================================================================

    /// Returns zero rates for an ordered sequence of tenors, in the same order.
    fn zero_rates(&self, tenors: &[f64]) -> CurveResult<Vec<f64>> {
        tenors.iter().map(|&t| self.zero_rate(t)).collect()
    }

    /// Returns the discount factor `exp(-r(t) * t)` at tenor `t`.
    fn discount_factor(&self, t: f64) -> CurveResult<f64> {
        let rate = self.zero_rate(t)?;
        let df = (-rate * t).exp();
        if !df.is_finite() {
            return Err(CurveError::numeric(format!(
                "discount factor at t={t} is not finite (zero rate {rate})"
            )));
        }
        Ok(df)
    }

    /// Returns discount factors for an ordered sequence of tenors.
    fn discount_factors(&self, tenors: &[f64]) -> CurveResult<Vec<f64>> {
        tenors.iter().map(|&t| self.discount_factor(t)).collect()
    }

    /// Returns true if the given tenor lies within the pillar range.
    fn in_range(&self, t: f64) -> bool {
        let (min, max) = self.tenor_bounds();
        t >= min && t <= max
    }
}

/// Blanket implementation allowing `Arc<T>` to be used as a `TermStructure`.
impl<T: TermStructure + ?Sized> TermStructure for Arc<T> {
    fn zero_rate(&self, t: f64) -> CurveResult<f64> {
        (**self).zero_rate(t)
    }

    fn tenor_bounds(&self) -> (f64, f64) {
        (**self).tenor_bounds()
    }
}

/// Blanket implementation allowing `Box<T>` to be used as a `TermStructure`.
impl<T: TermStructure + ?Sized> TermStructure for Box<T> {
    fn zero_rate(&self, t: f64) -> CurveResult<f64> {
        (**self).zero_rate(t)
    }

    fn tenor_bounds(&self) -> (f64, f64) {
        (**self).tenor_bounds()
    }
}

/// Blanket implementation allowing `&T` to be used as a `TermStructure`.
impl<T: TermStructure + ?Sized> TermStructure for &T {
    fn zero_rate(&self, t: f64) -> CurveResult<f64> {
        (**self).zero_rate(t)
    }

    fn tenor_bounds(&self) -> (f64, f64) {
        (**self).tenor_bounds()
    }
}

//! Discounted cashflow valuation.
//!
//! Present value is `sum(amount_i * exp(-r(t_i) * t_i))` with `r` read from
//! any [`TermStructure`], so the same routine values against a base curve or
//! a bumped view of it.

use dv01_curves::TermStructure;
use log::trace;

use crate::cashflows::CashflowSchedule;
use crate::error::{AnalyticsError, AnalyticsResult};
use crate::instruments::FixedRateInstrument;

/// Discounts every cashflow in a schedule and sums the result.
pub fn present_value<T>(schedule: &CashflowSchedule, curve: &T) -> AnalyticsResult<f64>
where
    T: TermStructure + ?Sized,
{
    let mut pv = 0.0;
    for cf in schedule.cashflows() {
        let df = curve.discount_factor(cf.time)?;
        trace!("t={:.4} amount={:.2} df={df:.10}", cf.time, cf.amount);
        pv += cf.amount * df;
    }

    if !pv.is_finite() {
        return Err(AnalyticsError::numeric(format!(
            "present value is not finite: {pv}"
        )));
    }
    Ok(pv)
}

/// Prices a fixed-rate instrument against a term structure.
///
/// # Example
///
/// ```rust
/// use dv01_analytics::{price, FixedRateInstrument};
/// use dv01_curves::CurveBuilder;
///
/// let flat = CurveBuilder::new()
///     .add_point(1.0, 0.05)
///     .add_point(5.0, 0.05)
///     .build()
///     .unwrap();
///
/// let one_year = FixedRateInstrument::bond(100.0, 0.05, 1.0, 1);
/// let pv = price(&one_year, &flat).unwrap();
/// assert!((pv - 105.0 * (-0.05f64).exp()).abs() < 1e-10);
/// ```
pub fn price<T>(instrument: &FixedRateInstrument, curve: &T) -> AnalyticsResult<f64>
where
    T: TermStructure + ?Sized,
{
    instrument.validate()?;
    let schedule = CashflowSchedule::generate(instrument)?;
    present_value(&schedule, curve)
}

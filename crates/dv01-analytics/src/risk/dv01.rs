//! DV01 (Dollar Value of 01) by curve revaluation.
//!
//! DV01 is the price lost when every zero rate on the curve rises by one
//! basis point:
//!
//! ```text
//! DV01 = PV(curve) - PV(curve + 1bp)
//! ```
//!
//! For a bump other than 1bp the price change is divided by the bump size,
//! so the figure stays quoted per basis point.

use dv01_curves::{ParallelBump, TermStructure};
use log::debug;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::instruments::FixedRateInstrument;
use crate::pricing::price;

/// DV01 value (currency change per basis point).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Dv01(Decimal);

impl Dv01 {
    /// Creates a DV01 from a decimal amount.
    #[must_use]
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Creates a DV01 from a floating-point amount.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::NumericError`] if the amount is not finite.
    pub fn from_f64(value: f64) -> AnalyticsResult<Self> {
        Decimal::from_f64_retain(value)
            .map(Self)
            .ok_or_else(|| AnalyticsError::numeric(format!("DV01 is not finite: {value}")))
    }

    /// Returns the unrounded DV01.
    #[must_use]
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Returns the DV01 as f64.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(0.0)
    }

    /// Returns the DV01 rounded to cents, half away from zero.
    #[must_use]
    pub fn rounded(&self) -> Decimal {
        self.0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }
}

impl std::fmt::Display for Dv01 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.2}", self.rounded())
    }
}

impl From<Decimal> for Dv01 {
    fn from(d: Decimal) -> Self {
        Self(d)
    }
}

/// Base and bumped valuations behind a DV01 figure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dv01Result {
    /// Present value on the unshifted curve.
    pub base_pv: f64,
    /// Present value on the shifted curve.
    pub bumped_pv: f64,
    /// Price change per basis point.
    pub dv01: Dv01,
}

/// Finite-difference DV01 calculator.
///
/// # Example
///
/// ```rust
/// use dv01_analytics::{Dv01Calculator, FixedRateInstrument};
/// use dv01_curves::CurveBuilder;
///
/// let curve = CurveBuilder::new()
///     .add_percent(1.0, 5.0)
///     .add_percent(10.0, 5.0)
///     .build()
///     .unwrap();
///
/// let bond = FixedRateInstrument::bond(1_000_000.0, 0.05, 5.0, 1);
/// let result = Dv01Calculator::default().calculate(&bond, &curve).unwrap();
///
/// assert!(result.bumped_pv < result.base_pv);
/// assert!(result.dv01.as_f64() > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dv01Calculator {
    bump: ParallelBump,
}

impl Dv01Calculator {
    /// Creates a calculator with the given bump.
    #[must_use]
    pub fn new(bump: ParallelBump) -> Self {
        Self { bump }
    }

    /// Creates a calculator bumping by `bps` basis points.
    #[must_use]
    pub fn with_bump_bps(bps: f64) -> Self {
        Self::new(ParallelBump::new(bps))
    }

    /// Returns the bump in use.
    #[must_use]
    pub fn bump(&self) -> ParallelBump {
        self.bump
    }

    /// Values the instrument on the base and bumped curves.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::InvalidBump`] if the bump is zero or not
    /// finite, before any valuation is attempted.
    pub fn calculate<T>(
        &self,
        instrument: &FixedRateInstrument,
        curve: &T,
    ) -> AnalyticsResult<Dv01Result>
    where
        T: TermStructure + ?Sized,
    {
        let bps = self.bump.shift_bps();
        if !bps.is_finite() || bps == 0.0 {
            return Err(AnalyticsError::invalid_bump(format!(
                "bump size must be finite and non-zero, got {bps}bp"
            )));
        }

        let base_pv = price(instrument, curve)?;
        let bumped = self.bump.apply(curve);
        let bumped_pv = price(instrument, &bumped)?;
        let dv01 = Dv01::from_f64((base_pv - bumped_pv) / bps)?;

        debug!(
            "{}: base_pv={base_pv:.6} bumped_pv={bumped_pv:.6} dv01={} ({bps}bp)",
            instrument.kind,
            dv01.as_f64()
        );

        Ok(Dv01Result {
            base_pv,
            bumped_pv,
            dv01,
        })
    }

    /// Values many instruments against the same curve, preserving order.
    ///
    /// Fails on the first instrument that cannot be valued.
    pub fn calculate_batch<T>(
        &self,
        instruments: &[FixedRateInstrument],
        curve: &T,
    ) -> AnalyticsResult<Vec<Dv01Result>>
    where
        T: TermStructure + ?Sized,
    {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            instruments
                .par_iter()
                .map(|instrument| self.calculate(instrument, curve))
                .collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            instruments
                .iter()
                .map(|instrument| self.calculate(instrument, curve))
                .collect()
        }
    }
}

/// Computes the 1bp DV01 of an instrument.
pub fn dv01<T>(instrument: &FixedRateInstrument, curve: &T) -> AnalyticsResult<Dv01>
where
    T: TermStructure + ?Sized,
{
    Dv01Calculator::default()
        .calculate(instrument, curve)
        .map(|r| r.dv01)
}

/// Computes the 1bp DV01 of each instrument, in input order.
pub fn dv01_batch<T>(instruments: &[FixedRateInstrument], curve: &T) -> AnalyticsResult<Vec<Dv01>>
where
    T: TermStructure + ?Sized,
{
    Ok(Dv01Calculator::default()
        .calculate_batch(instruments, curve)?
        .into_iter()
        .map(|r| r.dv01)
        .collect())
}

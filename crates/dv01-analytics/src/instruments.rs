//! Fixed-rate instrument parameters.
//!
//! A fixed-rate bond and the fixed leg of an interest-rate swap share the
//! same schedule and discounting; they differ only in whether the principal
//! is repaid at maturity.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, AnalyticsResult};

/// Tolerance when checking that `maturity * frequency` is a whole number.
pub const PERIOD_COUNT_TOLERANCE: f64 = 1e-9;

/// Largest schedule generated; 100 years of weekly payments fit.
pub const MAX_PERIODS: usize = 10_000;

/// What kind of fixed-rate cashflow stream an instrument is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstrumentKind {
    /// Fixed coupon bond, principal repaid with the last coupon.
    Bond,
    /// Fixed leg of an interest-rate swap, no principal exchange.
    SwapFixedLeg,
}

impl InstrumentKind {
    /// Returns true if the final cashflow includes the principal.
    #[must_use]
    pub fn includes_principal(&self) -> bool {
        matches!(self, InstrumentKind::Bond)
    }
}

impl fmt::Display for InstrumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InstrumentKind::Bond => "Fixed Bond",
            InstrumentKind::SwapFixedLeg => "Swap Fixed Leg",
        };
        write!(f, "{name}")
    }
}

/// Terms of a fixed-rate bond or swap fixed leg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedRateInstrument {
    /// Bond or swap fixed leg.
    pub kind: InstrumentKind,
    /// Face value (bond) or notional (swap).
    pub face: f64,
    /// Annual fixed rate as a decimal (0.05 = 5%).
    pub rate: f64,
    /// Maturity in years.
    pub maturity: f64,
    /// Payments per year.
    pub frequency: u32,
}

impl FixedRateInstrument {
    /// Creates an instrument of the given kind.
    #[must_use]
    pub fn new(kind: InstrumentKind, face: f64, rate: f64, maturity: f64, frequency: u32) -> Self {
        Self {
            kind,
            face,
            rate,
            maturity,
            frequency,
        }
    }

    /// Creates a fixed coupon bond.
    #[must_use]
    pub fn bond(face: f64, coupon_rate: f64, maturity: f64, frequency: u32) -> Self {
        Self::new(InstrumentKind::Bond, face, coupon_rate, maturity, frequency)
    }

    /// Creates a swap fixed leg.
    #[must_use]
    pub fn swap_fixed_leg(notional: f64, fixed_rate: f64, maturity: f64, frequency: u32) -> Self {
        Self::new(
            InstrumentKind::SwapFixedLeg,
            notional,
            fixed_rate,
            maturity,
            frequency,
        )
    }

    /// Returns the per-period fixed amount, `face * rate / frequency`.
    #[must_use]
    pub fn period_amount(&self) -> f64 {
        self.face * self.rate / f64::from(self.frequency)
    }

    /// Returns the number of payments, `maturity * frequency`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::InvalidSchedule`] if the frequency is zero,
    /// the maturity is not a positive finite number, or the product is not a
    /// positive whole number no larger than [`MAX_PERIODS`].
    pub fn period_count(&self) -> AnalyticsResult<usize> {
        if self.frequency == 0 {
            return Err(AnalyticsError::invalid_schedule(
                "payment frequency must be positive",
            ));
        }
        if !self.maturity.is_finite() || self.maturity <= 0.0 {
            return Err(AnalyticsError::invalid_schedule(format!(
                "maturity must be positive and finite, got {}",
                self.maturity
            )));
        }

        let periods = self.maturity * f64::from(self.frequency);
        let rounded = periods.round();
        if (periods - rounded).abs() > PERIOD_COUNT_TOLERANCE {
            return Err(AnalyticsError::invalid_schedule(format!(
                "maturity {} x frequency {} = {periods} is not a whole number of periods",
                self.maturity, self.frequency
            )));
        }
        if rounded < 1.0 {
            return Err(AnalyticsError::invalid_schedule(format!(
                "maturity {} x frequency {} yields no payments",
                self.maturity, self.frequency
            )));
        }

        if rounded > MAX_PERIODS as f64 {
            return Err(AnalyticsError::invalid_schedule(format!(
                "maturity {} x frequency {} = {rounded} periods exceeds the limit of {MAX_PERIODS}",
                self.maturity, self.frequency
            )));
        }

        Ok(rounded as usize)
    }

    /// Checks every term of the instrument.
    pub fn validate(&self) -> AnalyticsResult<()> {
        if !self.face.is_finite() || self.face <= 0.0 {
            return Err(AnalyticsError::invalid_instrument(format!(
                "face must be positive and finite, got {}",
                self.face
            )));
        }
        if !self.rate.is_finite() {
            return Err(AnalyticsError::invalid_instrument(format!(
                "fixed rate is not finite: {}",
                self.rate
            )));
        }
        self.period_count().map(|_| ())
    }
}

impl fmt::Display for FixedRateInstrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}Y {} {:.4}% x{}/yr on {}",
            self.maturity,
            self.kind,
            self.rate * 100.0,
            self.frequency,
            self.face
        )
    }
}

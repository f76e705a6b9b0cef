//! Cashflow schedule generation.
//!
//! Schedules are derived per valuation and never stored: payment `i` of `n`
//! falls at `i / frequency` years, so the last payment lands exactly on the
//! maturity.

use log::debug;
use serde::Serialize;

use crate::error::AnalyticsResult;
use crate::instruments::FixedRateInstrument;

/// A single payment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Cashflow {
    /// Payment time in years.
    pub time: f64,
    /// Payment amount in currency units.
    pub amount: f64,
}

/// An ordered, uniformly spaced payment schedule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CashflowSchedule {
    cashflows: Vec<Cashflow>,
}

impl CashflowSchedule {
    /// Generates the schedule for an instrument.
    ///
    /// Every period pays `face * rate / frequency`; a bond adds `face` to the
    /// final payment, a swap fixed leg does not.
    pub fn generate(instrument: &FixedRateInstrument) -> AnalyticsResult<Self> {
        let n = instrument.period_count()?;
        let frequency = f64::from(instrument.frequency);
        let coupon = instrument.period_amount();

        let mut cashflows: Vec<Cashflow> = (1..=n)
            .map(|i| Cashflow {
                time: i as f64 / frequency,
                amount: coupon,
            })
            .collect();

        if instrument.kind.includes_principal() {
            if let Some(last) = cashflows.last_mut() {
                last.amount += instrument.face;
            }
        }

        debug!(
            "generated {n} cashflows for {} (coupon {coupon}, principal {})",
            instrument.kind,
            instrument.kind.includes_principal()
        );

        Ok(Self { cashflows })
    }

    /// Returns the cashflows in payment order.
    #[must_use]
    pub fn cashflows(&self) -> &[Cashflow] {
        &self.cashflows
    }

    /// Returns the payment times.
    #[must_use]
    pub fn times(&self) -> Vec<f64> {
        self.cashflows.iter().map(|cf| cf.time).collect()
    }

    /// Returns the payment amounts.
    #[must_use]
    pub fn amounts(&self) -> Vec<f64> {
        self.cashflows.iter().map(|cf| cf.amount).collect()
    }

    /// Returns the number of payments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cashflows.len()
    }

    /// Returns true if there are no payments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cashflows.is_empty()
    }
}

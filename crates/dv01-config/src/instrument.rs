//! Instrument configuration types.

use serde::{Deserialize, Serialize};

use dv01_analytics::{FixedRateInstrument, InstrumentKind};

use crate::error::{Validate, ValidationError};

fn default_face() -> f64 {
    1_000_000.0
}

fn default_rate() -> f64 {
    0.05
}

fn default_maturity() -> f64 {
    5.0
}

fn default_frequency() -> u32 {
    1
}

/// A named fixed-rate instrument to report DV01 for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentConfig {
    /// Label used in reports, e.g. "5Y Fixed Bond".
    pub name: String,

    /// Bond or swap fixed leg.
    pub kind: InstrumentKind,

    /// Face value or notional.
    #[serde(default = "default_face")]
    pub face: f64,

    /// Annual fixed rate as a decimal.
    #[serde(default = "default_rate")]
    pub rate: f64,

    /// Maturity in years.
    #[serde(default = "default_maturity")]
    pub maturity: f64,

    /// Payments per year.
    #[serde(default = "default_frequency")]
    pub frequency: u32,
}

impl InstrumentConfig {
    /// Creates an instrument configuration with the default terms.
    pub fn new(name: impl Into<String>, kind: InstrumentKind) -> Self {
        Self {
            name: name.into(),
            kind,
            face: default_face(),
            rate: default_rate(),
            maturity: default_maturity(),
            frequency: default_frequency(),
        }
    }

    /// The 5Y, 5% annual, 1mm fixed bond.
    #[must_use]
    pub fn five_year_bond() -> Self {
        Self::new("5Y Fixed Bond", InstrumentKind::Bond)
    }

    /// The 5Y, 5% annual, 1mm swap fixed leg.
    #[must_use]
    pub fn five_year_swap_leg() -> Self {
        Self::new("5Y IRS Fixed Leg", InstrumentKind::SwapFixedLeg)
    }

    /// Sets the face value.
    #[must_use]
    pub fn with_face(mut self, face: f64) -> Self {
        self.face = face;
        self
    }

    /// Sets the fixed rate.
    #[must_use]
    pub fn with_rate(mut self, rate: f64) -> Self {
        self.rate = rate;
        self
    }

    /// Sets maturity and payment frequency.
    #[must_use]
    pub fn with_schedule(mut self, maturity: f64, frequency: u32) -> Self {
        self.maturity = maturity;
        self.frequency = frequency;
        self
    }

    /// Converts to the analytics instrument.
    #[must_use]
    pub fn to_instrument(&self) -> FixedRateInstrument {
        FixedRateInstrument::new(self.kind, self.face, self.rate, self.maturity, self.frequency)
    }
}

impl Validate for InstrumentConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(ValidationError::new("name", "Name cannot be empty"));
        }

        if !self.face.is_finite() || self.face <= 0.0 {
            errors.push(ValidationError::with_rule(
                "face",
                "Face must be positive and finite",
                "positive_face",
            ));
        }

        if !self.rate.is_finite() {
            errors.push(ValidationError::with_rule(
                "rate",
                "Rate must be finite",
                "finite_rate",
            ));
        }

        if !self.maturity.is_finite() || self.maturity <= 0.0 {
            errors.push(ValidationError::with_rule(
                "maturity",
                "Maturity must be positive and finite",
                "positive_maturity",
            ));
        }

        if self.frequency == 0 {
            errors.push(ValidationError::with_rule(
                "frequency",
                "Frequency must be at least 1",
                "positive_frequency",
            ));
        } else if let Err(err) = self.to_instrument().period_count() {
            if self.maturity.is_finite() && self.maturity > 0.0 {
                errors.push(ValidationError::with_rule(
                    "maturity",
                    err.to_string(),
                    "whole_periods",
                ));
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_instruments() {
        let bond = InstrumentConfig::five_year_bond().to_instrument();
        assert_eq!(bond, FixedRateInstrument::bond(1_000_000.0, 0.05, 5.0, 1));

        let swap = InstrumentConfig::five_year_swap_leg().to_instrument();
        assert_eq!(
            swap,
            FixedRateInstrument::swap_fixed_leg(1_000_000.0, 0.05, 5.0, 1)
        );
    }

    #[test]
    fn test_validation() {
        assert!(InstrumentConfig::five_year_bond().is_valid());

        let bad = InstrumentConfig::new("", InstrumentKind::Bond)
            .with_face(0.0)
            .with_schedule(5.0, 0);
        let fields: Vec<_> = bad.validate().into_iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "face", "frequency"]);
    }

    #[test]
    fn test_fractional_periods_rejected() {
        let config = InstrumentConfig::five_year_bond().with_schedule(2.5, 1);
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule.as_deref(), Some("whole_periods"));
    }
}

//! # DV01 Analytics
//!
//! Cashflow valuation and rate sensitivity for fixed-rate instruments.
//!
//! ## Modules
//!
//! - [`instruments`]: Fixed-rate bond and swap fixed-leg parameters
//! - [`cashflows`]: Evenly spaced payment schedules
//! - [`pricing`]: Discounted cashflow present value against any term structure
//! - [`risk`]: Finite-difference DV01 under a parallel curve shift
//!
//! ## Example
//!
//! ```rust
//! use dv01_analytics::prelude::*;
//! use dv01_curves::CurveBuilder;
//!
//! let curve = CurveBuilder::new()
//!     .add_percent(0.5, 5.0)
//!     .add_percent(1.0, 5.1)
//!     .add_percent(2.0, 5.2)
//!     .add_percent(3.0, 5.3)
//!     .add_percent(5.0, 5.5)
//!     .add_percent(7.0, 5.6)
//!     .add_percent(10.0, 5.7)
//!     .build()
//!     .unwrap();
//!
//! let bond = FixedRateInstrument::bond(1_000_000.0, 0.05, 5.0, 1);
//! let swap = FixedRateInstrument::swap_fixed_leg(1_000_000.0, 0.05, 5.0, 1);
//!
//! let bond_dv01 = dv01(&bond, &curve).unwrap();
//! let swap_dv01 = dv01(&swap, &curve).unwrap();
//!
//! assert!(bond_dv01.as_f64() > swap_dv01.as_f64());
//! println!("5Y Fixed Bond DV01: {bond_dv01}");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

pub mod cashflows;
pub mod error;
pub mod instruments;
pub mod pricing;
pub mod risk;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cashflows::{Cashflow, CashflowSchedule};
    pub use crate::error::{AnalyticsError, AnalyticsResult};
    pub use crate::instruments::{FixedRateInstrument, InstrumentKind};
    pub use crate::pricing::{present_value, price};
    pub use crate::risk::{dv01, dv01_batch, Dv01, Dv01Calculator, Dv01Result};
}

pub use error::{AnalyticsError, AnalyticsResult};
pub use instruments::{FixedRateInstrument, InstrumentKind};
pub use pricing::price;
pub use risk::{dv01, Dv01, Dv01Calculator, Dv01Result};

//! Interest rate risk for fixed-rate instruments.
//!
//! - **DV01**: price change for a one basis point parallel shift of the
//!   zero curve, computed by full revaluation.

pub mod dv01;

pub use dv01::{dv01, dv01_batch, Dv01, Dv01Calculator, Dv01Result};

//! DV01 Configuration Layer
//!
//! Serde configuration for the DV01 calculator. Every setting has a built-in
//! default, so an empty (or absent) file reproduces the standard report: the
//! 6M..10Y mock Treasury curve, a 5Y 5% annual bond and swap fixed leg on
//! 1,000,000 notional, a 1bp parallel bump and a 100-point curve chart.
//!
//! # Features
//!
//! - **Curve Configuration**: `(tenor, yield %)` table and spline boundary
//! - **Instrument Configuration**: named fixed-rate bonds and swap legs
//! - **Risk Configuration**: DV01 bump size
//! - **Plot Configuration**: chart sample count and output path
//! - **Validation**: every problem in a file reported at once
//!
//! # Example
//!
//! ```toml
//! [curve]
//! boundary = "natural"
//! points = [[0.5, 5.0], [1.0, 5.1], [2.0, 5.2], [5.0, 5.5], [10.0, 5.7]]
//!
//! [risk]
//! bump_bps = 1.0
//!
//! [[instruments]]
//! name = "10Y Fixed Bond"
//! kind = "bond"
//! face = 5000000
//! rate = 0.045
//! maturity = 10.0
//! frequency = 2
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod app;
mod curve;
mod error;
mod instrument;
mod report;

// Re-export core types
pub use app::AppConfig;
pub use curve::{CurveConfig, DEFAULT_CURVE_POINTS};
pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use instrument::InstrumentConfig;
pub use report::{PlotConfig, RiskConfig};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::app::AppConfig;
    pub use crate::curve::CurveConfig;
    pub use crate::error::{ConfigError, ConfigResult, Validate};
    pub use crate::instrument::InstrumentConfig;
    pub use crate::report::{PlotConfig, RiskConfig};
}

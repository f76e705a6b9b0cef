//! # DV01 Curves
//!
//! Zero-coupon yield curve construction for the DV01 library.
//!
//! This crate provides:
//!
//! - **Curve Points**: Validated `(tenor, zero rate)` market inputs
//! - **Curve Builder**: Sorts and validates points, then builds a [`ZeroCurve`]
//! - **Term Structure Trait**: [`TermStructure`], the tenor → zero rate mapping
//!   every valuation is written against
//! - **Bumping**: [`ParallelBump`], a reusable parallel-shift transform for DV01
//!
//! ## Quick Start
//!
//! ```rust
//! use dv01_curves::prelude::*;
//!
//! let curve = CurveBuilder::new()
//!     .add_point(0.5, 0.050)
//!     .add_point(1.0, 0.051)
//!     .add_point(2.0, 0.052)
//!     .add_point(5.0, 0.055)
//!     .build()
//!     .unwrap();
//!
//! // Exact at the pillars
//! assert_eq!(curve.zero_rate(2.0).unwrap(), 0.052);
//!
//! // Shift the whole curve up by 1bp
//! let bumped = ParallelBump::one_bp_up().apply(&curve);
//! let shifted = bumped.zero_rate(2.0).unwrap();
//! assert!((shifted - 0.0521).abs() < 1e-12);
//! ```
//!
//! Input yields are used directly as continuously compounded zero rates. No
//! bootstrapping from instrument prices is performed.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_precision_loss)]

pub mod builder;
pub mod bumping;
pub mod error;
pub mod point;
pub mod term_structure;
pub mod zero;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::builder::CurveBuilder;
    pub use crate::bumping::{BumpedCurve, ParallelBump};
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::point::CurvePoint;
    pub use crate::term_structure::TermStructure;
    pub use crate::zero::{CurveSample, ZeroCurve};
    pub use dv01_math::interpolation::SplineBoundary;
}

pub use builder::CurveBuilder;
pub use bumping::{BumpedCurve, ParallelBump};
pub use error::{CurveError, CurveResult};
pub use point::CurvePoint;
pub use term_structure::TermStructure;
pub use zero::{CurveSample, ZeroCurve};

//! # DV01 Math
//!
//! Numerical utilities for the DV01 yield curve library.
//!
//! This crate provides:
//!
//! - **Interpolation**: Cubic spline interpolation with natural and
//!   not-a-knot boundary conditions, extrapolating with the boundary cubic
//!
//! ## Design Philosophy
//!
//! - **Exact at the knots**: Interpolants reproduce every input point
//! - **Numerical Stability**: Spline coefficients come from a direct linear solve
//! - **Fallible**: Non-finite inputs and outputs surface as [`MathError`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]
#![allow(clippy::cast_precision_loss)]

pub mod error;
pub mod interpolation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::interpolation::{CubicSpline, Interpolator, SplineBoundary};
}

pub use error::{MathError, MathResult};

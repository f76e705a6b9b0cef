//! Curve bumping for sensitivity analysis.
//!
//! - [`ParallelBump`]: Uniform shift of the entire curve (DV01)
//!
//! # Design
//!
//! Bumped curves are wrapper types that apply the bump on-the-fly during
//! rate access, so the base curve is never copied or refitted.
//!
//! # Example: DV01 Calculation
//!
//! ```rust,ignore
//! use dv01_curves::bumping::ParallelBump;
//!
//! let bump = ParallelBump::new(1.0);  // 1bp
//! let bumped = bump.apply(&curve);
//!
//! let dv01 = price(&bond, &curve)? - price(&bond, &bumped)?;
//! ```

mod parallel;

pub use parallel::{BumpedCurve, ParallelBump, BASIS_POINT};

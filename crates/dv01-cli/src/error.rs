//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Too few points to sample or draw a curve.
    #[error("Invalid point count: {0}. At least 2 points are required.")]
    InvalidPointCount(usize),

    /// Invalid bump size.
    #[error("Invalid bump: {0}bp. Must be finite and non-zero.")]
    InvalidBump(f64),

    /// Chart could not be written.
    #[error("Cannot write {path}: {source}")]
    Output {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;

//! CLI command implementations.

pub mod curve;
pub mod plot;
pub mod report;

// Re-export submodules for convenience
pub use curve::CurveArgs;
pub use plot::PlotArgs;
pub use report::ReportArgs;

use dv01_config::AppConfig;

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// Settings shared by every command.
#[derive(Debug)]
pub struct Context {
    /// Loaded configuration with command-line overrides applied.
    pub config: AppConfig,
    /// Output format.
    pub format: OutputFormat,
    /// Suppress headers and status lines.
    pub quiet: bool,
}

/// Validates a sample count for a table or chart.
pub fn validate_points(points: usize) -> CliResult<usize> {
    if points < 2 {
        return Err(CliError::InvalidPointCount(points));
    }
    Ok(points)
}

/// Validates a bump size in basis points.
pub fn validate_bump(bps: f64) -> CliResult<f64> {
    if !bps.is_finite() || bps == 0.0 {
        return Err(CliError::InvalidBump(bps));
    }
    Ok(bps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_points() {
        assert_eq!(validate_points(2).unwrap(), 2);
        assert!(matches!(
            validate_points(1),
            Err(CliError::InvalidPointCount(1))
        ));
    }

    #[test]
    fn test_validate_bump() {
        assert_eq!(validate_bump(-1.0).unwrap(), -1.0);
        assert!(validate_bump(0.0).is_err());
        assert!(validate_bump(f64::NAN).is_err());
    }
}

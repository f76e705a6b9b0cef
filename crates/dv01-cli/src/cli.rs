//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use dv01_curves::prelude::SplineBoundary;

use crate::commands::{CurveArgs, PlotArgs, ReportArgs};

/// DV01 - Yield curve interpolation and parallel-shift rate sensitivity
#[derive(Parser, Debug)]
#[command(name = "dv01")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// TOML configuration file (defaults to the built-in curve and instruments)
    #[arg(short, long, env = "DV01_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Spline boundary condition, overriding the configuration
    #[arg(short, long, value_enum, global = true)]
    pub boundary: Option<BoundaryChoice>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the DV01 of every configured instrument (default)
    Report(ReportArgs),

    /// Display the interpolated zero curve as a table
    Curve(CurveArgs),

    /// Render the zero curve as an SVG chart
    Plot(PlotArgs),
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Report(ReportArgs::default())
    }
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (plain lines)
    Minimal,
}

/// Spline boundary choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BoundaryChoice {
    /// Not-a-knot (default)
    #[value(name = "not-a-knot")]
    NotAKnot,
    /// Natural (zero curvature at the ends)
    #[value(name = "natural")]
    Natural,
}

impl From<BoundaryChoice> for SplineBoundary {
    fn from(choice: BoundaryChoice) -> Self {
        match choice {
            BoundaryChoice::NotAKnot => SplineBoundary::NotAKnot,
            BoundaryChoice::Natural => SplineBoundary::Natural,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["dv01"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.format, OutputFormat::Table);
        assert!(matches!(Commands::default(), Commands::Report(_)));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["dv01", "curve", "--points", "5", "-vv", "--format", "csv"])
                .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.format, OutputFormat::Csv);
        match cli.command {
            Some(Commands::Curve(args)) => assert_eq!(args.points, 5),
            other => panic!("expected curve command, got {other:?}"),
        }
    }

    #[test]
    fn test_boundary_choice() {
        let cli = Cli::try_parse_from(["dv01", "--boundary", "natural"]).unwrap();
        assert_eq!(
            cli.boundary.map(SplineBoundary::from),
            Some(SplineBoundary::Natural)
        );
    }
}

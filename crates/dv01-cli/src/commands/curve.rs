//! Curve command implementation.
//!
//! Samples the interpolated zero curve across its pillar range.

use anyhow::Result;
use clap::Args;
use tabled::Tabled;
use tracing::info;

use dv01_curves::prelude::CurveSample;

use crate::cli::OutputFormat;
use crate::commands::{validate_points, Context};
use crate::output::{print_csv, print_header, print_json, print_table};

/// Arguments for the curve command.
#[derive(Args, Debug)]
pub struct CurveArgs {
    /// Number of evenly spaced tenors to display
    #[arg(long, default_value = "20")]
    pub points: usize,
}

#[derive(Tabled)]
struct CurveRow {
    #[tabled(rename = "Tenor")]
    tenor: String,
    #[tabled(rename = "Zero Rate (%)")]
    zero_rate: String,
    #[tabled(rename = "Discount Factor")]
    discount_factor: String,
}

impl From<&CurveSample> for CurveRow {
    fn from(s: &CurveSample) -> Self {
        Self {
            tenor: format!("{:.2}Y", s.tenor),
            zero_rate: format!("{:.4}", s.zero_rate * 100.0),
            discount_factor: format!("{:.6}", s.discount_factor),
        }
    }
}

/// Samples the configured curve.
pub fn compute(ctx: &Context, args: &CurveArgs) -> Result<Vec<CurveSample>> {
    let points = validate_points(args.points)?;
    let curve = ctx.config.build_curve()?;
    let samples = curve.sample(points)?;
    info!(points, boundary = %curve.boundary(), "sampled zero curve");
    Ok(samples)
}

/// Execute the curve command.
pub fn execute(args: CurveArgs, ctx: &Context) -> Result<()> {
    let samples = compute(ctx, &args)?;

    match ctx.format {
        OutputFormat::Table => {
            if !ctx.quiet {
                print_header("Zero Curve");
                println!("Boundary: {}", ctx.config.curve.boundary);
                println!();
            }
            let rows: Vec<CurveRow> = samples.iter().map(CurveRow::from).collect();
            print_table(&rows);
        }
        OutputFormat::Json => print_json(&samples)?,
        OutputFormat::Csv => print_csv(&samples)?,
        OutputFormat::Minimal => {
            for s in &samples {
                println!("{:.4} {:.6}", s.tenor, s.zero_rate * 100.0);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dv01_config::AppConfig;

    #[test]
    fn test_samples_span_configured_curve() {
        let ctx = Context {
            config: AppConfig::default(),
            format: OutputFormat::Table,
            quiet: true,
        };
        let samples = compute(&ctx, &CurveArgs { points: 20 }).unwrap();

        assert_eq!(samples.len(), 20);
        assert_eq!(samples[0].tenor, 0.5);
        assert_eq!(samples[19].tenor, 10.0);

        let row = CurveRow::from(&samples[19]);
        assert_eq!(row.tenor, "10.00Y");
        assert_eq!(row.zero_rate, "5.7000");
    }

    #[test]
    fn test_too_few_points() {
        let ctx = Context {
            config: AppConfig::default(),
            format: OutputFormat::Table,
            quiet: true,
        };
        assert!(compute(&ctx, &CurveArgs { points: 1 }).is_err());
    }
}

//! Plot command implementation.
//!
//! Writes the zero curve as an SVG line chart.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tracing::{debug, info};

use crate::chart::render_svg;
use crate::cli::OutputFormat;
use crate::commands::{validate_points, Context};
use crate::error::CliError;
use crate::output::{print_json, print_success};

/// Arguments for the plot command.
#[derive(Args, Debug, Default)]
pub struct PlotArgs {
    /// SVG file to write, overriding the configuration
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of samples along the curve, overriding the configuration
    #[arg(short, long)]
    pub points: Option<usize>,
}

#[derive(Debug, Serialize)]
struct PlotSummary<'a> {
    output: &'a Path,
    samples: usize,
    min_tenor: f64,
    max_tenor: f64,
}

fn write_chart(path: &Path, svg: &str) -> Result<(), CliError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| CliError::Output {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, svg).map_err(|source| CliError::Output {
        path: path.to_path_buf(),
        source,
    })
}

/// Execute the plot command.
pub fn execute(args: PlotArgs, ctx: &Context) -> Result<()> {
    let points = validate_points(args.points.unwrap_or(ctx.config.plot.samples))?;
    let output = args
        .output
        .unwrap_or_else(|| ctx.config.plot.output.clone());

    let curve = ctx.config.build_curve()?;
    let samples = curve.sample(points)?;
    let svg = render_svg(&samples, curve.points())?;
    debug!(bytes = svg.len(), "rendered chart");

    write_chart(&output, &svg)?;
    info!(path = %output.display(), points, "wrote yield curve chart");

    let (min_tenor, max_tenor) = (
        samples.first().map_or(0.0, |s| s.tenor),
        samples.last().map_or(0.0, |s| s.tenor),
    );

    match ctx.format {
        OutputFormat::Json => print_json(&PlotSummary {
            output: &output,
            samples: points,
            min_tenor,
            max_tenor,
        })?,
        OutputFormat::Minimal | OutputFormat::Csv => println!("{}", output.display()),
        OutputFormat::Table => {
            if !ctx.quiet {
                print_success(&format!(
                    "Wrote {points}-point yield curve ({min_tenor}Y to {max_tenor}Y) to {}",
                    output.display()
                ));
            }
        }
    }

    Ok(())
}

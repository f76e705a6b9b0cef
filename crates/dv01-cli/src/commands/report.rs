//! Report command implementation.
//!
//! Values every configured instrument on the base and bumped curves and
//! prints its DV01.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tracing::info;

use dv01_analytics::{Dv01, Dv01Calculator, InstrumentKind};

use crate::cli::OutputFormat;
use crate::commands::{validate_bump, Context};
use crate::output::{format_amount, format_percent, print_csv, print_header, print_json, print_table};

/// Arguments for the report command.
#[derive(Args, Debug, Default)]
pub struct ReportArgs {
    /// Parallel bump in basis points, overriding the configuration
    #[arg(long)]
    pub bump_bps: Option<f64>,
}

/// One instrument's valuation, as written by JSON and CSV output.
#[derive(Debug, Serialize)]
pub struct ReportRow {
    pub instrument: String,
    pub kind: InstrumentKind,
    pub face: f64,
    pub rate: f64,
    pub maturity: f64,
    pub frequency: u32,
    pub base_pv: f64,
    pub bumped_pv: f64,
    pub dv01: Dv01,
}

#[derive(Tabled)]
struct ReportTableRow {
    #[tabled(rename = "Instrument")]
    instrument: String,
    #[tabled(rename = "Rate")]
    rate: String,
    #[tabled(rename = "Maturity")]
    maturity: String,
    #[tabled(rename = "Freq")]
    frequency: u32,
    #[tabled(rename = "Base PV")]
    base_pv: String,
    #[tabled(rename = "Bumped PV")]
    bumped_pv: String,
    #[tabled(rename = "DV01")]
    dv01: String,
}

impl From<&ReportRow> for ReportTableRow {
    fn from(row: &ReportRow) -> Self {
        Self {
            instrument: row.instrument.clone(),
            rate: format_percent(row.rate, 2),
            maturity: format!("{}Y", row.maturity),
            frequency: row.frequency,
            base_pv: format_amount(row.base_pv),
            bumped_pv: format_amount(row.bumped_pv),
            dv01: row.dv01.to_string(),
        }
    }
}

/// Values every configured instrument.
pub fn compute(ctx: &Context, args: &ReportArgs) -> Result<Vec<ReportRow>> {
    let calculator = match args.bump_bps {
        Some(bps) => Dv01Calculator::with_bump_bps(validate_bump(bps)?),
        None => ctx.config.risk.calculator(),
    };

    let curve = ctx.config.build_curve()?;
    info!(
        pillars = curve.points().len(),
        boundary = %curve.boundary(),
        bump_bps = calculator.bump().shift_bps(),
        "built zero curve"
    );

    let named = ctx.config.instruments();
    let instruments: Vec<_> = named.iter().map(|(_, inst)| *inst).collect();
    let results = calculator.calculate_batch(&instruments, &curve)?;

    Ok(named
        .into_iter()
        .zip(results)
        .map(|((name, inst), result)| ReportRow {
            instrument: name.to_string(),
            kind: inst.kind,
            face: inst.face,
            rate: inst.rate,
            maturity: inst.maturity,
            frequency: inst.frequency,
            base_pv: result.base_pv,
            bumped_pv: result.bumped_pv,
            dv01: result.dv01,
        })
        .collect())
}

fn print_summary(rows: &[ReportRow]) {
    println!("DV01 Results:");
    for row in rows {
        println!("{} DV01: {}", row.instrument, row.dv01);
    }
}

/// Execute the report command.
pub fn execute(args: ReportArgs, ctx: &Context) -> Result<()> {
    let rows = compute(ctx, &args)?;

    match ctx.format {
        OutputFormat::Table => {
            if !ctx.quiet {
                print_header("Valuation");
                let table: Vec<ReportTableRow> = rows.iter().map(ReportTableRow::from).collect();
                print_table(&table);
                println!();
            }
            print_summary(&rows);
        }
        OutputFormat::Json => print_json(&rows)?,
        OutputFormat::Csv => print_csv(&rows)?,
        OutputFormat::Minimal => print_summary(&rows),
    }

    Ok(())
}

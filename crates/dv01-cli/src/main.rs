//! DV01 CLI - yield curve interpolation and parallel-shift rate sensitivity.
//!
//! # Usage
//!
//! ```bash
//! # DV01 of the configured instruments (the default command)
//! dv01
//! dv01 report --format json
//!
//! # Sampled zero curve
//! dv01 curve --points 10
//!
//! # SVG chart of the curve
//! dv01 plot --output yield_curve.svg
//!
//! # Custom curve and instruments, natural spline, debug logging
//! dv01 --config rates.toml --boundary natural -vv
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod chart;
mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};
use commands::Context;
use dv01_config::AppConfig;

/// Installs the log subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    if let Some(boundary) = cli.boundary {
        config.curve.boundary = boundary.into();
    }

    let ctx = Context {
        config,
        format: cli.format,
        quiet: cli.quiet,
    };

    // Execute command
    match cli.command.unwrap_or_default() {
        Commands::Report(args) => commands::report::execute(args, &ctx)?,
        Commands::Curve(args) => commands::curve::execute(args, &ctx)?,
        Commands::Plot(args) => commands::plot::execute(args, &ctx)?,
    }

    Ok(())
}

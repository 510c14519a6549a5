//! Curve command: bond price across a grid of yields.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

use bondrisk_analytics::pricing::{price_curve, yield_grid};
use bondrisk_config::CurveConfig;
use bondrisk_core::Yield;

use crate::cli::OutputFormat;
use crate::commands::{BondArgs, Context};
use crate::output::{format_percent, format_value, print_output, BarChart};

/// Arguments for the curve command.
#[derive(Args, Debug)]
pub struct CurveArgs {
    /// First yield of the grid
    #[arg(long, allow_hyphen_values = true)]
    pub start: Option<f64>,

    /// Spacing between yields
    #[arg(long, allow_hyphen_values = true)]
    pub step: Option<f64>,

    /// Number of yields
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..=CurveConfig::MAX_POINTS as u64))]
    pub count: Option<u64>,

    #[command(flatten)]
    pub bond: BondArgs,
}

#[derive(Debug, Serialize, Tabled)]
struct CurveRow {
    #[tabled(rename = "Yield")]
    #[serde(rename = "yield")]
    yield_value: f64,
    #[tabled(rename = "Price")]
    price: f64,
}

/// Execute the curve command.
pub fn execute(args: CurveArgs, ctx: &Context) -> Result<()> {
    let grid = &ctx.config.curve;
    let yields = yield_grid(
        args.start.unwrap_or(grid.start),
        args.step.unwrap_or(grid.step),
        args.count.map_or(grid.count, |c| c as usize),
    );
    for &y in &yields {
        Yield::new(y)?;
    }
    let bond = args.bond.resolve(&ctx.config)?;
    debug!(points = yields.len(), "pricing yield curve");

    let points = price_curve(&bond, &yields)?;

    match ctx.format {
        OutputFormat::Table => {
            let bars: Vec<(String, f64)> = points
                .iter()
                .map(|p| (format_percent(p.yield_value, 2), p.price))
                .collect();
            let chart = BarChart {
                title: "Bond Yield to Price Relationship",
                x_label: "Yield",
                y_label: "Price",
                width: ctx.config.output.bar_width,
                precision: ctx.config.output.price_precision,
            };
            print!("{}", chart.render(&bars));
            if !ctx.quiet {
                println!(
                    "\n{}% coupon, {} periods, principal {}",
                    format_value(bond.coupon() * 100.0, 2),
                    bond.maturity(),
                    format_value(bond.principal(), ctx.config.output.price_precision)
                );
            }
        }
        _ => {
            let rows: Vec<CurveRow> = points
                .iter()
                .map(|p| CurveRow {
                    yield_value: p.yield_value,
                    price: p.price,
                })
                .collect();
            print_output(&rows, ctx.format)?;
        }
    }

    Ok(())
}

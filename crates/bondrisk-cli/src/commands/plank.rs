//! Plank command: per-period present values drawn as a bar chart.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

use bondrisk_analytics::risk::{duration, plank_weights};

use crate::cli::OutputFormat;
use crate::commands::{Context, ScheduleArgs};
use crate::output::{format_value, print_output, BarChart};

/// Arguments for the plank command.
#[derive(Args, Debug)]
pub struct PlankArgs {
    /// Yield per period (0.05 = 5%). Defaults to the configured yield.
    #[arg(long = "yield", allow_hyphen_values = true)]
    pub yield_value: Option<f64>,

    #[command(flatten)]
    pub schedule: ScheduleArgs,
}

#[derive(Debug, Serialize, Tabled)]
struct PlankRow {
    #[tabled(rename = "Timing")]
    timing: usize,
    #[tabled(rename = "Cash Flow")]
    cash_flow: f64,
    #[tabled(rename = "PV")]
    present_value: f64,
}

/// Execute the plank command.
pub fn execute(args: PlankArgs, ctx: &Context) -> Result<()> {
    let yield_value = ctx.resolve_yield(args.yield_value)?;
    let (label, flows) = args.schedule.resolve(&ctx.config)?;
    debug!(schedule = %label, yield_value, "computing plank weights");

    let weights = plank_weights(&flows, yield_value)?;

    match ctx.format {
        OutputFormat::Table => {
            let precision = ctx.config.output.price_precision;
            let bars: Vec<(String, f64)> = weights
                .iter()
                .map(|w| (w.timing.to_string(), w.present_value))
                .collect();
            let chart = BarChart {
                title: "Weights on a Plank",
                x_label: "Timing of Cashflows",
                y_label: "PV of Cashflows",
                width: ctx.config.output.bar_width,
                precision: precision.max(4),
            };
            print!("{}", chart.render(&bars));

            // An all-zero schedule has weights but no balance point.
            if !ctx.quiet {
                if let Ok(d) = duration(&flows, yield_value) {
                    println!(
                        "\n{label}: duration {}",
                        format_value(d, ctx.config.output.duration_precision)
                    );
                }
            }
        }
        _ => {
            let rows: Vec<PlankRow> = weights
                .iter()
                .zip(&flows)
                .map(|(w, cf)| PlankRow {
                    timing: w.timing,
                    cash_flow: *cf,
                    present_value: w.present_value,
                })
                .collect();
            print_output(&rows, ctx.format)?;
        }
    }

    Ok(())
}

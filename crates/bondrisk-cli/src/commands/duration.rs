//! Duration command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tracing::debug;

use bondrisk_analytics::risk::{
    duration, duration_with_convention, estimate_price_change, DurationConvention,
};

use crate::cli::OutputFormat;
use crate::commands::{Context, ScheduleArgs};
use crate::output::{format_value, print_header, print_output, print_single, KeyValue};

/// Yield move used for the first-order price estimate.
const YIELD_SHOCK: f64 = 0.01;

/// Arguments for the duration command.
#[derive(Args, Debug)]
pub struct DurationArgs {
    /// Yield per period (0.05 = 5%). Defaults to the configured yield.
    #[arg(long = "yield", allow_hyphen_values = true)]
    pub yield_value: Option<f64>,

    #[command(flatten)]
    pub schedule: ScheduleArgs,
}

/// Duration result.
#[derive(Debug, Serialize)]
pub struct DurationReport {
    pub schedule: String,
    pub periods: usize,
    #[serde(rename = "yield")]
    pub yield_value: f64,
    pub duration: f64,
    pub period_aligned_duration: f64,
    pub price_change_per_1pct: f64,
}

/// Execute the duration command.
pub fn execute(args: DurationArgs, ctx: &Context) -> Result<()> {
    let yield_value = ctx.resolve_yield(args.yield_value)?;
    let (label, flows) = args.schedule.resolve(&ctx.config)?;
    debug!(schedule = %label, periods = flows.len(), yield_value, "computing duration");

    let d = duration(&flows, yield_value)?;
    let aligned = duration_with_convention(&flows, yield_value, DurationConvention::PeriodAligned)?;
    let report = DurationReport {
        schedule: label,
        periods: flows.len(),
        yield_value,
        duration: d,
        period_aligned_duration: aligned,
        price_change_per_1pct: estimate_price_change(d, YIELD_SHOCK),
    };

    let precision = ctx.config.output.duration_precision;
    match ctx.format {
        OutputFormat::Table => {
            let rows = vec![
                KeyValue::new("Schedule", report.schedule.clone()),
                KeyValue::new("Periods", report.periods.to_string()),
                KeyValue::from_percent("Yield", report.yield_value),
                KeyValue::from_value("Duration", report.duration, precision),
                KeyValue::from_value(
                    "Duration (period-aligned)",
                    report.period_aligned_duration,
                    precision,
                ),
                KeyValue::from_percent("Price change, +1% yield", report.price_change_per_1pct),
            ];
            if !ctx.quiet {
                print_header("Duration");
            }
            print_output(&rows, ctx.format)?;
        }
        OutputFormat::Json | OutputFormat::Csv => print_single(&report, ctx.format)?,
        OutputFormat::Minimal => println!("{}", format_value(d, precision)),
    }

    Ok(())
}

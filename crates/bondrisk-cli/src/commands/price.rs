//! Price command implementation.
//!
//! Prices a fixed-coupon bond from its yield.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tracing::debug;

use bondrisk_analytics::pricing::price_from_yield;

use crate::cli::OutputFormat;
use crate::commands::{BondArgs, Context};
use crate::output::{print_header, print_output, print_single, format_value, KeyValue};

/// Arguments for the price command.
#[derive(Args, Debug)]
pub struct PriceArgs {
    /// Yield per period (0.05 = 5%). Defaults to the configured yield.
    #[arg(long = "yield", allow_hyphen_values = true)]
    pub yield_value: Option<f64>,

    #[command(flatten)]
    pub bond: BondArgs,
}

/// Price calculation result.
#[derive(Debug, Serialize)]
pub struct PriceReport {
    pub coupon: f64,
    pub maturity: u32,
    pub principal: f64,
    #[serde(rename = "yield")]
    pub yield_value: f64,
    pub price: f64,
}

/// Execute the price command.
pub fn execute(args: PriceArgs, ctx: &Context) -> Result<()> {
    let yield_value = ctx.resolve_yield(args.yield_value)?;
    let bond = args.bond.resolve(&ctx.config)?;
    debug!(
        coupon = bond.coupon(),
        maturity = bond.maturity(),
        principal = bond.principal(),
        yield_value,
        "pricing bond"
    );

    let price = price_from_yield(yield_value, bond.coupon(), bond.maturity(), bond.principal())?;
    let report = PriceReport {
        coupon: bond.coupon(),
        maturity: bond.maturity(),
        principal: bond.principal(),
        yield_value,
        price,
    };

    let precision = ctx.config.output.price_precision;
    match ctx.format {
        OutputFormat::Table => {
            let rows = vec![
                KeyValue::from_percent("Coupon", report.coupon),
                KeyValue::new("Maturity", format!("{} periods", report.maturity)),
                KeyValue::from_value("Principal", report.principal, precision),
                KeyValue::from_percent("Yield", report.yield_value),
                KeyValue::from_value("Price", report.price, precision),
            ];
            if !ctx.quiet {
                print_header("Bond Pricing");
            }
            print_output(&rows, ctx.format)?;
        }
        OutputFormat::Json | OutputFormat::Csv => print_single(&report, ctx.format)?,
        OutputFormat::Minimal => println!("{}", format_value(price, precision)),
    }

    Ok(())
}

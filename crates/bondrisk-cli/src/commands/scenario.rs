//! Scenario command: loss from selling a bond early after yields move.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tracing::{debug, info};

use bondrisk_analytics::scenario::{SaleOutcome, SaleScenario};

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::output::{format_percent, format_value, print_header, print_output, print_single, KeyValue};

/// Arguments for the scenario command. Omitted terms come from `[scenario]`.
#[derive(Args, Debug)]
pub struct ScenarioArgs {
    /// Coupon rate per period
    #[arg(long, allow_hyphen_values = true)]
    pub coupon: Option<f64>,

    /// Principal (face) amount
    #[arg(long, allow_hyphen_values = true)]
    pub principal: Option<f64>,

    /// Periods remaining when bought
    #[arg(long)]
    pub maturity_at_purchase: Option<u32>,

    /// Periods remaining when sold
    #[arg(long)]
    pub maturity_at_sale: Option<u32>,

    /// Yield when bought
    #[arg(long, allow_hyphen_values = true)]
    pub yield_at_purchase: Option<f64>,

    /// Yield when sold
    #[arg(long, allow_hyphen_values = true)]
    pub yield_at_sale: Option<f64>,
}

impl ScenarioArgs {
    fn merge(&self, base: SaleScenario) -> SaleScenario {
        SaleScenario {
            coupon: self.coupon.unwrap_or(base.coupon),
            principal: self.principal.unwrap_or(base.principal),
            maturity_at_purchase: self.maturity_at_purchase.unwrap_or(base.maturity_at_purchase),
            maturity_at_sale: self.maturity_at_sale.unwrap_or(base.maturity_at_sale),
            yield_at_purchase: self.yield_at_purchase.unwrap_or(base.yield_at_purchase),
            yield_at_sale: self.yield_at_sale.unwrap_or(base.yield_at_sale),
        }
    }
}

/// Flat record so that CSV output gets one column per field.
#[derive(Debug, Serialize)]
struct ScenarioReport {
    coupon: f64,
    principal: f64,
    maturity_at_purchase: u32,
    maturity_at_sale: u32,
    yield_at_purchase: f64,
    yield_at_sale: f64,
    purchase_price: f64,
    sale_price: f64,
    loss: f64,
    loss_fraction: f64,
    purchase_duration: f64,
    estimated_loss_fraction: f64,
}

impl ScenarioReport {
    fn new(scenario: &SaleScenario, outcome: &SaleOutcome) -> Self {
        Self {
            coupon: scenario.coupon,
            principal: scenario.principal,
            maturity_at_purchase: scenario.maturity_at_purchase,
            maturity_at_sale: scenario.maturity_at_sale,
            yield_at_purchase: scenario.yield_at_purchase,
            yield_at_sale: scenario.yield_at_sale,
            purchase_price: outcome.purchase_price,
            sale_price: outcome.sale_price,
            loss: outcome.loss,
            loss_fraction: outcome.loss_fraction,
            purchase_duration: outcome.purchase_duration,
            estimated_loss_fraction: outcome.estimated_loss_fraction,
        }
    }
}

/// Execute the scenario command.
pub fn execute(args: ScenarioArgs, ctx: &Context) -> Result<()> {
    let scenario = args.merge(ctx.config.scenario);
    debug!(?scenario, "evaluating sale scenario");

    let outcome = scenario.evaluate()?;
    info!(
        loss = outcome.loss,
        loss_fraction = outcome.loss_fraction,
        "sale scenario evaluated"
    );

    let precision = ctx.config.output.price_precision;
    match ctx.format {
        OutputFormat::Table => {
            let rows = vec![
                KeyValue::from_value("Purchase price", outcome.purchase_price, precision),
                KeyValue::from_value("Sale price", outcome.sale_price, precision),
                KeyValue::from_value("Loss", outcome.loss, precision),
                KeyValue::new("Loss %", format_percent(outcome.loss_fraction, 2)),
                KeyValue::from_value(
                    "Duration at purchase",
                    outcome.purchase_duration,
                    ctx.config.output.duration_precision,
                ),
                KeyValue::new(
                    "Estimated loss % (duration)",
                    format_percent(outcome.estimated_loss_fraction, 2),
                ),
            ];
            if !ctx.quiet {
                print_header("Early Sale");
                println!(
                    "{}% coupon bought with {} periods left at {}, sold with {} left at {}",
                    format_value(scenario.coupon * 100.0, 2),
                    scenario.maturity_at_purchase,
                    format_percent(scenario.yield_at_purchase, 2),
                    scenario.maturity_at_sale,
                    format_percent(scenario.yield_at_sale, 2),
                );
            }
            print_output(&rows, ctx.format)?;
        }
        OutputFormat::Json | OutputFormat::Csv => {
            print_single(&ScenarioReport::new(&scenario, &outcome), ctx.format)?;
        }
        OutputFormat::Minimal => println!("{}", format_value(outcome.loss, precision)),
    }

    Ok(())
}

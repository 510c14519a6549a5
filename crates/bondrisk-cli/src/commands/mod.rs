//! CLI command implementations.

pub mod curve;
pub mod duration;
pub mod plank;
pub mod price;
pub mod scenario;

pub use curve::CurveArgs;
pub use duration::DurationArgs;
pub use plank::PlankArgs;
pub use price::PriceArgs;
pub use scenario::ScenarioArgs;

use std::path::Path;

use clap::Args;

use bondrisk_config::AnalysisConfig;
use bondrisk_core::{BondParameters, BondRiskError, CashFlowSchedule, Yield};

use crate::cli::OutputFormat;
use crate::error::CliResult;

/// Settings shared by every command.
pub struct Context {
    /// Output format.
    pub format: OutputFormat,
    /// Skip headers and charts.
    pub quiet: bool,
    /// Loaded (or default) configuration.
    pub config: AnalysisConfig,
}

impl Context {
    /// Loads the configuration at `config_path`, or the defaults without one.
    pub fn load(format: OutputFormat, quiet: bool, config_path: Option<&Path>) -> CliResult<Self> {
        Ok(Self {
            format,
            quiet,
            config: AnalysisConfig::load_or_default(config_path)?,
        })
    }

    /// The given yield, or the configured one, validated.
    pub fn resolve_yield(&self, yield_value: Option<f64>) -> CliResult<f64> {
        let y = Yield::new(yield_value.unwrap_or(self.config.bond.yield_value))?;
        Ok(y.value())
    }
}

/// Longest schedule the per-period commands will build.
pub const MAX_SCHEDULE_PERIODS: u32 = 1_000_000;

fn check_periods(periods: u32) -> CliResult<()> {
    if periods > MAX_SCHEDULE_PERIODS {
        return Err(BondRiskError::invalid_schedule(format!(
            "{periods} periods exceeds the limit of {MAX_SCHEDULE_PERIODS}"
        ))
        .into());
    }
    Ok(())
}

/// Bond terms; anything omitted comes from the `[bond]` config section.
#[derive(Args, Debug, Clone, Default)]
pub struct BondArgs {
    /// Coupon rate per period (0.05 = 5%)
    #[arg(long, allow_hyphen_values = true)]
    pub coupon: Option<f64>,

    /// Number of periods to maturity
    #[arg(long)]
    pub maturity: Option<u32>,

    /// Principal (face) amount
    #[arg(long, allow_hyphen_values = true)]
    pub principal: Option<f64>,
}

impl BondArgs {
    /// Merges with the configured bond and validates.
    pub fn resolve(&self, config: &AnalysisConfig) -> CliResult<BondParameters> {
        let bond = BondParameters::new(
            self.coupon.unwrap_or(config.bond.coupon),
            self.maturity.unwrap_or(config.bond.maturity),
            self.principal.unwrap_or(config.bond.principal),
        )?;
        Ok(bond)
    }
}

/// A cash-flow schedule: explicit payments, a level schedule, or a bond.
#[derive(Args, Debug, Clone, Default)]
pub struct ScheduleArgs {
    /// Comma-separated payments, the first due one period from now
    #[arg(
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        conflicts_with_all = ["level", "coupon", "maturity", "principal"]
    )]
    pub cash_flows: Option<Vec<f64>>,

    /// Constant payment per period (use with --periods)
    #[arg(
        long,
        requires = "periods",
        allow_hyphen_values = true,
        conflicts_with_all = ["coupon", "maturity", "principal"]
    )]
    pub level: Option<f64>,

    /// Number of periods for --level
    #[arg(long, requires = "level")]
    pub periods: Option<u32>,

    #[command(flatten)]
    pub bond: BondArgs,
}

impl ScheduleArgs {
    /// Builds the schedule along with a short description of it.
    ///
    /// Explicit payments are passed through unvalidated so that the analytics
    /// report empty or zero schedules themselves.
    pub fn resolve(&self, config: &AnalysisConfig) -> CliResult<(String, Vec<f64>)> {
        if let Some(flows) = &self.cash_flows {
            return Ok((format!("{} cash flows", flows.len()), flows.clone()));
        }
        if let (Some(payment), Some(periods)) = (self.level, self.periods) {
            check_periods(periods)?;
            let schedule = CashFlowSchedule::level(payment, periods)?;
            return Ok((
                format!("level {payment} x {periods}"),
                schedule.into_inner(),
            ));
        }
        let bond = self.bond.resolve(config)?;
        check_periods(bond.maturity())?;
        Ok((
            format!(
                "bond {}% x {} on {}",
                bond.coupon() * 100.0,
                bond.maturity(),
                bond.principal()
            ),
            bond.cash_flows().into_inner(),
        ))
    }
}

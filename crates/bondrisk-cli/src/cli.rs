//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::commands::{CurveArgs, DurationArgs, PlankArgs, PriceArgs, ScenarioArgs};

/// bondrisk - bond pricing and duration analytics
///
/// Rates are per-period decimals: 0.05 means 5% per period.
#[derive(Parser)]
#[command(name = "bondrisk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Suppress headers and charts
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log verbosity (-v debug, -vv trace); overrides RUST_LOG
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Analysis configuration file (.toml or .json)
    #[arg(short, long, global = true, env = "BONDRISK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Price a fixed-coupon bond from its yield
    Price(PriceArgs),

    /// Duration of a bond or an arbitrary cash-flow schedule
    Duration(DurationArgs),

    /// Chart the present value of each period's cash flow
    Plank(PlankArgs),

    /// Price a bond across a grid of yields
    Curve(CurveArgs),

    /// Loss on a bond sold early after yields move
    Scenario(ScenarioArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}

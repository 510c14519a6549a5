//! bondrisk - command-line bond pricing and duration analytics.
//!
//! # Usage
//!
//! ```bash
//! # Price a 2% bond with 28 periods left at a 5% yield
//! bondrisk price --yield 0.05 --coupon 0.02 --maturity 28
//!
//! # Duration of an explicit schedule
//! bondrisk duration --yield 0.05 --level 0.08 --periods 30
//!
//! # Where the plank balances
//! bondrisk plank --yield 0.05 --cash-flows 0.04,0.04,1.04
//!
//! # Price across yields 1%..10%
//! bondrisk curve --coupon 0.05 --maturity 30
//!
//! # Loss on an early sale
//! bondrisk scenario --yield-at-sale 0.05
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};
use commands::Context;

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = Context::load(cli.format, cli.quiet, cli.config.as_deref())?;
    debug!(config = ?cli.config, "configuration loaded");

    match cli.command {
        Commands::Price(args) => commands::price::execute(args, &ctx)?,
        Commands::Duration(args) => commands::duration::execute(args, &ctx)?,
        Commands::Plank(args) => commands::plank::execute(args, &ctx)?,
        Commands::Curve(args) => commands::curve::execute(args, &ctx)?,
        Commands::Scenario(args) => commands::scenario::execute(args, &ctx)?,
    }

    Ok(())
}

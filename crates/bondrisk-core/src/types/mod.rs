//! Value types shared by the pricer and the duration calculator.

mod bond;
mod schedule;
mod yield_rate;

pub use bond::BondParameters;
pub use schedule::{validate_payments, CashFlowSchedule};
pub use yield_rate::Yield;

//! # bondrisk Analytics
//!
//! Pricing and interest-rate risk for fixed-coupon bonds and arbitrary
//! cash-flow schedules:
//!
//! - **Pricing**: [`price_from_yield`], yield/price curves
//! - **Risk**: [`duration`], plank weights, first-order price change
//! - **Scenario**: loss on a bond sold early after yields rise
//!
//! Every function is pure. Inputs are validated before any arithmetic and
//! failures come back as [`BondRiskError`](bondrisk_core::BondRiskError).
//!
//! ## Usage
//!
//! ```rust
//! use bondrisk_analytics::prelude::*;
//!
//! let price = price_from_yield(0.05, 0.02, 28, 100.0).unwrap();
//! assert!((price - 55.3).abs() < 0.1);
//!
//! let bond = BondParameters::new(0.04, 30, 1.0).unwrap();
//! let d = duration(bond.cash_flows().payments(), 0.05).unwrap();
//! assert!(d > 15.0 && d < 15.2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::float_cmp)]

pub mod pricing;
pub mod risk;
pub mod scenario;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use bondrisk_core::prelude::*;

    pub use crate::pricing::{
        present_value, price_bond, price_curve, price_from_yield, yield_grid, PricePoint,
    };
    pub use crate::risk::{
        bond_duration, duration, duration_with_convention, estimate_price_change, plank_weights,
        schedule_duration, DurationConvention, PlankWeight,
    };
    pub use crate::scenario::{SaleOutcome, SaleScenario};
}

pub use pricing::price_from_yield;
pub use risk::duration;

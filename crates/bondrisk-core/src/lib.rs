//! # bondrisk Core
//!
//! Core types and the error taxonomy for the bondrisk analytics library.
//!
//! - **Types**: [`Yield`], [`CashFlowSchedule`], [`BondParameters`]
//! - **Errors**: [`BondRiskError`] covering invalid yields, schedules and
//!   bond parameters
//!
//! All types are immutable values validated at construction.
//!
//! ## Example
//!
//! ```rust
//! use bondrisk_core::prelude::*;
//!
//! let bond = BondParameters::new(0.05, 30, 100.0).unwrap();
//! let y = Yield::new(0.05).unwrap();
//! assert_eq!(bond.cash_flows().len(), 30);
//! assert!(y.growth_factor() > 1.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{BondRiskError, BondRiskResult};
    pub use crate::types::{BondParameters, CashFlowSchedule, Yield};
}

pub use error::{BondRiskError, BondRiskResult};
pub use types::{BondParameters, CashFlowSchedule, Yield};

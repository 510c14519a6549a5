//! bondrisk Configuration Layer
//!
//! Loads the analysis configuration used by the `bondrisk` CLI from TOML or
//! JSON. Every section falls back to defaults, so a file only has to name
//! what it changes.
//!
//! # Example
//!
//! ```toml
//! [bond]
//! coupon = 0.04
//! maturity = 30
//! principal = 1.0
//! yield = 0.05
//!
//! [curve]
//! start = 0.01
//! step = 0.01
//! count = 10
//!
//! [scenario]
//! coupon = 0.02
//! maturity_at_purchase = 30
//! maturity_at_sale = 28
//! yield_at_purchase = 0.02
//! yield_at_sale = 0.05
//!
//! [output]
//! price_precision = 2
//! bar_width = 50
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod analysis;
mod error;

pub use analysis::{AnalysisConfig, BondConfig, CurveConfig, OutputConfig};
pub use error::{ConfigError, ConfigResult, Validate, ValidationError};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::analysis::AnalysisConfig;
    pub use crate::error::{ConfigError, ConfigResult, Validate};
}

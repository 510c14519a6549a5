//! Interest-rate risk of cash-flow schedules.
//!
//! - **Duration**: PV-weighted average timing, see [`duration()`]
//! - **Plank weights**: per-period PVs behind the duration, see [`plank_weights()`]
//! - **Price change estimate**: first-order move for a yield shift

pub mod duration;
pub mod plank;

pub use duration::{
    bond_duration, duration, duration_with_convention, estimate_price_change, schedule_duration,
    DurationConvention,
};
pub use plank::{plank_weights, PlankWeight};

//! Bond pricing from a flat per-period yield.
//!
//! ## Formula
//!
//! ```text
//! P = Σ_{i=1}^{T-1} B·C / (1+y)^i  +  (B·C + B) / (1+y)^T
//! ```
//!
//! where B = principal, C = coupon, T = maturity, y = yield.
//!
//! Prices are plain `f64` with no rounding; callers round for display.

mod curve;

pub use curve::{price_curve, yield_grid, PricePoint};

use bondrisk_core::{BondParameters, BondRiskError, BondRiskResult, CashFlowSchedule, Yield};

/// Prices a fixed-coupon bond at the given yield.
///
/// # Arguments
///
/// * `yield_` - Per-period yield (0.05 = 5%), must be greater than -1
/// * `coupon` - Coupon rate per period, non-negative
/// * `maturity` - Number of periods, at least 1
/// * `principal` - Face amount, non-negative
///
/// # Errors
///
/// `InvalidYield` or `InvalidBondParameters`; both are checked before any
/// discounting happens. `Overflow` if the price is not a finite `f64`.
///
/// # Example
///
/// ```rust
/// use bondrisk_analytics::pricing::price_from_yield;
///
/// let par = price_from_yield(0.05, 0.05, 30, 100.0).unwrap();
/// assert!((par - 100.0).abs() < 1e-9);
/// ```
pub fn price_from_yield(
    yield_: f64,
    coupon: f64,
    maturity: u32,
    principal: f64,
) -> BondRiskResult<f64> {
    let y = Yield::new(yield_)?;
    let bond = BondParameters::new(coupon, maturity, principal)?;
    price_bond(&bond, y)
}

/// Prices already-validated bond parameters.
///
/// Sums period by period without building the schedule, so memory use does
/// not grow with maturity.
pub fn price_bond(bond: &BondParameters, yield_: Yield) -> BondRiskResult<f64> {
    BondRiskError::check_finite(discounted_sum(bond.payments(), yield_), "price")
}

/// Discounts a schedule whose first payment falls one period from now.
pub fn present_value(schedule: &CashFlowSchedule, yield_: Yield) -> BondRiskResult<f64> {
    BondRiskError::check_finite(
        discounted_sum(schedule.iter().copied(), yield_),
        "present value",
    )
}

fn discounted_sum(payments: impl Iterator<Item = f64>, yield_: Yield) -> f64 {
    payments
        .enumerate()
        .map(|(i, cf)| cf * yield_.discount_factor(i + 1))
        .sum()
}

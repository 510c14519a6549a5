//! Duration of an arbitrary cash-flow schedule.
//!
//! ## Formula
//!
//! ```text
//! pv_i = CF_i / (1+y)^i                 (i = 0-based position)
//! D    = (Σ i·pv_i / Σ pv_i) / (1+y)
//! ```
//!
//! The first payment is discounted at exponent 0 even though it falls due one
//! period from now, so every weight sits one period early. Dividing by
//! `(1+y)` only partly corrects for this. The numbers this produces are the
//! reference ones and [`duration`] keeps them.
//!
//! [`DurationConvention::PeriodAligned`] discounts position `i` at exponent
//! `i + 1`, which gives `-1/P · dP/dy` exactly. The two differ by `1/(1+y)`.

use serde::{Deserialize, Serialize};

use bondrisk_core::types::validate_payments;
use bondrisk_core::{BondParameters, BondRiskError, BondRiskResult, CashFlowSchedule, Yield};

/// Exponent convention used to discount schedule positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DurationConvention {
    /// Position `i` discounted at `(1+y)^i` and weighted by `i`.
    #[default]
    PositionIndexed,
    /// Position `i` discounted at `(1+y)^(i+1)` and weighted by `i + 1`.
    PeriodAligned,
}

impl DurationConvention {
    /// Discount exponent (and timing weight) of a 0-based position.
    #[must_use]
    pub fn exponent(self, position: usize) -> usize {
        match self {
            Self::PositionIndexed => position,
            Self::PeriodAligned => position + 1,
        }
    }
}

/// Calculates the duration of `cash_flows` at `yield_`.
///
/// # Errors
///
/// - `InvalidYield` if `yield_ <= -1`
/// - `DegenerateSchedule` if the schedule is empty or discounts to zero
/// - `InvalidSchedule` if a payment is negative or not finite
/// - `Overflow` if the discounted payments exceed the range of `f64`
///
/// # Example
///
/// ```rust
/// use bondrisk_analytics::risk::duration;
///
/// let mut bond = vec![0.04; 30];
/// bond[29] += 1.0;
/// let d = duration(&bond, 0.05).unwrap();
/// assert!((d - 15.14).abs() < 0.01);
/// ```
pub fn duration(cash_flows: &[f64], yield_: f64) -> BondRiskResult<f64> {
    duration_with_convention(cash_flows, yield_, DurationConvention::PositionIndexed)
}

/// Duration under an explicit exponent convention.
pub fn duration_with_convention(
    cash_flows: &[f64],
    yield_: f64,
    convention: DurationConvention,
) -> BondRiskResult<f64> {
    let y = Yield::new(yield_)?;
    validate_payments(cash_flows)?;
    weighted_duration(cash_flows.iter().copied(), y, convention)
}

/// Position-indexed duration of a validated schedule.
pub fn schedule_duration(schedule: &CashFlowSchedule, yield_: Yield) -> BondRiskResult<f64> {
    weighted_duration(
        schedule.iter().copied(),
        yield_,
        DurationConvention::PositionIndexed,
    )
}

/// Position-indexed duration of a bond, without building its schedule.
pub fn bond_duration(bond: &BondParameters, yield_: Yield) -> BondRiskResult<f64> {
    weighted_duration(bond.payments(), yield_, DurationConvention::PositionIndexed)
}

/// First-order fractional price change `-D · Δy`.
///
/// A duration of 15 and a 1% rise in yield gives roughly a 15% fall in price.
pub fn estimate_price_change(duration: f64, yield_change: f64) -> f64 {
    -duration * yield_change
}

fn weighted_duration(
    cash_flows: impl IntoIterator<Item = f64>,
    yield_: Yield,
    convention: DurationConvention,
) -> BondRiskResult<f64> {
    let mut weighted = 0.0;
    let mut total_pv = 0.0;

    for (position, cf) in cash_flows.into_iter().enumerate() {
        let exponent = convention.exponent(position);
        let pv = cf * yield_.discount_factor(exponent);
        weighted += exponent as f64 * pv;
        total_pv += pv;
    }

    if !total_pv.is_finite() || !weighted.is_finite() {
        return Err(BondRiskError::overflow("present value of the cash flows"));
    }
    if total_pv <= 0.0 {
        return Err(BondRiskError::degenerate_schedule(
            "cash flows have zero present value",
        ));
    }

    Ok(weighted / total_pv / yield_.growth_factor())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn treasury() -> Vec<f64> {
        let mut flows = vec![0.04; 30];
        flows[29] += 1.0;
        flows
    }

    #[test]
    fn test_treasury_duration() {
        let d = duration(&treasury(), 0.05).unwrap();
        assert_relative_eq!(d, 15.141_808, epsilon = 1e-5);
    }

    #[test]
    fn test_mortgage_duration() {
        let d = duration(&[0.08; 30], 0.05).unwrap();
        assert_relative_eq!(d, 10.446_799, epsilon = 1e-5);
    }

    #[test]
    fn test_treasury_longer_than_mortgage() {
        let treasury = duration(&treasury(), 0.05).unwrap();
        let mortgage = duration(&[0.08; 30], 0.05).unwrap();
        assert!(treasury > mortgage);
    }

    #[test]
    fn test_first_position_has_zero_weight() {
        // Position 0 is discounted at exponent 0 and weighted by 0.
        assert_eq!(duration(&[5.0], 0.03).unwrap(), 0.0);
        assert_relative_eq!(duration(&[1.0, 1.0], 0.0).unwrap(), 0.5);
        assert_relative_eq!(duration(&[0.0, 5.0], 0.25).unwrap(), 0.8);
    }

    #[test]
    fn test_period_aligned_offset() {
        let y = 0.05;
        let indexed = duration(&treasury(), y).unwrap();
        let aligned =
            duration_with_convention(&treasury(), y, DurationConvention::PeriodAligned).unwrap();

        assert_relative_eq!(aligned, 16.094_189, epsilon = 1e-5);
        assert_relative_eq!(aligned - indexed, 1.0 / (1.0 + y), epsilon = 1e-9);
    }

    #[test]
    fn test_period_aligned_matches_price_derivative() {
        let flows = treasury();
        let y = 0.05;
        let h = 1e-6;
        let price = |y: f64| -> f64 {
            flows
                .iter()
                .enumerate()
                .map(|(i, cf)| cf / (1.0 + y).powi(i as i32 + 1))
                .sum()
        };
        let numerical = -(price(y + h) - price(y - h)) / (2.0 * h) / price(y);
        let analytical =
            duration_with_convention(&flows, y, DurationConvention::PeriodAligned).unwrap();

        assert_relative_eq!(analytical, numerical, epsilon = 1e-5);
    }

    #[test]
    fn test_empty_schedule_is_degenerate() {
        let err = duration(&[], 0.05).unwrap_err();
        assert!(matches!(err, BondRiskError::DegenerateSchedule { .. }));
    }

    #[test]
    fn test_all_zero_schedule_is_degenerate() {
        let err = duration(&[0.0; 10], 0.05).unwrap_err();
        assert!(matches!(err, BondRiskError::DegenerateSchedule { .. }));
    }

    #[test]
    fn test_negative_payment_is_invalid() {
        let err = duration(&[1.0, -1.0], 0.05).unwrap_err();
        assert!(matches!(err, BondRiskError::InvalidSchedule { .. }));
    }

    #[test]
    fn test_invalid_yield() {
        let err = duration(&treasury(), -1.0).unwrap_err();
        assert!(matches!(err, BondRiskError::InvalidYield { .. }));
    }

    #[test]
    fn test_schedule_duration_agrees() {
        let schedule = CashFlowSchedule::new(treasury()).unwrap();
        let y = Yield::new(0.05).unwrap();
        assert_relative_eq!(
            schedule_duration(&schedule, y).unwrap(),
            duration(&treasury(), 0.05).unwrap()
        );
    }

    #[test]
    fn test_bond_duration_matches_schedule() {
        let bond = BondParameters::new(0.04, 30, 1.0).unwrap();
        let y = Yield::new(0.05).unwrap();
        assert_relative_eq!(
            bond_duration(&bond, y).unwrap(),
            duration(&treasury(), 0.05).unwrap(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_discounting_overflow_is_an_error() {
        let err = duration(&[1.0; 400], -0.9).unwrap_err();
        assert!(matches!(err, BondRiskError::Overflow { .. }));
    }

    #[test]
    fn test_huge_payments_overflow() {
        let err = duration(&[1e308, 1e308], 0.0).unwrap_err();
        assert!(matches!(err, BondRiskError::Overflow { .. }));

        let aligned =
            duration_with_convention(&[1e308, 1e308], 0.0, DurationConvention::PeriodAligned);
        assert!(matches!(aligned, Err(BondRiskError::Overflow { .. })));
    }

    #[test]
    fn test_estimate_price_change() {
        assert_relative_eq!(estimate_price_change(15.0, 0.03), -0.45, epsilon = 1e-12);
        assert_relative_eq!(estimate_price_change(15.0, -0.01), 0.15, epsilon = 1e-12);
    }
}

//! Present-value weights along a schedule.
//!
//! Picture a plank with one weight per period, each proportional to the PV of
//! that period's payment. The duration is where the plank balances. The PVs
//! use the same position-indexed exponent as [`duration()`](super::duration()) and are
//! labelled with 1-based timings.

use serde::{Deserialize, Serialize};

use bondrisk_core::types::validate_payments;
use bondrisk_core::{BondRiskError, BondRiskResult, Yield};

use super::DurationConvention;

/// PV of a single period's payment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlankWeight {
    /// Period number, starting at 1.
    pub timing: usize,
    /// Discounted payment.
    pub present_value: f64,
}

/// Per-period present values of `cash_flows` at `yield_`.
///
/// An all-zero schedule is fine here and yields all-zero weights.
///
/// # Errors
///
/// `InvalidYield`, `DegenerateSchedule` for an empty schedule,
/// `InvalidSchedule` for negative or non-finite payments, `Overflow` if a
/// discounted payment is not finite.
pub fn plank_weights(cash_flows: &[f64], yield_: f64) -> BondRiskResult<Vec<PlankWeight>> {
    let y = Yield::new(yield_)?;
    validate_payments(cash_flows)?;

    cash_flows
        .iter()
        .enumerate()
        .map(|(position, cf)| {
            let pv = cf * y.discount_factor(DurationConvention::PositionIndexed.exponent(position));
            Ok(PlankWeight {
                timing: position + 1,
                present_value: BondRiskError::check_finite(pv, "plank weight")?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bondrisk_core::BondRiskError;

    #[test]
    fn test_weights_are_labelled_from_one() {
        let mut flows = vec![0.04; 30];
        flows[29] += 1.0;
        let weights = plank_weights(&flows, 0.05).unwrap();

        assert_eq!(weights.len(), 30);
        assert_eq!(weights[0].timing, 1);
        assert_eq!(weights[29].timing, 30);
        assert_relative_eq!(weights[0].present_value, 0.04);
        assert_relative_eq!(weights[1].present_value, 0.04 / 1.05, epsilon = 1e-12);
        assert_relative_eq!(weights[29].present_value, 0.252_664_17, epsilon = 1e-7);
    }

    #[test]
    fn test_mortgage_weights_decline() {
        let weights = plank_weights(&[0.08; 30], 0.05).unwrap();
        assert!(weights
            .windows(2)
            .all(|w| w[1].present_value < w[0].present_value));
    }

    #[test]
    fn test_zero_schedule_allowed() {
        let weights = plank_weights(&[0.0, 0.0], 0.05).unwrap();
        assert!(weights.iter().all(|w| w.present_value == 0.0));
    }

    #[test]
    fn test_empty_schedule_is_degenerate() {
        let err = plank_weights(&[], 0.05).unwrap_err();
        assert!(matches!(err, BondRiskError::DegenerateSchedule { .. }));
    }

    #[test]
    fn test_overflowing_weight_is_an_error() {
        let err = plank_weights(&[1.0; 400], -0.9).unwrap_err();
        assert!(matches!(err, BondRiskError::Overflow { .. }));
    }
}

//! Yield-to-price curve for a single bond.

use serde::{Deserialize, Serialize};

use bondrisk_core::{BondParameters, BondRiskResult, Yield};

use super::price_bond;

/// One point of a yield/price curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Per-period yield.
    pub yield_value: f64,
    /// Bond price at that yield.
    pub price: f64,
}

/// Evenly spaced yields `start, start + step, ...` (`count` values).
pub fn yield_grid(start: f64, step: f64, count: usize) -> Vec<f64> {
    (0..count).map(|n| start + step * n as f64).collect()
}

/// Prices `bond` at every yield in `yields`.
///
/// Stops at the first yield that is not greater than -1, or whose price
/// overflows.
pub fn price_curve(bond: &BondParameters, yields: &[f64]) -> BondRiskResult<Vec<PricePoint>> {
    yields
        .iter()
        .map(|&y| {
            Ok(PricePoint {
                yield_value: y,
                price: price_bond(bond, Yield::new(y)?)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_yield_grid() {
        let grid = yield_grid(0.01, 0.01, 10);
        assert_eq!(grid.len(), 10);
        assert_relative_eq!(grid[0], 0.01);
        assert_relative_eq!(grid[9], 0.10, epsilon = 1e-12);
        assert!(yield_grid(0.01, 0.01, 0).is_empty());
    }

    #[test]
    fn test_price_curve_passes_through_par() {
        let bond = BondParameters::new(0.05, 30, 100.0).unwrap();
        let curve = price_curve(&bond, &yield_grid(0.01, 0.01, 10)).unwrap();

        assert_relative_eq!(curve[0].price, 203.2308, epsilon = 1e-3);
        assert_relative_eq!(curve[4].price, 100.0, epsilon = 1e-6);
        assert_relative_eq!(curve[9].price, 52.8654, epsilon = 1e-3);
        assert!(curve.windows(2).all(|w| w[1].price < w[0].price));
    }

    #[test]
    fn test_price_curve_rejects_bad_yield() {
        let bond = BondParameters::new(0.05, 30, 100.0).unwrap();
        assert!(price_curve(&bond, &[0.01, -1.5]).is_err());
    }
}

//! Per-period yield used for discounting.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{BondRiskError, BondRiskResult};

/// A per-period discount rate (0.05 = 5% per period).
///
/// Construction rejects anything at or below -1 so that `1 + y` stays
/// strictly positive; NaN and infinities are rejected as well.
///
/// # Example
///
/// ```rust
/// use bondrisk_core::types::Yield;
///
/// let y = Yield::new(0.05).unwrap();
/// assert_eq!(y.growth_factor(), 1.05);
/// assert!(Yield::new(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Yield(f64);

impl Yield {
    /// Creates a validated yield.
    ///
    /// # Errors
    ///
    /// Returns `BondRiskError::InvalidYield` if `value <= -1` or is not finite.
    pub fn new(value: f64) -> BondRiskResult<Self> {
        if !value.is_finite() || value <= -1.0 {
            return Err(BondRiskError::invalid_yield(value));
        }
        Ok(Self(value))
    }

    /// Creates a yield from a percentage (5.0 = 5%).
    pub fn from_percentage(percentage: f64) -> BondRiskResult<Self> {
        Self::new(percentage / 100.0)
    }

    /// Returns the yield as a decimal.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns the yield as a percentage.
    #[must_use]
    pub fn as_percentage(self) -> f64 {
        self.0 * 100.0
    }

    /// One-period growth factor `1 + y`. Always strictly positive.
    #[must_use]
    pub fn growth_factor(self) -> f64 {
        1.0 + self.0
    }

    /// Discount factor `1 / (1 + y)^exponent`.
    ///
    /// Can underflow to zero or overflow to infinity for long horizons.
    #[must_use]
    pub fn discount_factor(self, exponent: usize) -> f64 {
        let growth = match i32::try_from(exponent) {
            Ok(n) => self.growth_factor().powi(n),
            Err(_) => self.growth_factor().powf(exponent as f64),
        };
        growth.recip()
    }
}

impl TryFrom<f64> for Yield {
    type Error = BondRiskError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Yield> for f64 {
    fn from(y: Yield) -> Self {
        y.0
    }
}

impl fmt::Display for Yield {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}%", self.as_percentage())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rejects_yield_at_or_below_minus_one() {
        assert!(Yield::new(-1.0).is_err());
        assert!(Yield::new(-2.5).is_err());
        assert!(Yield::new(-0.999).is_ok());
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(Yield::new(f64::NAN).is_err());
        assert!(Yield::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_discount_factor() {
        let y = Yield::new(0.10).unwrap();
        assert_relative_eq!(y.discount_factor(0), 1.0);
        assert_relative_eq!(y.discount_factor(2), 1.0 / 1.21, epsilon = 1e-12);
    }

    #[test]
    fn test_discount_factor_past_i32_range() {
        let exponent = u32::MAX as usize;
        assert_eq!(Yield::new(0.05).unwrap().discount_factor(exponent), 0.0);
        assert_eq!(Yield::new(0.0).unwrap().discount_factor(exponent), 1.0);
        assert!(Yield::new(-0.5).unwrap().discount_factor(exponent).is_infinite());
    }

    #[test]
    fn test_percentage_roundtrip() {
        let y = Yield::from_percentage(4.5).unwrap();
        assert_relative_eq!(y.value(), 0.045, epsilon = 1e-15);
        assert_eq!(y.to_string(), "4.5000%");
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Yield = serde_json::from_str("0.03").unwrap();
        assert_relative_eq!(ok.value(), 0.03);
        assert!(serde_json::from_str::<Yield>("-1.0").is_err());
    }
}

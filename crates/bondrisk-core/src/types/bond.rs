//! Fixed-coupon bullet bond parameters.

use serde::{Deserialize, Deserializer, Serialize};

use super::CashFlowSchedule;
use crate::error::{BondRiskError, BondRiskResult};

/// Coupon, maturity and principal of a fixed-coupon bond.
///
/// The bond pays `principal * coupon` every period and returns `principal`
/// together with the final coupon.
///
/// # Example
///
/// ```rust
/// use bondrisk_core::types::BondParameters;
///
/// let bond = BondParameters::new(0.04, 30, 1.0).unwrap();
/// let flows = bond.cash_flows();
/// assert_eq!(flows.len(), 30);
/// assert_eq!(flows.payments()[29], 1.04);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BondParameters {
    coupon: f64,
    maturity: u32,
    principal: f64,
}

#[derive(Deserialize)]
struct RawBondParameters {
    coupon: f64,
    maturity: u32,
    principal: f64,
}

impl BondParameters {
    /// Creates validated bond parameters.
    ///
    /// # Errors
    ///
    /// Returns `BondRiskError::InvalidBondParameters` if `maturity` is zero or
    /// `coupon`/`principal` is negative or not finite. A zero principal is
    /// accepted.
    pub fn new(coupon: f64, maturity: u32, principal: f64) -> BondRiskResult<Self> {
        if maturity == 0 {
            return Err(BondRiskError::invalid_bond_parameters(
                "maturity must be at least 1 period",
            ));
        }
        if !coupon.is_finite() || coupon < 0.0 {
            return Err(BondRiskError::invalid_bond_parameters(format!(
                "coupon must be non-negative, got {coupon}"
            )));
        }
        if !principal.is_finite() || principal < 0.0 {
            return Err(BondRiskError::invalid_bond_parameters(format!(
                "principal must be non-negative, got {principal}"
            )));
        }
        Ok(Self {
            coupon,
            maturity,
            principal,
        })
    }

    /// Coupon rate per period.
    #[must_use]
    pub fn coupon(&self) -> f64 {
        self.coupon
    }

    /// Number of periods to the final payment.
    #[must_use]
    pub fn maturity(&self) -> u32 {
        self.maturity
    }

    /// Face amount returned at maturity.
    #[must_use]
    pub fn principal(&self) -> f64 {
        self.principal
    }

    /// Interest paid each period.
    #[must_use]
    pub fn coupon_payment(&self) -> f64 {
        self.principal * self.coupon
    }

    /// Returns the same bond with fewer periods left, e.g. after holding it.
    pub fn with_maturity(&self, maturity: u32) -> BondRiskResult<Self> {
        Self::new(self.coupon, maturity, self.principal)
    }

    /// Payments for periods `1..=maturity`, produced lazily.
    ///
    /// Prefer this over [`cash_flows`](Self::cash_flows) when the schedule is
    /// only summed; it never allocates, whatever the maturity.
    pub fn payments(&self) -> impl Iterator<Item = f64> {
        let coupon = self.coupon_payment();
        let redemption = coupon + self.principal;
        let maturity = self.maturity;
        (1..=maturity).map(move |t| if t == maturity { redemption } else { coupon })
    }

    /// Builds the coupon strip with principal added to the last period.
    #[must_use]
    pub fn cash_flows(&self) -> CashFlowSchedule {
        CashFlowSchedule::from_validated(self.payments().collect())
    }
}

impl<'de> Deserialize<'de> for BondParameters {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawBondParameters::deserialize(deserializer)?;
        Self::new(raw.coupon, raw.maturity, raw.principal).map_err(serde::de::Error::custom)
    }
}

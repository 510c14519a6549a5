//! Forced early sale of a bond after yields have risen.
//!
//! A bond is bought at one yield and sold some periods later, with fewer
//! periods left, at another yield. The loss is the purchase price minus the
//! sale price; coupons received while holding are not counted.

use serde::{Deserialize, Serialize};

use bondrisk_core::{BondParameters, BondRiskError, BondRiskResult, Yield};

use crate::pricing::price_bond;
use crate::risk::{bond_duration, estimate_price_change};

/// Purchase and sale terms of a single bond.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaleScenario {
    /// Coupon rate per period.
    pub coupon: f64,
    /// Face amount.
    pub principal: f64,
    /// Periods remaining when bought.
    pub maturity_at_purchase: u32,
    /// Periods remaining when sold.
    pub maturity_at_sale: u32,
    /// Yield at purchase.
    pub yield_at_purchase: f64,
    /// Yield at sale.
    pub yield_at_sale: f64,
}

impl Default for SaleScenario {
    /// 30-period 2% bond bought at par, sold two periods later at 5%.
    fn default() -> Self {
        Self {
            coupon: 0.02,
            principal: 100.0,
            maturity_at_purchase: 30,
            maturity_at_sale: 28,
            yield_at_purchase: 0.02,
            yield_at_sale: 0.05,
        }
    }
}

/// Result of [`SaleScenario::evaluate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SaleOutcome {
    /// Price paid.
    pub purchase_price: f64,
    /// Price received.
    pub sale_price: f64,
    /// `purchase_price - sale_price`.
    pub loss: f64,
    /// Loss as a fraction of the purchase price.
    pub loss_fraction: f64,
    /// Duration of the bond at purchase.
    pub purchase_duration: f64,
    /// Duration-based first-order estimate of `loss_fraction`.
    pub estimated_loss_fraction: f64,
}

impl SaleScenario {
    /// Prices both legs and the loss.
    ///
    /// # Errors
    ///
    /// - `InvalidYield` for either yield at or below -1, checked first
    /// - `InvalidBondParameters` for bad bond terms, or a sale maturity outside
    ///   `1..=maturity_at_purchase`
    /// - `DegenerateSchedule` if the purchase price is zero
    /// - `Overflow` if either price is not a finite `f64`
    pub fn evaluate(&self) -> BondRiskResult<SaleOutcome> {
        let purchase_yield = Yield::new(self.yield_at_purchase)?;
        let sale_yield = Yield::new(self.yield_at_sale)?;
        let bond = BondParameters::new(self.coupon, self.maturity_at_purchase, self.principal)?;
        if self.maturity_at_sale > self.maturity_at_purchase {
            return Err(BondRiskError::invalid_bond_parameters(format!(
                "maturity at sale ({}) exceeds maturity at purchase ({})",
                self.maturity_at_sale, self.maturity_at_purchase
            )));
        }
        let seasoned = bond.with_maturity(self.maturity_at_sale)?;

        let purchase_price = price_bond(&bond, purchase_yield)?;
        if purchase_price <= 0.0 {
            return Err(BondRiskError::degenerate_schedule(
                "purchase price is zero",
            ));
        }
        let sale_price = price_bond(&seasoned, sale_yield)?;
        let loss = purchase_price - sale_price;

        let purchase_duration = bond_duration(&bond, purchase_yield)?;
        let estimated_loss_fraction =
            -estimate_price_change(purchase_duration, self.yield_at_sale - self.yield_at_purchase);

        Ok(SaleOutcome {
            purchase_price,
            sale_price,
            loss,
            loss_fraction: loss / purchase_price,
            purchase_duration,
            estimated_loss_fraction,
        })
    }
}

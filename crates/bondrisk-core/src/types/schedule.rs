//! Cash-flow schedules indexed by period.

use serde::{Deserialize, Serialize};

use crate::error::{BondRiskError, BondRiskResult};

/// An ordered sequence of non-negative payments, one per period.
///
/// Element 0 is the payment due one period from now, element `T - 1` the
/// payment due at period `T`. A schedule always has at least one element.
///
/// # Example
///
/// ```rust
/// use bondrisk_core::types::CashFlowSchedule;
///
/// let mortgage = CashFlowSchedule::level(0.08, 30).unwrap();
/// assert_eq!(mortgage.len(), 30);
/// assert_eq!(mortgage.timings().last(), Some(30));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct CashFlowSchedule {
    payments: Vec<f64>,
}

impl CashFlowSchedule {
    /// Creates a schedule from raw payments.
    ///
    /// # Errors
    ///
    /// `DegenerateSchedule` if `payments` is empty, `InvalidSchedule` if any
    /// payment is negative or not finite.
    pub fn new(payments: Vec<f64>) -> BondRiskResult<Self> {
        validate_payments(&payments)?;
        Ok(Self { payments })
    }

    /// Level schedule: the same payment every period.
    pub fn level(payment: f64, periods: u32) -> BondRiskResult<Self> {
        Self::new(vec![payment; periods as usize])
    }

    /// Level-payment schedule that fully amortizes `principal` at `rate`.
    ///
    /// Each payment is `principal * rate / (1 - (1 + rate)^-periods)`, or
    /// `principal / periods` when the rate is zero.
    pub fn annuity(principal: f64, rate: f64, periods: u32) -> BondRiskResult<Self> {
        if periods == 0 {
            return Err(BondRiskError::invalid_bond_parameters(
                "annuity needs at least one period",
            ));
        }
        if !principal.is_finite() || principal < 0.0 {
            return Err(BondRiskError::invalid_bond_parameters(format!(
                "principal must be non-negative, got {principal}"
            )));
        }
        if !rate.is_finite() || rate < 0.0 {
            return Err(BondRiskError::invalid_bond_parameters(format!(
                "annuity rate must be non-negative, got {rate}"
            )));
        }

        let n = periods as f64;
        let payment = if rate == 0.0 {
            principal / n
        } else {
            principal * rate / (1.0 - (1.0 + rate).powf(-n))
        };
        Self::level(payment, periods)
    }

    /// Number of periods `T`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.payments.len()
    }

    /// Always false; kept for API symmetry with slices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.payments.is_empty()
    }

    /// The payments in period order.
    #[must_use]
    pub fn payments(&self) -> &[f64] {
        &self.payments
    }

    /// Iterates over payments in period order.
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.payments.iter()
    }

    /// Period labels `1..=T`.
    pub fn timings(&self) -> impl Iterator<Item = usize> {
        1..=self.payments.len()
    }

    /// Undiscounted sum of all payments.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.payments.iter().sum()
    }

    /// Consumes the schedule, returning the payments.
    #[must_use]
    pub fn into_inner(self) -> Vec<f64> {
        self.payments
    }

    pub(crate) fn from_validated(payments: Vec<f64>) -> Self {
        Self { payments }
    }
}

/// Checks a raw payment slice against the schedule invariants.
///
/// # Errors
///
/// `DegenerateSchedule` for an empty slice, `InvalidSchedule` naming the
/// first negative or non-finite payment.
pub fn validate_payments(payments: &[f64]) -> BondRiskResult<()> {
    if payments.is_empty() {
        return Err(BondRiskError::degenerate_schedule(
            "cash-flow schedule is empty",
        ));
    }
    if let Some((i, p)) = payments
        .iter()
        .enumerate()
        .find(|(_, p)| !p.is_finite() || **p < 0.0)
    {
        return Err(BondRiskError::invalid_schedule(format!(
            "payment {p} at position {i} must be finite and non-negative"
        )));
    }
    Ok(())
}

impl TryFrom<Vec<f64>> for CashFlowSchedule {
    type Error = BondRiskError;

    fn try_from(payments: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(payments)
    }
}

impl From<CashFlowSchedule> for Vec<f64> {
    fn from(schedule: CashFlowSchedule) -> Self {
        schedule.payments
    }
}

impl AsRef<[f64]> for CashFlowSchedule {
    fn as_ref(&self) -> &[f64] {
        &self.payments
    }
}

impl<'a> IntoIterator for &'a CashFlowSchedule {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.payments.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_empty_schedule_is_degenerate() {
        let err = CashFlowSchedule::new(vec![]).unwrap_err();
        assert!(matches!(err, BondRiskError::DegenerateSchedule { .. }));

        let err = CashFlowSchedule::level(1.0, 0).unwrap_err();
        assert!(matches!(err, BondRiskError::DegenerateSchedule { .. }));
    }

    #[test]
    fn test_negative_payment_rejected() {
        let err = CashFlowSchedule::new(vec![1.0, -0.5, 1.0]).unwrap_err();
        match err {
            BondRiskError::InvalidSchedule { reason } => assert!(reason.contains("position 1")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_nan_payment_rejected() {
        assert!(CashFlowSchedule::new(vec![f64::NAN]).is_err());
    }

    #[test]
    fn test_zero_payments_allowed() {
        let schedule = CashFlowSchedule::new(vec![0.0, 0.0]).unwrap();
        assert_eq!(schedule.total(), 0.0);
    }

    #[test]
    fn test_level_schedule() {
        let schedule = CashFlowSchedule::level(0.08, 30).unwrap();
        assert_eq!(schedule.len(), 30);
        assert!(schedule.iter().all(|p| *p == 0.08));
        assert_eq!(schedule.timings().collect::<Vec<_>>().first(), Some(&1));
    }

    #[test]
    fn test_annuity_payment() {
        // 100 over 2 periods at 10%: 100 * 0.1 / (1 - 1.1^-2) = 57.619...
        let schedule = CashFlowSchedule::annuity(100.0, 0.10, 2).unwrap();
        assert_relative_eq!(schedule.payments()[0], 57.619_047_619, epsilon = 1e-6);

        let pv: f64 = schedule
            .iter()
            .enumerate()
            .map(|(i, p)| p / 1.1_f64.powi(i as i32 + 1))
            .sum();
        assert_relative_eq!(pv, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_annuity_zero_rate() {
        let schedule = CashFlowSchedule::annuity(90.0, 0.0, 3).unwrap();
        assert_eq!(schedule.payments(), &[30.0, 30.0, 30.0]);
    }

    #[test]
    fn test_annuity_rejects_bad_inputs() {
        assert!(CashFlowSchedule::annuity(100.0, 0.05, 0).is_err());
        assert!(CashFlowSchedule::annuity(-1.0, 0.05, 10).is_err());
        assert!(CashFlowSchedule::annuity(100.0, -0.01, 10).is_err());
    }

    #[test]
    fn test_serde_validates() {
        let schedule: CashFlowSchedule = serde_json::from_str("[0.04, 1.04]").unwrap();
        assert_eq!(schedule.len(), 2);
        assert!(serde_json::from_str::<CashFlowSchedule>("[]").is_err());
        assert_eq!(serde_json::to_string(&schedule).unwrap(), "[0.04,1.04]");
    }
}

//! Error types for bond pricing and duration calculations.
//!
//! Inputs are validated up front and nothing is computed once a check fails.
//! Valid inputs can still discount beyond the range of `f64`; that is
//! reported as [`BondRiskError::Overflow`] rather than returned as NaN or
//! infinity.

use thiserror::Error;

/// A specialized Result type for bondrisk operations.
pub type BondRiskResult<T> = Result<T, BondRiskError>;

/// The error type for bondrisk operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BondRiskError {
    /// Yield at or below -100%, or not a finite number.
    #[error("Invalid yield: {value} (must be finite and greater than -1)")]
    InvalidYield {
        /// The rejected yield.
        value: f64,
    },

    /// A cash-flow schedule holds a payment that cannot be discounted.
    #[error("Invalid schedule: {reason}")]
    InvalidSchedule {
        /// Description of the offending payment.
        reason: String,
    },

    /// A cash-flow schedule is empty or has zero present value.
    #[error("Degenerate schedule: {reason}")]
    DegenerateSchedule {
        /// Why the schedule carries no weight.
        reason: String,
    },

    /// Coupon, maturity or principal out of range.
    #[error("Invalid bond parameters: {reason}")]
    InvalidBondParameters {
        /// Which parameter failed and why.
        reason: String,
    },

    /// A present value or price is not representable as a finite `f64`.
    #[error("Numeric overflow: {what} is not finite")]
    Overflow {
        /// The quantity that overflowed.
        what: String,
    },
}

impl BondRiskError {
    /// Creates an invalid yield error.
    #[must_use]
    pub fn invalid_yield(value: f64) -> Self {
        Self::InvalidYield { value }
    }

    /// Creates an invalid schedule error.
    #[must_use]
    pub fn invalid_schedule(reason: impl Into<String>) -> Self {
        Self::InvalidSchedule {
            reason: reason.into(),
        }
    }

    /// Creates a degenerate schedule error.
    #[must_use]
    pub fn degenerate_schedule(reason: impl Into<String>) -> Self {
        Self::DegenerateSchedule {
            reason: reason.into(),
        }
    }

    /// Creates an invalid bond parameters error.
    #[must_use]
    pub fn invalid_bond_parameters(reason: impl Into<String>) -> Self {
        Self::InvalidBondParameters {
            reason: reason.into(),
        }
    }

    /// Creates an overflow error.
    #[must_use]
    pub fn overflow(what: impl Into<String>) -> Self {
        Self::Overflow { what: what.into() }
    }

    /// Returns `value` if it is finite, otherwise an overflow error for `what`.
    pub fn check_finite(value: f64, what: &str) -> BondRiskResult<f64> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self::overflow(what))
        }
    }
}

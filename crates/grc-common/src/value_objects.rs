//! Value Objects - Immutable domain primitives with validation
//!
//! Value Objects are:
//! - Immutable
//! - Comparable by value (not identity)
//! - Self-validating
//! - Side-effect free

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Value object validation error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Progress outside 0-100
    #[error("invalid progress: {0}")]
    InvalidProgress(String),

    /// Negative money amount
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
}

/// Progress percentage (Value Object)
///
/// # Invariants
/// - Range: 0 to 100 inclusive
///
/// Monotonicity across updates is deliberately NOT enforced here.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct ProgressPercent(u8);

impl TryFrom<u8> for ProgressPercent {
    type Error = DomainError;

    fn try_from(pct: u8) -> Result<Self, Self::Error> {
        Self::new(pct)
    }
}

impl From<ProgressPercent> for u8 {
    fn from(pct: ProgressPercent) -> Self {
        pct.0
    }
}

impl ProgressPercent {
    /// Create with validation
    pub fn new(pct: u8) -> Result<Self, DomainError> {
        if pct > 100 {
            return Err(DomainError::InvalidProgress(format!("{pct} exceeds 100")));
        }
        Ok(Self(pct))
    }

    /// Fully complete (100%)
    pub const fn complete() -> Self {
        Self(100)
    }

    /// Get inner value
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Whether this represents full completion
    pub const fn is_complete(&self) -> bool {
        self.0 == 100
    }
}

impl fmt::Display for ProgressPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Money amount in whole currency units (Value Object)
///
/// # Invariants
/// - Non-negative
///
/// Missing amounts are modeled as `Money::zero()`, never as an absent sum.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    /// Create from a whole amount
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Zero amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Create from a signed amount, rejecting negatives
    pub fn from_signed(amount: i64) -> Result<Self, DomainError> {
        if amount < 0 {
            return Err(DomainError::InvalidAmount(format!("{amount} is negative")));
        }
        Ok(Self(amount as u64))
    }

    /// Get inner value
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Saturating addition
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Self::saturating_add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_valid_range() {
        assert!(ProgressPercent::new(0).is_ok());
        assert!(ProgressPercent::new(50).is_ok());
        assert!(ProgressPercent::new(100).is_ok());
        assert!(ProgressPercent::new(101).is_err());
    }

    #[test]
    fn test_progress_complete() {
        assert!(ProgressPercent::complete().is_complete());
        assert!(!ProgressPercent::new(99).unwrap().is_complete());
    }

    #[test]
    fn test_money_rejects_negative() {
        assert!(Money::from_signed(-1).is_err());
        assert_eq!(Money::from_signed(250).unwrap().value(), 250);
    }

    #[test]
    fn test_money_sum_defaults_to_zero() {
        let empty: Vec<Money> = vec![];
        assert_eq!(empty.into_iter().sum::<Money>(), Money::zero());

        let total: Money = vec![Money::new(100), Money::zero(), Money::new(50)]
            .into_iter()
            .sum();
        assert_eq!(total.value(), 150);
    }
}

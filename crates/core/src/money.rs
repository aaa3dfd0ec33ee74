//! Money value object.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Non-negative monetary amount, stored in the smallest currency unit (cents).
///
/// Every arithmetic operation rounds to whole cents, which gives the
/// "2-decimal rounding on mutation" policy for free.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Whole currency units (e.g. `Money::units(2000)` is `2000.00`).
    pub const fn units(units: u64) -> Self {
        Self(units * 100)
    }

    /// Convert a decimal amount (e.g. parsed user input) to money, rounding to cents.
    pub fn from_major(amount: f64) -> DomainResult<Self> {
        if !amount.is_finite() {
            return Err(DomainError::validation("price must be a finite number"));
        }
        if amount < 0.0 {
            return Err(DomainError::validation("price cannot be negative"));
        }
        let cents = (amount * 100.0).round();
        // `u64::MAX as f64` rounds up to 2^64, which is already out of range.
        if cents >= u64::MAX as f64 {
            return Err(DomainError::validation("price is too large"));
        }
        Ok(Self(cents as u64))
    }

    pub fn cents(self) -> u64 {
        self.0
    }

    pub fn as_major(self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Multiply by `factor`, rounding half away from zero to whole cents.
    ///
    /// Negative factors clamp to zero; results past the largest amount saturate.
    pub fn scale(self, factor: f64) -> Self {
        let scaled = (self.0 as f64 * factor.max(0.0)).round();
        if scaled >= u64::MAX as f64 {
            return Self(u64::MAX);
        }
        Self(scaled as u64)
    }

    pub fn saturating_add(self, other: Money) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl core::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        self.saturating_add(rhs)
    }
}

impl core::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Money::saturating_add)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_major_rounds_to_cents() {
        assert_eq!(Money::from_major(999.99).unwrap(), Money::from_cents(99_999));
        assert_eq!(Money::from_major(0.005).unwrap(), Money::from_cents(1));
        assert_eq!(Money::from_major(0.0).unwrap(), Money::ZERO);
    }

    #[test]
    fn from_major_rejects_negative_and_non_finite() {
        assert!(matches!(Money::from_major(-1.0), Err(DomainError::Validation(_))));
        assert!(Money::from_major(f64::NAN).is_err());
        assert!(Money::from_major(f64::INFINITY).is_err());
    }

    #[test]
    fn from_major_rejects_amounts_beyond_the_cent_range() {
        assert!(matches!(Money::from_major(1e300), Err(DomainError::Validation(_))));
        assert!(Money::from_major(1.9e17).is_err());
        assert_eq!(
            Money::from_major(1e15).unwrap(),
            Money::from_cents(100_000_000_000_000_000)
        );
    }

    #[test]
    fn scale_rounds_to_nearest_cent() {
        assert_eq!(Money::from_cents(99_999).scale(0.85), Money::from_cents(84_999));
        assert_eq!(Money::units(100).scale(0.85), Money::units(85));
    }

    #[test]
    fn scale_clamps_negative_factors_and_saturates_at_the_top() {
        assert_eq!(Money::units(10).scale(-1.0), Money::ZERO);
        assert_eq!(Money::units(10).scale(-0.0), Money::ZERO);
        assert_eq!(Money::from_cents(u64::MAX).scale(1.3), Money::from_cents(u64::MAX));
        assert_eq!(Money::from_cents(1 << 62).scale(2.0), Money::from_cents(1 << 63));
    }

    #[test]
    fn display_uses_two_decimals() {
        assert_eq!(Money::from_cents(99_999).to_string(), "999.99");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::units(2000).to_string(), "2000.00");
    }

    #[test]
    fn sums_saturate() {
        let total: Money = [Money::units(1), Money::from_cents(50), Money::units(2)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::from_cents(350));
        assert_eq!(
            Money::from_cents(u64::MAX) + Money::from_cents(1),
            Money::from_cents(u64::MAX)
        );
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: scaling stays within half a cent of the exact product.
            #[test]
            fn scale_is_within_half_a_cent(cents in 0u64..10_000_000, factor in 0.0f64..2.0) {
                let exact = cents as f64 * factor;
                let scaled = Money::from_cents(cents).scale(factor).cents() as f64;
                prop_assert!((scaled - exact).abs() <= 0.5 + 1e-6);
            }
        }
    }
}

//! Money type for registry billing amounts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use super::Currency;
use crate::error::{CoreError, CoreResult};

/// A monetary amount with currency.
///
/// Registry fees are exact decimal amounts; `Decimal` avoids the binary
/// floating point drift that would otherwise surface in billing.
///
/// # Example
///
/// ```rust
/// use premia_core::types::{Currency, Money};
/// use rust_decimal_macros::dec;
///
/// let fee = Money::new(dec!(10.00), Currency::USD);
/// assert_eq!(fee.amount(), dec!(10.00));
/// assert_eq!(fee.currency(), Currency::USD);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Amount in major units of the currency
    amount: Decimal,
    /// Currency of the amount
    currency: Currency,
}

impl Money {
    /// Creates a new monetary amount.
    #[must_use]
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates a zero amount in the given currency.
    #[must_use]
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    /// Returns the amount.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency.
    #[must_use]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    /// Validates that the amount is non-negative.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidAmount` if the amount is negative.
    pub fn validate_non_negative(&self) -> CoreResult<()> {
        if self.is_negative() {
            return Err(CoreError::invalid_amount(
                self.amount,
                "amount must be non-negative",
            ));
        }
        Ok(())
    }

    /// Returns true if amounts share the same currency.
    #[must_use]
    pub fn same_currency(&self, other: &Self) -> bool {
        self.currency == other.currency
    }

    /// Adds another amount in the same currency.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::CurrencyMismatch` if the currencies differ.
    pub fn checked_add(&self, other: &Self) -> CoreResult<Self> {
        if !self.same_currency(other) {
            return Err(CoreError::currency_mismatch(
                self.currency.code(),
                other.currency.code(),
            ));
        }
        Ok(Self {
            amount: self.amount + other.amount,
            currency: self.currency,
        })
    }

    /// Rounds the amount to the currency's standard minor-unit precision.
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            amount: self.amount.round_dp(self.currency.decimal_places()),
            currency: self.currency,
        }
    }
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.currency != other.currency {
            None // Amounts in different currencies are unordered
        } else {
            self.amount.partial_cmp(&other.amount)
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_creation() {
        let fee = Money::new(dec!(10.00), Currency::USD);
        assert_eq!(fee.amount(), dec!(10.00));
        assert_eq!(fee.currency(), Currency::USD);
    }

    #[test]
    fn test_zero() {
        let zero = Money::zero(Currency::EUR);
        assert!(zero.is_zero());
        assert!(!zero.is_negative());
        assert!(!zero.is_positive());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(Money::new(dec!(10), Currency::USD)
            .validate_non_negative()
            .is_ok());
        assert!(Money::zero(Currency::USD).validate_non_negative().is_ok());
        assert!(Money::new(dec!(-0.01), Currency::USD)
            .validate_non_negative()
            .is_err());
    }

    #[test]
    fn test_checked_add() {
        let a = Money::new(dec!(10.00), Currency::USD);
        let b = Money::new(dec!(2.50), Currency::USD);
        let c = Money::new(dec!(1.00), Currency::EUR);

        assert_eq!(a.checked_add(&b).unwrap().amount(), dec!(12.50));
        assert!(a.checked_add(&c).is_err());
    }

    #[test]
    fn test_comparison() {
        let a = Money::new(dec!(10.00), Currency::USD);
        let b = Money::new(dec!(1000.00), Currency::USD);
        let c = Money::new(dec!(10.00), Currency::EUR);

        assert!(a < b);
        assert!(a.partial_cmp(&c).is_none()); // Different currencies
    }

    #[test]
    fn test_rounded() {
        let usd = Money::new(dec!(10.005), Currency::USD);
        assert_eq!(usd.rounded().amount(), dec!(10.00)); // Banker's rounding

        let jpy = Money::new(dec!(100.4), Currency::JPY);
        assert_eq!(jpy.rounded().amount(), dec!(100));
    }

    #[test]
    fn test_display() {
        let fee = Money::new(dec!(10.00), Currency::USD);
        assert_eq!(format!("{}", fee), "10.00 USD");
    }

    #[test]
    fn test_serde() {
        let fee = Money::new(dec!(1000.00), Currency::USD);
        let json = serde_json::to_string(&fee).unwrap();
        let parsed: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(fee, parsed);
    }
}

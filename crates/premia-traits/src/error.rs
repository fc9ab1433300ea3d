//! Error taxonomy for pricing resolution.
//!
//! Two failure families are deliberately distinct:
//!
//! - [`PricingError`]: surfaced from [`PricingEngine::domain_prices`]
//!   (caller error or data-source unavailability). "Not premium" is never
//!   an error; it is a successful result.
//! - [`DomainPricesError`]: a result value failed its own construction
//!   invariants. This is always a bug in the policy that produced it and
//!   must never be coerced into a zero-cost default.
//!
//! [`PricingEngine::domain_prices`]: crate::pricing::PricingEngine::domain_prices

use rust_decimal::Decimal;
use thiserror::Error;

use premia_core::{CoreError, Currency};

/// Errors surfaced from a pricing resolution call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// The submitted name is malformed or carries a sub-domain component.
    ///
    /// A caller error; retrying with the same input cannot succeed.
    #[error("invalid label '{label}': {reason}")]
    InvalidLabel {
        /// The offending name as submitted.
        label: String,
        /// Description of the violation.
        reason: String,
    },

    /// No applicable price could be determined.
    ///
    /// Transient or permanent: a required data source may be unreachable or
    /// the policy may have no schedule covering the name. Callers may retry
    /// or fall back to a default policy.
    #[error("pricing unavailable: {reason}")]
    Unavailable {
        /// Description of why resolution failed.
        reason: String,
    },
}

impl PricingError {
    /// Creates an invalid label error.
    #[must_use]
    pub fn invalid_label(label: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidLabel {
            label: label.into(),
            reason: reason.into(),
        }
    }

    /// Creates a pricing unavailable error.
    #[must_use]
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }
}

impl From<CoreError> for PricingError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::InvalidLabel { label, reason } => Self::InvalidLabel { label, reason },
            CoreError::InvalidTld { tld, reason } => Self::InvalidLabel { label: tld, reason },
            other => Self::Unavailable {
                reason: other.to_string(),
            },
        }
    }
}

/// Construction failures of a [`DomainPrices`] value.
///
/// [`DomainPrices`]: crate::pricing::DomainPrices
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainPricesError {
    /// A required cost is negative.
    #[error("negative {field} cost: {value}")]
    NegativeCost {
        /// Which cost field is negative ("create" or "renew").
        field: &'static str,
        /// The offending amount.
        value: Decimal,
    },

    /// Costs do not share a single currency.
    #[error("currency mismatch: {field} is {found} but create cost is {expected}")]
    CurrencyMismatch {
        /// Which field disagrees ("renew" or "one-time fee").
        field: &'static str,
        /// The expected currency (taken from the create cost).
        expected: Currency,
        /// The currency found on the disagreeing field.
        found: Currency,
    },

    /// A fee class was supplied but is empty.
    #[error("fee class must be a non-empty identifier when present")]
    EmptyFeeClass,
}

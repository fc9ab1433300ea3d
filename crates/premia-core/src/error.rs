//! Error types for the Premia core library.
//!
//! This module defines the error types used by the core value types,
//! providing structured error handling with context.

use rust_decimal::Decimal;
use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The main error type for core value construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain label failed validation.
    #[error("Invalid label '{label}': {reason}")]
    InvalidLabel {
        /// The offending label text.
        label: String,
        /// Description of what's invalid.
        reason: String,
    },

    /// A TLD failed validation.
    #[error("Invalid TLD '{tld}': {reason}")]
    InvalidTld {
        /// The offending TLD text.
        tld: String,
        /// Description of what's invalid.
        reason: String,
    },

    /// A monetary amount failed validation.
    #[error("Invalid amount {value}: {reason}")]
    InvalidAmount {
        /// The invalid amount.
        value: Decimal,
        /// Reason for invalidity.
        reason: String,
    },

    /// Arithmetic between amounts in different currencies.
    #[error("Currency mismatch: {left} vs {right}")]
    CurrencyMismatch {
        /// Currency code on the left-hand side.
        left: String,
        /// Currency code on the right-hand side.
        right: String,
    },

    /// Unknown currency code.
    #[error("Unknown currency code: {code}")]
    UnknownCurrency {
        /// The unrecognized code.
        code: String,
    },
}

impl CoreError {
    /// Creates an invalid label error.
    #[must_use]
    pub fn invalid_label(label: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidLabel {
            label: label.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid TLD error.
    #[must_use]
    pub fn invalid_tld(tld: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTld {
            tld: tld.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid amount error.
    #[must_use]
    pub fn invalid_amount(value: Decimal, reason: impl Into<String>) -> Self {
        Self::InvalidAmount {
            value,
            reason: reason.into(),
        }
    }

    /// Creates a currency mismatch error.
    #[must_use]
    pub fn currency_mismatch(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self::CurrencyMismatch {
            left: left.into(),
            right: right.into(),
        }
    }
}

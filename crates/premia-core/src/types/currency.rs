//! Currency type with ISO 4217 codes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreError;

/// ISO 4217 currency codes.
///
/// Represents the currencies registry operators commonly bill in. The set is
/// closed so that a currency mismatch is a type-level construction failure
/// rather than a string comparison at rendering time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[non_exhaustive]
pub enum Currency {
    /// United States Dollar
    #[default]
    USD,
    /// Euro
    EUR,
    /// British Pound Sterling
    GBP,
    /// Japanese Yen
    JPY,
    /// Swiss Franc
    CHF,
    /// Canadian Dollar
    CAD,
    /// Australian Dollar
    AUD,
    /// Swedish Krona
    SEK,
    /// Singapore Dollar
    SGD,
    /// Brazilian Real
    BRL,
}

impl Currency {
    /// Returns the ISO 4217 3-letter code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CHF => "CHF",
            Currency::CAD => "CAD",
            Currency::AUD => "AUD",
            Currency::SEK => "SEK",
            Currency::SGD => "SGD",
            Currency::BRL => "BRL",
        }
    }

    /// Returns the full currency name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Currency::USD => "United States Dollar",
            Currency::EUR => "Euro",
            Currency::GBP => "British Pound Sterling",
            Currency::JPY => "Japanese Yen",
            Currency::CHF => "Swiss Franc",
            Currency::CAD => "Canadian Dollar",
            Currency::AUD => "Australian Dollar",
            Currency::SEK => "Swedish Krona",
            Currency::SGD => "Singapore Dollar",
            Currency::BRL => "Brazilian Real",
        }
    }

    /// Returns the standard number of decimal places for the currency.
    ///
    /// Used when rounding billed amounts for fee-extension rendering.
    #[must_use]
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0, // Yen has no minor unit
            _ => 2,
        }
    }

    /// Parses a currency from a string code.
    pub fn from_code(code: &str) -> Result<Self, CoreError> {
        match code.to_uppercase().as_str() {
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            "GBP" => Ok(Currency::GBP),
            "JPY" => Ok(Currency::JPY),
            "CHF" => Ok(Currency::CHF),
            "CAD" => Ok(Currency::CAD),
            "AUD" => Ok(Currency::AUD),
            "SEK" => Ok(Currency::SEK),
            "SGD" => Ok(Currency::SGD),
            "BRL" => Ok(Currency::BRL),
            _ => Err(CoreError::UnknownCurrency {
                code: code.to_string(),
            }),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

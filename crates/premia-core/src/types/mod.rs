//! Domain types for registry pricing.
//!
//! This module provides type-safe representations of registry concepts:
//!
//! - [`DomainLabel`]: The registrable label of a domain name plus its TLD
//! - [`Tld`] / [`TldSet`]: Top-level domains, including multi-part TLDs
//! - [`Money`]: Monetary amount with currency
//! - [`Currency`]: ISO currency codes

mod currency;
mod label;
mod money;

pub use currency::Currency;
pub use label::{DomainLabel, Tld, TldSet};
pub use money::Money;

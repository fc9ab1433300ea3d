//! # Premia Engine
//!
//! Concrete pricing policies implementing the [`PricingEngine`] contract:
//!
//! - [`StandardPricingEngine`]: flat per-TLD schedules with effective-dated
//!   price changes
//! - [`PremiumListEngine`]: premium-list-driven pricing with a standard
//!   fallback for unlisted names
//! - [`EarlyAccessEngine`]: decorator adding a one-time fee during
//!   early-access windows
//! - [`TldPricingRouter`]: composite that delegates to a registered policy
//!   per TLD
//!
//! Selection of which policy serves which deployment happens here, in the
//! composition layer; the contract itself stays narrow.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use chrono::Utc;
//! use premia_core::{Currency, Money, TldSet};
//! use premia_engine::StandardPricingEngine;
//! use premia_traits::PricingEngine;
//! use rust_decimal_macros::dec;
//!
//! let tlds = TldSet::from_tlds(["example"]).unwrap();
//! let mut engine = StandardPricingEngine::new(tlds);
//! engine.set_prices(
//!     "example",
//!     Money::new(dec!(10.00), Currency::USD),
//!     Money::new(dec!(10.00), Currency::USD),
//! ).unwrap();
//!
//! let prices = engine.domain_prices("foo.example", Utc::now()).unwrap();
//! assert!(!prices.is_premium());
//! ```
//!
//! [`PricingEngine`]: premia_traits::PricingEngine

#![warn(missing_docs)]
#![warn(clippy::all)]

mod eap;
mod premium;
mod router;
mod standard;

pub use eap::{EapWindow, EarlyAccessEngine};
pub use premium::PremiumListEngine;
pub use router::TldPricingRouter;
pub use standard::StandardPricingEngine;

//! # Premia Traits
//!
//! Contract definitions for the Premia pricing engine.
//!
//! This crate contains the narrow, stable abstractions pricing policies plug
//! into. Concrete policies live in `premia-engine`; data-source backends live
//! in `premia-ext-*` extension crates.
//!
//! ## Module Structure
//!
//! - [`pricing`]: The pricing contract ([`PricingEngine`]) and its result
//!   value ([`DomainPrices`])
//! - [`premium_list`]: Read-only premium name list sources
//! - [`fee`]: Fee-extension output types consumed by protocol rendering
//! - [`error`]: The pricing error taxonomy
//!
//! ## Dependency Injection
//!
//! Callers hold one selected [`PricingEngine`] per evaluation context and
//! invoke it once per priced operation:
//!
//! ```ignore
//! let engine: Arc<dyn PricingEngine> = registry.pricing_engine_for(tld);
//! let prices = engine.domain_prices("rich.example", now)?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod fee;
pub mod premium_list;
pub mod pricing;

// Re-export commonly used types
pub use error::{DomainPricesError, PricingError};
pub use fee::{FeeItem, FeeType};
pub use premium_list::{PremiumEntry, PremiumListError, PremiumListSource};
pub use pricing::{DomainPrices, PricingEngine};

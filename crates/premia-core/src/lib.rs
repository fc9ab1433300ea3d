//! # Premia Core
//!
//! Core types for the Premia domain pricing engine.
//!
//! This crate provides the foundational building blocks used throughout Premia:
//!
//! - **Types**: Domain-specific types like `DomainLabel`, `Tld`, `Money`, `Currency`
//! - **Errors**: Structured error types for label and money validation
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: Newtypes prevent mixing incompatible values
//! - **Fail Fast**: Invalid labels and inconsistent amounts are rejected at
//!   construction, never carried into pricing results
//! - **Explicit Over Implicit**: Clear, self-documenting APIs
//!
//! ## Example
//!
//! ```rust
//! use premia_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let tlds = TldSet::from_tlds(["example", "co.uk"]).unwrap();
//! let label = DomainLabel::parse("rich.example", &tlds).unwrap();
//! let price = Money::new(dec!(1000.00), Currency::USD);
//!
//! assert_eq!(label.label(), "rich");
//! assert_eq!(price.currency(), Currency::USD);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::return_self_not_must_use)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{Currency, DomainLabel, Money, Tld, TldSet};
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{Currency, DomainLabel, Money, Tld, TldSet};

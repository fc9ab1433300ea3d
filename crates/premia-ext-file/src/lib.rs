//! # Premia Ext File
//!
//! File-based premium list sources for the Premia pricing engine.
//!
//! This crate provides default implementations for testing and batch-loaded
//! static data:
//! - CSV-based premium list source
//! - Empty source (everything resolves non-premium)
//!
//! For database-backed lists, use a dedicated extension crate.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod premium_list;

pub use premium_list::{CsvPremiumListSource, EmptyPremiumListSource};

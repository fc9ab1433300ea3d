//! Premium name list source traits.
//!
//! A premium list maps (TLD, label) pairs to non-standard prices. Lists are
//! static/semi-static data (updated by batch import, not per-request);
//! sources are consumed read-only by pricing policies.
//!
//! Implementations live in extension crates:
//! - `premia-ext-file` -> CSV files

use serde::{Deserialize, Serialize};
use thiserror::Error;

use premia_core::{Money, Tld};

use crate::error::PricingError;

/// One premium list entry for a label under a TLD.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumEntry {
    /// The listed price, applied to both create and renew.
    pub price: Money,
    /// Fee class surfaced to fee-extension rendering (e.g. "premium",
    /// "premium-tier-2").
    pub fee_class: String,
}

/// Errors from a premium list backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PremiumListError {
    /// Backend IO failed.
    #[error("IO error: {0}")]
    Io(String),

    /// Backend data could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// Backend is unreachable or has no data for the TLD.
    #[error("source not available: {0}")]
    SourceNotAvailable(String),
}

impl From<PremiumListError> for PricingError {
    fn from(e: PremiumListError) -> Self {
        PricingError::unavailable(e.to_string())
    }
}

/// Read-only lookup of premium entries.
///
/// Implementations must be safe for concurrent reads; a caching
/// implementation must return consistent answers within one refresh epoch
/// so the pricing contract's determinism holds.
pub trait PremiumListSource: Send + Sync {
    /// Looks up the premium entry for a label under a TLD.
    ///
    /// `Ok(None)` means the label is not premium, which is a successful
    /// answer; errors are reserved for the backend being unable to answer
    /// at all.
    fn premium_entry(
        &self,
        tld: &Tld,
        label: &str,
    ) -> Result<Option<PremiumEntry>, PremiumListError>;
}

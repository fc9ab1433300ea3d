//! Early-access-period fee decorator.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use premia_core::{CoreError, Money};
use premia_traits::{DomainPrices, PricingEngine, PricingError};

/// One early-access window with its one-time fee.
#[derive(Debug, Clone)]
pub struct EapWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    fee: Money,
}

impl EapWindow {
    /// Creates a window over `[start, end)` charging the given fee.
    ///
    /// The fee must be strictly positive; a zero-fee window is just the
    /// absence of a window.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>, fee: Money) -> Result<Self, CoreError> {
        if !fee.is_positive() {
            return Err(CoreError::invalid_amount(
                fee.amount(),
                "EAP fee must be positive",
            ));
        }
        if end <= start {
            return Err(CoreError::invalid_amount(
                fee.amount(),
                "EAP window must end after it starts",
            ));
        }
        Ok(Self { start, end, fee })
    }

    /// Returns true if the window covers the given time.
    #[must_use]
    pub fn contains(&self, time: DateTime<Utc>) -> bool {
        self.start <= time && time < self.end
    }
}

/// Decorates any pricing policy with early-access-period fees.
///
/// During an active window the inner result gains a one-time fee;
/// create/renew costs and premium status pass through untouched. Outside
/// all windows the decorator is transparent.
pub struct EarlyAccessEngine {
    inner: Arc<dyn PricingEngine>,
    // Sorted ascending by start; the latest-starting active window wins
    // when phases overlap.
    windows: Vec<EapWindow>,
}

impl EarlyAccessEngine {
    /// Wraps an engine with the given EAP windows.
    #[must_use]
    pub fn new(inner: Arc<dyn PricingEngine>, mut windows: Vec<EapWindow>) -> Self {
        windows.sort_by_key(|w| w.start);
        Self { inner, windows }
    }

    /// Returns the fee in force at the given time, if any.
    fn active_fee(&self, time: DateTime<Utc>) -> Option<Money> {
        self.windows
            .iter()
            .rev()
            .find(|w| w.contains(time))
            .map(|w| w.fee)
    }
}

impl PricingEngine for EarlyAccessEngine {
    fn domain_prices(
        &self,
        fqdn: &str,
        price_time: DateTime<Utc>,
    ) -> Result<DomainPrices, PricingError> {
        let prices = self.inner.domain_prices(fqdn, price_time)?;
        match self.active_fee(price_time) {
            Some(fee) => {
                debug!(fqdn, fee = %fee, "early-access fee applies");
                prices.with_one_time_fee(fee).map_err(|e| {
                    PricingError::unavailable(format!("inconsistent EAP fee: {e}"))
                })
            }
            None => Ok(prices),
        }
    }
}

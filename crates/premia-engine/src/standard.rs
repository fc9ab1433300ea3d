//! Standard flat pricing with scheduled price changes.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use premia_core::{CoreError, DomainLabel, Money, Tld, TldSet};
use premia_traits::{DomainPrices, PricingEngine, PricingError};

/// One effective-dated price entry in a TLD schedule.
#[derive(Debug, Clone)]
struct ScheduledPrice {
    effective: DateTime<Utc>,
    create_cost: Money,
    renew_cost: Money,
}

/// Flat pricing per TLD: every label gets the scheduled create/renew price,
/// nothing is premium, and no one-time fee applies.
///
/// Price changes are forward-scheduled by effective time; resolution at a
/// past time returns the prices that were in force then, which keeps
/// retroactive audits exact.
#[derive(Debug, Clone)]
pub struct StandardPricingEngine {
    tlds: TldSet,
    // Sorted ascending by effective time per TLD.
    schedules: HashMap<Tld, Vec<ScheduledPrice>>,
}

impl StandardPricingEngine {
    /// Creates an engine serving the given TLD set with no schedules yet.
    #[must_use]
    pub fn new(tlds: TldSet) -> Self {
        Self {
            tlds,
            schedules: HashMap::new(),
        }
    }

    /// Sets the base prices for a TLD, effective from the beginning of time.
    pub fn set_prices(
        &mut self,
        tld: &str,
        create_cost: Money,
        renew_cost: Money,
    ) -> Result<(), CoreError> {
        self.schedule_change(tld, DateTime::<Utc>::MIN_UTC, create_cost, renew_cost)
    }

    /// Schedules a price change effective at the given time.
    pub fn schedule_change(
        &mut self,
        tld: &str,
        effective: DateTime<Utc>,
        create_cost: Money,
        renew_cost: Money,
    ) -> Result<(), CoreError> {
        let tld = Tld::new(tld)?;
        let schedule = self.schedules.entry(tld).or_default();
        schedule.push(ScheduledPrice {
            effective,
            create_cost,
            renew_cost,
        });
        schedule.sort_by_key(|entry| entry.effective);
        Ok(())
    }

    /// Returns the entry in force at the given time, if any.
    fn entry_at(&self, tld: &Tld, price_time: DateTime<Utc>) -> Option<&ScheduledPrice> {
        self.schedules
            .get(tld)?
            .iter()
            .rev()
            .find(|entry| entry.effective <= price_time)
    }
}

impl PricingEngine for StandardPricingEngine {
    fn domain_prices(
        &self,
        fqdn: &str,
        price_time: DateTime<Utc>,
    ) -> Result<DomainPrices, PricingError> {
        let label = DomainLabel::parse(fqdn, &self.tlds)?;
        let entry = self.entry_at(label.tld(), price_time).ok_or_else(|| {
            warn!(tld = %label.tld(), "no price schedule in force");
            PricingError::unavailable(format!(
                "no price schedule in force for TLD '{}' at {}",
                label.tld(),
                price_time
            ))
        })?;

        debug!(fqdn = %label, create = %entry.create_cost, "resolved standard prices");
        DomainPrices::standard(entry.create_cost, entry.renew_cost)
            .map_err(|e| PricingError::unavailable(format!("inconsistent schedule entry: {e}")))
    }
}

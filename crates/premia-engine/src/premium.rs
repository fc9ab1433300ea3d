//! Premium-list-driven pricing.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use premia_core::{DomainLabel, TldSet};
use premia_traits::{DomainPrices, PremiumListSource, PricingEngine, PricingError};

/// Prices labels off a premium name list, falling back to a standard policy
/// for unlisted names.
///
/// A listed label is premium: the listed price applies to both create and
/// renew, and the entry's fee class is surfaced. An unlisted label resolves
/// through the fallback engine, so "not premium" stays a successful result
/// rather than an error.
pub struct PremiumListEngine {
    tlds: TldSet,
    list: Arc<dyn PremiumListSource>,
    fallback: Arc<dyn PricingEngine>,
}

impl PremiumListEngine {
    /// Creates a premium-list policy over the given list and fallback.
    #[must_use]
    pub fn new(
        tlds: TldSet,
        list: Arc<dyn PremiumListSource>,
        fallback: Arc<dyn PricingEngine>,
    ) -> Self {
        Self {
            tlds,
            list,
            fallback,
        }
    }
}

impl PricingEngine for PremiumListEngine {
    fn domain_prices(
        &self,
        fqdn: &str,
        price_time: DateTime<Utc>,
    ) -> Result<DomainPrices, PricingError> {
        let label = DomainLabel::parse(fqdn, &self.tlds)?;

        // List backend failures become Unavailable, never a silent
        // non-premium answer.
        let entry = self.list.premium_entry(label.tld(), label.label())?;

        match entry {
            Some(entry) => {
                debug!(fqdn = %label, class = %entry.fee_class, "premium list hit");
                DomainPrices::premium(entry.price, entry.price, entry.fee_class).map_err(|e| {
                    PricingError::unavailable(format!("inconsistent premium list entry: {e}"))
                })
            }
            None => self.fallback.domain_prices(fqdn, price_time),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use premia_core::{Currency, Money, Tld};
    use premia_traits::{PremiumEntry, PremiumListError};
    use rust_decimal_macros::dec;

    use crate::StandardPricingEngine;

    fn usd(amount: rust_decimal::Decimal) -> Money {
        Money::new(amount, Currency::USD)
    }

    /// In-memory list with a single entry, or a failing backend.
    struct FakeList {
        entry: Option<(String, PremiumEntry)>,
        fail: bool,
    }

    impl PremiumListSource for FakeList {
        fn premium_entry(
            &self,
            _tld: &Tld,
            label: &str,
        ) -> Result<Option<PremiumEntry>, PremiumListError> {
            if self.fail {
                return Err(PremiumListError::SourceNotAvailable(
                    "list backend offline".to_string(),
                ));
            }
            Ok(self
                .entry
                .as_ref()
                .filter(|(listed, _)| listed == label)
                .map(|(_, entry)| entry.clone()))
        }
    }

    fn engine(list: FakeList) -> PremiumListEngine {
        let tlds = TldSet::from_tlds(["example"]).unwrap();
        let mut standard = StandardPricingEngine::new(tlds.clone());
        standard
            .set_prices("example", usd(dec!(10.00)), usd(dec!(10.00)))
            .unwrap();
        PremiumListEngine::new(tlds, Arc::new(list), Arc::new(standard))
    }

    fn rich_list() -> FakeList {
        FakeList {
            entry: Some((
                "rich".to_string(),
                PremiumEntry {
                    price: usd(dec!(1000.00)),
                    fee_class: "premium".to_string(),
                },
            )),
            fail: false,
        }
    }

    #[test]
    fn test_listed_label_is_premium() {
        let t1 = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let prices = engine(rich_list()).domain_prices("rich.example", t1).unwrap();
        assert!(prices.is_premium());
        assert_eq!(prices.create_cost(), usd(dec!(1000.00)));
        assert_eq!(prices.renew_cost(), usd(dec!(1000.00)));
        assert_eq!(prices.fee_class(), Some("premium"));
    }

    #[test]
    fn test_unlisted_label_falls_back_to_standard() {
        let t1 = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let prices = engine(rich_list()).domain_prices("poor.example", t1).unwrap();
        assert!(!prices.is_premium());
        assert_eq!(prices.create_cost(), usd(dec!(10.00)));
        assert!(prices.fee_class().is_none());
    }

    #[test]
    fn test_backend_failure_is_unavailable() {
        let t1 = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let err = engine(FakeList {
            entry: None,
            fail: true,
        })
        .domain_prices("rich.example", t1)
        .unwrap_err();
        assert!(matches!(err, PricingError::Unavailable { .. }));
    }

    #[test]
    fn test_subdomain_rejected_before_lookup() {
        let t1 = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let err = engine(rich_list())
            .domain_prices("www.rich.example", t1)
            .unwrap_err();
        assert!(matches!(err, PricingError::InvalidLabel { .. }));
    }

    #[test]
    fn test_determinism() {
        let engine = engine(rich_list());
        let t1 = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let a = engine.domain_prices("rich.example", t1).unwrap();
        let b = engine.domain_prices("rich.example", t1).unwrap();
        assert_eq!(a, b);
    }
}

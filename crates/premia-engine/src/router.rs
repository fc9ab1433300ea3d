//! Per-TLD policy routing.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use premia_core::{CoreError, DomainLabel, Tld, TldSet};
use premia_traits::{DomainPrices, PricingEngine, PricingError};

/// Composite policy that delegates resolution to a registered engine per
/// TLD, with an optional default fallback.
///
/// This is the composition layer the contract deliberately excludes:
/// deployments install one router and swap per-TLD policies behind it
/// without touching calling code.
pub struct TldPricingRouter {
    tlds: TldSet,
    routes: HashMap<Tld, Arc<dyn PricingEngine>>,
    default: Option<Arc<dyn PricingEngine>>,
}

impl TldPricingRouter {
    /// Creates a router serving the given TLD set with no routes yet.
    #[must_use]
    pub fn new(tlds: TldSet) -> Self {
        Self {
            tlds,
            routes: HashMap::new(),
            default: None,
        }
    }

    /// Registers the engine serving a TLD.
    pub fn route(&mut self, tld: &str, engine: Arc<dyn PricingEngine>) -> Result<(), CoreError> {
        self.routes.insert(Tld::new(tld)?, engine);
        Ok(())
    }

    /// Sets the fallback engine for TLDs with no registered route.
    pub fn set_default(&mut self, engine: Arc<dyn PricingEngine>) {
        self.default = Some(engine);
    }
}

impl PricingEngine for TldPricingRouter {
    fn domain_prices(
        &self,
        fqdn: &str,
        price_time: DateTime<Utc>,
    ) -> Result<DomainPrices, PricingError> {
        let label = DomainLabel::parse(fqdn, &self.tlds)?;
        let engine = self
            .routes
            .get(label.tld())
            .or(self.default.as_ref())
            .ok_or_else(|| {
                warn!(tld = %label.tld(), "no pricing policy installed");
                PricingError::unavailable(format!(
                    "no pricing policy installed for TLD '{}'",
                    label.tld()
                ))
            })?;

        debug!(fqdn = %label, tld = %label.tld(), "routing price resolution");
        engine.domain_prices(fqdn, price_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use premia_core::{Currency, Money};
    use rust_decimal_macros::dec;

    use crate::StandardPricingEngine;

    fn usd(amount: rust_decimal::Decimal) -> Money {
        Money::new(amount, Currency::USD)
    }

    fn flat_engine(tld: &str, price: Money) -> Arc<dyn PricingEngine> {
        let tlds = TldSet::from_tlds([tld]).unwrap();
        let mut engine = StandardPricingEngine::new(tlds);
        engine.set_prices(tld, price, price).unwrap();
        Arc::new(engine)
    }

    #[test]
    fn test_routes_by_tld() {
        let tlds = TldSet::from_tlds(["example", "co.uk"]).unwrap();
        let mut router = TldPricingRouter::new(tlds);
        router
            .route("example", flat_engine("example", usd(dec!(10.00))))
            .unwrap();
        router
            .route("co.uk", flat_engine("co.uk", usd(dec!(8.00))))
            .unwrap();

        let t1 = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        assert_eq!(
            router.domain_prices("foo.example", t1).unwrap().create_cost(),
            usd(dec!(10.00))
        );
        assert_eq!(
            router.domain_prices("foo.co.uk", t1).unwrap().create_cost(),
            usd(dec!(8.00))
        );
    }

    #[test]
    fn test_default_fallback() {
        let tlds = TldSet::from_tlds(["example", "test"]).unwrap();
        let mut router = TldPricingRouter::new(tlds.clone());
        router
            .route("example", flat_engine("example", usd(dec!(10.00))))
            .unwrap();

        let mut default = StandardPricingEngine::new(tlds);
        default
            .set_prices("test", usd(dec!(5.00)), usd(dec!(5.00)))
            .unwrap();
        router.set_default(Arc::new(default));

        let t1 = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        assert_eq!(
            router.domain_prices("foo.test", t1).unwrap().create_cost(),
            usd(dec!(5.00))
        );
    }

    #[test]
    fn test_unrouted_tld_without_default_is_unavailable() {
        let tlds = TldSet::from_tlds(["example", "test"]).unwrap();
        let mut router = TldPricingRouter::new(tlds);
        router
            .route("example", flat_engine("example", usd(dec!(10.00))))
            .unwrap();

        let t1 = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let err = router.domain_prices("foo.test", t1).unwrap_err();
        assert!(matches!(err, PricingError::Unavailable { .. }));
    }

    #[test]
    fn test_subdomain_rejected_at_router() {
        let tlds = TldSet::from_tlds(["example"]).unwrap();
        let mut router = TldPricingRouter::new(tlds);
        router
            .route("example", flat_engine("example", usd(dec!(10.00))))
            .unwrap();

        let t1 = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let err = router.domain_prices("www.foo.example", t1).unwrap_err();
        assert!(matches!(err, PricingError::InvalidLabel { .. }));
    }
}

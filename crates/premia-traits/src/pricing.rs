//! The pricing contract and its result value.
//!
//! [`PricingEngine`] is the one capability every pricing policy implements:
//! given a fully qualified domain name and an evaluation time, produce a
//! [`DomainPrices`]. Callers (order processing, fee-extension rendering,
//! billing) hold a policy behind this trait and never interpret prices
//! themselves.

use chrono::{DateTime, Utc};
use serde::Serialize;

use premia_core::Money;

use crate::error::{DomainPricesError, PricingError};

/// A pluggable premium pricing policy.
///
/// # Contract
///
/// - The name must contain exactly one label left of the TLD; sub-domains
///   fail with [`PricingError::InvalidLabel`], while multi-part TLDs
///   ("example.co.uk") are valid.
/// - `price_time` may be any timestamp, past or future, to support
///   retroactive auditing and forward-scheduled pricing.
/// - Resolution is deterministic: the same (policy state, name, time)
///   triple yields the same result, and the call is side-effect-free from
///   the caller's perspective. Read-only lookups are permitted; mutating
///   shared pricing state is not.
/// - Implementations must be callable concurrently without external
///   synchronization; backing data must be safe for concurrent reads.
/// - Inability to determine a price is [`PricingError::Unavailable`],
///   which is distinct from a successful non-premium result. Policies that
///   perform IO own their timeout behavior and surface failures as
///   `Unavailable` rather than hanging.
pub trait PricingEngine: Send + Sync {
    /// Returns the prices for the given fully qualified domain name at the
    /// given time.
    fn domain_prices(
        &self,
        fqdn: &str,
        price_time: DateTime<Utc>,
    ) -> Result<DomainPrices, PricingError>;
}

/// The result of one pricing resolution.
///
/// Immutable once constructed; the validating constructor is the only way
/// to obtain a value, so downstream consumers can rely on:
///
/// - `create_cost` and `renew_cost` are non-negative;
/// - all amounts share one currency;
/// - `fee_class`, when present, is a non-empty identifier.
///
/// The value carries no back-reference to the name or time that produced
/// it and is owned outright by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainPrices {
    is_premium: bool,
    create_cost: Money,
    renew_cost: Money,
    one_time_fee: Option<Money>,
    fee_class: Option<String>,
}

impl DomainPrices {
    /// Creates a validated pricing result.
    ///
    /// # Errors
    ///
    /// Fails fast with [`DomainPricesError`] when a cost is negative, the
    /// amounts span more than one currency, or a present fee class is
    /// empty. An inconsistent result must never reach a caller.
    pub fn new(
        is_premium: bool,
        create_cost: Money,
        renew_cost: Money,
        one_time_fee: Option<Money>,
        fee_class: Option<String>,
    ) -> Result<Self, DomainPricesError> {
        if create_cost.is_negative() {
            return Err(DomainPricesError::NegativeCost {
                field: "create",
                value: create_cost.amount(),
            });
        }
        if renew_cost.is_negative() {
            return Err(DomainPricesError::NegativeCost {
                field: "renew",
                value: renew_cost.amount(),
            });
        }
        if !renew_cost.same_currency(&create_cost) {
            return Err(DomainPricesError::CurrencyMismatch {
                field: "renew",
                expected: create_cost.currency(),
                found: renew_cost.currency(),
            });
        }
        if let Some(ref fee) = one_time_fee {
            if !fee.same_currency(&create_cost) {
                return Err(DomainPricesError::CurrencyMismatch {
                    field: "one-time fee",
                    expected: create_cost.currency(),
                    found: fee.currency(),
                });
            }
        }
        if let Some(ref class) = fee_class {
            if class.is_empty() {
                return Err(DomainPricesError::EmptyFeeClass);
            }
        }
        Ok(Self {
            is_premium,
            create_cost,
            renew_cost,
            one_time_fee,
            fee_class,
        })
    }

    /// Creates a standard (non-premium) result with no one-time fee and no
    /// fee class.
    pub fn standard(create_cost: Money, renew_cost: Money) -> Result<Self, DomainPricesError> {
        Self::new(false, create_cost, renew_cost, None, None)
    }

    /// Creates a premium result carrying the given fee class.
    pub fn premium(
        create_cost: Money,
        renew_cost: Money,
        fee_class: impl Into<String>,
    ) -> Result<Self, DomainPricesError> {
        Self::new(true, create_cost, renew_cost, None, Some(fee_class.into()))
    }

    /// Returns a copy of this result with the given one-time fee attached.
    ///
    /// Revalidates, so a fee in a different currency still fails.
    pub fn with_one_time_fee(&self, fee: Money) -> Result<Self, DomainPricesError> {
        Self::new(
            self.is_premium,
            self.create_cost,
            self.renew_cost,
            Some(fee),
            self.fee_class.clone(),
        )
    }

    /// Returns whether the name is premium at the evaluated time.
    #[must_use]
    pub fn is_premium(&self) -> bool {
        self.is_premium
    }

    /// Returns the cost to create the domain.
    #[must_use]
    pub fn create_cost(&self) -> Money {
        self.create_cost
    }

    /// Returns the cost to renew the domain.
    #[must_use]
    pub fn renew_cost(&self) -> Money {
        self.renew_cost
    }

    /// Returns the one-time fee to register the domain, if there is one.
    ///
    /// Primarily used for early-access-period registration fees.
    #[must_use]
    pub fn one_time_fee(&self) -> Option<Money> {
        self.one_time_fee
    }

    /// Returns the fee class surfaced to fee-extension rendering, if the
    /// policy assigned one.
    #[must_use]
    pub fn fee_class(&self) -> Option<&str> {
        self.fee_class.as_deref()
    }
}

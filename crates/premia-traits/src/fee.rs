//! Fee-extension output types.
//!
//! These types carry a resolved [`DomainPrices`] to protocol rendering
//! (the EPP fee extension) and billing. Consumers read the items as-is and
//! must not re-derive premium status independently.
//!
//! The fixed create/renew/EAP shape is the committed contract; `FeeType` is
//! the seam where further named costs (restore, transfer) would be added.
//!
//! [`DomainPrices`]: crate::pricing::DomainPrices

use serde::Serialize;
use std::fmt;

use premia_core::Money;

use crate::pricing::DomainPrices;

/// Kind of fee surfaced in a fee extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FeeType {
    /// Fee to create the domain
    Create,
    /// Fee to renew the domain
    Renew,
    /// One-time early-access-period fee
    Eap,
}

impl FeeType {
    /// Returns the wire name used in fee-extension rendering.
    #[must_use]
    pub fn wire_name(&self) -> &'static str {
        match self {
            FeeType::Create => "create",
            FeeType::Renew => "renew",
            FeeType::Eap => "Early Access Period",
        }
    }
}

impl fmt::Display for FeeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

/// One fee line item for protocol rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeeItem {
    /// What the fee is for.
    pub fee_type: FeeType,
    /// The cost, in the single currency of the originating result.
    pub cost: Money,
    /// Fee class, carried for create/renew when the policy assigned one.
    pub class: Option<String>,
}

impl FeeItem {
    /// Expands a pricing result into fee line items.
    ///
    /// Always emits create and renew items; emits an EAP item only when the
    /// result carries a one-time fee. The fee class, when present, rides on
    /// the create and renew items.
    #[must_use]
    pub fn from_prices(prices: &DomainPrices) -> Vec<FeeItem> {
        let class = prices.fee_class().map(str::to_string);
        let mut items = vec![
            FeeItem {
                fee_type: FeeType::Create,
                cost: prices.create_cost(),
                class: class.clone(),
            },
            FeeItem {
                fee_type: FeeType::Renew,
                cost: prices.renew_cost(),
                class,
            },
        ];
        if let Some(fee) = prices.one_time_fee() {
            items.push(FeeItem {
                fee_type: FeeType::Eap,
                cost: fee,
                class: None,
            });
        }
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use premia_core::Currency;
    use rust_decimal_macros::dec;

    fn usd(amount: rust_decimal::Decimal) -> Money {
        Money::new(amount, Currency::USD)
    }

    #[test]
    fn test_standard_prices_two_items() {
        let prices = DomainPrices::standard(usd(dec!(10.00)), usd(dec!(10.00))).unwrap();
        let items = FeeItem::from_prices(&prices);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].fee_type, FeeType::Create);
        assert_eq!(items[1].fee_type, FeeType::Renew);
        assert!(items.iter().all(|i| i.class.is_none()));
    }

    #[test]
    fn test_premium_class_rides_on_items() {
        let prices = DomainPrices::premium(usd(dec!(1000)), usd(dec!(1000)), "premium").unwrap();
        let items = FeeItem::from_prices(&prices);
        assert_eq!(items[0].class.as_deref(), Some("premium"));
        assert_eq!(items[1].class.as_deref(), Some("premium"));
    }

    #[test]
    fn test_eap_item_when_one_time_fee() {
        let prices = DomainPrices::standard(usd(dec!(10.00)), usd(dec!(10.00)))
            .unwrap()
            .with_one_time_fee(usd(dec!(25.00)))
            .unwrap();
        let items = FeeItem::from_prices(&prices);
        assert_eq!(items.len(), 3);
        let eap = &items[2];
        assert_eq!(eap.fee_type, FeeType::Eap);
        assert_eq!(eap.cost.amount(), dec!(25.00));
        assert!(eap.class.is_none());
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(FeeType::Create.wire_name(), "create");
        assert_eq!(FeeType::Eap.to_string(), "Early Access Period");
    }
}

//! Distance brackets → delivery fee and minimum order value.

use serde::{Deserialize, Serialize};

use horta_core::{Money, ValueObject};

/// One distance bracket.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryTier {
    /// Inclusive upper bound; `None` for the open-ended last bracket.
    pub max_distance_km: Option<u32>,
    pub delivery_fee: Money,
    pub min_order_value: Money,
}

impl ValueObject for DeliveryTier {}

/// Ordered table; the first bracket whose bound covers the distance wins.
pub const TIERS: [DeliveryTier; 4] = [
    DeliveryTier {
        max_distance_km: Some(10),
        delivery_fee: Money::from_reais(0),
        min_order_value: Money::from_reais(100),
    },
    DeliveryTier {
        max_distance_km: Some(20),
        delivery_fee: Money::from_reais(15),
        min_order_value: Money::from_reais(150),
    },
    DeliveryTier {
        max_distance_km: Some(30),
        delivery_fee: Money::from_reais(25),
        min_order_value: Money::from_reais(200),
    },
    DeliveryTier {
        max_distance_km: None,
        delivery_fee: Money::from_reais(35),
        min_order_value: Money::from_reais(250),
    },
];

impl DeliveryTier {
    pub fn covers(&self, distance_km: u32) -> bool {
        self.max_distance_km.is_none_or(|max| distance_km <= max)
    }

    /// Cart total from which delivery becomes free: twice the tier minimum.
    pub fn free_shipping_threshold(&self) -> Money {
        self.min_order_value.saturating_mul(2)
    }
}

pub fn resolve_tier(distance_km: u32) -> DeliveryTier {
    TIERS
        .iter()
        .copied()
        .find(|tier| tier.covers(distance_km))
        .unwrap_or(TIERS[TIERS.len() - 1])
}

/// Fee actually charged for a cart, plus the tier minimum as context.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeQuote {
    pub delivery_fee: Money,
    /// Always the tier's own minimum, even when shipping ended up free.
    pub min_order_value: Money,
}

impl ValueObject for FeeQuote {}

/// Resolve the tier, then zero the fee when the cart reaches twice the tier
/// minimum.
pub fn quote(distance_km: u32, cart_total: Money) -> FeeQuote {
    let tier = resolve_tier(distance_km);
    let delivery_fee = if cart_total >= tier.free_shipping_threshold() {
        Money::ZERO
    } else {
        tier.delivery_fee
    };

    FeeQuote {
        delivery_fee,
        min_order_value: tier.min_order_value,
    }
}

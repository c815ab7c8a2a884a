//! Orders as the backend sends them, and the canonical form used everywhere
//! else.
//!
//! The upstream payload is not stable: unit prices arrive under different
//! names, the address is either a string or an object, timestamps may lack a
//! timezone. All of that is resolved here, once, in `Order::try_from`.
//!
//! Orders are shown, never validated: a line whose price cannot be resolved
//! is kept with no unit price rather than hiding the whole order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use horta_core::{DomainError, DomainResult, Money};

use crate::status::OrderStatus;

/// Line item exactly as received.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawOrderItem {
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    pub quantity: u32,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub unit_price: Option<f64>,
    /// Line total, used only when no unit price is present.
    #[serde(default)]
    pub total: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredAddress {
    pub street: String,
    pub number: String,
    #[serde(default)]
    pub complement: Option<String>,
    #[serde(default)]
    pub neighborhood: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zipcode: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawShippingAddress {
    Text(String),
    Structured(StructuredAddress),
}

impl RawShippingAddress {
    /// Single-line form: text as-is, objects as `"{street}, {number}"`.
    /// Blank text has no line.
    pub fn to_line(&self) -> Option<String> {
        match self {
            Self::Text(text) if text.trim().is_empty() => None,
            Self::Text(text) => Some(text.clone()),
            Self::Structured(addr) => Some(format!("{}, {}", addr.street, addr.number)),
        }
    }
}

/// Order exactly as received from the order-data collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawOrder {
    pub order_number: String,
    pub status: String,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub items: Vec<RawOrderItem>,
    #[serde(default)]
    pub shipping_address: Option<RawShippingAddress>,
    #[serde(default, with = "timestamp::option")]
    pub delivery_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub delivery_fee: Option<f64>,
    pub total: f64,
}

/// Canonical line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub quantity: u32,
    /// `None` when the payload carried no usable price for the line.
    pub unit_price: Option<Money>,
}

impl LineItem {
    pub fn line_total(&self) -> Option<Money> {
        self.unit_price
            .map(|unit| unit.saturating_mul(u64::from(self.quantity)))
    }
}

/// Canonical order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub order_number: String,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub items: Vec<LineItem>,
    pub shipping_address: Option<String>,
    pub delivery_date: Option<DateTime<Utc>>,
    pub delivery_fee: Money,
    pub total: Money,
}

/// Upstream truthiness: zero and NaN count as absent.
fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

fn present_text(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

/// Unit price resolution, in this order: `price`, then `unit_price`, then
/// `total / quantity`.
pub fn resolve_unit_price(item: &RawOrderItem) -> DomainResult<Money> {
    let reais = match present(item.price).or(present(item.unit_price)) {
        Some(unit) => unit,
        None => {
            let total = item.total.ok_or_else(|| {
                DomainError::invalid_input("line item has no price, unit_price or total")
            })?;
            if item.quantity == 0 {
                return Err(DomainError::invalid_input(
                    "cannot derive unit price from total with zero quantity",
                ));
            }
            total / f64::from(item.quantity)
        }
    };
    Money::try_from_reais_f64(reais)
}

impl From<RawOrderItem> for LineItem {
    fn from(item: RawOrderItem) -> Self {
        let name = present_text(item.product_name.as_ref())
            .or(present_text(item.name.as_ref()))
            .unwrap_or_default()
            .to_string();

        let unit_price = resolve_unit_price(&item)
            .inspect_err(|err| {
                tracing::warn!(item = %name, error = %err, "line item price unavailable");
            })
            .ok();

        Self {
            name,
            quantity: item.quantity,
            unit_price,
        }
    }
}

impl TryFrom<RawOrder> for Order {
    type Error = DomainError;

    fn try_from(raw: RawOrder) -> Result<Self, Self::Error> {
        let items = raw.items.into_iter().map(LineItem::from).collect();

        let delivery_fee = match present(raw.delivery_fee) {
            Some(fee) => Money::try_from_reais_f64(fee)?,
            None => Money::ZERO,
        };

        Ok(Self {
            status: OrderStatus::from(raw.status),
            order_number: raw.order_number,
            created_at: raw.created_at,
            items,
            shipping_address: raw.shipping_address.as_ref().and_then(RawShippingAddress::to_line),
            delivery_date: raw.delivery_date,
            delivery_fee,
            total: Money::try_from_reais_f64(raw.total)?,
        })
    }
}

/// Timestamps with or without an offset; naive values are taken as UTC.
mod timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn parse(s: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
        match DateTime::parse_from_rfc3339(s) {
            Ok(dt) => Ok(dt.with_timezone(&Utc)),
            Err(_) => NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f").map(|n| n.and_utc()),
        }
    }

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse(&s).map_err(serde::de::Error::custom)
    }

    pub mod option {
        use super::*;

        pub fn serialize<S: Serializer>(
            value: &Option<DateTime<Utc>>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(dt) => super::serialize(dt, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<DateTime<Utc>>, D::Error> {
            Option::<String>::deserialize(deserializer)?
                .map(|s| parse(&s).map_err(serde::de::Error::custom))
                .transpose()
        }
    }
}

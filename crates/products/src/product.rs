use serde::{Deserialize, Serialize};

use horta_core::Money;

/// Product identifier as issued by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Category id (see [`crate::category::Category`]).
    pub category: String,
    /// Price per `unit`.
    pub price: Money,
    /// Promotional price, charged only while `is_promo` is set.
    #[serde(rename = "promoPrice", default, skip_serializing_if = "Option::is_none")]
    pub promo_price: Option<Money>,
    #[serde(rename = "isPromo", default)]
    pub is_promo: bool,
    /// Selling unit (`kg`, `unidade`, `maço`).
    pub unit: String,
    /// Smallest quantity that can be ordered, also the cart step.
    #[serde(rename = "minOrder")]
    pub min_order: u32,
    pub stock: u32,
    pub image: String,
    pub description: String,
}

impl Product {
    /// Price the cart charges: the promotional price when the promotion is on
    /// and carries a non-zero price, the list price otherwise.
    pub fn effective_price(&self) -> Money {
        match self.promo_price {
            Some(promo) if self.is_promo && !promo.is_zero() => promo,
            _ => self.price,
        }
    }

    pub fn has_promo(&self) -> bool {
        self.effective_price() != self.price
    }

    pub fn is_available(&self) -> bool {
        self.stock > 0
    }

    /// Label for the card, only when buying a single unit is not allowed.
    pub fn min_order_label(&self) -> Option<String> {
        (self.min_order > 1).then(|| format!("Pedido mínimo: {} {}", self.min_order, self.unit))
    }

    pub fn stock_label(&self) -> String {
        format!("Estoque: {} {}", self.stock, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basil() -> Product {
        Product {
            id: ProductId::new("7"),
            name: "Manjericão Fresco".to_string(),
            category: "temperos".to_string(),
            price: Money::from_centavos(600),
            promo_price: None,
            is_promo: false,
            unit: "maço".to_string(),
            min_order: 2,
            stock: 60,
            image: "/fresh-basil.png".to_string(),
            description: "Manjericão fresco aromático".to_string(),
        }
    }

    #[test]
    fn labels_follow_unit() {
        let p = basil();
        assert_eq!(p.min_order_label().as_deref(), Some("Pedido mínimo: 2 maço"));
        assert_eq!(p.stock_label(), "Estoque: 60 maço");
    }

    #[test]
    fn single_unit_minimum_has_no_label() {
        let p = Product { min_order: 1, ..basil() };
        assert_eq!(p.min_order_label(), None);
    }

    #[test]
    fn out_of_stock_is_unavailable() {
        let p = Product { stock: 0, ..basil() };
        assert!(!p.is_available());
    }

    #[test]
    fn promo_price_applies_only_while_promo_is_on() {
        let on_sale = Product {
            promo_price: Some(Money::from_centavos(450)),
            is_promo: true,
            ..basil()
        };
        assert_eq!(on_sale.effective_price(), Money::from_centavos(450));
        assert!(on_sale.has_promo());

        let ended = Product { is_promo: false, ..on_sale.clone() };
        assert_eq!(ended.effective_price(), Money::from_centavos(600));

        let no_price = Product { promo_price: Some(Money::ZERO), ..on_sale };
        assert_eq!(no_price.effective_price(), Money::from_centavos(600));
        assert!(!no_price.has_promo());
    }

    #[test]
    fn promo_fields_default_when_absent() {
        let json = r#"{"id": "7", "name": "Manjericão Fresco", "category": "temperos",
            "price": 600, "unit": "maço", "minOrder": 2, "stock": 60,
            "image": "/fresh-basil.png", "description": ""}"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert!(!p.is_promo);
        assert_eq!(p.promo_price, None);
    }

    #[test]
    fn serializes_with_upstream_field_names() {
        let json = serde_json::to_value(basil()).unwrap();
        assert_eq!(json["id"], "7");
        assert_eq!(json["minOrder"], 2);
        assert_eq!(json["price"], 600);
    }
}

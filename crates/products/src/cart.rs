//! Shopping cart with minimum-order and stock limits.
//!
//! Quantities move in steps of the product's `min_order` and are clamped to
//! `[min_order, stock]` when typed directly.

use serde::{Deserialize, Serialize};

use horta_core::{DomainError, DomainResult, Money};

use crate::product::{Product, ProductId};

pub const INSUFFICIENT_STOCK: &str = "Estoque insuficiente";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    /// Quantity times the product's effective (promotional or list) price.
    pub fn subtotal(&self) -> Money {
        self.product
            .effective_price()
            .saturating_mul(u64::from(self.quantity))
    }

    fn min_order(&self) -> u32 {
        self.product.min_order.max(1)
    }
}

/// Why a typed quantity was not applied as-is.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Clamp {
    /// Raised to the minimum order.
    RaisedToMinimum(u32),
    /// Lowered to the available stock.
    LoweredToStock(u32),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn quantity_of(&self, id: &ProductId) -> Option<u32> {
        self.line(id).map(|l| l.quantity)
    }

    /// Sum of line subtotals; this is what delivery estimates use.
    pub fn total(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::ZERO, |acc, line| acc + line.subtotal())
    }

    fn line(&self, id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.product.id == id)
    }

    fn line_mut(&mut self, id: &ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|l| &l.product.id == id)
    }

    /// Add one minimum-order step of `product`.
    pub fn add(&mut self, product: &Product) -> DomainResult<u32> {
        let step = product.min_order.max(1);
        let current = self.quantity_of(&product.id).unwrap_or(0);
        let next = current
            .checked_add(step)
            .filter(|next| *next <= product.stock)
            .ok_or_else(|| DomainError::invalid_input(INSUFFICIENT_STOCK))?;

        match self.line_mut(&product.id) {
            Some(line) => line.quantity = next,
            None => self.lines.push(CartLine {
                product: product.clone(),
                quantity: next,
            }),
        }
        Ok(next)
    }

    /// Remove one minimum-order step. Going below the minimum removes the
    /// line and returns `None`.
    pub fn decrement(&mut self, id: &ProductId) -> DomainResult<Option<u32>> {
        let line = self.line_mut(id).ok_or_else(DomainError::not_found)?;
        let step = line.min_order();
        match line.quantity.checked_sub(step).filter(|q| *q >= step) {
            Some(next) => {
                line.quantity = next;
                Ok(Some(next))
            }
            None => {
                self.remove(id);
                Ok(None)
            }
        }
    }

    /// Set a typed quantity, clamped to `[min_order, stock]`.
    pub fn set_quantity(&mut self, id: &ProductId, quantity: u32) -> DomainResult<Option<Clamp>> {
        let line = self.line_mut(id).ok_or_else(DomainError::not_found)?;
        let min = line.min_order();

        let (applied, clamp) = if quantity < min {
            (min, Some(Clamp::RaisedToMinimum(min)))
        } else if quantity > line.product.stock {
            let stock = line.product.stock;
            (stock, Some(Clamp::LoweredToStock(stock)))
        } else {
            (quantity, None)
        };

        if clamp.is_some() {
            tracing::debug!(product_id = %id, requested = quantity, applied, "cart quantity clamped");
        }
        line.quantity = applied;
        Ok(clamp)
    }

    pub fn remove(&mut self, id: &ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| &l.product.id != id);
        self.lines.len() != before
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use proptest::prelude::*;

    fn product(id: &str) -> Product {
        Catalog::seed()
            .get_product(&ProductId::new(id))
            .unwrap()
            .clone()
    }

    #[test]
    fn add_steps_by_minimum_order() {
        let lettuce = product("1");
        let mut cart = Cart::new();
        assert_eq!(cart.add(&lettuce).unwrap(), 5);
        assert_eq!(cart.add(&lettuce).unwrap(), 10);
        assert_eq!(cart.total(), Money::from_reais(45));
    }

    #[test]
    fn add_beyond_stock_is_rejected() {
        let scarce = Product {
            stock: 4,
            ..product("1")
        };
        let mut cart = Cart::new();
        let err = cart.add(&scarce).unwrap_err();
        assert_eq!(err, DomainError::invalid_input(INSUFFICIENT_STOCK));
        assert!(cart.is_empty());
    }

    #[test]
    fn promo_line_uses_promotional_price() {
        let lettuce = Product {
            promo_price: Some(Money::from_centavos(350)),
            is_promo: true,
            ..product("1")
        };
        let mut cart = Cart::new();
        cart.add(&lettuce).unwrap();
        cart.add(&product("2")).unwrap();

        // 5 x 3.50 + 2 x 6.90
        assert_eq!(cart.lines()[0].subtotal(), Money::from_centavos(1750));
        assert_eq!(cart.total(), Money::from_centavos(3130));
    }

    #[test]
    fn huge_minimum_order_does_not_overflow() {
        let bulk = Product {
            min_order: u32::MAX,
            stock: u32::MAX,
            ..product("1")
        };
        let mut cart = Cart::new();
        assert_eq!(cart.add(&bulk).unwrap(), u32::MAX);
        assert_eq!(
            cart.add(&bulk).unwrap_err(),
            DomainError::invalid_input(INSUFFICIENT_STOCK)
        );
    }

    #[test]
    fn decrement_below_minimum_removes_line() {
        let basil = product("7");
        let mut cart = Cart::new();
        cart.add(&basil).unwrap();
        cart.add(&basil).unwrap();

        assert_eq!(cart.decrement(&basil.id).unwrap(), Some(2));
        assert_eq!(cart.decrement(&basil.id).unwrap(), None);
        assert!(cart.is_empty());
    }

    #[test]
    fn typed_quantity_is_clamped() {
        let basil = product("7");
        let mut cart = Cart::new();
        cart.add(&basil).unwrap();

        assert_eq!(
            cart.set_quantity(&basil.id, 1).unwrap(),
            Some(Clamp::RaisedToMinimum(2))
        );
        assert_eq!(
            cart.set_quantity(&basil.id, 1_000).unwrap(),
            Some(Clamp::LoweredToStock(60))
        );
        assert_eq!(cart.set_quantity(&basil.id, 7).unwrap(), None);
        assert_eq!(cart.quantity_of(&basil.id), Some(7));
    }

    #[test]
    fn unknown_line_is_not_found() {
        let mut cart = Cart::new();
        assert_eq!(
            cart.set_quantity(&ProductId::new("1"), 3),
            Err(DomainError::NotFound)
        );
    }

    proptest! {
        #[test]
        fn total_is_sum_of_subtotals(requests in prop::collection::vec((1usize..=12, 0u32..600), 0..20)) {
            let catalog = Catalog::seed();
            let mut cart = Cart::new();
            for (idx, qty) in requests {
                let p = catalog.get_product(&ProductId::new(idx.to_string())).unwrap();
                if cart.add(p).is_ok() {
                    cart.set_quantity(&p.id, qty).unwrap();
                }
            }

            let expected: u64 = cart
                .lines()
                .iter()
                .map(|l| l.product.effective_price().centavos() * u64::from(l.quantity))
                .sum();
            prop_assert_eq!(cart.total(), Money::from_centavos(expected));
            for line in cart.lines() {
                prop_assert!(line.quantity >= line.product.min_order);
                prop_assert!(line.quantity <= line.product.stock);
            }
        }
    }
}

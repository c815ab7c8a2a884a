//! Product catalog and cart.
//!
//! The catalog stands in for the backend's product listing: a fixed assortment
//! filtered by category. The cart applies minimum-order and stock limits and
//! provides the total that delivery estimates are computed against.

pub mod cart;
pub mod catalog;
pub mod category;
pub mod product;

pub use cart::{Cart, CartLine, Clamp};
pub use catalog::Catalog;
pub use category::{Category, CategoryFilter};
pub use product::{Product, ProductId};

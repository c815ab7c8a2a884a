//! Orders as seen by the storefront.
//!
//! Status display, canonical ingestion of backend payloads and the customer's
//! order history. No transition logic: the backend owns the lifecycle.

pub mod history;
pub mod order;
pub mod status;

pub use history::{load_order_history, OrderHistory, OrderSource, OrderView, UNAVAILABLE_AMOUNT};
pub use order::{LineItem, Order, RawOrder, RawOrderItem, RawShippingAddress, StructuredAddress};
pub use status::{describe_status, OrderStatus, StatusDisplay, StatusIcon};

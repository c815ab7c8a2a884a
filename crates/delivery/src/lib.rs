//! Delivery estimation engine.
//!
//! Deterministic domain logic only: a postal code and a cart total go in, a
//! distance, ETA label and fee tier come out. There is no geocoding and
//! nothing is persisted.

pub mod distance;
pub mod estimator;
pub mod eta;
pub mod postal_code;
pub mod simulator;
pub mod tier;

pub use distance::estimate_distance_km;
pub use estimator::{
    calculate_delivery, estimate, DeliveryConfig, DeliveryEstimate, DeliveryEstimator,
    DEFAULT_SIMULATED_LATENCY,
};
pub use eta::estimate_time;
pub use postal_code::PostalCode;
pub use simulator::DeliverySimulator;
pub use tier::{quote, resolve_tier, DeliveryTier, FeeQuote};

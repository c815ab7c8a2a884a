//! Delivery estimate facade: postal code + cart total → estimate.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use horta_core::{DomainResult, Money, ValueObject};

use crate::distance::estimate_distance_km;
use crate::eta::estimate_time;
use crate::postal_code::PostalCode;
use crate::tier::quote;

/// Latency the storefront simulates before answering an estimate.
pub const DEFAULT_SIMULATED_LATENCY: Duration = Duration::from_millis(500);

/// Result of one estimate request. Recomputed on every call, never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryEstimate {
    pub distance_km: u32,
    pub estimated_time: String,
    pub delivery_fee: Money,
    pub min_order_value: Money,
    /// The postal code exactly as the caller sent it.
    pub postal_code: String,
}

impl ValueObject for DeliveryEstimate {}

impl DeliveryEstimate {
    pub fn is_free_shipping(&self) -> bool {
        self.delivery_fee.is_zero()
    }
}

/// Pure estimation: validate, then compose distance, ETA and fee tier.
pub fn estimate(raw_postal_code: &str, cart_total: Money) -> DomainResult<DeliveryEstimate> {
    let postal_code = PostalCode::parse(raw_postal_code).inspect_err(|_| {
        tracing::warn!(postal_code = raw_postal_code, "rejected postal code");
    })?;

    let distance_km = estimate_distance_km(&postal_code);
    let fee = quote(distance_km, cart_total);

    tracing::debug!(
        postal_code = postal_code.digits(),
        distance_km,
        cart_total = cart_total.centavos(),
        delivery_fee = fee.delivery_fee.centavos(),
        "delivery estimated"
    );

    Ok(DeliveryEstimate {
        distance_km,
        estimated_time: estimate_time(distance_km),
        delivery_fee: fee.delivery_fee,
        min_order_value: fee.min_order_value,
        postal_code: postal_code.raw().to_string(),
    })
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DeliveryConfig {
    pub simulated_latency: Duration,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            simulated_latency: DEFAULT_SIMULATED_LATENCY,
        }
    }
}

/// Async facade over [`estimate`], with a fixed simulated network latency.
///
/// Holds no mutable state; concurrent calls are independent.
#[derive(Debug, Clone, Default)]
pub struct DeliveryEstimator {
    config: DeliveryConfig,
}

impl DeliveryEstimator {
    pub fn new(config: DeliveryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> DeliveryConfig {
        self.config
    }

    /// Wait for the simulated latency, then estimate.
    ///
    /// Fails with `InvalidInput("CEP inválido")` unless the postal code has
    /// exactly 8 digits once formatting is stripped. No retries.
    pub async fn calculate_delivery(
        &self,
        raw_postal_code: &str,
        cart_total: Money,
    ) -> DomainResult<DeliveryEstimate> {
        if !self.config.simulated_latency.is_zero() {
            tokio::time::sleep(self.config.simulated_latency).await;
        }
        estimate(raw_postal_code, cart_total)
    }
}

/// [`DeliveryEstimator::calculate_delivery`] with the default latency.
pub async fn calculate_delivery(
    raw_postal_code: &str,
    cart_total: Money,
) -> DomainResult<DeliveryEstimate> {
    DeliveryEstimator::default()
        .calculate_delivery(raw_postal_code, cart_total)
        .await
}

//! Runtime configuration from the environment.

use std::net::SocketAddr;
use std::time::Duration;

use horta_delivery::{DeliveryConfig, DEFAULT_SIMULATED_LATENCY};

pub const BIND_ADDR_VAR: &str = "HORTA_BIND_ADDR";
pub const DELIVERY_LATENCY_VAR: &str = "HORTA_DELIVERY_LATENCY_MS";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub delivery: DeliveryConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            delivery: DeliveryConfig::default(),
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unset values use defaults; unparsable ones
    /// are logged and replaced by defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let bind_addr = match lookup(BIND_ADDR_VAR) {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "invalid {BIND_ADDR_VAR}; using {DEFAULT_BIND_ADDR}");
                default_bind_addr()
            }),
            None => default_bind_addr(),
        };

        let simulated_latency = match lookup(DELIVERY_LATENCY_VAR) {
            Some(raw) => raw.parse::<u64>().map(Duration::from_millis).unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "invalid {DELIVERY_LATENCY_VAR}; using default latency");
                DEFAULT_SIMULATED_LATENCY
            }),
            None => DEFAULT_SIMULATED_LATENCY,
        };

        Self {
            bind_addr,
            delivery: DeliveryConfig { simulated_latency },
        }
    }
}

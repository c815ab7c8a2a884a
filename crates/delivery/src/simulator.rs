//! Storefront delivery simulator state.
//!
//! Mirrors the widget where a customer types a CEP and asks for a quote. The
//! widget validates the CEP on its own before calling the estimator, which
//! validates again; both gates stay.

use horta_core::Money;

use crate::estimator::{DeliveryEstimate, DeliveryEstimator};
use crate::postal_code;

/// Shown when the CEP fails the widget's own 8-digit check.
pub const INVALID_CEP_PROMPT: &str = "Por favor, insira um CEP válido";

/// Shown when the estimator fails without a message of its own.
pub const GENERIC_FAILURE: &str = "Erro ao calcular entrega. Tente novamente.";

pub const FREE_DELIVERY_NOTICE: &str = "Entrega grátis para sua região!";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliverySimulator {
    input: String,
    estimate: Option<DeliveryEstimate>,
    error: Option<String>,
}

impl DeliverySimulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keystroke handler: reformat the field and clear any error.
    pub fn on_input(&mut self, raw: &str) {
        self.input = postal_code::format(raw);
        self.error = None;
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn estimate(&self) -> Option<&DeliveryEstimate> {
        self.estimate.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Request a quote for the current input.
    ///
    /// A CEP rejected by the widget gate leaves the previous estimate on
    /// screen; an estimator failure clears it.
    pub async fn calculate(&mut self, estimator: &DeliveryEstimator, cart_total: Money) {
        if !postal_code::is_valid(&self.input) {
            self.error = Some(INVALID_CEP_PROMPT.to_string());
            return;
        }

        self.error = None;
        match estimator.calculate_delivery(&self.input, cart_total).await {
            Ok(estimate) => self.estimate = Some(estimate),
            Err(err) => {
                let message = err.to_string();
                self.error = Some(if message.is_empty() {
                    GENERIC_FAILURE.to_string()
                } else {
                    message
                });
                self.estimate = None;
            }
        }
    }

    /// Notice rendered under the quote when delivery is free.
    pub fn free_delivery_notice(&self) -> Option<&'static str> {
        self.estimate
            .as_ref()
            .filter(|e| e.is_free_shipping())
            .map(|_| FREE_DELIVERY_NOTICE)
    }
}

/// `"GRÁTIS"` for a zero fee, otherwise the amount.
pub fn fee_label(estimate: &DeliveryEstimate) -> String {
    if estimate.is_free_shipping() {
        "GRÁTIS".to_string()
    } else {
        estimate.delivery_fee.to_string()
    }
}

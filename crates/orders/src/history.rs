//! Customer order history: fetch once, ingest, render.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use horta_core::{DomainResult, Money};

use crate::order::{Order, RawOrder};
use crate::status::StatusDisplay;

pub const EMPTY_HISTORY_MESSAGE: &str = "Você ainda não fez nenhum pedido.";

/// Amount shown for a line whose price could not be resolved.
pub const UNAVAILABLE_AMOUNT: &str = "R$ --";

/// Order-data collaborator (the backend's order listing for the signed-in user).
#[async_trait]
pub trait OrderSource: Send + Sync {
    async fn get_orders(&self) -> DomainResult<Vec<RawOrder>>;
}

/// Orders ready for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderHistory {
    orders: Vec<Order>,
}

impl OrderHistory {
    pub fn new(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn views(&self) -> Vec<OrderView> {
        self.orders.iter().map(OrderView::from).collect()
    }

    /// Placeholder text when there is nothing to list.
    pub fn empty_message(&self) -> Option<&'static str> {
        self.is_empty().then_some(EMPTY_HISTORY_MESSAGE)
    }
}

/// Single fetch, no retry.
///
/// A failed fetch is logged and shows as an empty history. Orders whose
/// totals cannot be read are skipped with a warning instead of hiding the
/// others; unpriced lines stay in their order.
pub async fn load_order_history(source: &dyn OrderSource) -> OrderHistory {
    let raw = match source.get_orders().await {
        Ok(raw) => raw,
        Err(err) => {
            tracing::error!(error = %err, "failed to load orders");
            return OrderHistory::default();
        }
    };

    let orders = raw
        .into_iter()
        .filter_map(|raw| {
            let order_number = raw.order_number.clone();
            Order::try_from(raw)
                .inspect_err(|err| {
                    tracing::warn!(order_number = %order_number, error = %err, "skipping malformed order");
                })
                .ok()
        })
        .collect();

    OrderHistory::new(orders)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineView {
    /// `"{quantity}x"`.
    pub quantity: String,
    pub name: String,
    /// Unit price times quantity, or [`UNAVAILABLE_AMOUNT`].
    pub amount: String,
}

/// Display strings for one order card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderView {
    pub heading: String,
    pub placed_at: String,
    pub status: StatusDisplay,
    pub lines: Vec<LineView>,
    pub shipping: Option<String>,
    pub forecast: Option<String>,
    pub delivery_fee: String,
    pub total: String,
}

fn placed_at_label(at: DateTime<Utc>) -> String {
    at.format("%d/%m/%Y às %H:%M").to_string()
}

fn fee_label(fee: Money) -> String {
    if fee.is_zero() {
        "Frete: Grátis".to_string()
    } else {
        format!("Frete: {fee}")
    }
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        let lines = order
            .items
            .iter()
            .map(|item| LineView {
                quantity: format!("{}x", item.quantity),
                name: item.name.clone(),
                amount: item
                    .line_total()
                    .map_or_else(|| UNAVAILABLE_AMOUNT.to_string(), |total| total.to_string()),
            })
            .collect();

        Self {
            heading: format!("Pedido #{}", order.order_number),
            placed_at: placed_at_label(order.created_at),
            status: order.status.display(),
            lines,
            shipping: order
                .shipping_address
                .as_ref()
                .map(|addr| format!("Entrega em: {addr}")),
            forecast: order
                .delivery_date
                .map(|date| format!("Previsão: {}", date.format("%d/%m/%Y"))),
            delivery_fee: fee_label(order.delivery_fee),
            total: format!("Total: {}", order.total),
        }
    }
}

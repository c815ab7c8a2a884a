use axum::{
    routing::{get, post},
    Router,
};

pub mod delivery;
pub mod orders;
pub mod products;
pub mod system;

/// Router for the storefront endpoints (mounted under `/api`).
pub fn router() -> Router {
    Router::new()
        .route("/categories", get(products::list_categories))
        .nest("/products", products::router())
        .route("/delivery/estimate", post(delivery::estimate))
        .route("/order-status/:tag", get(orders::describe_status))
}

//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `routes/`: HTTP routes + handlers (one file per domain area)
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use horta_delivery::DeliveryEstimator;
use horta_products::Catalog;

use crate::config::ApiConfig;

pub mod dto;
pub mod errors;
pub mod routes;

/// Shared, read-only collaborators handed to every handler.
#[derive(Debug, Clone)]
pub struct AppServices {
    pub catalog: Catalog,
    pub estimator: DeliveryEstimator,
}

impl AppServices {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            catalog: Catalog::seed(),
            estimator: DeliveryEstimator::new(config.delivery),
        }
    }
}

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: &ApiConfig) -> Router {
    let services = Arc::new(AppServices::new(config));

    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/api", routes::router())
        .layer(ServiceBuilder::new().layer(Extension(services)))
}

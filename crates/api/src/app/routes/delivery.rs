use std::sync::Arc;

use axum::{extract::Extension, response::IntoResponse, Json};

use horta_core::Money;

use crate::app::{dto, errors, AppServices};

pub async fn estimate(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::DeliveryEstimateRequest>,
) -> axum::response::Response {
    let cart_total = match Money::try_from_reais_f64_exact(body.cart_total) {
        Ok(total) => total,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services
        .estimator
        .calculate_delivery(&body.cep, cart_total)
        .await
    {
        Ok(estimate) => Json(dto::estimate_to_json(&estimate)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

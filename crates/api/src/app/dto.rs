use serde::Deserialize;
use serde_json::json;

use horta_delivery::DeliveryEstimate;
use horta_products::Product;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct DeliveryEstimateRequest {
    pub cep: String,
    /// Cart total in reais, as the storefront sends it.
    #[serde(alias = "cartTotal")]
    pub cart_total: f64,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProductsQuery {
    pub category: Option<String>,
}

// -------------------------
// Response mapping
// -------------------------

pub fn estimate_to_json(estimate: &DeliveryEstimate) -> serde_json::Value {
    json!({
        "distance": estimate.distance_km,
        "estimated_time": estimate.estimated_time,
        "delivery_fee": estimate.delivery_fee.as_reais_f64(),
        "min_order_value": estimate.min_order_value.as_reais_f64(),
        "postal_code": estimate.postal_code,
        "free_shipping": estimate.is_free_shipping(),
    })
}

pub fn product_to_json(product: &Product) -> serde_json::Value {
    json!({
        "id": product.id.as_str(),
        "name": product.name,
        "category": product.category,
        "price": product.price.as_reais_f64(),
        "promoPrice": product.promo_price.map(|p| p.as_reais_f64()),
        "isPromo": product.is_promo,
        "unit": product.unit,
        "minOrder": product.min_order,
        "stock": product.stock,
        "image": product.image,
        "description": product.description,
    })
}

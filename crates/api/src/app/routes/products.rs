use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use horta_products::ProductId;

use crate::app::{dto, errors, AppServices};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products))
        .route("/:id", get(get_product))
}

pub async fn list_categories(
    Extension(services): Extension<Arc<AppServices>>,
) -> impl IntoResponse {
    Json(serde_json::json!({ "categories": services.catalog.categories() }))
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::ProductsQuery>,
) -> impl IntoResponse {
    let category = query.category.unwrap_or_default();
    let items: Vec<_> = services
        .catalog
        .get_products(&category)
        .into_iter()
        .map(dto::product_to_json)
        .collect();

    Json(serde_json::json!({ "products": items }))
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match services.catalog.get_product(&ProductId::new(id)) {
        Ok(product) => Json(dto::product_to_json(product)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

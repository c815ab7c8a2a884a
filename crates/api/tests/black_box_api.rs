use std::time::Duration;

use horta_api::config::ApiConfig;
use horta_delivery::DeliveryConfig;
use reqwest::StatusCode;
use serde_json::json;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod, but no simulated latency and an ephemeral port.
        let config = ApiConfig {
            delivery: DeliveryConfig {
                simulated_latency: Duration::ZERO,
            },
            ..ApiConfig::default()
        };
        let app = horta_api::app::build_app(&config);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn estimate(srv: &TestServer, body: serde_json::Value) -> reqwest::Response {
    reqwest::Client::new()
        .post(format!("{}/api/delivery/estimate", srv.base_url))
        .json(&body)
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn health_is_ok() {
    let srv = TestServer::spawn().await;
    let res = reqwest::get(format!("{}/health", srv.base_url)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn categories_start_with_wildcard() {
    let srv = TestServer::spawn().await;
    let res = reqwest::get(format!("{}/api/categories", srv.base_url))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    let categories = body["categories"].as_array().unwrap();
    assert_eq!(categories.len(), 6);
    assert_eq!(categories[0]["id"], "all");
}

#[tokio::test]
async fn products_filter_by_category() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let all: serde_json::Value = client
        .get(format!("{}/api/products", srv.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(all["products"].as_array().unwrap().len(), 12);

    let legumes: serde_json::Value = client
        .get(format!("{}/api/products?category=legumes", srv.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let legumes = legumes["products"].as_array().unwrap();
    assert_eq!(legumes.len(), 5);
    assert!(legumes.iter().all(|p| p["category"] == "legumes"));

    let unknown: serde_json::Value = client
        .get(format!("{}/api/products?category=cogumelos", srv.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(unknown["products"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn product_lookup_and_not_found() {
    let srv = TestServer::spawn().await;

    let res = reqwest::get(format!("{}/api/products/1", srv.base_url))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let product: serde_json::Value = res.json().await.unwrap();
    assert_eq!(product["name"], "Alface Americana");
    assert_eq!(product["price"], 4.5);
    assert_eq!(product["minOrder"], 5);
    assert_eq!(product["isPromo"], false);
    assert!(product["promoPrice"].is_null());

    let res = reqwest::get(format!("{}/api/products/999", srv.base_url))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn delivery_estimate_for_formatted_cep() {
    let srv = TestServer::spawn().await;

    let res = estimate(&srv, json!({ "cep": "00000-678", "cart_total": 100.0 })).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["distance"], 38);
    assert_eq!(body["estimated_time"], "1h 54min");
    assert_eq!(body["delivery_fee"], 35.0);
    assert_eq!(body["min_order_value"], 250.0);
    assert_eq!(body["postal_code"], "00000-678");
    assert_eq!(body["free_shipping"], false);
}

#[tokio::test]
async fn delivery_is_free_at_twice_the_minimum() {
    let srv = TestServer::spawn().await;

    let res = estimate(&srv, json!({ "cep": "00000678", "cartTotal": 500.0 })).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["delivery_fee"], 0.0);
    assert_eq!(body["min_order_value"], 250.0);
    assert_eq!(body["free_shipping"], true);
}

#[tokio::test]
async fn invalid_cep_is_rejected() {
    let srv = TestServer::spawn().await;

    let res = estimate(&srv, json!({ "cep": "1234", "cart_total": 100.0 })).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invalid_input");
    assert_eq!(body["message"], "CEP inválido");
}

#[tokio::test]
async fn negative_cart_total_is_rejected() {
    let srv = TestServer::spawn().await;

    let res = estimate(&srv, json!({ "cep": "01310100", "cart_total": -1.0 })).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn order_status_lookup_never_fails() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/order-status/em_transporte", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["label"], "Em Transporte");
    assert_eq!(body["icon"], "truck");

    let res = client
        .get(format!("{}/api/order-status/extraviado", srv.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["label"], "extraviado");
    assert_eq!(body["color_class"], "bg-gray-100 text-gray-800");
}

#[tokio::test]
async fn free_shipping_threshold_is_not_reached_by_rounding() {
    let srv = TestServer::spawn().await;

    // 15 km: fee R$ 15, minimum R$ 150, free from R$ 300.
    let res = estimate(&srv, json!({ "cep": "00000200", "cart_total": 299.995 })).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invalid_input");

    let res = estimate(&srv, json!({ "cep": "00000200", "cart_total": 299.99 })).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["distance"], 15);
    assert_eq!(body["delivery_fee"], 15.0);

    let res = estimate(&srv, json!({ "cep": "00000200", "cart_total": 300.0 })).await;
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["delivery_fee"], 0.0);
    assert_eq!(body["min_order_value"], 150.0);
}

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use haul_api::config::ServerConfig;
use haul_api::router::build_app_router;
use haul_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: String::new(),
        db_max_connections: 5,
    }
}

/// Build the full application router, with the production middleware stack,
/// on top of the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState { pool }, &test_config())
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_raw_json(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Create a round through the API and return its id.
pub async fn create_round(pool: &PgPool, title: &str, max_orders: i64) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/rounds",
        serde_json::json!({
            "title": title,
            "cutoff_time": "2030-01-01T12:00:00Z",
            "max_orders": max_orders,
        }),
    )
    .await;
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// Submit an order through the API.
pub async fn submit_order(pool: &PgPool, round_id: i64, buyer: &str, item: &str) -> Response<Body> {
    post_json(
        build_test_app(pool.clone()),
        "/api/v1/orders",
        serde_json::json!({
            "round_id": round_id,
            "buyer_name": buyer,
            "item": item,
        }),
    )
    .await
}

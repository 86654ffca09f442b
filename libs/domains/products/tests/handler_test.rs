//! Handler tests for the Products domain
//!
//! These drive the product router over the in-memory repository and check:
//! - Request deserialization and the required-field rules
//! - The `{success, message, data}` envelope
//! - HTTP status codes for every outcome

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use test_utils::assertions::assert_envelope;
use tower::ServiceExt; // For oneshot()

fn app(repo: InMemoryProductRepository) -> Router {
    Router::new().nest("/products", handlers::router(ProductService::new(repo)))
}

async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

async fn seeded() -> InMemoryProductRepository {
    let repo = InMemoryProductRepository::new();
    for (name, price) in [("Product 1", 100.0), ("Product 2", 200.0)] {
        repo.create(models::NewProduct {
            name: name.to_string(),
            description: Some(format!("{} description", name)),
            price,
        })
        .await
        .unwrap();
    }
    repo
}

#[tokio::test]
async fn test_create_returns_201_with_record() {
    let repo = InMemoryProductRepository::new();

    let (status, body) = send(
        app(repo.clone()),
        "POST",
        "/products",
        Some(json!({"name": "Widget", "price": 9.99})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_envelope(&body, true, "Product created successfully");
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["name"], "Widget");
    assert_eq!(body["data"]["price"], 9.99);
    assert_eq!(body["data"]["description"], Value::Null);

    assert_eq!(repo.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_without_price_is_400_and_persists_nothing() {
    let repo = InMemoryProductRepository::new();

    let (status, body) = send(
        app(repo.clone()),
        "POST",
        "/products",
        Some(json!({"name": "Widget"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_envelope(&body, false, "Name and price are required");
    assert!(body.get("data").is_none());
    assert!(repo.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_with_zero_price_is_400() {
    let (status, body) = send(
        app(InMemoryProductRepository::new()),
        "POST",
        "/products",
        Some(json!({"name": "Freebie", "price": 0})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_envelope(&body, false, "Name and price are required");
}

#[tokio::test]
async fn test_create_with_malformed_json_is_400() {
    let request = Request::builder()
        .method("POST")
        .uri("/products")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();

    let response = app(InMemoryProductRepository::new())
        .oneshot(request)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_returns_all_in_id_order() {
    let (status, body) = send(app(seeded().await), "GET", "/products", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_envelope(&body, true, "Products retrieved successfully");
    let ids: Vec<i64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn test_list_empty_is_ok() {
    let (status, body) = send(app(InMemoryProductRepository::new()), "GET", "/products", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn test_get_existing_and_missing() {
    let repo = seeded().await;

    let (status, body) = send(app(repo.clone()), "GET", "/products/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_envelope(&body, true, "Product retrieved successfully");
    assert_eq!(body["data"]["name"], "Product 2");

    let (status, body) = send(app(repo), "GET", "/products/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_envelope(&body, false, "Product not found");
}

#[tokio::test]
async fn test_non_integer_id_is_404() {
    let (status, body) = send(app(seeded().await), "GET", "/products/abc", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_update_overwrites_and_falls_back() {
    let repo = seeded().await;

    let (status, body) = send(
        app(repo.clone()),
        "PUT",
        "/products/1",
        Some(json!({"name": "Renamed", "price": 150, "description": ""})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_envelope(&body, true, "Product updated successfully");
    assert_eq!(body["data"]["name"], "Renamed");
    assert_eq!(body["data"]["price"], 150.0);
    assert_eq!(body["data"]["description"], "Product 1 description");

    let stored = repo.get_by_id(1).await.unwrap().unwrap();
    assert_eq!(stored.name, "Renamed");
}

#[tokio::test]
async fn test_update_with_only_description_is_400() {
    let repo = seeded().await;

    let (status, body) = send(
        app(repo.clone()),
        "PUT",
        "/products/1",
        Some(json!({"description": "only this"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_envelope(&body, false, "Name and price are required");

    let stored = repo.get_by_id(1).await.unwrap().unwrap();
    assert_eq!(stored.description.as_deref(), Some("Product 1 description"));
}

#[tokio::test]
async fn test_update_unknown_id_is_404() {
    let (status, body) = send(
        app(seeded().await),
        "PUT",
        "/products/42",
        Some(json!({"name": "Ghost", "price": 1})),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_envelope(&body, false, "Product not found");
}

#[tokio::test]
async fn test_delete_then_get_is_404() {
    let repo = seeded().await;

    let (status, body) = send(app(repo.clone()), "DELETE", "/products/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_envelope(&body, true, "Product deleted successfully");
    assert!(body.get("data").is_none());

    let (status, _) = send(app(repo.clone()), "GET", "/products/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(app(repo.clone()), "DELETE", "/products/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_envelope(&body, false, "Product not found");

    let remaining: Vec<i32> = repo.list().await.unwrap().iter().map(|p| p.id).collect();
    assert_eq!(remaining, vec![2]);
}

/// `(id, name, price, description)` of every listed product, timestamps aside.
async fn listed(repo: &InMemoryProductRepository) -> Vec<Value> {
    let (status, body) = send(app(repo.clone()), "GET", "/products", None).await;
    assert_eq!(status, StatusCode::OK);
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| json!([p["id"], p["name"], p["price"], p["description"]]))
        .collect()
}

#[tokio::test]
async fn test_list_tracks_create_update_delete() {
    let repo = seeded().await;

    let (status, _) = send(
        app(repo.clone()),
        "POST",
        "/products",
        Some(json!({"name": "Widget", "price": 9.99, "description": "blue"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        listed(&repo).await,
        vec![
            json!([1, "Product 1", 100.0, "Product 1 description"]),
            json!([2, "Product 2", 200.0, "Product 2 description"]),
            json!([3, "Widget", 9.99, "blue"]),
        ]
    );

    let (status, _) = send(
        app(repo.clone()),
        "PUT",
        "/products/2",
        Some(json!({"name": "Product 2 v2", "price": 250})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        listed(&repo).await,
        vec![
            json!([1, "Product 1", 100.0, "Product 1 description"]),
            json!([2, "Product 2 v2", 250.0, "Product 2 description"]),
            json!([3, "Widget", 9.99, "blue"]),
        ]
    );

    let (status, _) = send(app(repo.clone()), "DELETE", "/products/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        listed(&repo).await,
        vec![
            json!([2, "Product 2 v2", 250.0, "Product 2 description"]),
            json!([3, "Widget", 9.99, "blue"]),
        ]
    );
}

//! Handler tests for the Reviews domain

use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_reviews::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

async fn get(uri: &str) -> (StatusCode, Value) {
    let response = handlers::router(ReviewService::default())
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_list_reviews() {
    let (status, body) = get("/reviews").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_reviews_for_product() {
    let (status, body) = get("/products/2/reviews").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"],
        json!([{"id": 4, "product_id": 2, "review": "Good product"}])
    );
}

#[tokio::test]
async fn test_product_without_reviews_is_404() {
    let (status, body) = get("/products/3/reviews").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({"success": false, "message": "Product not found"})
    );
}

#[tokio::test]
async fn test_non_integer_product_id_is_404() {
    let (status, _) = get("/products/first/reviews").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

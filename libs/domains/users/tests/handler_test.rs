//! Handler tests for the Users domain

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_users::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_list_users() {
    let app = Router::new().nest("/users", handlers::router());
    let (status, body) = get(app, "/users").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Users retrieved successfully");
    assert_eq!(
        body["data"],
        json!([
            {"id": 1, "name": "User 1", "email": "3E1aA@example.com", "age": 25},
            {"id": 2, "name": "User 2", "email": "Gv7Gg@example.com", "age": 30}
        ])
    );
}

static NOBODY: [StaticUser; 0] = [];

#[tokio::test]
async fn test_empty_directory_is_ok() {
    let app = Router::new().nest("/users", handlers::router_with(&NOBODY));
    let (status, body) = get(app, "/users").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));
}

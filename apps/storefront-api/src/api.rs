//! Storefront routes

use axum::{Router, extract::State, routing::get};
use axum_helpers::{ApiResponse, IdPath, errors::responses::NotFoundResponse};

use crate::service::{ProductDetails, StorefrontService};

pub const TAG: &str = "storefront";

pub const FETCHED: &str = "Product data fetched successfully";
pub const FETCH_FAILED: &str = "Failed to fetch product data";

pub fn router(service: StorefrontService) -> Router {
    Router::new()
        .route("/product/{id}", get(product_details))
        .with_state(service)
}

/// Product, sold quantity and reviews in one response
///
/// Always answers 200 with whatever could be gathered. `success` is false
/// when the product itself could not be fetched.
#[utoipa::path(
    get,
    path = "/product/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Aggregated product view", body = ApiResponse<ProductDetails>),
        (status = 404, response = NotFoundResponse)
    )
)]
pub async fn product_details(
    State(service): State<StorefrontService>,
    IdPath(id): IdPath,
) -> ApiResponse<ProductDetails> {
    let details = service.product_details(id).await;

    let resolved = details.product.is_some();
    if !resolved {
        tracing::info!(product_id = id, "Product unavailable, serving degraded view");
    }

    ApiResponse {
        success: resolved,
        message: if resolved { FETCHED } else { FETCH_FAILED }.to_string(),
        data: Some(details),
    }
}

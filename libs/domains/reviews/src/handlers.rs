use axum::{Router, extract::State, routing::get};
use axum_helpers::{ApiResponse, IdPath, errors::responses::NotFoundResponse};
use utoipa::OpenApi;

use crate::error::ReviewResult;
use crate::models::Review;
use crate::service::ReviewService;

pub const TAG: &str = "reviews";

pub const REVIEWS_RETRIEVED: &str = "Reviews retrieved successfully";

/// OpenAPI documentation for Reviews API
#[derive(OpenApi)]
#[openapi(
    paths(list_reviews, product_reviews),
    components(schemas(Review), responses(NotFoundResponse)),
    tags(
        (name = TAG, description = "Product review endpoints")
    )
)]
pub struct ApiDoc;

/// Review routes. Both `/reviews` and `/products/{id}/reviews` live here, so
/// merge this router at the root rather than nesting it.
pub fn router(service: ReviewService) -> Router {
    Router::new()
        .route("/reviews", get(list_reviews))
        .route("/products/{id}/reviews", get(product_reviews))
        .with_state(service)
}

/// All reviews
#[utoipa::path(
    get,
    path = "/reviews",
    tag = TAG,
    responses(
        (status = 200, description = "Every review", body = ApiResponse<Vec<Review>>)
    )
)]
async fn list_reviews(State(service): State<ReviewService>) -> ApiResponse<Vec<Review>> {
    ApiResponse::success(REVIEWS_RETRIEVED, service.all())
}

/// Reviews for one product
#[utoipa::path(
    get,
    path = "/products/{id}/reviews",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Reviews of the product", body = ApiResponse<Vec<Review>>),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn product_reviews(
    State(service): State<ReviewService>,
    IdPath(id): IdPath,
) -> ReviewResult<ApiResponse<Vec<Review>>> {
    let reviews = service.for_product(id)?;
    Ok(ApiResponse::success(REVIEWS_RETRIEVED, reviews))
}

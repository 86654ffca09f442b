use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReviewError {
    /// No reviews exist for the product, which is reported as the product
    /// being unknown.
    #[error("No reviews for product {0}")]
    ProductNotFound(i32),
}

pub type ReviewResult<T> = Result<T, ReviewError>;

impl From<ReviewError> for AppError {
    fn from(err: ReviewError) -> Self {
        match err {
            ReviewError::ProductNotFound(id) => {
                tracing::debug!(product_id = id, "No reviews for product");
                AppError::NotFound("Product not found".to_string())
            }
        }
    }
}

impl IntoResponse for ReviewError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::envelope::ApiResponse;

/// Fallback for unmatched routes.
pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        ApiResponse::failure("The requested resource was not found"),
    )
        .into_response()
}

/// Handler for 405 Method Not Allowed errors.
pub async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        ApiResponse::failure("The HTTP method is not allowed for this resource"),
    )
        .into_response()
}

use axum::{Router, extract::State, routing::get};
use axum_helpers::{
    ApiResponse, IdPath,
    errors::responses::{InternalServerErrorResponse, NotFoundResponse},
};
use utoipa::OpenApi;

use crate::models::{CartItem, CartQuantity};
use crate::service::CartService;

pub const TAG: &str = "cart";

pub const ITEMS_RETRIEVED: &str = "Cart items retrieved successfully";
pub const QUANTITY_RETRIEVED: &str = "Cart quantity retrieved successfully";

/// OpenAPI documentation for Cart API
#[derive(OpenApi)]
#[openapi(
    paths(list_items, product_quantity),
    components(
        schemas(CartItem, CartQuantity),
        responses(NotFoundResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = TAG, description = "Read-only cart endpoints")
    )
)]
pub struct ApiDoc;

/// Cart routes, to be nested under `/cart`.
pub fn router(service: CartService) -> Router {
    Router::new()
        .route("/", get(list_items))
        .route("/{id}", get(product_quantity))
        .with_state(service)
}

/// All cart lines
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "Cart lines", body = ApiResponse<Vec<CartItem>>)
    )
)]
async fn list_items(State(service): State<CartService>) -> ApiResponse<Vec<CartItem>> {
    ApiResponse::success(ITEMS_RETRIEVED, service.items())
}

/// Total quantity of one product in the cart
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Quantity, 0 when the product is not in the cart", body = ApiResponse<CartQuantity>),
        (status = 404, response = NotFoundResponse)
    )
)]
async fn product_quantity(
    State(service): State<CartService>,
    IdPath(id): IdPath,
) -> ApiResponse<CartQuantity> {
    let quantity = service.total_quantity(id);
    tracing::debug!(product_id = id, total = quantity.total_quantity, "Cart quantity");
    ApiResponse::success(QUANTITY_RETRIEVED, quantity)
}

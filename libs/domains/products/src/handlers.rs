use axum::{
    Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    ApiResponse, AuditEvent, AuditOutcome, IdPath, ValidatedJson,
    envelope::MessageResponse,
    errors::responses::{BadRequestValidationResponse, InternalServerErrorResponse, NotFoundResponse},
    extract_ip_from_headers, extract_user_agent,
};
use serde_json::json;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::entity;
use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;
use crate::service::ProductService;

pub const LISTED: &str = "Products retrieved successfully";
pub const RETRIEVED: &str = "Product retrieved successfully";
pub const CREATED: &str = "Product created successfully";
pub const UPDATED: &str = "Product updated successfully";
pub const DELETED: &str = "Product deleted successfully";

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        delete_product,
    ),
    components(
        schemas(Product, CreateProduct, UpdateProduct, MessageResponse),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = entity::Model::TAG, description = "Product catalogue endpoints")
    )
)]
pub struct ApiDoc;

/// Product routes, to be nested under `/products`.
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(shared_service)
}

fn audit(
    headers: &HeaderMap,
    action: &str,
    product_id: i32,
    details: Option<serde_json::Value>,
) {
    let mut event = AuditEvent::new(
        None,
        action,
        Some(format!("product:{}", product_id)),
        AuditOutcome::Success,
    )
    .with_ip(extract_ip_from_headers(headers))
    .with_user_agent(extract_user_agent(headers));

    if let Some(details) = details {
        event = event.with_details(details);
    }
    event.log();
}

/// List all products
#[utoipa::path(
    get,
    path = "",
    tag = entity::Model::TAG,
    responses(
        (status = 200, description = "All products, ordered by id", body = ApiResponse<Vec<Product>>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<ApiResponse<Vec<Product>>> {
    let products = service.list_products().await?;
    Ok(ApiResponse::success(LISTED, products))
}

/// Create a product
#[utoipa::path(
    post,
    path = "",
    tag = entity::Model::TAG,
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created", body = ApiResponse<Product>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    headers: HeaderMap,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create_product(input).await?;

    audit(
        &headers,
        "product.create",
        product.id,
        Some(json!({
            "name": product.name,
            "price": product.price,
        })),
    );

    Ok((StatusCode::CREATED, ApiResponse::success(CREATED, product)))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = ApiResponse<Product>),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
) -> ProductResult<ApiResponse<Product>> {
    let product = service.get_product(id).await?;
    Ok(ApiResponse::success(RETRIEVED, product))
}

/// Update a product
///
/// `name` and `price` are required. Empty or zero values keep the stored value.
#[utoipa::path(
    put,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse<Product>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    headers: HeaderMap,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateProduct>,
) -> ProductResult<ApiResponse<Product>> {
    let product = service.update_product(id, input).await?;

    audit(
        &headers,
        "product.update",
        id,
        Some(json!({
            "name": product.name,
            "price": product.price,
        })),
    );

    Ok(ApiResponse::success(UPDATED, product))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = entity::Model::TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted", body = MessageResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    headers: HeaderMap,
    IdPath(id): IdPath,
) -> ProductResult<ApiResponse<()>> {
    service.delete_product(id).await?;

    audit(&headers, "product.delete", id, None);

    Ok(ApiResponse::message(DELETED))
}

use axum::{Router, extract::State, routing::get};
use axum_helpers::ApiResponse;
use utoipa::OpenApi;

use crate::models::{StaticUser, USERS, User, to_users};

pub const TAG: &str = "users";

pub const USERS_RETRIEVED: &str = "Users retrieved successfully";

/// OpenAPI documentation for Users API
#[derive(OpenApi)]
#[openapi(
    paths(list_users),
    components(schemas(User)),
    tags(
        (name = TAG, description = "User directory")
    )
)]
pub struct ApiDoc;

/// `GET /` over the built-in users; nest under `/users`.
pub fn router() -> Router {
    router_with(&USERS)
}

pub fn router_with(users: &'static [StaticUser]) -> Router {
    Router::new().route("/", get(list_users)).with_state(users)
}

/// All users
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "Every user", body = ApiResponse<Vec<User>>)
    )
)]
async fn list_users(State(users): State<&'static [StaticUser]>) -> ApiResponse<Vec<User>> {
    ApiResponse::success(USERS_RETRIEVED, to_users(users))
}

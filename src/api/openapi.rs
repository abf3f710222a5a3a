//! OpenAPI documentation.

use utoipa::OpenApi;

use super::handlers::user_handler;
use crate::domain::{UpdateUserRequest, UserRequest, UserResponse};

/// OpenAPI document for the user API
#[derive(OpenApi)]
#[openapi(
    paths(
        user_handler::save,
        user_handler::find_by_id,
        user_handler::find_all,
        user_handler::update,
        user_handler::delete,
    ),
    components(schemas(UserRequest, UpdateUserRequest, UserResponse)),
    tags(
        (name = "Users", description = "User management endpoints")
    )
)]
pub struct ApiDoc;

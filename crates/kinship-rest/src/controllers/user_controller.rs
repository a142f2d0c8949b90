//! User management controller.

use crate::{
    extractors::ListQuery,
    responses::{created, ok, ApiResponse, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use kinship_core::{KinshipError, UserId};
use kinship_service::{CreateUserRequest, UserResponse};
use tracing::debug;

/// Creates the user router.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_users).post(create_user))
}

/// List users, optionally filtered by username substring.
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    params(
        ("search" = Option<String>, Query, description = "Username substring filter"),
        ("limit" = Option<usize>, Query, description = "Page size"),
        ("page" = Option<usize>, Query, description = "1-indexed page number")
    ),
    responses(
        (status = 200, description = "Users found", body = [UserResponse]),
        (status = 400, description = "Invalid pagination parameters")
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Vec<UserResponse>> {
    debug!("List users request");

    let page = query.page_request(state.pagination.users_page_size)?;
    let users = state
        .user_service
        .get_all_users(query.search_term(), page)
        .await?;

    ok(users, "Users found")
}

/// Create a new user.
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Validation failure"),
        (status = 409, description = "Username or email already taken")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserResponse>>), AppError> {
    debug!("Create user request: {}", request.username);

    let user = state.user_service.create_user(request).await?;
    Ok(created(user, "User created"))
}

/// Parses a user ID from a path parameter.
pub(crate) fn parse_user_id(id: &str) -> Result<UserId, AppError> {
    UserId::parse(id)
        .map_err(|_| AppError(KinshipError::Validation(format!("Invalid user ID: {}", id))))
}

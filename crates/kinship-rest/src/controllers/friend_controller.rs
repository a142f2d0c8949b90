//! Friendship controller.
//!
//! All routes nest under `/users/:user_id/friends`; the path user is the
//! acting party for every operation.

use crate::{
    controllers::user_controller::parse_user_id,
    extractors::ListQuery,
    responses::{created, ok, ApiResponse, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use kinship_core::{FriendshipId, KinshipError};
use kinship_service::{AddFriendRequest, FriendListEntry, FriendshipResponse};
use tracing::debug;

/// Creates the friends router, nested under `/users/:user_id/friends`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_friends).post(add_friend))
        .route("/:friendship_id", patch(confirm_friend).delete(remove_friend))
}

/// Send a friend request.
#[utoipa::path(
    post,
    path = "/users/{user_id}/friends",
    tag = "friends",
    request_body = AddFriendRequest,
    responses(
        (status = 201, description = "Friend request sent", body = FriendshipResponse),
        (status = 400, description = "Malformed identifier"),
        (status = 403, description = "Cannot friend yourself"),
        (status = 404, description = "Either user does not exist"),
        (status = 409, description = "Already friends or pending")
    )
)]
pub async fn add_friend(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(request): Json<AddFriendRequest>,
) -> Result<(StatusCode, Json<ApiResponse<FriendshipResponse>>), AppError> {
    debug!("Add friend request from {}", user_id);

    let initiator = parse_user_id(&user_id)?;
    let recipient = parse_user_id(&request.friend_user_id)?;

    let edge = state.friend_service.add_friend(initiator, recipient).await?;
    Ok(created(edge, "Friend request sent"))
}

/// List a user's friendships, confirmed and pending.
#[utoipa::path(
    get,
    path = "/users/{user_id}/friends",
    tag = "friends",
    params(
        ("search" = Option<String>, Query, description = "Username substring filter"),
        ("limit" = Option<usize>, Query, description = "Page size"),
        ("page" = Option<usize>, Query, description = "1-indexed page number")
    ),
    responses(
        (status = 200, description = "Friends found", body = [FriendListEntry]),
        (status = 400, description = "Malformed user ID or pagination")
    )
)]
pub async fn list_friends(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Vec<FriendListEntry>> {
    debug!("List friends request for {}", user_id);

    let user = parse_user_id(&user_id)?;
    let page = query.page_request(state.pagination.friends_page_size)?;

    let friends = state
        .friend_service
        .get_user_friend_list(user, query.search_term(), page)
        .await?;

    ok(friends, "Friends found")
}

/// Confirm a received friend request.
#[utoipa::path(
    patch,
    path = "/users/{user_id}/friends/{friendship_id}",
    tag = "friends",
    responses(
        (status = 200, description = "Friend request confirmed", body = FriendshipResponse),
        (status = 404, description = "Request not found or not received by this user"),
        (status = 409, description = "Already confirmed")
    )
)]
pub async fn confirm_friend(
    State(state): State<AppState>,
    Path((user_id, friendship_id)): Path<(String, String)>,
) -> ApiResult<FriendshipResponse> {
    debug!("Confirm friend request {} by {}", friendship_id, user_id);

    let confirmer = parse_user_id(&user_id)?;
    let friendship_id = parse_friendship_id(&friendship_id)?;

    let edge = state
        .friend_service
        .confirm_friend_request(confirmer, friendship_id)
        .await?;

    ok(edge, "Friend request confirmed")
}

/// Remove a friendship, from either side, confirmed or pending.
#[utoipa::path(
    delete,
    path = "/users/{user_id}/friends/{friendship_id}",
    tag = "friends",
    responses(
        (status = 200, description = "Friend removed", body = FriendshipResponse),
        (status = 400, description = "Malformed identifier"),
        (status = 404, description = "Friendship not found or requester not a party")
    )
)]
pub async fn remove_friend(
    State(state): State<AppState>,
    Path((user_id, friendship_id)): Path<(String, String)>,
) -> ApiResult<FriendshipResponse> {
    debug!("Remove friend {} by {}", friendship_id, user_id);

    let requester = parse_user_id(&user_id)?;
    let friendship_id = parse_friendship_id(&friendship_id)?;

    let edge = state
        .friend_service
        .remove_friend(requester, friendship_id)
        .await?;

    ok(edge, "Friend removed")
}

/// Parses a friendship ID from a path parameter.
fn parse_friendship_id(id: &str) -> Result<FriendshipId, AppError> {
    FriendshipId::parse(id).map_err(|_| {
        AppError(KinshipError::Validation(format!(
            "Invalid friendship ID: {}",
            id
        )))
    })
}

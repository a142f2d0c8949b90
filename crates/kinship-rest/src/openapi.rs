//! OpenAPI documentation configuration.

use kinship_core::{ErrorResponse, FieldError, FriendshipId, UserId};
use kinship_service::{
    AddFriendRequest, CreateUserRequest, FriendListEntry, FriendshipResponse, FriendshipStats,
    StatsResponse, UserResponse, UserStats, UsernameProjection,
};
use utoipa::OpenApi;

/// OpenAPI documentation for the Kinship API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Kinship API",
        version = "0.1.0",
        description = "Social-graph service: user accounts and friendship lifecycle",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // User endpoints
        crate::controllers::user_controller::list_users,
        crate::controllers::user_controller::create_user,
        // Friend endpoints
        crate::controllers::friend_controller::add_friend,
        crate::controllers::friend_controller::list_friends,
        crate::controllers::friend_controller::confirm_friend,
        crate::controllers::friend_controller::remove_friend,
        // Stats endpoints
        crate::controllers::stats_controller::get_stats,
        // Health endpoints
        crate::controllers::health_controller::health_check,
    ),
    components(
        schemas(
            // Core types
            UserId,
            FriendshipId,
            ErrorResponse,
            FieldError,
            // User DTOs
            CreateUserRequest,
            UserResponse,
            // Friend DTOs
            AddFriendRequest,
            FriendshipResponse,
            FriendListEntry,
            UsernameProjection,
            // Stats DTOs
            UserStats,
            FriendshipStats,
            StatsResponse,
        )
    ),
    tags(
        (name = "users", description = "User account endpoints"),
        (name = "friends", description = "Friendship lifecycle endpoints"),
        (name = "stats", description = "Aggregate statistics endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;

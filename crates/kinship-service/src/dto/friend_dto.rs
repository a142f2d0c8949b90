//! Friendship-related DTOs.

use chrono::{DateTime, Utc};
use kinship_core::{Friendship, FriendshipId, UserId};
use kinship_repository::FriendshipWithUsernames;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for sending a friend request.
///
/// The id arrives as a string so a malformed value fails identifier
/// validation (400) instead of body deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddFriendRequest {
    /// The user receiving the friend request.
    pub friend_user_id: String,
}

/// Friendship edge response DTO.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FriendshipResponse {
    pub id: FriendshipId,
    /// The initiator of the request.
    pub user_id: UserId,
    /// The recipient of the request.
    pub friend_user_id: UserId,
    pub is_confirmed: bool,
    pub is_blocked: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Friendship> for FriendshipResponse {
    fn from(edge: Friendship) -> Self {
        Self {
            id: edge.id,
            user_id: edge.user_id,
            friend_user_id: edge.friend_user_id,
            is_confirmed: edge.is_confirmed,
            is_blocked: edge.is_blocked,
            created_at: edge.created_at,
            updated_at: edge.updated_at,
        }
    }
}

/// Minimal user projection carried by friend-list entries.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UsernameProjection {
    pub username: String,
}

/// A friend-list entry: the edge plus both participants' usernames.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FriendListEntry {
    #[serde(flatten)]
    pub friendship: FriendshipResponse,
    /// Initiator projection.
    pub user: UsernameProjection,
    /// Recipient projection.
    pub friend: UsernameProjection,
}

impl From<FriendshipWithUsernames> for FriendListEntry {
    fn from(joined: FriendshipWithUsernames) -> Self {
        Self {
            friendship: FriendshipResponse::from(joined.friendship),
            user: UsernameProjection {
                username: joined.username,
            },
            friend: UsernameProjection {
                username: joined.friend_username,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_friendship_response_from_entity() {
        let edge = Friendship::new(UserId::new(), UserId::new());
        let response = FriendshipResponse::from(edge.clone());

        assert_eq!(response.id, edge.id);
        assert_eq!(response.user_id, edge.user_id);
        assert_eq!(response.friend_user_id, edge.friend_user_id);
        assert!(!response.is_confirmed);
    }

    #[test]
    fn test_friendship_response_serializes_camel_case() {
        let edge = Friendship::new(UserId::new(), UserId::new());
        let json = serde_json::to_value(FriendshipResponse::from(edge)).unwrap();

        assert!(json.get("userId").is_some());
        assert!(json.get("friendUserId").is_some());
        assert!(json.get("isConfirmed").is_some());
        assert!(json.get("user_id").is_none());
    }

    #[test]
    fn test_add_friend_request_deserializes_camel_case() {
        let id = UserId::new();
        let json = format!("{{\"friendUserId\": \"{id}\"}}");
        let request: AddFriendRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(request.friend_user_id, id.to_string());
    }

    #[test]
    fn test_friend_list_entry_flattens_edge() {
        let edge = Friendship::new(UserId::new(), UserId::new());
        let joined = FriendshipWithUsernames {
            friendship: edge,
            username: "alice".to_string(),
            friend_username: "bob".to_string(),
        };

        let json = serde_json::to_value(FriendListEntry::from(joined)).unwrap();
        // Edge fields sit at the top level, usernames under projections
        assert!(json.get("isConfirmed").is_some());
        assert_eq!(json["user"]["username"], "alice");
        assert_eq!(json["friend"]["username"], "bob");
    }
}

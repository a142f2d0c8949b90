//! User-related DTOs.
//!
//! Response DTOs serialize in camelCase: that is the wire contract the
//! dashboard consumes.

use chrono::{DateTime, Utc};
use kinship_core::{User, UserId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(length(min = 3, max = 16, message = "Username must be 3-16 characters"))]
    pub username: String,

    #[validate(
        email(message = "Invalid email address"),
        length(max = 320, message = "Email cannot exceed 320 characters")
    )]
    pub email: String,
}

/// User response DTO.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub friend_count: i32,
    pub pending_friend_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email.to_string(),
            friend_count: user.friend_count,
            pending_friend_count: user.pending_friend_count,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinship_core::Email;
    use validator::Validate;

    #[test]
    fn test_create_user_request_valid() {
        let request = CreateUserRequest {
            username: "validuser".to_string(),
            email: "valid@example.com".to_string(),
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_user_request_username_too_short() {
        let request = CreateUserRequest {
            username: "ab".to_string(),
            email: "valid@example.com".to_string(),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_user_request_username_too_long() {
        let request = CreateUserRequest {
            username: "a".repeat(17),
            email: "valid@example.com".to_string(),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_user_request_invalid_email() {
        let request = CreateUserRequest {
            username: "validuser".to_string(),
            email: "not-an-email".to_string(),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_user_response_from_entity() {
        let user = User::new(
            "alice".to_string(),
            Email::new("alice@example.com").unwrap(),
        );
        let response = UserResponse::from(user.clone());

        assert_eq!(response.id, user.id);
        assert_eq!(response.username, "alice");
        assert_eq!(response.email, "alice@example.com");
        assert_eq!(response.friend_count, 0);
    }

    #[test]
    fn test_user_response_serializes_camel_case() {
        let user = User::new(
            "alice".to_string(),
            Email::new("alice@example.com").unwrap(),
        );
        let json = serde_json::to_value(UserResponse::from(user)).unwrap();

        assert!(json.get("friendCount").is_some());
        assert!(json.get("pendingFriendCount").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("friend_count").is_none());
    }
}

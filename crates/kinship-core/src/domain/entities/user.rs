//! User entity.

use super::super::value_objects::Email;
use crate::{Entity, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User entity: identity plus the two denormalized social counters.
///
/// The counters are derived state over the friendship-edge table and are
/// mutated only by the friend service as a side effect of edge transitions.
/// Both are kept non-negative by the storage layer's clamped decrements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user.
    pub id: UserId,

    /// Unique username.
    pub username: String,

    /// User's email address.
    pub email: Email,

    /// Number of confirmed friendships this user participates in,
    /// counted from either side of the edge.
    pub friend_count: i32,

    /// Number of pending friend requests this user has *received*.
    /// Requests the user initiated are not counted here.
    pub pending_friend_count: i32,

    /// Account creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user with zeroed counters.
    #[must_use]
    pub fn new(username: String, email: Email) -> Self {
        let now = Utc::now();
        Self {
            id: UserId::new(),
            username,
            email,
            friend_count: 0,
            pending_friend_count: 0,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Entity<UserId> for User {
    fn id(&self) -> &UserId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_user(username: &str) -> User {
        User::new(
            username.to_string(),
            Email::new(format!("{}@example.com", username)).unwrap(),
        )
    }

    #[test]
    fn test_user_creation_zeroes_counters() {
        let user = create_user("johndoe");
        assert_eq!(user.username, "johndoe");
        assert_eq!(user.friend_count, 0);
        assert_eq!(user.pending_friend_count, 0);
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_user_id_is_unique() {
        let user1 = create_user("user1");
        let user2 = create_user("user2");
        assert_ne!(user1.id, user2.id);
    }

    #[test]
    fn test_entity_id() {
        let user = create_user("someone");
        assert_eq!(Entity::id(&user), &user.id);
    }

    #[test]
    fn test_user_serializes_counters() {
        let user = create_user("serde");
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["friend_count"], 0);
        assert_eq!(json["pending_friend_count"], 0);
    }
}

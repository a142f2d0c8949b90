//! Friendship edge entity.

use crate::{Entity, FriendshipId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single directed edge representing a friend-request relationship
/// between two distinct users.
///
/// The relationship is symmetric in meaning but asymmetric in storage:
/// exactly one row exists per unordered pair, so every "is X a friend of
/// Y" read must check both columns. The edge is a two-state machine:
/// pending (`is_confirmed = false`) transitions once to confirmed and
/// never back; deletion is terminal from either state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Friendship {
    /// Unique identifier for the edge.
    pub id: FriendshipId,

    /// The user who initiated the request.
    pub user_id: UserId,

    /// The user the request targets; the only party who may confirm it.
    pub friend_user_id: UserId,

    /// False while the request is pending, true once mutually accepted.
    pub is_confirmed: bool,

    /// Reserved for moderation; never written by current operations.
    pub is_blocked: bool,

    /// Edge creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Friendship {
    /// Creates a new pending edge from `user_id` to `friend_user_id`.
    #[must_use]
    pub fn new(user_id: UserId, friend_user_id: UserId) -> Self {
        let now = Utc::now();
        Self {
            id: FriendshipId::new(),
            user_id,
            friend_user_id,
            is_confirmed: false,
            is_blocked: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Marks the edge as confirmed.
    pub fn confirm(&mut self) {
        self.is_confirmed = true;
        self.updated_at = Utc::now();
    }

    /// Returns true if the given user is either party of this edge.
    #[must_use]
    pub fn involves(&self, user_id: UserId) -> bool {
        self.user_id == user_id || self.friend_user_id == user_id
    }

    /// Returns the other party of the edge, from `user_id`'s perspective.
    ///
    /// Returns `None` when `user_id` is not a party of the edge.
    #[must_use]
    pub fn other_party(&self, user_id: UserId) -> Option<UserId> {
        if self.user_id == user_id {
            Some(self.friend_user_id)
        } else if self.friend_user_id == user_id {
            Some(self.user_id)
        } else {
            None
        }
    }

    /// Both participants of the edge, initiator first.
    #[must_use]
    pub const fn participants(&self) -> [UserId; 2] {
        [self.user_id, self.friend_user_id]
    }
}

impl Entity<FriendshipId> for Friendship {
    fn id(&self) -> &FriendshipId {
        &self.id
    }
}

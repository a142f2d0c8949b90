//! Repository trait definitions.

use async_trait::async_trait;
use kinship_core::{Friendship, FriendshipId, KinshipResult, PageRequest, User, UserId};
use serde::{Deserialize, Serialize};

/// A friendship edge joined with both participants' usernames, for the
/// friend-list read path. A projection, not a distinct entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FriendshipWithUsernames {
    /// The edge itself.
    #[serde(flatten)]
    pub friendship: Friendship,
    /// Username of the initiator (`user_id`).
    pub username: String,
    /// Username of the recipient (`friend_user_id`).
    pub friend_username: String,
}

/// User repository trait.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by ID.
    async fn find_by_id(&self, id: UserId) -> KinshipResult<Option<User>>;

    /// Checks if a user exists, without fetching the row.
    /// Returns false, never an error, for unknown ids.
    async fn exists(&self, id: UserId) -> KinshipResult<bool>;

    /// Checks if a username is taken.
    async fn exists_by_username(&self, username: &str) -> KinshipResult<bool>;

    /// Checks if an email is taken.
    async fn exists_by_email(&self, email: &str) -> KinshipResult<bool>;

    /// Inserts a new user.
    async fn insert(&self, user: &User) -> KinshipResult<User>;

    /// Finds users with optional case-insensitive username search,
    /// ordered by most recently updated first.
    async fn search(&self, term: Option<&str>, page: PageRequest) -> KinshipResult<Vec<User>>;

    /// Atomically adds 1 to `friend_count` for every given user,
    /// in a single storage operation.
    async fn increment_friend_count(&self, ids: &[UserId]) -> KinshipResult<()>;

    /// Atomically subtracts 1 from `friend_count` for every given user,
    /// clamped at zero.
    async fn decrement_friend_count(&self, ids: &[UserId]) -> KinshipResult<()>;

    /// Atomically adds 1 to `pending_friend_count` for every given user.
    async fn increment_pending_friend_count(&self, ids: &[UserId]) -> KinshipResult<()>;

    /// Atomically subtracts 1 from `pending_friend_count` for every given
    /// user, clamped at zero.
    async fn decrement_pending_friend_count(&self, ids: &[UserId]) -> KinshipResult<()>;

    /// Counts all users.
    async fn count(&self) -> KinshipResult<u64>;
}

/// Friendship-edge repository trait.
///
/// An edge is symmetric in meaning but stored as one directed row, so
/// every lookup by participant checks both columns.
#[async_trait]
pub trait FriendshipRepository: Send + Sync {
    /// Finds the edge between two users, in either direction.
    async fn find_between(&self, a: UserId, b: UserId) -> KinshipResult<Option<Friendship>>;

    /// Finds an edge by id where the given user is the recipient.
    async fn find_received(
        &self,
        id: FriendshipId,
        recipient: UserId,
    ) -> KinshipResult<Option<Friendship>>;

    /// Finds an edge by id where the given user is either party.
    async fn find_involving(
        &self,
        id: FriendshipId,
        user: UserId,
    ) -> KinshipResult<Option<Friendship>>;

    /// Inserts a new edge.
    async fn insert(&self, friendship: &Friendship) -> KinshipResult<Friendship>;

    /// Marks an edge as confirmed and returns the updated row.
    async fn confirm(&self, id: FriendshipId) -> KinshipResult<Friendship>;

    /// Deletes an edge. Returns false if no row matched.
    async fn delete(&self, id: FriendshipId) -> KinshipResult<bool>;

    /// Lists edges where the user is either party, confirmed or pending,
    /// joined with both usernames, newest first. The optional term filters
    /// by either participant's username, case-insensitive.
    async fn list_for_user(
        &self,
        user: UserId,
        term: Option<&str>,
        page: PageRequest,
    ) -> KinshipResult<Vec<FriendshipWithUsernames>>;

    /// Counts all edges, confirmed and pending alike.
    async fn count(&self) -> KinshipResult<u64>;
}

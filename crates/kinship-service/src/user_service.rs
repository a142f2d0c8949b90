//! User service (account ledger) trait definition.

use crate::dto::{CreateUserRequest, UserResponse, UserStats};
use async_trait::async_trait;
use kinship_core::{KinshipResult, PageRequest, UserId};

/// Account ledger: user identity and counter bookkeeping.
///
/// This service has no knowledge of edge semantics beyond
/// "increment/decrement a counter by user id"; the friendship engine owns
/// the rules for when counters move.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Creates a new user.
    async fn create_user(&self, request: CreateUserRequest) -> KinshipResult<UserResponse>;

    /// Lists users, optionally filtered by a case-insensitive username
    /// substring, most recently updated first.
    async fn get_all_users(
        &self,
        search: Option<&str>,
        page: PageRequest,
    ) -> KinshipResult<Vec<UserResponse>>;

    /// Checks if a user exists. Returns false, never an error, for
    /// unknown ids.
    async fn user_exists(&self, id: UserId) -> KinshipResult<bool>;

    /// Atomically adds 1 to `friend_count` for all given users.
    async fn increment_friend_count(&self, ids: &[UserId]) -> KinshipResult<()>;

    /// Atomically subtracts 1 from `friend_count` for all given users,
    /// never going below zero.
    async fn decrement_friend_count(&self, ids: &[UserId]) -> KinshipResult<()>;

    /// Atomically adds 1 to `pending_friend_count` for all given users.
    async fn increment_pending_friend_count(&self, ids: &[UserId]) -> KinshipResult<()>;

    /// Atomically subtracts 1 from `pending_friend_count` for all given
    /// users, never going below zero.
    async fn decrement_pending_friend_count(&self, ids: &[UserId]) -> KinshipResult<()>;

    /// Returns user table totals.
    async fn get_user_stats(&self) -> KinshipResult<UserStats>;
}

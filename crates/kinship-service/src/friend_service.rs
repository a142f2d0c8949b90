//! Friend service (friendship engine) trait definition.

use crate::dto::{FriendListEntry, FriendshipResponse, FriendshipStats};
use async_trait::async_trait;
use kinship_core::{FriendshipId, KinshipResult, PageRequest, UserId};

/// Friendship engine: enforces the edge state machine
/// (pending → confirmed → deleted) and keeps the account ledger's
/// counters synchronized with edge transitions.
#[async_trait]
pub trait FriendService: Send + Sync {
    /// Sends a friend request from `initiator` to `recipient`,
    /// creating a pending edge.
    async fn add_friend(
        &self,
        initiator: UserId,
        recipient: UserId,
    ) -> KinshipResult<FriendshipResponse>;

    /// Confirms a pending friend request. Only the recipient of the
    /// original request may confirm it.
    async fn confirm_friend_request(
        &self,
        confirmer: UserId,
        friendship_id: FriendshipId,
    ) -> KinshipResult<FriendshipResponse>;

    /// Removes a friendship (confirmed or pending). Either participant
    /// may remove it, regardless of who initiated. Returns the deleted
    /// edge snapshot.
    async fn remove_friend(
        &self,
        requester: UserId,
        friendship_id: FriendshipId,
    ) -> KinshipResult<FriendshipResponse>;

    /// Lists all edges involving the user, confirmed and pending, with
    /// both participants' usernames joined. The optional term filters by
    /// either username, case-insensitive.
    async fn get_user_friend_list(
        &self,
        user: UserId,
        search: Option<&str>,
        page: PageRequest,
    ) -> KinshipResult<Vec<FriendListEntry>>;

    /// Returns edge table totals.
    async fn get_friendship_stats(&self) -> KinshipResult<FriendshipStats>;
}

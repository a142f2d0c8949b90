//! Friend service implementation.
//!
//! Owns the friendship-edge state machine and keeps the account ledger's
//! counters synchronized with edge transitions. The multi-step effects
//! (edge mutation, then counter mutation) are deliberately not wrapped in
//! one transaction; a failure between the steps surfaces as an internal
//! error and leaves the counters to be reconciled out of band.

use crate::dto::{FriendListEntry, FriendshipResponse, FriendshipStats};
use crate::friend_service::FriendService;
use crate::user_service::UserService;
use async_trait::async_trait;
use kinship_core::{Friendship, FriendshipId, KinshipError, KinshipResult, PageRequest, UserId};
use kinship_repository::FriendshipRepository;
use std::sync::Arc;
use tracing::{debug, info};

/// Default page size for a user's friend listing.
pub const DEFAULT_FRIENDS_PER_PAGE: usize = 25;

/// Generic friend service implementation over a friendship repository.
pub struct FriendServiceImpl<R: FriendshipRepository> {
    friendship_repository: Arc<R>,
    user_service: Arc<dyn UserService>,
}

impl<R: FriendshipRepository> FriendServiceImpl<R> {
    /// Creates a new friend service.
    pub fn new(friendship_repository: Arc<R>, user_service: Arc<dyn UserService>) -> Self {
        Self {
            friendship_repository,
            user_service,
        }
    }
}

#[async_trait]
impl<R: FriendshipRepository + 'static> FriendService for FriendServiceImpl<R> {
    async fn add_friend(
        &self,
        initiator: UserId,
        recipient: UserId,
    ) -> KinshipResult<FriendshipResponse> {
        debug!("Friend request: {} -> {}", initiator, recipient);

        if initiator == recipient {
            return Err(KinshipError::Forbidden(
                "You cannot add yourself as a friend".to_string(),
            ));
        }

        // The two probes have no data dependency on each other.
        let (initiator_exists, recipient_exists) = tokio::try_join!(
            self.user_service.user_exists(initiator),
            self.user_service.user_exists(recipient),
        )?;

        if !initiator_exists {
            return Err(KinshipError::not_found("user", initiator));
        }
        if !recipient_exists {
            return Err(KinshipError::not_found("user", recipient));
        }

        // One edge per unordered pair: a row in either direction blocks
        // the insert. This check produces the clean message; the storage
        // unique index is the guard that holds under racing requests.
        if self
            .friendship_repository
            .find_between(initiator, recipient)
            .await?
            .is_some()
        {
            return Err(KinshipError::Conflict(
                "Users are already friends or there is an existing pending request".to_string(),
            ));
        }

        let edge = Friendship::new(initiator, recipient);
        let created = self.friendship_repository.insert(&edge).await?;

        // Only the recipient's pending counter moves: the field counts
        // requests received, not requests sent.
        self.user_service
            .increment_pending_friend_count(&[recipient])
            .await?;

        info!("Friend request created: {}", created.id);
        Ok(FriendshipResponse::from(created))
    }

    async fn confirm_friend_request(
        &self,
        confirmer: UserId,
        friendship_id: FriendshipId,
    ) -> KinshipResult<FriendshipResponse> {
        debug!("Confirming friend request {} by {}", friendship_id, confirmer);

        if !self.user_service.user_exists(confirmer).await? {
            return Err(KinshipError::not_found("user", confirmer));
        }

        // Only the recipient of the request may confirm it. A wrong edge
        // id and a non-recipient caller are indistinguishable here: both
        // are not-found, so callers learn nothing about edges they are
        // not part of.
        let edge = self
            .friendship_repository
            .find_received(friendship_id, confirmer)
            .await?
            .ok_or_else(|| KinshipError::not_found("friend request", friendship_id))?;

        if edge.is_confirmed {
            return Err(KinshipError::Conflict(
                "Users are already friends".to_string(),
            ));
        }

        let confirmed = self.friendship_repository.confirm(edge.id).await?;

        // Both sides' counters move together here, as two independent
        // ledger calls with no ordering dependency. Not transactional
        // with the edge update. The initiator's pending counter is
        // already zero and the clamped decrement leaves it there.
        let participants = edge.participants();
        tokio::try_join!(
            self.user_service.increment_friend_count(&participants),
            self.user_service
                .decrement_pending_friend_count(&participants),
        )?;

        info!("Friend request confirmed: {}", confirmed.id);
        Ok(FriendshipResponse::from(confirmed))
    }

    async fn remove_friend(
        &self,
        requester: UserId,
        friendship_id: FriendshipId,
    ) -> KinshipResult<FriendshipResponse> {
        debug!("Removing friendship {} by {}", friendship_id, requester);

        // Either participant may remove the relationship unilaterally,
        // regardless of who initiated it.
        let edge = self
            .friendship_repository
            .find_involving(friendship_id, requester)
            .await?
            .ok_or_else(|| KinshipError::not_found("friendship", friendship_id))?;

        let deleted = self.friendship_repository.delete(edge.id).await?;
        if !deleted {
            // Lost a race with another removal; the counters already
            // moved on the winning path.
            return Err(KinshipError::not_found("friendship", friendship_id));
        }

        // What the edge *was* decides which counter unwinds.
        let participants = edge.participants();
        if edge.is_confirmed {
            self.user_service
                .decrement_friend_count(&participants)
                .await?;
        } else {
            self.user_service
                .decrement_pending_friend_count(&participants)
                .await?;
        }

        info!("Friendship removed: {}", edge.id);
        Ok(FriendshipResponse::from(edge))
    }

    async fn get_user_friend_list(
        &self,
        user: UserId,
        search: Option<&str>,
        page: PageRequest,
    ) -> KinshipResult<Vec<FriendListEntry>> {
        debug!(
            "Listing friends for {}, search: {:?}, page: {}, size: {}",
            user, search, page.page, page.size
        );

        let entries = self
            .friendship_repository
            .list_for_user(user, search, page)
            .await?;

        Ok(entries.into_iter().map(FriendListEntry::from).collect())
    }

    async fn get_friendship_stats(&self) -> KinshipResult<FriendshipStats> {
        let total = self.friendship_repository.count().await?;
        Ok(FriendshipStats { total })
    }
}

impl<R: FriendshipRepository> std::fmt::Debug for FriendServiceImpl<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FriendServiceImpl").finish_non_exhaustive()
    }
}

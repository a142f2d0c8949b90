//! PostgreSQL friendship-edge repository implementation.

use crate::{pool::DatabasePool, traits::FriendshipRepository, FriendshipWithUsernames};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use kinship_core::{Friendship, FriendshipId, KinshipResult, PageRequest, UserId};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// PostgreSQL friendship repository implementation.
#[derive(Clone)]
pub struct PgFriendshipRepository {
    pool: Arc<DatabasePool>,
}

impl PgFriendshipRepository {
    /// Creates a new PostgreSQL friendship repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a friendship edge.
#[derive(Debug, FromRow)]
struct FriendshipRow {
    id: Uuid,
    user_id: Uuid,
    friend_user_id: Uuid,
    is_confirmed: bool,
    is_blocked: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<FriendshipRow> for Friendship {
    fn from(row: FriendshipRow) -> Self {
        Friendship {
            id: FriendshipId::from_uuid(row.id),
            user_id: UserId::from_uuid(row.user_id),
            friend_user_id: UserId::from_uuid(row.friend_user_id),
            is_confirmed: row.is_confirmed,
            is_blocked: row.is_blocked,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Joined row for the friend-list read path.
#[derive(Debug, FromRow)]
struct FriendshipWithUsernamesRow {
    id: Uuid,
    user_id: Uuid,
    friend_user_id: Uuid,
    is_confirmed: bool,
    is_blocked: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    username: String,
    friend_username: String,
}

impl From<FriendshipWithUsernamesRow> for FriendshipWithUsernames {
    fn from(row: FriendshipWithUsernamesRow) -> Self {
        FriendshipWithUsernames {
            friendship: Friendship {
                id: FriendshipId::from_uuid(row.id),
                user_id: UserId::from_uuid(row.user_id),
                friend_user_id: UserId::from_uuid(row.friend_user_id),
                is_confirmed: row.is_confirmed,
                is_blocked: row.is_blocked,
                created_at: row.created_at,
                updated_at: row.updated_at,
            },
            username: row.username,
            friend_username: row.friend_username,
        }
    }
}

const EDGE_COLUMNS: &str =
    "id, user_id, friend_user_id, is_confirmed, is_blocked, created_at, updated_at";

#[async_trait]
impl FriendshipRepository for PgFriendshipRepository {
    async fn find_between(&self, a: UserId, b: UserId) -> KinshipResult<Option<Friendship>> {
        debug!("Finding friendship between {} and {}", a, b);

        // One row per unordered pair: check both directions.
        let row = sqlx::query_as::<_, FriendshipRow>(&format!(
            r#"
            SELECT {EDGE_COLUMNS} FROM user_friends
            WHERE (user_id = $1 AND friend_user_id = $2)
               OR (user_id = $2 AND friend_user_id = $1)
            LIMIT 1
            "#
        ))
        .bind(a.into_inner())
        .bind(b.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(Friendship::from))
    }

    async fn find_received(
        &self,
        id: FriendshipId,
        recipient: UserId,
    ) -> KinshipResult<Option<Friendship>> {
        debug!("Finding friendship {} received by {}", id, recipient);

        let row = sqlx::query_as::<_, FriendshipRow>(&format!(
            r#"
            SELECT {EDGE_COLUMNS} FROM user_friends
            WHERE id = $1 AND friend_user_id = $2
            "#
        ))
        .bind(id.into_inner())
        .bind(recipient.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(Friendship::from))
    }

    async fn find_involving(
        &self,
        id: FriendshipId,
        user: UserId,
    ) -> KinshipResult<Option<Friendship>> {
        debug!("Finding friendship {} involving {}", id, user);

        let row = sqlx::query_as::<_, FriendshipRow>(&format!(
            r#"
            SELECT {EDGE_COLUMNS} FROM user_friends
            WHERE id = $1 AND (user_id = $2 OR friend_user_id = $2)
            "#
        ))
        .bind(id.into_inner())
        .bind(user.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(Friendship::from))
    }

    async fn insert(&self, friendship: &Friendship) -> KinshipResult<Friendship> {
        debug!(
            "Inserting friendship {} -> {}",
            friendship.user_id, friendship.friend_user_id
        );

        let row = sqlx::query_as::<_, FriendshipRow>(&format!(
            r#"
            INSERT INTO user_friends (id, user_id, friend_user_id, is_confirmed, is_blocked, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {EDGE_COLUMNS}
            "#
        ))
        .bind(friendship.id.into_inner())
        .bind(friendship.user_id.into_inner())
        .bind(friendship.friend_user_id.into_inner())
        .bind(friendship.is_confirmed)
        .bind(friendship.is_blocked)
        .bind(friendship.created_at)
        .bind(friendship.updated_at)
        .fetch_one(self.pool.inner())
        .await?;

        Ok(Friendship::from(row))
    }

    async fn confirm(&self, id: FriendshipId) -> KinshipResult<Friendship> {
        debug!("Confirming friendship {}", id);

        let row = sqlx::query_as::<_, FriendshipRow>(&format!(
            r#"
            UPDATE user_friends
            SET is_confirmed = TRUE, updated_at = NOW()
            WHERE id = $1
            RETURNING {EDGE_COLUMNS}
            "#
        ))
        .bind(id.into_inner())
        .fetch_one(self.pool.inner())
        .await?;

        Ok(Friendship::from(row))
    }

    async fn delete(&self, id: FriendshipId) -> KinshipResult<bool> {
        debug!("Deleting friendship {}", id);

        let result = sqlx::query("DELETE FROM user_friends WHERE id = $1")
            .bind(id.into_inner())
            .execute(self.pool.inner())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_for_user(
        &self,
        user: UserId,
        term: Option<&str>,
        page: PageRequest,
    ) -> KinshipResult<Vec<FriendshipWithUsernames>> {
        debug!(
            "Listing friendships for {}, term: {:?}, page: {}, size: {}",
            user, term, page.page, page.size
        );

        let base = format!(
            r#"
            SELECT f.id, f.user_id, f.friend_user_id, f.is_confirmed, f.is_blocked,
                   f.created_at, f.updated_at,
                   u.username AS username, fu.username AS friend_username
            FROM user_friends f
            JOIN users u ON u.id = f.user_id
            JOIN users fu ON fu.id = f.friend_user_id
            WHERE (f.user_id = $1 OR f.friend_user_id = $1)
            "#
        );

        let rows = match term {
            Some(term) => {
                let pattern = format!("%{}%", term.to_lowercase());
                sqlx::query_as::<_, FriendshipWithUsernamesRow>(&format!(
                    r#"
                    {base}
                    AND (u.username ILIKE $2 OR fu.username ILIKE $2)
                    ORDER BY f.created_at DESC
                    LIMIT $3 OFFSET $4
                    "#
                ))
                .bind(user.into_inner())
                .bind(pattern)
                .bind(page.limit() as i64)
                .bind(page.offset() as i64)
                .fetch_all(self.pool.inner())
                .await?
            }
            None => {
                sqlx::query_as::<_, FriendshipWithUsernamesRow>(&format!(
                    r#"
                    {base}
                    ORDER BY f.created_at DESC
                    LIMIT $2 OFFSET $3
                    "#
                ))
                .bind(user.into_inner())
                .bind(page.limit() as i64)
                .bind(page.offset() as i64)
                .fetch_all(self.pool.inner())
                .await?
            }
        };

        Ok(rows.into_iter().map(FriendshipWithUsernames::from).collect())
    }

    async fn count(&self) -> KinshipResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(id) FROM user_friends")
            .fetch_one(self.pool.inner())
            .await?;

        Ok(total as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_friendship_row_conversion() {
        let id = Uuid::now_v7();
        let user_id = Uuid::now_v7();
        let friend_user_id = Uuid::now_v7();
        let now = Utc::now();
        let row = FriendshipRow {
            id,
            user_id,
            friend_user_id,
            is_confirmed: true,
            is_blocked: false,
            created_at: now,
            updated_at: now,
        };

        let edge = Friendship::from(row);
        assert_eq!(edge.id.into_inner(), id);
        assert_eq!(edge.user_id.into_inner(), user_id);
        assert_eq!(edge.friend_user_id.into_inner(), friend_user_id);
        assert!(edge.is_confirmed);
        assert!(!edge.is_blocked);
    }

    #[test]
    fn test_joined_row_conversion() {
        let now = Utc::now();
        let row = FriendshipWithUsernamesRow {
            id: Uuid::now_v7(),
            user_id: Uuid::now_v7(),
            friend_user_id: Uuid::now_v7(),
            is_confirmed: false,
            is_blocked: false,
            created_at: now,
            updated_at: now,
            username: "alice".to_string(),
            friend_username: "bob".to_string(),
        };

        let entry = FriendshipWithUsernames::from(row);
        assert_eq!(entry.username, "alice");
        assert_eq!(entry.friend_username, "bob");
        assert!(!entry.friendship.is_confirmed);
    }
}

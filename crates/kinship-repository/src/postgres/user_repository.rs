//! PostgreSQL user repository implementation.

use crate::{pool::DatabasePool, traits::UserRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use kinship_core::{Email, KinshipResult, PageRequest, User, UserId};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// PostgreSQL user repository implementation.
#[derive(Clone)]
pub struct PgUserRepository {
    pool: Arc<DatabasePool>,
}

impl PgUserRepository {
    /// Creates a new PostgreSQL user repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a user.
#[derive(Debug, FromRow)]
struct UserRow {
    id: Uuid,
    username: String,
    email: String,
    friend_count: i32,
    pending_friend_count: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: UserId::from_uuid(row.id),
            username: row.username,
            email: Email::new_unchecked(row.email),
            friend_count: row.friend_count,
            pending_friend_count: row.pending_friend_count,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const USER_COLUMNS: &str =
    "id, username, email, friend_count, pending_friend_count, created_at, updated_at";

fn uuids(ids: &[UserId]) -> Vec<Uuid> {
    ids.iter().map(|id| id.into_inner()).collect()
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, id: UserId) -> KinshipResult<Option<User>> {
        debug!("Finding user by id: {}", id);

        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(User::from))
    }

    async fn exists(&self, id: UserId) -> KinshipResult<bool> {
        let result: Option<i32> = sqlx::query_scalar("SELECT 1 FROM users WHERE id = $1 LIMIT 1")
            .bind(id.into_inner())
            .fetch_optional(self.pool.inner())
            .await?;

        Ok(result.is_some())
    }

    async fn exists_by_username(&self, username: &str) -> KinshipResult<bool> {
        let result: Option<i32> =
            sqlx::query_scalar("SELECT 1 FROM users WHERE username = $1 LIMIT 1")
                .bind(username)
                .fetch_optional(self.pool.inner())
                .await?;

        Ok(result.is_some())
    }

    async fn exists_by_email(&self, email: &str) -> KinshipResult<bool> {
        let result: Option<i32> =
            sqlx::query_scalar("SELECT 1 FROM users WHERE LOWER(email) = LOWER($1) LIMIT 1")
                .bind(email)
                .fetch_optional(self.pool.inner())
                .await?;

        Ok(result.is_some())
    }

    async fn insert(&self, user: &User) -> KinshipResult<User> {
        debug!("Inserting user: {}", user.username);

        let row = sqlx::query_as::<_, UserRow>(&format!(
            r#"
            INSERT INTO users (id, username, email, friend_count, pending_friend_count, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(user.id.into_inner())
        .bind(&user.username)
        .bind(user.email.as_str())
        .bind(user.friend_count)
        .bind(user.pending_friend_count)
        .bind(user.created_at)
        .bind(user.updated_at)
        .fetch_one(self.pool.inner())
        .await?;

        Ok(User::from(row))
    }

    async fn search(&self, term: Option<&str>, page: PageRequest) -> KinshipResult<Vec<User>> {
        debug!(
            "Searching users, term: {:?}, page: {}, size: {}",
            term, page.page, page.size
        );

        let rows = match term {
            Some(term) => {
                let pattern = format!("%{}%", term.to_lowercase());
                sqlx::query_as::<_, UserRow>(&format!(
                    r#"
                    SELECT {USER_COLUMNS} FROM users
                    WHERE username ILIKE $1
                    ORDER BY updated_at DESC
                    LIMIT $2 OFFSET $3
                    "#
                ))
                .bind(pattern)
                .bind(page.limit() as i64)
                .bind(page.offset() as i64)
                .fetch_all(self.pool.inner())
                .await?
            }
            None => {
                sqlx::query_as::<_, UserRow>(&format!(
                    r#"
                    SELECT {USER_COLUMNS} FROM users
                    ORDER BY updated_at DESC
                    LIMIT $1 OFFSET $2
                    "#
                ))
                .bind(page.limit() as i64)
                .bind(page.offset() as i64)
                .fetch_all(self.pool.inner())
                .await?
            }
        };

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn increment_friend_count(&self, ids: &[UserId]) -> KinshipResult<()> {
        debug!("Incrementing friend_count for {} users", ids.len());

        sqlx::query(
            r#"
            UPDATE users
            SET friend_count = friend_count + 1, updated_at = NOW()
            WHERE id = ANY($1)
            "#,
        )
        .bind(uuids(ids))
        .execute(self.pool.inner())
        .await?;

        Ok(())
    }

    async fn decrement_friend_count(&self, ids: &[UserId]) -> KinshipResult<()> {
        debug!("Decrementing friend_count for {} users", ids.len());

        // GREATEST keeps the counter from going negative under racing
        // double-removals.
        sqlx::query(
            r#"
            UPDATE users
            SET friend_count = GREATEST(friend_count - 1, 0), updated_at = NOW()
            WHERE id = ANY($1)
            "#,
        )
        .bind(uuids(ids))
        .execute(self.pool.inner())
        .await?;

        Ok(())
    }

    async fn increment_pending_friend_count(&self, ids: &[UserId]) -> KinshipResult<()> {
        debug!("Incrementing pending_friend_count for {} users", ids.len());

        sqlx::query(
            r#"
            UPDATE users
            SET pending_friend_count = pending_friend_count + 1, updated_at = NOW()
            WHERE id = ANY($1)
            "#,
        )
        .bind(uuids(ids))
        .execute(self.pool.inner())
        .await?;

        Ok(())
    }

    async fn decrement_pending_friend_count(&self, ids: &[UserId]) -> KinshipResult<()> {
        debug!("Decrementing pending_friend_count for {} users", ids.len());

        sqlx::query(
            r#"
            UPDATE users
            SET pending_friend_count = GREATEST(pending_friend_count - 1, 0), updated_at = NOW()
            WHERE id = ANY($1)
            "#,
        )
        .bind(uuids(ids))
        .execute(self.pool.inner())
        .await?;

        Ok(())
    }

    async fn count(&self) -> KinshipResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(id) FROM users")
            .fetch_one(self.pool.inner())
            .await?;

        Ok(total as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_row_conversion() {
        let id = Uuid::now_v7();
        let now = Utc::now();
        let row = UserRow {
            id,
            username: "alice".to_string(),
            email: "ALICE@example.com".to_string(),
            friend_count: 3,
            pending_friend_count: 1,
            created_at: now,
            updated_at: now,
        };

        let user = User::from(row);
        assert_eq!(user.id.into_inner(), id);
        assert_eq!(user.username, "alice");
        // Email from the database is normalized, not re-validated
        assert_eq!(user.email.as_str(), "alice@example.com");
        assert_eq!(user.friend_count, 3);
        assert_eq!(user.pending_friend_count, 1);
    }

    #[test]
    fn test_uuids_helper() {
        let ids = [UserId::new(), UserId::new()];
        let raw = uuids(&ids);
        assert_eq!(raw.len(), 2);
        assert_eq!(raw[0], ids[0].into_inner());
    }
}

//! User service implementation.

use crate::dto::{CreateUserRequest, UserResponse, UserStats};
use crate::user_service::UserService;
use async_trait::async_trait;
use kinship_core::{Email, KinshipError, KinshipResult, PageRequest, User, UserId, ValidateExt};
use kinship_repository::UserRepository;
use std::sync::Arc;
use tracing::{debug, info};

/// Default page size for the users listing.
pub const DEFAULT_USERS_PER_PAGE: usize = 50;

/// Generic user service implementation over a user repository.
pub struct UserServiceImpl<R: UserRepository> {
    user_repository: Arc<R>,
}

impl<R: UserRepository> UserServiceImpl<R> {
    /// Creates a new user service.
    pub fn new(user_repository: Arc<R>) -> Self {
        Self { user_repository }
    }
}

#[async_trait]
impl<R: UserRepository + 'static> UserService for UserServiceImpl<R> {
    async fn create_user(&self, request: CreateUserRequest) -> KinshipResult<UserResponse> {
        debug!("Creating user: {}", request.username);

        request.validate_request()?;

        // Pre-checks produce a clean message; the storage unique
        // constraints remain the authoritative guard under races.
        if self
            .user_repository
            .exists_by_username(&request.username)
            .await?
        {
            return Err(KinshipError::Conflict(format!(
                "Username '{}' already exists",
                request.username
            )));
        }

        if self.user_repository.exists_by_email(&request.email).await? {
            return Err(KinshipError::Conflict(format!(
                "Email '{}' already exists",
                request.email
            )));
        }

        let email =
            Email::new(&request.email).map_err(|e| KinshipError::Validation(e.to_string()))?;

        let user = User::new(request.username, email);
        let saved_user = self.user_repository.insert(&user).await?;

        info!("User created: {}", saved_user.id);
        Ok(UserResponse::from(saved_user))
    }

    async fn get_all_users(
        &self,
        search: Option<&str>,
        page: PageRequest,
    ) -> KinshipResult<Vec<UserResponse>> {
        debug!(
            "Listing users, search: {:?}, page: {}, size: {}",
            search, page.page, page.size
        );

        let users = self.user_repository.search(search, page).await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    async fn user_exists(&self, id: UserId) -> KinshipResult<bool> {
        self.user_repository.exists(id).await
    }

    async fn increment_friend_count(&self, ids: &[UserId]) -> KinshipResult<()> {
        debug!("Incrementing friend count for users: {:?}", ids);
        self.user_repository.increment_friend_count(ids).await
    }

    async fn decrement_friend_count(&self, ids: &[UserId]) -> KinshipResult<()> {
        debug!("Decrementing friend count for users: {:?}", ids);
        self.user_repository.decrement_friend_count(ids).await
    }

    async fn increment_pending_friend_count(&self, ids: &[UserId]) -> KinshipResult<()> {
        debug!("Incrementing pending friend count for users: {:?}", ids);
        self.user_repository
            .increment_pending_friend_count(ids)
            .await
    }

    async fn decrement_pending_friend_count(&self, ids: &[UserId]) -> KinshipResult<()> {
        debug!("Decrementing pending friend count for users: {:?}", ids);
        self.user_repository
            .decrement_pending_friend_count(ids)
            .await
    }

    async fn get_user_stats(&self) -> KinshipResult<UserStats> {
        let total = self.user_repository.count().await?;
        Ok(UserStats { total })
    }
}

impl<R: UserRepository> std::fmt::Debug for UserServiceImpl<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserServiceImpl").finish_non_exhaustive()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory user repository for service tests.
    ///
    /// Counter mutations mirror the storage semantics: set-based, with
    /// decrements clamped at zero.
    pub struct MockUserRepository {
        pub users: Mutex<HashMap<UserId, User>>,
    }

    impl MockUserRepository {
        pub fn new() -> Self {
            Self {
                users: Mutex::new(HashMap::new()),
            }
        }

        pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
            let repo = Self::new();
            {
                let mut map = repo.users.lock().unwrap();
                for user in users {
                    map.insert(user.id, user);
                }
            }
            repo
        }

        pub fn add_user(&self, user: User) {
            self.users.lock().unwrap().insert(user.id, user);
        }

        pub fn get(&self, id: UserId) -> Option<User> {
            self.users.lock().unwrap().get(&id).cloned()
        }
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn find_by_id(&self, id: UserId) -> KinshipResult<Option<User>> {
            Ok(self.users.lock().unwrap().get(&id).cloned())
        }

        async fn exists(&self, id: UserId) -> KinshipResult<bool> {
            Ok(self.users.lock().unwrap().contains_key(&id))
        }

        async fn exists_by_username(&self, username: &str) -> KinshipResult<bool> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .values()
                .any(|u| u.username == username))
        }

        async fn exists_by_email(&self, email: &str) -> KinshipResult<bool> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .values()
                .any(|u| u.email.as_str().eq_ignore_ascii_case(email)))
        }

        async fn insert(&self, user: &User) -> KinshipResult<User> {
            self.users.lock().unwrap().insert(user.id, user.clone());
            Ok(user.clone())
        }

        async fn search(
            &self,
            term: Option<&str>,
            page: PageRequest,
        ) -> KinshipResult<Vec<User>> {
            let mut users: Vec<User> = self
                .users
                .lock()
                .unwrap()
                .values()
                .filter(|u| match term {
                    Some(term) => u.username.to_lowercase().contains(&term.to_lowercase()),
                    None => true,
                })
                .cloned()
                .collect();
            users.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

            let start = page.offset();
            let end = std::cmp::min(start + page.limit(), users.len());
            Ok(if start < users.len() {
                users[start..end].to_vec()
            } else {
                vec![]
            })
        }

        async fn increment_friend_count(&self, ids: &[UserId]) -> KinshipResult<()> {
            let mut users = self.users.lock().unwrap();
            for id in ids {
                if let Some(user) = users.get_mut(id) {
                    user.friend_count += 1;
                }
            }
            Ok(())
        }

        async fn decrement_friend_count(&self, ids: &[UserId]) -> KinshipResult<()> {
            let mut users = self.users.lock().unwrap();
            for id in ids {
                if let Some(user) = users.get_mut(id) {
                    user.friend_count = (user.friend_count - 1).max(0);
                }
            }
            Ok(())
        }

        async fn increment_pending_friend_count(&self, ids: &[UserId]) -> KinshipResult<()> {
            let mut users = self.users.lock().unwrap();
            for id in ids {
                if let Some(user) = users.get_mut(id) {
                    user.pending_friend_count += 1;
                }
            }
            Ok(())
        }

        async fn decrement_pending_friend_count(&self, ids: &[UserId]) -> KinshipResult<()> {
            let mut users = self.users.lock().unwrap();
            for id in ids {
                if let Some(user) = users.get_mut(id) {
                    user.pending_friend_count = (user.pending_friend_count - 1).max(0);
                }
            }
            Ok(())
        }

        async fn count(&self) -> KinshipResult<u64> {
            Ok(self.users.lock().unwrap().len() as u64)
        }
    }

    pub fn create_test_user(username: &str, email: &str) -> User {
        User::new(username.to_string(), Email::new_unchecked(email))
    }
}

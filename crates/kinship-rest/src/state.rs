//! Application state for Axum handlers.

use kinship_config::PaginationConfig;
use kinship_service::{FriendService, UserService};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
    pub friend_service: Arc<dyn FriendService>,
    pub pagination: PaginationConfig,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        user_service: Arc<dyn UserService>,
        friend_service: Arc<dyn FriendService>,
        pagination: PaginationConfig,
    ) -> Self {
        Self {
            user_service,
            friend_service,
            pagination,
        }
    }
}

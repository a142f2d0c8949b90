//! # Kinship Service
//!
//! Business logic service layer for Kinship: the account ledger
//! (`UserService`) and the friendship engine (`FriendService`).

pub mod dto;
pub mod friend_service;
pub mod friend_service_impl;
pub mod user_service;
pub mod user_service_impl;

pub use dto::*;
pub use friend_service::*;
pub use friend_service_impl::*;
pub use user_service::*;
pub use user_service_impl::*;

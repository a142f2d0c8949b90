//! PostgreSQL repository implementations.

pub mod friendship_repository;
pub mod user_repository;

pub use friendship_repository::*;
pub use user_repository::*;

//! Domain entities.

pub mod friendship;
pub mod user;

pub use friendship::*;
pub use user::*;

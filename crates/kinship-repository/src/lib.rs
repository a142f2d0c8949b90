//! # Kinship Repository
//!
//! The storage port: repository traits for user rows and friendship-edge
//! rows, plus their PostgreSQL implementations using SQLx.

pub mod pool;
pub mod postgres;
pub mod traits;

pub use pool::*;
pub use postgres::*;
pub use traits::*;

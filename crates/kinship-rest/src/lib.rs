//! # Kinship REST
//!
//! Thin REST transport adapter using Axum: controllers, the response
//! envelope, pagination extraction, and router assembly in front of the
//! service layer.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;

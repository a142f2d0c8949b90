//! # Kinship Core
//!
//! Core types, traits, and error definitions for Kinship.
//! This crate provides the foundational abstractions used across all layers
//! of the service: the error taxonomy, typed identifiers, pagination, the
//! domain entities, and validation helpers.

pub mod domain;
pub mod error;
pub mod id;
pub mod pagination;
pub mod result;
pub mod traits;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use pagination::*;
pub use result::*;
pub use traits::*;
pub use validation::*;

//! Result type aliases for Kinship.

use crate::KinshipError;

/// A specialized `Result` type for Kinship operations.
pub type KinshipResult<T> = Result<T, KinshipError>;

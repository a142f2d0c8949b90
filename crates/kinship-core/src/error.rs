//! Unified error types for all layers of the service.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for all layers of Kinship.
///
/// Domain failures (validation, forbidden, not-found, conflict) carry a
/// human-readable message that is surfaced verbatim to API callers;
/// infrastructure failures are logged server-side and surfaced generically.
#[derive(Error, Debug)]
pub enum KinshipError {
    /// Resource not found
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// A structurally valid request that violates a rule about who may act
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Conflict error (duplicate entry or state invariant violation)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl KinshipError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Validation(_) => 400,
            Self::Forbidden(_) => 403,
            Self::Conflict(_) => 409,
            Self::Database(_) | Self::Configuration(_) | Self::Internal(_) | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::Conflict(_) => "CONFLICT",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns true for infrastructure failures whose details must not leak
    /// to callers.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::Database(_) | Self::Configuration(_) | Self::Internal(_) | Self::Other(_)
        )
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a forbidden error.
    #[must_use]
    pub fn forbidden<T: Into<String>>(message: T) -> Self {
        Self::Forbidden(message.into())
    }

    /// Creates a conflict error.
    #[must_use]
    pub fn conflict<T: Into<String>>(message: T) -> Self {
        Self::Conflict(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for KinshipError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound {
                resource_type: "database_row",
                id: "unknown".to_string(),
            },
            sqlx::Error::Database(db_err) => {
                // 23505: PostgreSQL unique constraint violation. The storage
                // layer is the authoritative uniqueness guard; surface it as
                // the same Conflict the pre-checks would have produced.
                if let Some(code) = db_err.code() {
                    if code == "23505" {
                        return Self::Conflict(db_err.message().to_string());
                    }
                }
                Self::Database(err.to_string())
            }
            _ => Self::Database(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for KinshipError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

/// Serializable error details for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional field-level errors for validation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

/// Field-level validation error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FieldError {
    /// Field name
    pub field: String,
    /// Error message
    pub message: String,
    /// Error code
    pub code: String,
}

impl ErrorResponse {
    /// Creates a new error response from a `KinshipError`.
    ///
    /// Internal errors are masked: callers receive the generic message, not
    /// the underlying storage or IO failure.
    #[must_use]
    pub fn from_error(error: &KinshipError) -> Self {
        let message = if error.is_internal() {
            "An internal error occurred".to_string()
        } else {
            error.to_string()
        };

        Self {
            code: error.error_code().to_string(),
            message,
            details: None,
        }
    }

    /// Sets field-level validation errors.
    #[must_use]
    pub fn with_details(mut self, details: Vec<FieldError>) -> Self {
        self.details = Some(details);
        self
    }
}

impl From<&KinshipError> for ErrorResponse {
    fn from(error: &KinshipError) -> Self {
        Self::from_error(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(KinshipError::not_found("User", 1).status_code(), 404);
        assert_eq!(KinshipError::validation("invalid email").status_code(), 400);
        assert_eq!(KinshipError::forbidden("not yours").status_code(), 403);
        assert_eq!(KinshipError::conflict("duplicate").status_code(), 409);
        assert_eq!(KinshipError::Database("db error".to_string()).status_code(), 500);
        assert_eq!(KinshipError::internal("oops").status_code(), 500);
        assert_eq!(
            KinshipError::Configuration("missing url".to_string()).status_code(),
            500
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(KinshipError::not_found("User", 1).error_code(), "NOT_FOUND");
        assert_eq!(KinshipError::validation("bad input").error_code(), "VALIDATION_ERROR");
        assert_eq!(KinshipError::forbidden("no").error_code(), "FORBIDDEN");
        assert_eq!(KinshipError::conflict("duplicate").error_code(), "CONFLICT");
        assert_eq!(
            KinshipError::Database("db".to_string()).error_code(),
            "DATABASE_ERROR"
        );
        assert_eq!(KinshipError::internal("err").error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_error_constructors() {
        let not_found = KinshipError::not_found("User", "123");
        assert!(not_found.to_string().contains("User"));

        let validation = KinshipError::validation("invalid field");
        assert!(validation.to_string().contains("invalid field"));

        let conflict = KinshipError::conflict("duplicate entry");
        assert!(conflict.to_string().contains("duplicate entry"));

        let forbidden = KinshipError::forbidden("cannot act");
        assert!(forbidden.to_string().contains("cannot act"));
    }

    #[test]
    fn test_is_internal() {
        assert!(KinshipError::Database("lost".to_string()).is_internal());
        assert!(KinshipError::internal("bug").is_internal());
        assert!(!KinshipError::not_found("User", 1).is_internal());
        assert!(!KinshipError::conflict("dup").is_internal());
    }

    #[test]
    fn test_error_response_from_error() {
        let err = KinshipError::not_found("User", 1);
        let response = ErrorResponse::from_error(&err);
        assert_eq!(response.code, "NOT_FOUND");
        assert!(!response.message.is_empty());
        assert!(response.details.is_none());
    }

    #[test]
    fn test_error_response_masks_internal_errors() {
        let err = KinshipError::Database("password=hunter2 connection refused".to_string());
        let response = ErrorResponse::from_error(&err);
        assert_eq!(response.code, "DATABASE_ERROR");
        assert!(!response.message.contains("hunter2"));
    }

    #[test]
    fn test_error_response_with_details() {
        let err = KinshipError::validation("bad input");
        let details = vec![FieldError {
            field: "email".to_string(),
            message: "Invalid email".to_string(),
            code: "INVALID_EMAIL".to_string(),
        }];
        let response = ErrorResponse::from_error(&err).with_details(details);
        assert!(response.details.is_some());
        assert_eq!(response.details.unwrap().len(), 1);
    }
}

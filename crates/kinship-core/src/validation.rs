//! Validation utilities.

use crate::{FieldError, KinshipError};
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `KinshipError` on failure.
    fn validate_request(&self) -> Result<(), KinshipError> {
        self.validate().map_err(validation_errors_to_kinship_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Converts `validator::ValidationErrors` to `KinshipError`.
#[must_use]
pub fn validation_errors_to_kinship_error(errors: ValidationErrors) -> KinshipError {
    let field_errors: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| FieldError {
                field: (*field).to_string(),
                message: error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), |m| m.to_string()),
                code: error.code.to_string(),
            })
        })
        .collect();

    let message = field_errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ");

    KinshipError::Validation(message)
}

/// Common validation functions.
pub mod rules {
    use validator::ValidationError;

    /// Username length bounds, matching the `users.username` column.
    pub const USERNAME_MIN_CHARS: usize = 3;
    /// Maximum username length.
    pub const USERNAME_MAX_CHARS: usize = 16;

    /// Validates that a username meets requirements.
    pub fn valid_username(username: &str) -> Result<(), ValidationError> {
        let len = username.chars().count();
        if len < USERNAME_MIN_CHARS {
            return Err(ValidationError::new("username_too_short"));
        }
        if len > USERNAME_MAX_CHARS {
            return Err(ValidationError::new("username_too_long"));
        }
        if !username
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
        {
            return Err(ValidationError::new("username_invalid_characters"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::rules::*;
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Probe {
        #[validate(length(min = 3, message = "too short"))]
        name: String,
    }

    #[test]
    fn test_valid_username() {
        assert!(valid_username("john_doe").is_ok());
        assert!(valid_username("john-doe").is_ok());
        assert!(valid_username("abc").is_ok());
        assert!(valid_username("ab").is_err()); // too short
        assert!(valid_username("a".repeat(17).as_str()).is_err()); // too long
        assert!(valid_username("john@doe").is_err()); // invalid char
    }

    #[test]
    fn test_validate_request_maps_to_validation_error() {
        let probe = Probe {
            name: "ab".to_string(),
        };
        let err = probe.validate_request().unwrap_err();
        match err {
            KinshipError::Validation(msg) => assert!(msg.contains("name")),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_request_passes_valid_input() {
        let probe = Probe {
            name: "abcdef".to_string(),
        };
        assert!(probe.validate_request().is_ok());
    }
}

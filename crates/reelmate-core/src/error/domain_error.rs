//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("Food partner not found: {0}")]
    FoodPartnerNotFound(Snowflake),

    #[error("Food item not found: {0}")]
    FoodPostNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::FoodPartnerNotFound(_) => "UNKNOWN_FOOD_PARTNER",
            Self::FoodPostNotFound(_) => "UNKNOWN_FOOD",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::StorageError(_) => "STORAGE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_) | Self::FoodPartnerNotFound(_) | Self::FoodPostNotFound(_)
        )
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_))
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::EmailAlreadyExists)
    }

    /// Status code for this error
    ///
    /// A duplicate email is reported as 400, the same class as any other
    /// rejected registration input.
    pub fn status_code(&self) -> u16 {
        if self.is_not_found() {
            404
        } else if self.is_validation() || self.is_conflict() {
            400
        } else {
            500
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            DomainError::FoodPostNotFound(Snowflake::new(1)).code(),
            "UNKNOWN_FOOD"
        );
        assert_eq!(DomainError::EmailAlreadyExists.code(), "EMAIL_ALREADY_EXISTS");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            DomainError::FoodPartnerNotFound(Snowflake::new(1)).status_code(),
            404
        );
        assert_eq!(DomainError::EmailAlreadyExists.status_code(), 400);
        assert_eq!(DomainError::ValidationError("x".into()).status_code(), 400);
        assert_eq!(DomainError::DatabaseError("x".into()).status_code(), 500);
        assert_eq!(DomainError::StorageError("x".into()).status_code(), 500);
    }

    #[test]
    fn test_error_display() {
        let err = DomainError::FoodPostNotFound(Snowflake::new(123));
        assert_eq!(err.to_string(), "Food item not found: 123");
    }
}

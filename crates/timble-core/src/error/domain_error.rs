//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::UserId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Invalid {field}: {message}")]
    InvalidField { field: &'static str, message: String },

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("User with this {field} already exists")]
    DuplicateUser { field: &'static str },

    // =========================================================================
    // Policy Errors
    // =========================================================================
    #[error("Daily reaction limit of {limit} reached")]
    ReactionLimitExceeded { limit: u32 },

    #[error("User is not eligible for premium")]
    NotEligibleForPremium,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Field-attributed validation failure
    pub fn invalid_field(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            message: message.into(),
        }
    }

    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::InvalidField { .. } => "VALIDATION_ERROR",
            Self::DuplicateUser { .. } => "DUPLICATE_USER",
            Self::ReactionLimitExceeded { .. } => "REACTION_LIMIT_EXCEEDED",
            Self::NotEligibleForPremium => "NOT_ELIGIBLE_FOR_PREMIUM",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Field the error is attributed to, if any
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidField { field, .. } | Self::DuplicateUser { field } => Some(*field),
            _ => None,
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidField { .. })
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::DuplicateUser { .. })
    }

    /// Check if this is a policy rejection (quota or eligibility)
    pub fn is_policy(&self) -> bool {
        matches!(
            self,
            Self::ReactionLimitExceeded { .. } | Self::NotEligibleForPremium
        )
    }

    /// Check if this is an infrastructure failure
    pub fn is_infrastructure(&self) -> bool {
        matches!(
            self,
            Self::DatabaseError(_) | Self::CacheError(_) | Self::InternalError(_)
        )
    }
}

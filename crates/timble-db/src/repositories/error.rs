//! Error handling utilities for repositories

use sqlx::Error as SqlxError;
use timble_core::error::DomainError;
use timble_core::value_objects::UserId;

use crate::schema::{EMAIL_UNIQUE_CONSTRAINT, USERNAME_UNIQUE_CONSTRAINT};

/// Convert SQLx error to DomainError, prefixed with the failing operation
pub fn map_db_error(context: &'static str) -> impl FnOnce(SqlxError) -> DomainError {
    move |e| DomainError::DatabaseError(format!("{context}: {e}"))
}

/// Map a unique violation on the users table to the conflicting field.
/// Detection goes by constraint name, never by message text.
pub fn map_user_unique_violation(e: SqlxError) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            match db_err.constraint() {
                Some(USERNAME_UNIQUE_CONSTRAINT) => {
                    return DomainError::DuplicateUser { field: "username" }
                }
                Some(EMAIL_UNIQUE_CONSTRAINT) => {
                    return DomainError::DuplicateUser { field: "email" }
                }
                _ => {}
            }
        }
    }
    DomainError::DatabaseError(format!("create user: {e}"))
}

/// Create a "user not found" error
pub fn user_not_found(id: UserId) -> DomainError {
    DomainError::UserNotFound(id)
}

//! Repository traits (ports) - define the interface for relational data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{NewUser, Reaction, User};
use crate::error::DomainError;
use crate::value_objects::UserId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Insert a user and return it with its assigned id.
    /// Duplicate username or email yields `DomainError::DuplicateUser`.
    async fn create(&self, user: &NewUser) -> RepoResult<User>;

    /// Set the premium flag; `UserNotFound` when no row matched
    async fn update_premium(&self, id: UserId, premium: bool) -> RepoResult<()>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Insert or overwrite the reaction for (user_id, target_id)
    async fn upsert(&self, reaction: &Reaction) -> RepoResult<()>;

    /// Find the reaction a user left on a target
    async fn find(&self, user_id: UserId, target_id: UserId) -> RepoResult<Option<Reaction>>;
}

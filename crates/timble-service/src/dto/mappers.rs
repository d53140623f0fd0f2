//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs, and
//! from request DTOs to domain requests.

use timble_common::UserToken;
use timble_core::{DomainError, ReactionRequest, User, UserId};

use super::requests::ReactRequest;
use super::responses::{TokenResponse, UserResponse};

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            premium: user.premium,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<UserToken> for TokenResponse {
    fn from(token: UserToken) -> Self {
        Self {
            token: token.token,
            token_type: token.token_type,
            expires_in: token.expires_in,
        }
    }
}

impl ReactRequest {
    /// Attach the acting user and check the reaction type
    ///
    /// # Errors
    /// Returns a field-attributed validation error for an unknown type or a
    /// self-targeted reaction
    pub fn into_domain(self, user_id: UserId) -> Result<ReactionRequest, DomainError> {
        ReactionRequest::new(user_id, self.target_id, self.reaction_type)
    }
}

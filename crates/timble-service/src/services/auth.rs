//! Authentication service
//!
//! Handles user registration and login. Both hand back a signed bearer token.

use timble_common::auth::{hash_password, validate_password_strength, verify_password};
use timble_common::AppError;
use timble_core::{DomainError, NewUser, UserId};
use tracing::{info, instrument, warn};
use validator::ValidateEmail;

use crate::dto::{LoginRequest, RegisterRequest, TokenResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

const MAX_USERNAME_CHARS: usize = 32;

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    ///
    /// Duplicate usernames and emails come back as `DuplicateUser` naming
    /// the offending field.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<TokenResponse> {
        validate_registration(&request)?;

        let password_hash = hash_password(&request.password)?;

        let user = self
            .ctx
            .user_repo()
            .create(&NewUser {
                username: request.username,
                email: request.email,
                password_hash,
            })
            .await?;

        info!(user_id = %user.id, "User registered successfully");

        self.issue_token(user.id)
    }

    /// Login with username and password
    ///
    /// An unknown username and a wrong password produce the same error.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<TokenResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| {
                warn!(username = %request.username, "Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        if !verify_password(&request.password, &user.password_hash)? {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        info!(user_id = %user.id, "User logged in successfully");

        self.issue_token(user.id)
    }

    /// Validate an access token and return the user ID
    pub fn validate_token(&self, token: &str) -> ServiceResult<UserId> {
        let claims = self.ctx.jwt_service().validate_token(token)?;
        Ok(claims.user_id()?)
    }

    fn issue_token(&self, user_id: UserId) -> ServiceResult<TokenResponse> {
        let token = self.ctx.jwt_service().generate_token(user_id)?;
        Ok(TokenResponse::from(token))
    }
}

/// Field checks for callers that bypass the HTTP extractor
fn validate_registration(request: &RegisterRequest) -> Result<(), DomainError> {
    let username_len = request.username.chars().count();
    if username_len == 0 || username_len > MAX_USERNAME_CHARS {
        return Err(DomainError::invalid_field(
            "username",
            "Username must be 1-32 characters",
        ));
    }

    if !request.email.validate_email() {
        return Err(DomainError::invalid_field("email", "Invalid email format"));
    }

    validate_password_strength(&request.password)
        .map_err(|e| DomainError::invalid_field("password", e.to_string()))
}

//! Password hashing and verification utilities
//!
//! Uses Argon2id for password hashing. Verification goes through
//! `PasswordVerifier`, which compares in constant time.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::AppError;

/// Passwords must be strictly longer than this many characters
pub const MIN_PASSWORD_EXCLUSIVE: usize = 10;

/// Hash a password using Argon2id
///
/// # Errors
/// Returns an error if hashing fails
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))
}

/// Verify a password against a hash
///
/// # Errors
/// Returns an error if the stored hash is malformed
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash format: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Validate password length
///
/// # Errors
/// Returns a validation error if the password has 10 characters or fewer
pub fn validate_password_strength(password: &str) -> Result<(), AppError> {
    if password.chars().count() <= MIN_PASSWORD_EXCLUSIVE {
        return Err(AppError::Validation(
            "Password must be more than 10 characters".to_string(),
        ));
    }

    Ok(())
}
